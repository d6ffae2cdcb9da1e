//! Chart Sink Port - Static Chart Rendering Interface
//!
//! The domain and usecases only produce `PriceChart` data. Whatever
//! turns that data into an artifact (JSON document, image, report)
//! implements this trait.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::usecases::price_curve::PriceChart;

/// Trait for chart renderers.
#[async_trait]
pub trait ChartSink: Send + Sync + 'static {
  /// Render one chart and return where it was written.
  async fn write_chart(&self, chart: &PriceChart) -> anyhow::Result<PathBuf>;
}
