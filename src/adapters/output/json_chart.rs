//! JSON Chart Writer - Static Chart Documents on Disk
//!
//! Writes each chart as `<title>.json` in the output directory. The
//! document carries axis labels, a log-x flag and every series, so any
//! plotting front end can render it without recomputing prices.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::fs;
use tracing::{debug, instrument};

use crate::ports::chart_sink::ChartSink;
use crate::usecases::price_curve::PriceChart;

/// X axis label.
pub const X_LABEL: &str = "s ~ Volume";

/// Y axis label.
pub const Y_LABEL: &str = "M(x, y) ~ Price Per Share";

/// Label of the summed series.
pub const SUM_LABEL: &str = "sum";

#[derive(Debug, Serialize)]
struct Series<'a> {
  label: &'a str,
  values: &'a [f64],
}

#[derive(Debug, Serialize)]
struct ChartDocument<'a> {
  title: &'a str,
  x_label: &'static str,
  y_label: &'static str,
  log_x: bool,
  odds: &'a [f64],
  point: &'a [f64],
  subsidy: f64,
  x: &'a [f64],
  series: Vec<Series<'a>>,
  generated_at: DateTime<Utc>,
}

impl<'a> ChartDocument<'a> {
  fn from_chart(chart: &'a PriceChart) -> Self {
    let mut series: Vec<Series<'a>> = chart
      .curves
      .iter()
      .map(|c| Series {
        label: &c.label,
        values: &c.prices,
      })
      .collect();
    series.push(Series {
      label: SUM_LABEL,
      values: &chart.sum,
    });

    Self {
      title: &chart.title,
      x_label: X_LABEL,
      y_label: Y_LABEL,
      log_x: true,
      odds: &chart.odds,
      point: &chart.point,
      subsidy: chart.subsidy,
      x: &chart.volumes,
      series,
      generated_at: Utc::now(),
    }
  }
}

/// Chart sink writing pretty-printed JSON documents.
pub struct JsonChartWriter {
  /// Output directory.
  dir: PathBuf,
}

impl JsonChartWriter {
  /// Create a writer, creating the output directory if needed.
  pub async fn new(dir: impl AsRef<Path>) -> Result<Self> {
    let dir = dir.as_ref().to_path_buf();
    fs::create_dir_all(&dir)
      .await
      .with_context(|| format!("Failed to create chart directory: {}", dir.display()))?;
    Ok(Self { dir })
  }

  /// Path a chart with the given title is written to.
  pub fn path_for(&self, title: &str) -> PathBuf {
    // '/' would otherwise be read as a directory separator
    let stem = title.replace(['/', '\\'], "_");
    self.dir.join(format!("{stem}.json"))
  }
}

#[async_trait]
impl ChartSink for JsonChartWriter {
  #[instrument(skip(self, chart), fields(title = %chart.title))]
  async fn write_chart(&self, chart: &PriceChart) -> Result<PathBuf> {
    let path = self.path_for(&chart.title);
    let json = serde_json::to_vec_pretty(&ChartDocument::from_chart(chart))
      .context("Failed to serialize chart")?;

    fs::write(&path, json)
      .await
      .with_context(|| format!("Failed to write chart: {}", path.display()))?;

    debug!(path = %path.display(), "Chart written");
    Ok(path)
  }
}
