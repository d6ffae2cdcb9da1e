//! Othman MSR — Price Curve Generator Entry Point
//!
//! Wiring sequence:
//! 1. Load config.toml (or the path given as first argument) + validate
//! 2. Init tracing (JSON structured logging)
//! 3. Create JsonChartWriter (implements ChartSink port)
//! 4. Run ChartRunner over every configured chart job
//! 5. Log the run summary and exit

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use othman_msr::adapters::output::JsonChartWriter;
use othman_msr::config;
use othman_msr::usecases::chart_runner::ChartRunner;

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1. Load configuration ───────────────────────────────
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());
    let config = config::loader::load_config(&config_path)
        .context("Failed to load configuration")?;

    // ── 2. Initialize structured JSON logging ───────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.app.log_level)),
        )
        .json()
        .init();

    info!(
        name = %config.app.name,
        version = env!("CARGO_PKG_VERSION"),
        charts = config.charts.len(),
        output = %config.output.dir,
        "Starting Othman MSR price curve generator"
    );

    // ── 3. Create chart sink ────────────────────────────────
    let writer = Arc::new(
        JsonChartWriter::new(&config.output.dir)
            .await
            .context("Failed to create chart writer")?,
    );

    // ── 4. Run every chart job ──────────────────────────────
    let mut runner = ChartRunner::new(writer, &config);
    let summary = runner.run(&config.charts).await?;

    info!(charts = summary.charts_written, "Done");
    Ok(())
}
