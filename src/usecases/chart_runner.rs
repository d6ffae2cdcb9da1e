//! Chart Runner - Batch Driver Over Configured Chart Jobs
//!
//! For every chart job and every subsidy it lists, builds a
//! `MsrMarket`, computes the price chart on the blocking pool and
//! hands it to the chart sink. Jobs without a fixed point draw one
//! from the runner's seeded RNG. The first failure aborts the run.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::task::JoinHandle;
use tracing::{info, instrument, warn};

use crate::config::{AppConfig, ChartConfig};
use crate::domain::error::MsrResult;
use crate::domain::msr::MsrMarket;
use crate::domain::solver::SolverConfig;
use crate::ports::chart_sink::ChartSink;
use crate::usecases::price_curve::{build_price_chart, format_tuple, PriceChart, VolumeGrid};
use crate::usecases::sampling::random_point;

/// Outcome of a completed run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
  /// Number of charts written.
  pub charts_written: usize,
  /// Paths returned by the sink, in order.
  pub paths: Vec<PathBuf>,
}

/// Drives chart generation for a list of jobs.
pub struct ChartRunner<S: ChartSink> {
  /// Output port.
  sink: Arc<S>,
  /// Solver tuning shared by every market.
  solver: SolverConfig,
  /// Volume axis shared by every chart.
  grid: VolumeGrid,
  /// Upper bound (exclusive) for random coordinates.
  max_coordinate: u32,
  /// Seeded source for random start points.
  rng: StdRng,
}

impl<S: ChartSink> ChartRunner<S> {
  /// Create a runner from application config.
  pub fn new(sink: Arc<S>, config: &AppConfig) -> Self {
    Self {
      sink,
      solver: config.solver.to_solver_config(),
      grid: config.volume_grid.to_grid(),
      max_coordinate: config.sampling.max_coordinate,
      rng: StdRng::seed_from_u64(config.sampling.seed),
    }
  }

  /// Run every job in order.
  ///
  /// Charts for the subsidies of one job are computed concurrently on
  /// the blocking pool, then written in configuration order.
  #[instrument(skip(self, jobs), fields(jobs = jobs.len()))]
  pub async fn run(&mut self, jobs: &[ChartConfig]) -> Result<RunSummary> {
    let volumes = Arc::new(self.grid.volumes());
    let mut summary = RunSummary::default();

    for (job_index, job) in jobs.iter().enumerate() {
      let point = match &job.point {
        Some(point) => point.clone(),
        None => random_point(job.odds.len(), self.max_coordinate, &mut self.rng)
          .with_context(|| format!("Failed to sample point for chart {job_index}"))?,
      };

      info!(
        job = job_index,
        odds = %format_tuple(&job.odds),
        point = %format_tuple(&point),
        subsidies = job.subsidies.len(),
        "Computing price charts"
      );

      let mut handles = Vec::with_capacity(job.subsidies.len());
      for &subsidy in &job.subsidies {
        let market = MsrMarket::new(job.odds.clone(), subsidy, self.solver)
          .with_context(|| format!("Invalid market for chart {job_index}"))?;
        let point = point.clone();
        let volumes = Arc::clone(&volumes);
        handles.push(tokio::task::spawn_blocking(move || {
          build_price_chart(&market, &point, &volumes)
        }));
      }

      let mut pending = handles.into_iter();
      while let Some(handle) = pending.next() {
        let written = self.write_computed(handle, job_index).await;
        match written {
          Ok(path) => {
            summary.charts_written += 1;
            summary.paths.push(path);
          }
          Err(e) => {
            let aborted = pending.len();
            for rest in pending {
              rest.abort();
            }
            warn!(job = job_index, aborted, error = %e, "Chart run aborted");
            return Err(e);
          }
        }
      }
    }

    info!(charts = summary.charts_written, "Chart run complete");
    Ok(summary)
  }

  /// Await one chart computation and hand the chart to the sink.
  async fn write_computed(
    &self,
    handle: JoinHandle<MsrResult<PriceChart>>,
    job_index: usize,
  ) -> Result<PathBuf> {
    let chart = handle
      .await
      .context("Chart computation task failed")?
      .with_context(|| format!("Failed to compute chart {job_index}"))?;

    let path = self.sink.write_chart(&chart).await?;
    info!(title = %chart.title, path = %path.display(), "Chart written");
    Ok(path)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::loader::parse_config;
  use std::sync::Mutex;

  #[derive(Default)]
  struct RecordingSink {
    charts: Mutex<Vec<PriceChart>>,
  }

  #[async_trait::async_trait]
  impl ChartSink for RecordingSink {
    async fn write_chart(&self, chart: &PriceChart) -> Result<PathBuf> {
      self.charts.lock().unwrap().push(chart.clone());
      Ok(PathBuf::from(format!("{}.json", chart.title)))
    }
  }

  #[derive(Default)]
  struct FailingSink {
    calls: Mutex<usize>,
  }

  #[async_trait::async_trait]
  impl ChartSink for FailingSink {
    async fn write_chart(&self, _chart: &PriceChart) -> Result<PathBuf> {
      *self.calls.lock().unwrap() += 1;
      anyhow::bail!("sink unavailable")
    }
  }

  const CONFIG: &str = r#"
[volume_grid]
points = 4
exponent_step = 1.0

[sampling]
seed = 9
max_coordinate = 50

[[charts]]
odds = [0.5, 0.5]
point = [0.0, 0.0]
subsidies = [10.0, 100.0]

[[charts]]
odds = [0.5, 0.3, 0.2]
"#;

  #[tokio::test]
  async fn test_runs_every_subsidy_of_every_job() {
    let config = parse_config(CONFIG).unwrap();
    let sink = Arc::new(RecordingSink::default());
    let mut runner = ChartRunner::new(Arc::clone(&sink), &config);

    let summary = runner.run(&config.charts).await.unwrap();
    assert_eq!(summary.charts_written, 3);

    let charts = sink.charts.lock().unwrap();
    assert_eq!(charts[0].subsidy, 10.0);
    assert_eq!(charts[1].subsidy, 100.0);
    assert_eq!(charts[2].point.len(), 3);
    assert!(charts[2].point.iter().all(|x| (0.0..50.0).contains(x)));
    let expected = [1.0, 10.0, 100.0, 1000.0];
    assert_eq!(charts[0].volumes.len(), expected.len());
    for (got, want) in charts[0].volumes.iter().zip(expected) {
      assert!((got / want - 1.0).abs() < 1e-12, "Expected {want}, got {got}");
    }
  }

  #[tokio::test]
  async fn test_seed_makes_random_points_reproducible() {
    let config = parse_config(CONFIG).unwrap();

    let first = Arc::new(RecordingSink::default());
    ChartRunner::new(Arc::clone(&first), &config)
      .run(&config.charts)
      .await
      .unwrap();
    let second = Arc::new(RecordingSink::default());
    ChartRunner::new(Arc::clone(&second), &config)
      .run(&config.charts)
      .await
      .unwrap();

    let a = first.charts.lock().unwrap();
    let b = second.charts.lock().unwrap();
    assert_eq!(a[2].point, b[2].point);
  }

  #[tokio::test]
  async fn test_first_failure_stops_remaining_subsidies() {
    let config = parse_config(
      r#"
[volume_grid]
points = 3

[[charts]]
odds = [0.5, 0.5]
point = [0.0, 0.0]
subsidies = [10.0, 100.0, 1000.0]

[[charts]]
odds = [0.85, 0.15]
point = [0.0, 0.0]
"#,
    )
    .unwrap();
    let sink = Arc::new(FailingSink::default());
    let mut runner = ChartRunner::new(Arc::clone(&sink), &config);

    let err = runner.run(&config.charts).await.unwrap_err();
    assert!(err.to_string().contains("sink unavailable"), "{err}");
    assert_eq!(*sink.calls.lock().unwrap(), 1);
  }
}
