//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `config.toml`, validating all parameters,
//! and providing clear error messages for misconfiguration.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::AppConfig;

/// Load and validate configuration from a TOML file.
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: &str) -> Result<AppConfig> {
  let path = Path::new(path);

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  let config = parse_config(&content)?;

  info!(
    charts = config.charts.len(),
    tolerance = config.solver.tolerance,
    points = config.volume_grid.points,
    "Configuration loaded successfully"
  );

  Ok(config)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<AppConfig> {
  let config: AppConfig =
    toml::from_str(content).with_context(|| "Failed to parse config.toml")?;
  validate_config(&config)?;
  Ok(config)
}

/// Validate all configuration parameters.
///
/// Checks for:
/// - Positive solver tolerance and a non-empty volume grid
/// - At least one chart, with odds in (0, 1)
/// - Fixed points matching their odds in length
/// - Strictly positive subsidies
fn validate_config(config: &AppConfig) -> Result<()> {
  // Solver validation
  anyhow::ensure!(
    config.solver.tolerance.is_finite() && config.solver.tolerance > 0.0,
    "Solver tolerance must be positive, got {}",
    config.solver.tolerance
  );
  if let Some(steps) = config.solver.max_steps {
    anyhow::ensure!(steps > 0, "Solver max_steps must be positive when set");
  }

  // Grid validation
  anyhow::ensure!(
    config.volume_grid.points > 0,
    "Volume grid must have at least one point"
  );
  anyhow::ensure!(
    config.volume_grid.exponent_step.is_finite(),
    "Volume grid exponent_step must be finite, got {}",
    config.volume_grid.exponent_step
  );

  // Sampling validation
  anyhow::ensure!(
    config.sampling.max_coordinate > 0,
    "Sampling max_coordinate must be positive"
  );

  // Output validation
  anyhow::ensure!(
    !config.output.dir.is_empty(),
    "Output directory must not be empty"
  );

  // Chart validation
  anyhow::ensure!(
    !config.charts.is_empty(),
    "At least one chart must be configured"
  );

  for (i, chart) in config.charts.iter().enumerate() {
    anyhow::ensure!(!chart.odds.is_empty(), "Chart {} has no odds", i);
    for p in &chart.odds {
      anyhow::ensure!(
        *p > 0.0 && *p < 1.0,
        "Chart {} odds must be in (0, 1), got {}",
        i,
        p
      );
    }
    if let Some(point) = &chart.point {
      anyhow::ensure!(
        point.len() == chart.odds.len(),
        "Chart {} point has {} coordinates but {} odds",
        i,
        point.len(),
        chart.odds.len()
      );
      anyhow::ensure!(
        point.iter().all(|x| x.is_finite()),
        "Chart {} point must be finite",
        i
      );
    }
    anyhow::ensure!(
      !chart.subsidies.is_empty(),
      "Chart {} has no subsidies",
      i
    );
    for x0 in &chart.subsidies {
      anyhow::ensure!(
        x0.is_finite() && *x0 > 0.0,
        "Chart {} subsidy must be positive, got {}",
        i,
        x0
      );
    }
  }

  Ok(())
}
