//! Configuration Module - TOML-based Chart Generation Configuration
//!
//! Loads and validates configuration from `config.toml`.
//! Solver tuning, the volume grid and every chart job are
//! externalized here - nothing is hardcoded in the driver.

pub mod loader;

use serde::Deserialize;

use crate::domain::solver::{SolverConfig, DEFAULT_MAX_EXPANSIONS, DEFAULT_TOLERANCE};
use crate::usecases::price_curve::VolumeGrid;

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
  /// Application identity and logging.
  #[serde(default)]
  pub app: AppSection,
  /// Cost solver tuning.
  #[serde(default)]
  pub solver: SolverSection,
  /// Log-spaced volume axis shared by every chart.
  #[serde(default)]
  pub volume_grid: VolumeGridSection,
  /// Random sample point generation.
  #[serde(default)]
  pub sampling: SamplingConfig,
  /// Where rendered charts are written.
  #[serde(default)]
  pub output: OutputConfig,
  /// Chart jobs to run, in order.
  pub charts: Vec<ChartConfig>,
}

/// Application identity configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppSection {
  /// Human-readable run name.
  #[serde(default = "default_name")]
  pub name: String,
  /// Log level (trace, debug, info, warn, error).
  #[serde(default = "default_log_level")]
  pub log_level: String,
}

/// Bisection tuning for the cost solver.
#[derive(Debug, Clone, Deserialize)]
pub struct SolverSection {
  /// Convergence threshold on the balance equation residual.
  #[serde(default = "default_tolerance")]
  pub tolerance: f64,
  /// Optional cap on bisection steps.
  #[serde(default)]
  pub max_steps: Option<usize>,
  /// Cap on upper-bracket doublings.
  #[serde(default = "default_max_expansions")]
  pub max_expansions: u32,
}

/// Volume axis: `s_k = 10^(exponent_step * k)` for `k < points`.
#[derive(Debug, Clone, Deserialize)]
pub struct VolumeGridSection {
  /// Decimal exponent increment between samples.
  #[serde(default = "default_exponent_step")]
  pub exponent_step: f64,
  /// Number of samples.
  #[serde(default = "default_points")]
  pub points: usize,
}

/// Random point generation for charts without a fixed point.
#[derive(Debug, Clone, Deserialize)]
pub struct SamplingConfig {
  /// RNG seed; identical seeds produce identical charts.
  #[serde(default = "default_seed")]
  pub seed: u64,
  /// Coordinates are drawn from `[0, max_coordinate)`.
  #[serde(default = "default_max_coordinate")]
  pub max_coordinate: u32,
}

/// Chart output configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
  /// Directory for chart files.
  #[serde(default = "default_output_dir")]
  pub dir: String,
}

/// One chart job: fixed odds, a start point and a list of subsidies.
///
/// One chart is produced per subsidy.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartConfig {
  /// Outcome odds.
  pub odds: Vec<f64>,
  /// Payout vector to trade from. Drawn at random when omitted.
  #[serde(default)]
  pub point: Option<Vec<f64>>,
  /// Initial subsidies `x0`, one chart each.
  #[serde(default = "default_subsidies")]
  pub subsidies: Vec<f64>,
}

impl SolverSection {
  /// Converts to the domain solver configuration.
  pub fn to_solver_config(&self) -> SolverConfig {
    SolverConfig {
      tolerance: self.tolerance,
      max_steps: self.max_steps,
      max_expansions: self.max_expansions,
    }
  }
}

impl VolumeGridSection {
  /// Converts to the usecase volume grid.
  pub fn to_grid(&self) -> VolumeGrid {
    VolumeGrid {
      exponent_step: self.exponent_step,
      points: self.points,
    }
  }
}

impl Default for AppSection {
  fn default() -> Self {
    Self {
      name: default_name(),
      log_level: default_log_level(),
    }
  }
}

impl Default for SolverSection {
  fn default() -> Self {
    Self {
      tolerance: default_tolerance(),
      max_steps: None,
      max_expansions: default_max_expansions(),
    }
  }
}

impl Default for VolumeGridSection {
  fn default() -> Self {
    Self {
      exponent_step: default_exponent_step(),
      points: default_points(),
    }
  }
}

impl Default for SamplingConfig {
  fn default() -> Self {
    Self {
      seed: default_seed(),
      max_coordinate: default_max_coordinate(),
    }
  }
}

impl Default for OutputConfig {
  fn default() -> Self {
    Self {
      dir: default_output_dir(),
    }
  }
}

// Default value functions for serde

fn default_name() -> String {
  "othman-msr".to_string()
}

fn default_log_level() -> String {
  "info".to_string()
}

const fn default_tolerance() -> f64 {
  DEFAULT_TOLERANCE
}

const fn default_max_expansions() -> u32 {
  DEFAULT_MAX_EXPANSIONS
}

const fn default_exponent_step() -> f64 {
  0.06
}

const fn default_points() -> usize {
  101
}

const fn default_seed() -> u64 {
  42
}

const fn default_max_coordinate() -> u32 {
  100
}

fn default_output_dir() -> String {
  "charts".to_string()
}

fn default_subsidies() -> Vec<f64> {
  vec![100.0]
}
