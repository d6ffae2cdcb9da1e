//! Price Curve - Price Per Share Across Market Volume
//!
//! For a start point `x` and each outcome `i`, prices the one-share
//! trade `x -> x + e_i` at every volume on a log-spaced grid. The
//! resulting series show how the spread narrows as volume grows, and
//! their element-wise sum shows the cost of a complete set of shares.

use serde::{Deserialize, Serialize};

use crate::domain::error::{MsrError, MsrResult};
use crate::domain::msr::MsrMarket;

/// Log-spaced volume axis: `s_k = 10^(exponent_step * k)` for `k < points`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeGrid {
  /// Decimal exponent increment between samples.
  pub exponent_step: f64,
  /// Number of samples.
  pub points: usize,
}

impl Default for VolumeGrid {
  /// 101 samples from 1 to 10^6.
  fn default() -> Self {
    Self {
      exponent_step: 0.06,
      points: 101,
    }
  }
}

impl VolumeGrid {
  /// Materializes the grid.
  #[allow(clippy::cast_precision_loss)]
  pub fn volumes(&self) -> Vec<f64> {
    (0..self.points)
      .map(|k| 10f64.powf(self.exponent_step * k as f64))
      .collect()
  }
}

/// Prices of one single-share trade across the volume grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceCurve {
  /// `"(x..) -> (y..)"`.
  pub label: String,
  /// Outcome whose share is bought.
  pub outcome: usize,
  /// `M(x, y)` at each volume.
  pub prices: Vec<f64>,
}

/// All curves for one market and start point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceChart {
  /// Descriptive title, also used as the output file stem.
  pub title: String,
  /// Outcome odds.
  pub odds: Vec<f64>,
  /// Start point `x`.
  pub point: Vec<f64>,
  /// Initial subsidy `x0`.
  pub subsidy: f64,
  /// Volume axis.
  pub volumes: Vec<f64>,
  /// One curve per outcome.
  pub curves: Vec<PriceCurve>,
  /// Element-wise sum of all curves.
  pub sum: Vec<f64>,
}

/// Returns a copy of `x` with one more share of outcome `i`.
///
/// # Errors
/// Returns `LengthMismatch` if `i` is not a coordinate of `x`.
pub fn increment_outcome(x: &[f64], i: usize) -> MsrResult<Vec<f64>> {
  if i >= x.len() {
    return Err(MsrError::LengthMismatch {
      expected: i + 1,
      actual: x.len(),
    });
  }
  let mut y = x.to_vec();
  y[i] += 1.0;
  Ok(y)
}

/// Formats a vector as a tuple: `(0.5, 0.5)`.
pub fn format_tuple(values: &[f64]) -> String {
  let parts: Vec<String> = values.iter().map(ToString::to_string).collect();
  format!("({})", parts.join(", "))
}

/// Title / file stem for a chart: `odds - (..); x = (..), x0 = ..`.
pub fn chart_title(odds: &[f64], point: &[f64], subsidy: f64) -> String {
  format!(
    "odds - {}; x = {}, x0 = {}",
    format_tuple(odds),
    format_tuple(point),
    subsidy
  )
}

/// Computes every single-share price curve from `point`.
///
/// # Errors
/// `LengthMismatch` if `point` does not match the market's outcome count;
/// any solver error from any grid sample aborts the whole chart.
pub fn build_price_chart(
  market: &MsrMarket,
  point: &[f64],
  volumes: &[f64],
) -> MsrResult<PriceChart> {
  if point.len() != market.outcomes() {
    return Err(MsrError::LengthMismatch {
      expected: market.outcomes(),
      actual: point.len(),
    });
  }

  let mut sum = vec![0.0; volumes.len()];
  let mut curves = Vec::with_capacity(point.len());

  for i in 0..point.len() {
    let target = increment_outcome(point, i)?;
    let prices = volumes
      .iter()
      .map(|&s| market.evaluate_trade(point, &target, s).map(|t| t.total()))
      .collect::<MsrResult<Vec<f64>>>()?;

    for (acc, price) in sum.iter_mut().zip(&prices) {
      *acc += price;
    }

    curves.push(PriceCurve {
      label: format!("{} -> {}", format_tuple(point), format_tuple(&target)),
      outcome: i,
      prices,
    });
  }

  Ok(PriceChart {
    title: chart_title(market.probabilities(), point, market.subsidy()),
    odds: market.probabilities().to_vec(),
    point: point.to_vec(),
    subsidy: market.subsidy(),
    volumes: volumes.to_vec(),
    curves,
    sum,
  })
}
