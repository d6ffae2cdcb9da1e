//! MSR price evaluator.
//!
//! A trade moves the payout vector from `x` to `y` and advances volume by
//! `d(x, y)`. The market maker charges the change in cost between the two
//! states, each solved at its own volume.

use serde::{Deserialize, Serialize};

use super::distance::l1_distance;
use super::error::{MsrError, MsrResult};
use super::solver::{solve_cost, CostResult, SolverConfig};

/// Deltas produced by one trade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeResult {
    /// `C(y) - C(x)`.
    pub price_delta: f64,
    /// `g(s + d(x, y)) - g(s)`.
    pub profit_charge_delta: f64,
    /// `f(s + d(x, y)) - f(s)`.
    pub liquidity_delta: f64,
}

impl TradeResult {
    /// Price per share `M(x, y)`: the sum of all three deltas.
    pub fn total(&self) -> f64 {
        self.price_delta + self.profit_charge_delta + self.liquidity_delta
    }
}

/// Prices the trade `x -> y` at current volume `volume`.
///
/// Both solves are independent; any failure is returned unchanged and no
/// partial result is produced.
///
/// # Errors
/// `LengthMismatch` if `x`, `y` and `probabilities` disagree in length,
/// otherwise whatever [`solve_cost`] returns for either state.
pub fn evaluate_trade(
    x: &[f64],
    y: &[f64],
    probabilities: &[f64],
    subsidy: f64,
    volume: f64,
    config: &SolverConfig,
) -> MsrResult<TradeResult> {
    if probabilities.len() != x.len() {
        return Err(MsrError::LengthMismatch {
            expected: x.len(),
            actual: probabilities.len(),
        });
    }
    let distance = l1_distance(x, y)?;

    let before = solve_cost(x, probabilities, volume, subsidy, config)?;
    let after = solve_cost(y, probabilities, volume + distance, subsidy, config)?;
    Ok(delta(&before, &after))
}

fn delta(before: &CostResult, after: &CostResult) -> TradeResult {
    TradeResult {
        price_delta: after.cost - before.cost,
        profit_charge_delta: after.profit_charge - before.profit_charge,
        liquidity_delta: after.liquidity_scale - before.liquidity_scale,
    }
}

/// Fixed parameters of one market instance: odds, subsidy and solver tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MsrMarket {
    probabilities: Vec<f64>,
    subsidy: f64,
    config: SolverConfig,
}

impl MsrMarket {
    /// Creates a market over the given odds with initial subsidy `x0`.
    ///
    /// # Errors
    /// Returns `Domain` if the subsidy is not strictly positive and finite,
    /// or `EmptyOutcomes` if no odds are given.
    pub fn new(probabilities: Vec<f64>, subsidy: f64, config: SolverConfig) -> MsrResult<Self> {
        if probabilities.is_empty() {
            return Err(MsrError::EmptyOutcomes);
        }
        if !subsidy.is_finite() || subsidy <= 0.0 {
            return Err(MsrError::Domain {
                what: "subsidy",
                value: subsidy,
            });
        }
        Ok(Self {
            probabilities,
            subsidy,
            config,
        })
    }

    /// Outcome odds.
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    /// Initial subsidy `x0`.
    pub fn subsidy(&self) -> f64 {
        self.subsidy
    }

    /// Number of outcomes.
    pub fn outcomes(&self) -> usize {
        self.probabilities.len()
    }

    /// Solves `C(payouts)` at the given volume.
    pub fn cost(&self, payouts: &[f64], volume: f64) -> MsrResult<CostResult> {
        solve_cost(payouts, &self.probabilities, volume, self.subsidy, &self.config)
    }

    /// Prices the trade `x -> y` at the given volume.
    pub fn evaluate_trade(&self, x: &[f64], y: &[f64], volume: f64) -> MsrResult<TradeResult> {
        evaluate_trade(x, y, &self.probabilities, self.subsidy, volume, &self.config)
    }
}
