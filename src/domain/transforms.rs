//! Scalar transforms of the profit-charging MSR.
//!
//! - `u(v) = ln(v)` — utility, defined for `v > 0`
//! - `g(s) = 0.01 * s` — profit charge at volume `s`
//! - `f(s) = 0.924 * (sqrt(s + 132.3) - sqrt(132.3))` — liquidity scale
//!
//! Reference: Othman (2012) "Profit-Charging Market Makers with Bounded
//! Loss, Vanishing Bid/Ask Spreads, and Unlimited Market Depth"

use super::error::{MsrError, MsrResult};

/// Fraction of traded volume the operator keeps as profit.
pub const PROFIT_RATE: f64 = 0.01;

/// Scale of the liquidity function.
pub const LIQUIDITY_ALPHA: f64 = 0.924;

/// Offset under the square root; keeps `f(0) == 0` and `f` concave.
pub const LIQUIDITY_OFFSET: f64 = 132.3;

/// Logarithmic utility. Strictly increasing and concave on `(0, inf)`.
///
/// # Errors
/// Returns `MsrError::Domain` when `v <= 0` or `v` is NaN.
pub fn utility(v: f64) -> MsrResult<f64> {
    if v.is_nan() || v <= 0.0 {
        return Err(MsrError::Domain {
            what: "utility argument",
            value: v,
        });
    }
    Ok(v.ln())
}

/// Linear profit charge extracted at volume `s`.
pub fn profit_charge(s: f64) -> f64 {
    PROFIT_RATE * s
}

/// Liquidity scale at volume `s`. Increasing and concave, `f(0) == 0`.
///
/// Real for every `s >= -LIQUIDITY_OFFSET`; the solver only calls it with
/// non-negative volumes.
pub fn liquidity_scale(s: f64) -> f64 {
    LIQUIDITY_ALPHA * ((s + LIQUIDITY_OFFSET).sqrt() - LIQUIDITY_OFFSET.sqrt())
}
