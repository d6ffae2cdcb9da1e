//! Implicit cost solver for the profit-charging MSR.
//!
//! The cost `C(x)` at payout vector `x` and volume `s` is the unique root of
//!
//! ```text
//!   sum_i p_i * u(C - x_i + f(s)) = u(x0 + f(s))
//! ```
//!
//! The left side is strictly increasing in `C`, so bisection over a valid
//! bracket converges monotonically. The lower end of the bracket is exact:
//! `u` needs `C - x_i + f(s) > 0` for every `i`, hence `C > max(x) - f(s)`.
//! The upper end starts at `max(x) + x0 + f(s)` and is doubled away from the
//! lower end until the left side exceeds the target.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::{MsrError, MsrResult};
use super::transforms::{liquidity_scale, profit_charge, utility};

/// Default convergence threshold on `|rightSide - leftSide(C)|`.
pub const DEFAULT_TOLERANCE: f64 = 1e-8;

/// Default cap on upper-bracket doublings.
pub const DEFAULT_MAX_EXPANSIONS: u32 = 64;

/// Tuning knobs for [`solve_cost`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Convergence threshold on the balance equation residual (> 0).
    pub tolerance: f64,
    /// Hard cap on midpoint evaluations. `None` runs until the bracket
    /// can no longer be split.
    pub max_steps: Option<usize>,
    /// How many times the upper bound may be doubled before giving up.
    pub max_expansions: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_steps: None,
            max_expansions: DEFAULT_MAX_EXPANSIONS,
        }
    }
}

/// Solved cost together with the auxiliary terms at the same volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostResult {
    /// `C(x)` at the requested volume.
    pub cost: f64,
    /// `g(s)`.
    pub profit_charge: f64,
    /// `f(s)`.
    pub liquidity_scale: f64,
}

/// Solves the MSR balance equation for the cost `C`.
///
/// # Errors
/// - `EmptyOutcomes` if `payouts` is empty
/// - `LengthMismatch` if `probabilities` and `payouts` differ in length
/// - `Domain` for non-finite inputs, negative volume, non-positive subsidy
///   or tolerance, or a utility argument that leaves its domain
/// - `Convergence` if the bracket collapses, the step cap is hit, or the
///   upper bound cannot be expanded far enough
pub fn solve_cost(
    payouts: &[f64],
    probabilities: &[f64],
    volume: f64,
    subsidy: f64,
    config: &SolverConfig,
) -> MsrResult<CostResult> {
    validate_inputs(payouts, probabilities, volume, subsidy, config)?;

    let fs = liquidity_scale(volume);
    let right_side = utility(subsidy + fs)?;
    let left_side = |c: f64| -> MsrResult<f64> {
        payouts
            .iter()
            .zip(probabilities)
            .try_fold(0.0, |acc, (x_i, p_i)| Ok(acc + p_i * utility(c - x_i + fs)?))
    };

    let max_payout = payouts.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mut lower = max_payout - fs;
    let (mut upper, mut residual) = expand_upper_bound(
        lower,
        max_payout + subsidy + fs,
        right_side,
        &left_side,
        config.max_expansions,
    )?;

    let mut steps = 0;
    loop {
        let approx = 0.5 * (lower + upper);
        if approx <= lower || approx >= upper {
            return Err(MsrError::Convergence {
                approx,
                residual,
                steps,
            });
        }

        steps += 1;
        residual = right_side - left_side(approx)?;
        if residual.abs() <= config.tolerance {
            return Ok(CostResult {
                cost: approx,
                profit_charge: profit_charge(volume),
                liquidity_scale: fs,
            });
        }

        if config.max_steps.is_some_and(|cap| steps >= cap) {
            return Err(MsrError::Convergence {
                approx,
                residual,
                steps,
            });
        }

        // residual < 0 means leftSide(approx) > rightSide: root lies below
        if residual < 0.0 {
            upper = approx;
        } else {
            lower = approx;
        }
    }
}

fn validate_inputs(
    payouts: &[f64],
    probabilities: &[f64],
    volume: f64,
    subsidy: f64,
    config: &SolverConfig,
) -> MsrResult<()> {
    if payouts.is_empty() {
        return Err(MsrError::EmptyOutcomes);
    }
    if probabilities.len() != payouts.len() {
        return Err(MsrError::LengthMismatch {
            expected: payouts.len(),
            actual: probabilities.len(),
        });
    }
    if let Some(&bad) = payouts.iter().find(|x| !x.is_finite()) {
        return Err(MsrError::Domain {
            what: "payout",
            value: bad,
        });
    }
    if let Some(&bad) = probabilities.iter().find(|p| !p.is_finite()) {
        return Err(MsrError::Domain {
            what: "probability",
            value: bad,
        });
    }
    if !volume.is_finite() || volume < 0.0 {
        return Err(MsrError::Domain {
            what: "volume",
            value: volume,
        });
    }
    if !subsidy.is_finite() || subsidy <= 0.0 {
        return Err(MsrError::Domain {
            what: "subsidy",
            value: subsidy,
        });
    }
    if !config.tolerance.is_finite() || config.tolerance <= 0.0 {
        return Err(MsrError::Domain {
            what: "tolerance",
            value: config.tolerance,
        });
    }
    Ok(())
}

/// Doubles the distance from `lower` until `left_side(upper) > right_side`.
///
/// Returns the bound and the residual `right_side - left_side(upper)` there.
fn expand_upper_bound<F>(
    lower: f64,
    initial: f64,
    right_side: f64,
    left_side: &F,
    max_expansions: u32,
) -> MsrResult<(f64, f64)>
where
    F: Fn(f64) -> MsrResult<f64>,
{
    let mut upper = initial;
    let mut expansions = 0;
    loop {
        let residual = right_side - left_side(upper)?;
        if residual < 0.0 {
            if expansions > 0 {
                debug!(expansions, upper, "Expanded cost solver upper bound");
            }
            return Ok((upper, residual));
        }
        if expansions >= max_expansions {
            return Err(MsrError::Convergence {
                approx: upper,
                residual,
                steps: 0,
            });
        }
        upper = lower + 2.0 * (upper - lower);
        expansions += 1;
    }
}
