//! Domain errors for the MSR cost solver.
//!
//! Every failure in the domain layer is fatal for the call that raised it.
//! Nothing here retries or substitutes defaults; the caller decides whether
//! to abort or to retry with different inputs.

use thiserror::Error;

/// Errors raised by the scalar transforms, the L1 metric and the solver.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MsrError {
    /// A value fell outside the domain of the operation that received it.
    #[error("{what} out of domain: got {value}")]
    Domain {
        /// Which quantity was rejected.
        what: &'static str,
        /// The offending value.
        value: f64,
    },

    /// Two coordinate-wise inputs disagree on their length.
    #[error("length mismatch: expected {expected} coordinates, got {actual}")]
    LengthMismatch {
        /// Length of the reference vector.
        expected: usize,
        /// Length of the vector that did not match.
        actual: usize,
    },

    /// The payout vector has no outcomes, so no bracket can be derived.
    #[error("payout vector cannot be empty")]
    EmptyOutcomes,

    /// Bisection ran out of bracket (or steps) before reaching tolerance.
    #[error("failed to converge: stuck at {approx}, off by {residual} after {steps} steps")]
    Convergence {
        /// Last midpoint evaluated.
        approx: f64,
        /// `rightSide - leftSide(approx)` at that midpoint.
        residual: f64,
        /// Number of midpoint evaluations performed.
        steps: usize,
    },
}

/// Result alias for domain operations.
pub type MsrResult<T> = Result<T, MsrError>;
