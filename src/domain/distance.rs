//! L1 (taxicab) distance between payout vectors.
//!
//! Volume in the MSR grows by the L1 distance each trade moves the payout
//! vector, so this metric drives the liquidity and profit terms.

use super::error::{MsrError, MsrResult};

/// Sum of absolute coordinate-wise differences.
///
/// # Errors
/// Returns `MsrError::LengthMismatch` when the vectors differ in length.
pub fn l1_distance(x: &[f64], y: &[f64]) -> MsrResult<f64> {
    if x.len() != y.len() {
        return Err(MsrError::LengthMismatch {
            expected: x.len(),
            actual: y.len(),
        });
    }
    Ok(x.iter().zip(y).map(|(a, b)| (a - b).abs()).sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_to_self_is_zero() {
        let x = [3.0, -1.5, 7.25];
        assert_eq!(l1_distance(&x, &x).unwrap(), 0.0);
    }

    #[test]
    fn test_distance_sums_absolute_differences() {
        let d = l1_distance(&[0.0, 5.0, 2.0], &[1.0, 3.0, 2.0]).unwrap();
        assert!((d - 3.0).abs() < 1e-12, "Expected 3.0, got {d}");
    }

    #[test]
    fn test_mismatched_lengths_rejected() {
        let err = l1_distance(&[0.0, 0.0], &[1.0]).unwrap_err();
        assert_eq!(
            err,
            MsrError::LengthMismatch {
                expected: 2,
                actual: 1
            }
        );
    }
}
