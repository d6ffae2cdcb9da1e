//! Sample Points - Seedable Random Start Points for Charts
//!
//! The RNG is always injected so runs are reproducible from a seed.

use rand::Rng;

use crate::domain::error::{MsrError, MsrResult};

/// Draws `len` integer-valued coordinates uniformly from `[0, max)`.
///
/// # Errors
/// Returns `Domain` if `max` is zero.
pub fn random_point<R: Rng + ?Sized>(len: usize, max: u32, rng: &mut R) -> MsrResult<Vec<f64>> {
  if max == 0 {
    return Err(MsrError::Domain {
      what: "sample bound",
      value: 0.0,
    });
  }
  Ok((0..len).map(|_| f64::from(rng.gen_range(0..max))).collect())
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::rngs::StdRng;
  use rand::SeedableRng;

  #[test]
  fn test_same_seed_same_point() {
    let a = random_point(5, 100, &mut StdRng::seed_from_u64(7)).unwrap();
    let b = random_point(5, 100, &mut StdRng::seed_from_u64(7)).unwrap();
    assert_eq!(a, b);
  }

  #[test]
  fn test_coordinates_in_range() {
    let mut rng = StdRng::seed_from_u64(42);
    let point = random_point(200, 10, &mut rng).unwrap();
    assert_eq!(point.len(), 200);
    for x in point {
      assert!((0.0..10.0).contains(&x), "{x} out of range");
      assert_eq!(x.fract(), 0.0);
    }
  }

  #[test]
  fn test_zero_bound_rejected() {
    let mut rng = StdRng::seed_from_u64(1);
    assert!(random_point(3, 0, &mut rng).is_err());
  }
}
