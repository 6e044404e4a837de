// src/polynomial/gcd.rs

use log::debug;

use crate::error::Result;
use crate::polynomial::polynomial::Polynomial;

/// Monic greatest common divisor by the Euclidean algorithm.
///
/// The higher-degree side is repeatedly replaced by its remainder modulo the
/// lower-degree side until the lower side vanishes. `gcd(0, 0)` is zero.
pub fn gcd(left: &Polynomial, right: &Polynomial) -> Result<Polynomial> {
    left.require_non_null()?;
    right.require_non_null()?;

    let (mut smaller, mut larger) = if left.len() < right.len() {
        (left.clone(), right.clone())
    } else {
        (right.clone(), left.clone())
    };

    let mut steps = 0usize;
    while !smaller.is_zero() {
        let remainder = larger.remainder(&smaller)?;
        larger = std::mem::replace(&mut smaller, remainder);
        steps += 1;
    }

    debug!("polynomial gcd found after {} remainder steps: {}", steps, larger);
    larger.make_monic()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AlgebraError;

    fn ints(values: &[i64]) -> Polynomial {
        Polynomial::from_integers(values)
    }

    #[test]
    fn test_gcd_common_linear_factor() {
        let common = ints(&[1, 1]);
        let first = common.multiply(&ints(&[5, 2])).unwrap();
        let second = common.multiply(&ints(&[7, 3])).unwrap();
        assert_eq!(gcd(&first, &second).unwrap(), common);
        assert_eq!(gcd(&second, &first).unwrap(), common);
    }

    #[test]
    fn test_gcd_is_monic() {
        let common = ints(&[3, 6]);
        let first = common.multiply(&ints(&[1, 0, 1])).unwrap();
        let second = common.multiply(&ints(&[-2, 1])).unwrap();
        let expected = Polynomial::from_ratios(&[(1, 2), (1, 1)]).unwrap();
        assert_eq!(gcd(&first, &second).unwrap(), expected);
    }

    #[test]
    fn test_gcd_coprime() {
        assert_eq!(gcd(&ints(&[1, 1]), &ints(&[-1, 1])).unwrap(), Polynomial::one());
    }

    #[test]
    fn test_gcd_with_zero() {
        assert_eq!(gcd(&Polynomial::zero(), &ints(&[2, 4])).unwrap(), ints(&[2, 4]).make_monic().unwrap());
        assert_eq!(gcd(&ints(&[6]), &Polynomial::zero()).unwrap(), Polynomial::one());
        assert_eq!(gcd(&Polynomial::zero(), &Polynomial::zero()).unwrap(), Polynomial::zero());
    }

    #[test]
    fn test_gcd_null() {
        assert_eq!(gcd(&Polynomial::null(), &ints(&[1])), Err(AlgebraError::NullOperand));
    }
}
