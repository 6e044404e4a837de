// src/integer_math/gcd.rs

use num::{BigUint, Integer, One, Zero};

pub struct GCD;

impl GCD {
    pub fn find_lcm(numbers: &[BigUint]) -> BigUint {
        numbers.iter().fold(BigUint::one(), |acc, x| Self::find_lcm_pair(&acc, x))
    }

    /// `left * right / gcd(left, right)`; zero if either side is zero.
    pub fn find_lcm_pair(left: &BigUint, right: &BigUint) -> BigUint {
        if left.is_zero() || right.is_zero() {
            return BigUint::zero();
        }
        (left * right) / Self::find_gcd_pair(left, right)
    }

    pub fn find_gcd(numbers: &[BigUint]) -> BigUint {
        numbers.iter().fold(BigUint::zero(), |acc, x| Self::find_gcd_pair(&acc, x))
    }

    pub fn find_gcd_pair(left: &BigUint, right: &BigUint) -> BigUint {
        left.gcd(right)
    }
}
