// src/polynomial/integerize.rs

use num::{BigInt, BigUint};

use crate::error::Result;
use crate::integer_math::gcd::GCD;
use crate::polynomial::polynomial::Polynomial;
use crate::rational::RationalNumber;

impl Polynomial {
    /// Clears denominators: returns `(L * self, L)` where `L` is the least
    /// common multiple of the coefficient denominators, so the first element
    /// has integer coefficients.
    pub fn integerize(&self) -> Result<(Polynomial, BigUint)> {
        self.require_non_null()?;

        let denominators: Vec<BigUint> = self.iter().map(|c| c.denominator().clone()).collect();
        let lcm = GCD::find_lcm(&denominators);
        let scaled = self.scale(&RationalNumber::from_integer(BigInt::from(lcm.clone())), 0)?;
        Ok((scaled, lcm))
    }
}
