// src/polynomial/calculus.rs

use crate::error::Result;
use crate::polynomial::polynomial::Polynomial;
use crate::rational::RationalNumber;

impl Polynomial {
    pub fn derivative(&self) -> Result<Polynomial> {
        self.require_non_null()?;
        if self.len() == 1 {
            return Ok(Polynomial::zero());
        }

        let coefficients = self
            .iter()
            .enumerate()
            .skip(1)
            .map(|(exponent, c)| c.multiply(&RationalNumber::from(exponent as i64)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Polynomial::from_finite(coefficients))
    }

    /// Antiderivative with a zero constant of integration.
    pub fn integral(&self) -> Result<Polynomial> {
        self.require_non_null()?;
        if self.is_zero() {
            return Ok(Polynomial::zero());
        }

        let mut coefficients = vec![RationalNumber::zero()];
        for (exponent, c) in self.iter().enumerate() {
            coefficients.push(c.divide(&RationalNumber::from(exponent as i64 + 1))?);
        }
        Ok(Polynomial::from_finite(coefficients))
    }
}
