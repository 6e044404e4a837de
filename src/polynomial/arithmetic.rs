// src/polynomial/arithmetic.rs

use log::trace;

use crate::error::{AlgebraError, Result};
use crate::polynomial::polynomial::Polynomial;
use crate::rational::RationalNumber;

/// Output of polynomial long division: `dividend == divisor * quotient + remainder`
/// with the remainder zero or of lower degree than the divisor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuotientRemainder {
    pub quotient: Polynomial,
    pub remainder: Polynomial,
}

impl Polynomial {
    /// Multiplies every coefficient by `factor` and then by `x^power`.
    pub fn scale(&self, factor: &RationalNumber, power: usize) -> Result<Polynomial> {
        if factor.is_infinite() {
            return Err(AlgebraError::InfiniteCoefficient);
        }
        self.require_non_null()?;

        let mut coefficients = vec![RationalNumber::zero(); power];
        for coefficient in self.iter() {
            coefficients.push(coefficient.multiply(factor)?);
        }
        Ok(Polynomial::from_finite(coefficients))
    }

    pub fn add(&self, other: &Polynomial) -> Result<Polynomial> {
        self.require_non_null()?;
        other.require_non_null()?;

        if self.is_zero() {
            return Ok(other.clone());
        }
        if other.is_zero() {
            return Ok(self.clone());
        }

        let length = self.len().max(other.len());
        let coefficients = (0..length)
            .map(|i| self.coefficient(i).add(&other.coefficient(i)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Polynomial::from_finite(coefficients))
    }

    pub fn subtract(&self, other: &Polynomial) -> Result<Polynomial> {
        self.require_non_null()?;
        other.require_non_null()?;
        self.add(&-other)
    }

    pub fn multiply(&self, other: &Polynomial) -> Result<Polynomial> {
        self.require_non_null()?;
        other.require_non_null()?;

        if self.is_zero() || other.is_zero() {
            return Ok(Polynomial::zero());
        }

        // the x^(i+j) coefficient accumulates every self[i] * other[j]
        let mut coefficients = vec![RationalNumber::zero(); self.len() + other.len() - 1];
        for (i, left) in self.iter().enumerate() {
            for (j, right) in other.iter().enumerate() {
                coefficients[i + j].increment(&left.multiply(right)?)?;
            }
        }
        Ok(Polynomial::from_finite(coefficients))
    }

    /// Value at `x`. At an infinite `x` the result is an infinity whose sign
    /// follows the leading coefficient and the parity of the degree, constants
    /// included. The zero polynomial is zero everywhere.
    pub fn evaluate(&self, x: &RationalNumber) -> Result<RationalNumber> {
        self.require_non_null()?;

        if x.is_infinite() {
            return self.evaluate_at_infinity(x);
        }

        let mut total = self.coefficient(0);
        for (i, coefficient) in self.iter().enumerate().skip(1) {
            if coefficient.is_zero() {
                continue;
            }
            total.increment(&coefficient.multiply(&x.power(i as i64)?)?)?;
        }
        Ok(total)
    }

    fn evaluate_at_infinity(&self, x: &RationalNumber) -> Result<RationalNumber> {
        if self.is_zero() {
            return Ok(RationalNumber::zero());
        }

        let leading = self.leading_coefficient()?;

        let odd_degree = (self.len() - 1) % 2 == 1;
        if (x.is_negative() && odd_degree) != leading.is_negative() {
            Ok(RationalNumber::negative_infinity())
        } else {
            Ok(RationalNumber::positive_infinity())
        }
    }

    /// Polynomial long division.
    pub fn quotient_remainder(&self, divisor: &Polynomial) -> Result<QuotientRemainder> {
        self.require_non_null()?;
        divisor.require_non_null()?;

        if divisor.is_zero() {
            return Err(AlgebraError::DivisionByZero);
        }
        if self.is_zero() {
            return Ok(QuotientRemainder {
                quotient: Polynomial::zero(),
                remainder: Polynomial::zero(),
            });
        }
        if self.len() < divisor.len() {
            return Ok(QuotientRemainder {
                quotient: Polynomial::zero(),
                remainder: self.clone(),
            });
        }

        let divisor_leading = divisor.leading_coefficient()?;
        if divisor.len() == 1 {
            return Ok(QuotientRemainder {
                quotient: self.scale(&divisor_leading.reciprocal()?, 0)?,
                remainder: Polynomial::zero(),
            });
        }

        let divisor_degree = divisor.len() - 1;
        let mut remainder = self.coefficients().to_vec();
        let mut quotient = vec![RationalNumber::zero(); self.len() - divisor_degree];

        // Each pass clears the current top coefficient of the running
        // remainder, so the loop runs deg(self) - deg(divisor) + 1 times.
        for shift in (0..quotient.len()).rev() {
            let top = shift + divisor_degree;
            let term = remainder[top].divide(divisor_leading)?;
            if term.is_zero() {
                continue;
            }
            for (j, coefficient) in divisor.iter().enumerate() {
                remainder[shift + j] = remainder[shift + j].subtract(&term.multiply(coefficient)?)?;
            }
            trace!("quotient term {} * x^{}", term, shift);
            quotient[shift] = term;
        }

        remainder.truncate(divisor_degree);
        Ok(QuotientRemainder {
            quotient: Polynomial::from_finite(quotient),
            remainder: Polynomial::from_finite(remainder),
        })
    }

    pub fn divide(&self, divisor: &Polynomial) -> Result<Polynomial> {
        Ok(self.quotient_remainder(divisor)?.quotient)
    }

    pub fn remainder(&self, divisor: &Polynomial) -> Result<Polynomial> {
        Ok(self.quotient_remainder(divisor)?.remainder)
    }

    /// Scales so the leading coefficient is one. The zero polynomial is left as is.
    pub fn make_monic(&self) -> Result<Polynomial> {
        let leading = self.leading_coefficient()?;
        if leading.is_zero() {
            return Ok(self.clone());
        }
        self.scale(&leading.reciprocal()?, 0)
    }

    /// `self^exponent` by repeated multiplication.
    pub fn pow(&self, exponent: u32) -> Result<Polynomial> {
        self.require_non_null()?;
        (0..exponent).try_fold(Polynomial::one(), |acc, _| acc.multiply(self))
    }
}
