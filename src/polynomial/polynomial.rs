// src/polynomial/polynomial.rs

use std::ops::{Index, Neg};
use std::slice::Iter;

use crate::error::{AlgebraError, Result};
use crate::rational::RationalNumber;

/// Univariate polynomial with rational coefficients, lowest degree first.
///
/// Two degenerate values are kept apart: the *null* polynomial has no
/// coefficients at all and is rejected by every operation, while the *zero*
/// polynomial is the single coefficient `0`. Every constructor trims trailing
/// zero coefficients, so a non-null polynomial either has a non-zero leading
/// coefficient or is exactly the zero polynomial.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polynomial {
    coefficients: Vec<RationalNumber>,
}

impl Polynomial {
    pub fn new(coefficients: Vec<RationalNumber>) -> Result<Self> {
        if coefficients.iter().any(RationalNumber::is_infinite) {
            return Err(AlgebraError::InfiniteCoefficient);
        }
        Ok(Self::from_finite(coefficients))
    }

    /// Canonicalises coefficients already known to be finite.
    pub(crate) fn from_finite(coefficients: Vec<RationalNumber>) -> Self {
        let mut polynomial = Polynomial { coefficients };
        polynomial.remove_zeros();
        polynomial
    }

    pub fn null() -> Self {
        Polynomial { coefficients: Vec::new() }
    }

    pub fn zero() -> Self {
        Polynomial { coefficients: vec![RationalNumber::zero()] }
    }

    pub fn one() -> Self {
        Polynomial { coefficients: vec![RationalNumber::one()] }
    }

    /// The polynomial `x`.
    pub fn x() -> Self {
        Polynomial { coefficients: vec![RationalNumber::zero(), RationalNumber::one()] }
    }

    /// `coefficient * x^degree`.
    pub fn monomial(coefficient: RationalNumber, degree: usize) -> Result<Self> {
        let mut coefficients = vec![RationalNumber::zero(); degree];
        coefficients.push(coefficient);
        Self::new(coefficients)
    }

    pub fn from_integers(values: &[i64]) -> Self {
        Self::from_finite(values.iter().map(|&v| RationalNumber::from(v)).collect())
    }

    pub fn from_ratios(values: &[(i64, i64)]) -> Result<Self> {
        let coefficients = values
            .iter()
            .map(|&(n, d)| RationalNumber::new(n, d))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_finite(coefficients))
    }

    /// Monic polynomial with exactly the given roots, `(x - r0)(x - r1)...`.
    pub fn from_roots(roots: &[RationalNumber]) -> Result<Self> {
        let factors = roots
            .iter()
            .map(|root| Self::new(vec![root.negate(), RationalNumber::one()]))
            .collect::<Result<Vec<_>>>()?;
        Self::product(&factors)
    }

    pub fn product(polys: &[Polynomial]) -> Result<Self> {
        polys
            .iter()
            .try_fold(Polynomial::one(), |acc, poly| acc.multiply(poly))
    }

    pub fn remove_zeros(&mut self) {
        while self.coefficients.len() > 1
            && self.coefficients.last().map_or(false, RationalNumber::is_zero)
        {
            self.coefficients.pop();
        }
    }

    pub fn is_null(&self) -> bool {
        self.coefficients.is_empty()
    }

    pub fn is_zero(&self) -> bool {
        self.coefficients.len() == 1 && self.coefficients[0].is_zero()
    }

    /// Index of the highest non-zero coefficient.
    pub fn degree(&self) -> Result<usize> {
        if self.is_null() {
            return Err(AlgebraError::NullOperand);
        }
        if self.is_zero() {
            return Err(AlgebraError::AmbiguousDegree);
        }
        Ok(self.coefficients.len() - 1)
    }

    /// Number of stored coefficients.
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    pub fn coefficients(&self) -> &[RationalNumber] {
        &self.coefficients
    }

    pub fn iter(&self) -> Iter<'_, RationalNumber> {
        self.coefficients.iter()
    }

    /// Coefficient of `x^index`, zero past the end.
    pub fn coefficient(&self, index: usize) -> RationalNumber {
        self.coefficients.get(index).cloned().unwrap_or_default()
    }

    pub fn leading_coefficient(&self) -> Result<&RationalNumber> {
        self.coefficients.last().ok_or(AlgebraError::NullOperand)
    }

    pub fn constant_term(&self) -> Result<&RationalNumber> {
        self.coefficients.first().ok_or(AlgebraError::NullOperand)
    }

    /// True when every coefficient is an integer.
    pub fn is_integral(&self) -> bool {
        self.coefficients.iter().all(RationalNumber::is_integer)
    }

    pub(crate) fn require_non_null(&self) -> Result<()> {
        if self.is_null() {
            Err(AlgebraError::NullOperand)
        } else {
            Ok(())
        }
    }
}

impl Index<usize> for Polynomial {
    type Output = RationalNumber;

    fn index(&self, index: usize) -> &RationalNumber {
        &self.coefficients[index]
    }
}

impl<'a> IntoIterator for &'a Polynomial {
    type Item = &'a RationalNumber;
    type IntoIter = Iter<'a, RationalNumber>;

    fn into_iter(self) -> Self::IntoIter {
        self.coefficients.iter()
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial {
            coefficients: self.coefficients.iter().map(RationalNumber::negate).collect(),
        }
    }
}
