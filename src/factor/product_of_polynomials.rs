// src/factor/product_of_polynomials.rs

use std::fmt::{self, Display};
use std::slice::Iter;

use crate::error::Result;
use crate::polynomial::Polynomial;
use crate::rational::RationalNumber;

/// A factorization: a rational scalar times an ordered list of polynomials.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductOfPolynomials {
    scalar: RationalNumber,
    factors: Vec<Polynomial>,
}

impl ProductOfPolynomials {
    pub fn new(scalar: RationalNumber) -> Self {
        ProductOfPolynomials { scalar, factors: Vec::new() }
    }

    pub fn with_factors(scalar: RationalNumber, factors: Vec<Polynomial>) -> Self {
        ProductOfPolynomials { scalar, factors }
    }

    pub fn scalar(&self) -> &RationalNumber {
        &self.scalar
    }

    pub fn set_scalar(&mut self, scalar: RationalNumber) {
        self.scalar = scalar;
    }

    pub fn factors(&self) -> &[Polynomial] {
        &self.factors
    }

    pub fn insert_factor(&mut self, factor: Polynomial) {
        self.factors.push(factor);
    }

    pub fn iter(&self) -> Iter<'_, Polynomial> {
        self.factors.iter()
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// Expands the product back into a single polynomial.
    pub fn multiply_together(&self) -> Result<Polynomial> {
        let mut result = Polynomial::new(vec![self.scalar.clone()])?;
        for factor in &self.factors {
            result = result.multiply(factor)?;
        }
        Ok(result)
    }

    /// True when both products expand to the same polynomial.
    pub fn equivalent(&self, other: &ProductOfPolynomials) -> Result<bool> {
        Ok(self.multiply_together()? == other.multiply_together()?)
    }

    /// Equal scalars and the same factors as a multiset, in any order.
    pub fn same_factors(&self, other: &ProductOfPolynomials) -> bool {
        if self.scalar != other.scalar || self.factors.len() != other.factors.len() {
            return false;
        }
        let mut unmatched: Vec<&Polynomial> = other.factors.iter().collect();
        for factor in &self.factors {
            match unmatched.iter().position(|candidate| *candidate == factor) {
                Some(index) => {
                    unmatched.swap_remove(index);
                }
                None => return false,
            }
        }
        true
    }
}

impl<'a> IntoIterator for &'a ProductOfPolynomials {
    type Item = &'a Polynomial;
    type IntoIter = Iter<'a, Polynomial>;

    fn into_iter(self) -> Self::IntoIter {
        self.factors.iter()
    }
}

impl Display for ProductOfPolynomials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.scalar)?;
        for factor in &self.factors {
            write!(f, "\n({})", factor)?;
        }
        Ok(())
    }
}
