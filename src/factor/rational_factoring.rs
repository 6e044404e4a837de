// src/factor/rational_factoring.rs

use log::debug;
use num::{BigInt, BigUint};

use crate::config::FactorConfig;
use crate::error::{AlgebraError, Result};
use crate::factor::eisenstein::eisenstein;
use crate::factor::product_of_polynomials::ProductOfPolynomials;
use crate::integer_math::gcd::GCD;
use crate::integer_math::prime_factors::{all_divisors, positive_divisors};
use crate::polynomial::Polynomial;
use crate::rational::RationalNumber;

/// Splits a polynomial into a rational scalar times factors over the
/// rationals, extracting every linear factor the rational root theorem can
/// find. The last factor may still be reducible when it has no rational
/// roots. Factors that are not linear in `x` are primitive with a positive
/// leading coefficient; their content moves into the scalar.
#[derive(Debug, Clone, Default)]
pub struct RationalFactoring {
    config: FactorConfig,
}

impl RationalFactoring {
    pub fn new(config: FactorConfig) -> Self {
        RationalFactoring { config }
    }

    pub fn factor(&self, polynomial: &Polynomial) -> Result<ProductOfPolynomials> {
        polynomial.require_non_null()?;
        if polynomial.is_zero() {
            return Ok(ProductOfPolynomials::new(RationalNumber::zero()));
        }
        if polynomial.len() == 1 {
            return Ok(ProductOfPolynomials::new(polynomial[0].clone()));
        }

        let (mut working, lcm) = polynomial.integerize()?;
        let mut product = ProductOfPolynomials::new(RationalNumber::from_integer(BigInt::from(lcm)).reciprocal()?);
        debug!("factoring {} scaled by {}", working, product.scalar());

        while working.constant_term()?.is_zero() {
            product.insert_factor(Polynomial::x());
            working = working.divide(&Polynomial::x())?;
        }
        if working.len() == 1 {
            return Self::fold_constant(product, &working);
        }

        if self.config.eisenstein_fast_path {
            if let Some(prime) = eisenstein(&working)? {
                debug!("{} is irreducible by eisenstein with p = {}", working, prime);
                Self::insert_primitive(&mut product, working)?;
                return Ok(product);
            }
        }

        let constant = Self::integer(working.constant_term()?)?;
        let leading = Self::integer(working.leading_coefficient()?)?;
        let numerators = all_divisors(&constant)?;
        let denominators = positive_divisors(&leading)?;
        debug!("trying {} x {} rational root candidates", numerators.len(), denominators.len());

        for r in &numerators {
            for s in &denominators {
                let candidate = RationalNumber::new(r.clone(), s.clone())?;
                while working.len() > 1 && working.evaluate(&candidate)?.is_zero() {
                    let linear = Polynomial::new(vec![candidate.negate(), RationalNumber::one()])?;
                    debug!("found rational root {}", candidate);
                    working = working.divide(&linear)?;
                    product.insert_factor(linear);
                }
            }
        }

        if working.len() == 1 {
            return Self::fold_constant(product, &working);
        }
        Self::insert_primitive(&mut product, working)?;
        Ok(product)
    }

    /// Splits an integer polynomial into content and primitive part.
    fn insert_primitive(product: &mut ProductOfPolynomials, factor: Polynomial) -> Result<()> {
        let magnitudes = factor
            .iter()
            .map(|c| Self::integer(c).map(|n| n.magnitude().clone()))
            .collect::<Result<Vec<BigUint>>>()?;
        let mut content = BigInt::from(GCD::find_gcd(&magnitudes));
        if factor.leading_coefficient()?.is_negative() {
            content = -content;
        }

        let content = RationalNumber::from_integer(content);
        let primitive = factor.scale(&content.reciprocal()?, 0)?;
        debug!("content {} removed from {}", content, factor);
        product.set_scalar(product.scalar().multiply(&content)?);
        product.insert_factor(primitive);
        Ok(())
    }

    fn fold_constant(mut product: ProductOfPolynomials, constant: &Polynomial) -> Result<ProductOfPolynomials> {
        let scalar = product.scalar().multiply(&constant[0])?;
        product.set_scalar(scalar);
        Ok(product)
    }

    fn integer(value: &RationalNumber) -> Result<BigInt> {
        value.to_integer().ok_or(AlgebraError::InvalidCoefficients)
    }
}

/// Factors with the default configuration.
pub fn factor(polynomial: &Polynomial) -> Result<ProductOfPolynomials> {
    RationalFactoring::default().factor(polynomial)
}
