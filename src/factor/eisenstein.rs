// src/factor/eisenstein.rs

use log::trace;
use num::{BigInt, BigUint, Integer, Zero};

use crate::error::{AlgebraError, Result};
use crate::integer_math::prime_factors::prime_factors;
use crate::polynomial::Polynomial;
use crate::rational::RationalNumber;

/// Eisenstein's irreducibility criterion for an integer polynomial.
///
/// Returns the smallest prime `p` that divides every coefficient but the
/// leading one, does not divide the leading one, and whose square does not
/// divide the constant term. `None` means no such prime exists, which does
/// not imply the polynomial is reducible. A zero constant term never
/// qualifies since every `p^2` divides it.
pub fn eisenstein(polynomial: &Polynomial) -> Result<Option<BigUint>> {
    polynomial.require_non_null()?;
    if !polynomial.is_integral() {
        return Err(AlgebraError::InvalidCoefficients);
    }

    let coefficients: Vec<BigInt> = polynomial.iter().filter_map(RationalNumber::to_integer).collect();
    let constant = &coefficients[0];
    if constant.is_zero() {
        return Ok(None);
    }
    let (leading, lower) = match coefficients.split_last() {
        Some(split) => split,
        None => return Ok(None),
    };

    for (prime, _) in prime_factors(constant.magnitude())? {
        let p = BigInt::from(prime.clone());
        if leading.is_multiple_of(&p) {
            trace!("eisenstein: {} divides the leading coefficient", p);
            continue;
        }
        if constant.is_multiple_of(&(&p * &p)) {
            trace!("eisenstein: {}^2 divides the constant term", p);
            continue;
        }
        if lower.iter().all(|c| c.is_multiple_of(&p)) {
            return Ok(Some(prime));
        }
    }
    Ok(None)
}
