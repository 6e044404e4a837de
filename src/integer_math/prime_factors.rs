// src/integer_math/prime_factors.rs
//
// Trial-division prime factorization and divisor enumeration for the
// integers that show up as constant and leading coefficients while factoring.

use log::trace;
use num::{BigInt, BigUint, Integer, One, Zero};

use crate::error::{AlgebraError, Result};

/// Primes tried before falling back to odd candidates.
pub const SMALL_PRIMES: [u32; 47] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97, 101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191,
    193, 197, 199, 211,
];

/// Factors `n` into `(prime, exponent)` pairs in ascending order of prime.
///
/// The small-prime table is exhausted first, then odd candidates from 213
/// upward until `candidate^2` exceeds what is left. A cofactor above one at
/// that point is itself prime. `1` has no prime factors.
pub fn prime_factors(n: &BigUint) -> Result<Vec<(BigUint, u32)>> {
    if n.is_zero() {
        return Err(AlgebraError::ZeroFactorization);
    }

    let mut remaining = n.clone();
    let mut factors = Vec::new();

    for &p in SMALL_PRIMES.iter() {
        if remaining.is_one() {
            break;
        }
        let prime = BigUint::from(p);
        let power = divide_out(&mut remaining, &prime);
        if power > 0 {
            factors.push((prime, power));
        }
    }

    let two = BigUint::from(2u32);
    let mut candidate = BigUint::from(213u32);
    while &candidate * &candidate <= remaining {
        let power = divide_out(&mut remaining, &candidate);
        if power > 0 {
            factors.push((candidate.clone(), power));
        }
        candidate += &two;
    }

    if !remaining.is_one() {
        factors.push((remaining, 1));
    }

    trace!("prime factors of {}: {:?}", n, factors);
    Ok(factors)
}

/// Every divisor of `n`, positive and negative: `1, -1, d2, -d2, ...` with the
/// positive divisors ascending. The sign of `n` is ignored.
pub fn all_divisors(n: &BigInt) -> Result<Vec<BigInt>> {
    let factors = prime_factors(n.magnitude())?;

    let mut divisors = vec![BigUint::one()];
    for (prime, power) in &factors {
        let mut extended = Vec::with_capacity(divisors.len() * (*power as usize + 1));
        for divisor in &divisors {
            let mut value = divisor.clone();
            extended.push(value.clone());
            for _ in 0..*power {
                value *= prime;
                extended.push(value.clone());
            }
        }
        divisors = extended;
    }
    divisors.sort();

    Ok(divisors
        .into_iter()
        .flat_map(|d| {
            let d = BigInt::from(d);
            [d.clone(), -d]
        })
        .collect())
}

/// Positive divisors only, ascending.
pub fn positive_divisors(n: &BigInt) -> Result<Vec<BigInt>> {
    Ok(all_divisors(n)?.into_iter().step_by(2).collect())
}

fn divide_out(remaining: &mut BigUint, divisor: &BigUint) -> u32 {
    let mut power = 0;
    while remaining.is_multiple_of(divisor) {
        *remaining /= divisor;
        power += 1;
    }
    power
}
