// src/lib.rs

pub mod config;
pub mod error;
pub mod factor;
pub mod integer_math;
pub mod polynomial;
pub mod rational;
pub mod serialization;

pub use error::{AlgebraError, Result};
pub use factor::{factor, ProductOfPolynomials, RationalFactoring};
pub use polynomial::gcd::gcd;
pub use polynomial::{Polynomial, QuotientRemainder};
pub use rational::RationalNumber;
