// src/polynomial/mod.rs

pub mod arithmetic;
pub mod calculus;
pub mod display;
pub mod gcd;
pub mod integerize;
pub mod polynomial;

pub use arithmetic::QuotientRemainder;
pub use polynomial::Polynomial;
