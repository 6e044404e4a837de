// src/factor/mod.rs

pub mod eisenstein;
pub mod product_of_polynomials;
pub mod rational_factoring;

pub use eisenstein::eisenstein;
pub use product_of_polynomials::ProductOfPolynomials;
pub use rational_factoring::{factor, RationalFactoring};
