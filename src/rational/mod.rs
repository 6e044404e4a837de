// src/rational/mod.rs

pub mod rational_number;

pub use rational_number::RationalNumber;
