// src/config/mod.rs

pub mod ratpoly_config;

pub use ratpoly_config::{DisplayConfig, FactorConfig, RatpolyConfig};
