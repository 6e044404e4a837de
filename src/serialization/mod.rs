// src/serialization/mod.rs

pub mod json_converter;
