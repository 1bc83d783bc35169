//! Utility functions shared across the crate.

pub mod tensor;

pub use tensor::integer_scalar;
