//! Configuration management for operations that consume the constant sets.
//!
//! This module provides configuration types and validation traits. Constant
//! fields deserialize from either a member name or an integer code.

pub mod errors;
pub mod sampling;

// Re-export commonly used types
pub use errors::{ConfigError, ConfigValidator};
pub use sampling::SamplingConfig;
