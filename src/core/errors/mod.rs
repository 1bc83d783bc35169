//! Error types for constant resolution.
//!
//! This module provides the errors raised while coercing names, codes, native
//! dtypes and scalar tensors into constant members, together with helper
//! constructors that render the offending value for diagnostics.
//!
//! # Usage
//!
//! ```rust
//! use cvkit::core::errors::ConstantError;
//! use cvkit::domain::BorderType;
//! use cvkit::core::registry::Constant;
//!
//! let err = BorderType::resolve(99).unwrap_err();
//! assert!(matches!(err, ConstantError::UnrecognizedIdentifier { .. }));
//! assert!(err.to_string().contains("BorderType.CIRCULAR"));
//! ```

// Module declarations
pub mod constructors;
pub mod types;

pub use types::ConstantError;

/// Convenient result alias for constant resolution.
pub type ConstantResult<T> = Result<T, ConstantError>;
