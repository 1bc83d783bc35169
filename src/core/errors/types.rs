//! Error type definitions for constant resolution.

use thiserror::Error;

/// Errors that can occur while resolving a constant.
#[derive(Error, Debug)]
pub enum ConstantError {
    /// The identifier has an unsupported shape, or no member matches it.
    #[error("unrecognized identifier {value} for {registry}: expected one of {expected}")]
    UnrecognizedIdentifier {
        /// Name of the constant set being resolved.
        registry: &'static str,
        /// The offending value, rendered for diagnostics.
        value: String,
        /// Pipe-joined labels of the accepted members.
        expected: String,
    },

    /// The member resolved, but no native tensor dtype is mapped for it.
    #[error("unsupported dtype {member}: no native tensor type is mapped")]
    UnsupportedDType {
        /// Label of the member without a mapping.
        member: String,
    },

    /// The tensor framework failed while reading a scalar identifier.
    #[error("{context}")]
    Tensor {
        /// What was being read.
        context: String,
        /// The underlying candle error.
        #[source]
        source: candle_core::Error,
    },
}
