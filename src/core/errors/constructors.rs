//! Error constructor utilities for constant resolution.
//!
//! These helpers build [`ConstantError`] values with consistent diagnostics so
//! call sites do not repeat the formatting of labels and expected members.

use super::types::ConstantError;
use crate::core::registry::{Constant, Identifier};

impl ConstantError {
    /// Creates an `UnrecognizedIdentifier` error for the constant set `T`.
    ///
    /// The message lists every member of `T`, so the caller can surface it as a
    /// configuration error without further context.
    pub fn unrecognized<T: Constant>(identifier: &Identifier<'_, T>) -> Self {
        Self::UnrecognizedIdentifier {
            registry: T::REGISTRY,
            value: identifier.to_string(),
            expected: T::registry().to_string(),
        }
    }

    /// Creates an `UnsupportedDType` error for a resolved member.
    pub fn unsupported_dtype<T: Constant>(member: T) -> Self {
        Self::UnsupportedDType {
            member: member.label(),
        }
    }

    /// Creates a `Tensor` error wrapping a candle failure.
    pub fn tensor(context: impl Into<String>, error: candle_core::Error) -> Self {
        Self::Tensor {
            context: context.into(),
            source: error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DType, Resample};

    #[test]
    fn test_unrecognized_lists_members() {
        let err = ConstantError::unrecognized::<Resample>(&Identifier::from("lanczos"));
        let message = err.to_string();
        assert!(message.contains("'lanczos'"));
        assert!(message.contains("Resample.NEAREST | Resample.BILINEAR | Resample.BICUBIC"));
    }

    #[test]
    fn test_unsupported_dtype_uses_label() {
        let err = ConstantError::unsupported_dtype(DType::Float16);
        assert_eq!(
            err.to_string(),
            "unsupported dtype DType.FLOAT16: no native tensor type is mapped"
        );
    }

    #[test]
    fn test_tensor_error_keeps_source() {
        let err = ConstantError::tensor(
            "reading scalar",
            candle_core::Error::Msg("boom".to_string()),
        );
        assert_eq!(err.to_string(), "reading scalar");
        assert!(std::error::Error::source(&err).is_some());
    }
}
