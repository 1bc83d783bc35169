//! Element dtypes and their mapping onto the tensor framework.
//!
//! [`DType`] resolves the same identifiers as every other constant set, plus
//! the shapes that come from the tensor framework itself:
//!
//! - a native `candle_core::DType`,
//! - a dtype descriptor string such as `"torch.float16"` or `"candle.f32"`,
//! - a single-element integer tensor holding a dtype code.
//!
//! ```rust
//! use candle_core::{Device, Tensor};
//! use cvkit::core::registry::{Constant, Identifier};
//! use cvkit::domain::DType;
//!
//! assert_eq!(DType::resolve(candle_core::DType::F16)?, DType::Float16);
//! assert_eq!(DType::resolve(Identifier::<DType>::descriptor("torch.float64"))?, DType::Float64);
//!
//! let code = Tensor::new(0i64, &Device::Cpu).unwrap();
//! assert_eq!(DType::resolve(&code)?, DType::Int64);
//!
//! assert_eq!(DType::to_native("float32")?, candle_core::DType::F32);
//! # Ok::<(), cvkit::core::errors::ConstantError>(())
//! ```

use candle_core::DType as NativeDType;
use cvkit_derive::Constant;
use tracing::debug;

use crate::core::errors::{ConstantError, ConstantResult};
use crate::core::registry::{self, Constant as _, Identifier};
use crate::utils::tensor::integer_scalar;

/// Numeric element type of a tensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Constant)]
#[constant(from_name = "lookup_name", resolve_extended = "resolve_native")]
pub enum DType {
    /// 64-bit signed integer
    Int64 = 0,
    /// IEEE 754 half precision
    Float16 = 1,
    /// IEEE 754 single precision
    Float32 = 2,
    /// IEEE 754 double precision
    Float64 = 3,
}

/// Native dtype for each member. A member missing here cannot be handed to
/// the framework and fails with `UnsupportedDType`.
const NATIVE_DTYPES: &[(DType, NativeDType)] = &[
    (DType::Int64, NativeDType::I64),
    (DType::Float16, NativeDType::F16),
    (DType::Float32, NativeDType::F32),
    (DType::Float64, NativeDType::F64),
];

impl DType {
    /// Resolves `value` and returns the matching native dtype.
    ///
    /// # Errors
    ///
    /// Returns [`ConstantError::UnrecognizedIdentifier`] if `value` does not
    /// resolve, or [`ConstantError::UnsupportedDType`] if the resolved member
    /// has no native counterpart.
    pub fn to_native<'a>(value: impl Into<Identifier<'a, Self>>) -> ConstantResult<NativeDType> {
        Self::resolve(value)?.native()
    }

    /// Returns the native dtype of this member.
    pub fn native(self) -> ConstantResult<NativeDType> {
        NATIVE_DTYPES
            .iter()
            .find(|(member, _)| *member == self)
            .map(|(_, native)| *native)
            .ok_or_else(|| ConstantError::unsupported_dtype(self))
    }

    /// Returns the member matching a native dtype, if any.
    pub fn from_native(native: NativeDType) -> Option<Self> {
        NATIVE_DTYPES
            .iter()
            .find(|(_, candidate)| *candidate == native)
            .map(|(member, _)| *member)
    }

    /// Returns true for the floating-point members.
    pub fn is_float(self) -> bool {
        !matches!(self, DType::Int64)
    }

    /// Name lookup that ignores a leading framework segment.
    ///
    /// `"torch.float16"`, `"float16"` and the candle short form `"f16"` all
    /// name [`DType::Float16`].
    fn lookup_name(name: &str) -> Option<Self> {
        let upper = name.to_uppercase();
        let stem = upper.split_once('.').map_or(upper.as_str(), |(_, rest)| rest);

        registry::find_by_name(stem).or_else(|| {
            NATIVE_DTYPES
                .iter()
                .find(|(_, native)| native.as_str().eq_ignore_ascii_case(stem))
                .map(|(member, _)| *member)
        })
    }

    fn resolve_native(identifier: Identifier<'_, Self>) -> ConstantResult<Self> {
        let found = match identifier {
            Identifier::Native(native) => Self::from_native(native),
            Identifier::Descriptor(ref descriptor) => Self::lookup_name(descriptor),
            Identifier::Scalar(tensor) => integer_scalar(tensor)
                .map_err(|e| ConstantError::tensor("failed to read dtype code from tensor", e))?
                .and_then(Self::from_code),
            _ => None,
        };

        found.ok_or_else(|| {
            debug!(value = %identifier, "unrecognized dtype identifier");
            ConstantError::unrecognized(&identifier)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::Constant;
    use candle_core::{Device, Tensor};

    #[test]
    fn test_to_native_from_every_base_shape() {
        assert_eq!(DType::to_native("float32").unwrap(), NativeDType::F32);
        assert_eq!(DType::to_native(2).unwrap(), NativeDType::F32);
        assert_eq!(DType::to_native(DType::Float32).unwrap(), NativeDType::F32);
    }

    #[test]
    fn test_every_member_has_native_dtype() {
        for member in DType::iter() {
            let native = member.native().unwrap();
            assert_eq!(DType::from_native(native), Some(member));
            assert_eq!(DType::resolve(native).unwrap(), member);
        }
        assert_eq!(DType::to_native("int64").unwrap(), NativeDType::I64);
        assert_eq!(DType::to_native(1).unwrap(), NativeDType::F16);
        assert_eq!(DType::to_native("FLOAT64").unwrap(), NativeDType::F64);
    }

    #[test]
    fn test_unmapped_native_dtype_is_unrecognized() {
        let err = DType::resolve(NativeDType::U8).unwrap_err();
        assert!(matches!(err, ConstantError::UnrecognizedIdentifier { .. }));
        assert!(err.to_string().contains("candle.u8"));
        assert!(!DType::contains(NativeDType::BF16));
    }

    #[test]
    fn test_descriptor_strips_framework_prefix() {
        let half = DType::resolve(Identifier::<DType>::descriptor("framework.float16")).unwrap();
        assert_eq!(half, DType::Float16);

        let long = DType::resolve(Identifier::<DType>::descriptor("TORCH.INT64")).unwrap();
        assert_eq!(long, DType::Int64);

        let short = DType::resolve(Identifier::<DType>::descriptor("candle.f32")).unwrap();
        assert_eq!(short, DType::Float32);

        assert!(DType::resolve(Identifier::<DType>::descriptor("torch.uint8")).is_err());
    }

    #[test]
    fn test_plain_names_accept_prefix() {
        assert_eq!(DType::resolve("torch.float32").unwrap(), DType::Float32);
        assert!(DType::contains("torch.float32"));
        assert_eq!("f64".parse::<DType>().unwrap(), DType::Float64);
    }

    #[test]
    fn test_scalar_tensor_code() {
        let three = Tensor::new(3i64, &Device::Cpu).unwrap();
        assert_eq!(DType::resolve(&three).unwrap(), DType::Float64);
        assert!(DType::contains(&three));

        let zero = Tensor::new(&[0u32], &Device::Cpu).unwrap();
        assert_eq!(DType::resolve(&zero).unwrap(), DType::Int64);
    }

    #[test]
    fn test_scalar_tensor_rejections() {
        let out_of_range = Tensor::new(7i64, &Device::Cpu).unwrap();
        assert!(matches!(
            DType::resolve(&out_of_range).unwrap_err(),
            ConstantError::UnrecognizedIdentifier { .. }
        ));

        let float = Tensor::new(2.0f32, &Device::Cpu).unwrap();
        assert!(DType::resolve(&float).is_err());

        let many = Tensor::new(&[1i64, 2], &Device::Cpu).unwrap();
        assert!(!DType::contains(&many));
    }

    #[test]
    fn test_is_float() {
        assert!(!DType::Int64.is_float());
        assert!(DType::Float16.is_float());
        assert!(DType::Float64.is_float());
    }
}
