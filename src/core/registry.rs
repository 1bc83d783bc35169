//! Shared resolution behaviour for closed constant sets.
//!
//! Every constant set in the crate (resampling modes, border modes, padding
//! modes, dtypes and data keys) implements [`Constant`], normally through
//! `#[derive(Constant)]`. The trait turns an [`Identifier`] into the canonical
//! member of the set.
//!
//! # Identifier shapes
//!
//! Callers rarely build an [`Identifier`] by hand. Strings, integers, members,
//! `candle_core::DType` values and tensor references all convert into one:
//!
//! ```rust
//! use cvkit::core::registry::Constant;
//! use cvkit::domain::Resample;
//!
//! assert_eq!(Resample::resolve("bilinear")?, Resample::Bilinear);
//! assert_eq!(Resample::resolve(2)?, Resample::Bicubic);
//! assert_eq!(Resample::resolve(Resample::Nearest)?, Resample::Nearest);
//! assert!(!Resample::contains("lanczos"));
//! # Ok::<(), cvkit::core::errors::ConstantError>(())
//! ```
//!
//! Name, code and member identifiers are understood by every set. The native
//! dtype, descriptor and scalar tensor shapes are only understood by sets that
//! supply a `resolve_extended` hook; everywhere else they are unrecognized.

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use candle_core::Tensor;
use serde::de::{self, Deserializer, Unexpected, Visitor};
use tracing::debug;

use crate::core::errors::{ConstantError, ConstantResult};

/// A value that may identify a member of the constant set `T`.
#[derive(Debug, Clone)]
pub enum Identifier<'a, T> {
    /// A member name, compared case-insensitively.
    Name(Cow<'a, str>),
    /// A member code.
    Code(i64),
    /// An already resolved member.
    Member(T),
    /// A native tensor-framework dtype.
    Native(candle_core::DType),
    /// The string form of a native dtype, such as `"torch.float16"`.
    Descriptor(Cow<'a, str>),
    /// A single-element tensor holding a member code.
    Scalar(&'a Tensor),
}

impl<'a, T> Identifier<'a, T> {
    /// Creates a name identifier.
    pub fn name(name: impl Into<Cow<'a, str>>) -> Self {
        Self::Name(name.into())
    }

    /// Creates a descriptor identifier from the string form of a native dtype.
    pub fn descriptor(descriptor: impl Into<Cow<'a, str>>) -> Self {
        Self::Descriptor(descriptor.into())
    }
}

impl<T: Constant> fmt::Display for Identifier<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Name(name) => write!(f, "'{}'", name),
            Identifier::Code(code) => write!(f, "{}", code),
            Identifier::Member(member) => f.write_str(&member.label()),
            Identifier::Native(dtype) => write!(f, "candle.{}", dtype.as_str()),
            Identifier::Descriptor(descriptor) => write!(f, "descriptor '{}'", descriptor),
            Identifier::Scalar(tensor) => write!(
                f,
                "tensor of {} with shape {:?}",
                tensor.dtype().as_str(),
                tensor.shape()
            ),
        }
    }
}

impl<'a, T> From<&'a str> for Identifier<'a, T> {
    fn from(name: &'a str) -> Self {
        Self::Name(Cow::Borrowed(name))
    }
}

impl<'a, T> From<&'a String> for Identifier<'a, T> {
    fn from(name: &'a String) -> Self {
        Self::Name(Cow::Borrowed(name.as_str()))
    }
}

impl<T> From<String> for Identifier<'_, T> {
    fn from(name: String) -> Self {
        Self::Name(Cow::Owned(name))
    }
}

impl<T> From<i64> for Identifier<'_, T> {
    fn from(code: i64) -> Self {
        Self::Code(code)
    }
}

impl<T> From<i32> for Identifier<'_, T> {
    fn from(code: i32) -> Self {
        Self::Code(i64::from(code))
    }
}

impl<T> From<u32> for Identifier<'_, T> {
    fn from(code: u32) -> Self {
        Self::Code(i64::from(code))
    }
}

impl<T> From<u8> for Identifier<'_, T> {
    fn from(code: u8) -> Self {
        Self::Code(i64::from(code))
    }
}

impl<T> From<candle_core::DType> for Identifier<'_, T> {
    fn from(dtype: candle_core::DType) -> Self {
        Self::Native(dtype)
    }
}

impl<'a, T> From<&'a Tensor> for Identifier<'a, T> {
    fn from(tensor: &'a Tensor) -> Self {
        Self::Scalar(tensor)
    }
}

/// A closed set of named integer constants.
///
/// Implementations are generated by `#[derive(Constant)]`; only the lookup
/// hooks (`from_name`, `resolve_extended`) are ever customised.
pub trait Constant: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Name of the set, used as the label prefix.
    const REGISTRY: &'static str;

    /// Every member, in declaration order.
    const MEMBERS: &'static [Self];

    /// Canonical upper-case name of this member.
    fn name(&self) -> &'static str;

    /// Integer code of this member.
    fn code(&self) -> i64;

    /// Qualified label, e.g. `Resample.NEAREST`.
    fn label(&self) -> String {
        format!("{}.{}", Self::REGISTRY, self.name())
    }

    /// Looks a member up by name, ignoring case.
    fn from_name(name: &str) -> Option<Self> {
        find_by_name(name)
    }

    /// Looks a member up by code.
    fn from_code(code: i64) -> Option<Self> {
        find_by_code(code)
    }

    /// Resolves the identifier shapes beyond name, code and member.
    ///
    /// The default rejects them.
    fn resolve_extended(identifier: Identifier<'_, Self>) -> ConstantResult<Self> {
        debug!(
            registry = Self::REGISTRY,
            value = %identifier,
            "unsupported identifier shape"
        );
        Err(ConstantError::unrecognized(&identifier))
    }

    /// Resolves `value` to the canonical member.
    ///
    /// # Errors
    ///
    /// Returns [`ConstantError::UnrecognizedIdentifier`] when the value's shape
    /// is not supported by this set or no member matches it.
    fn resolve<'a>(value: impl Into<Identifier<'a, Self>>) -> ConstantResult<Self> {
        let identifier = value.into();
        let found = match identifier {
            Identifier::Name(ref name) => Self::from_name(name),
            Identifier::Code(code) => Self::from_code(code),
            Identifier::Member(member) => Some(member),
            other => return Self::resolve_extended(other),
        };

        found.ok_or_else(|| {
            debug!(
                registry = Self::REGISTRY,
                value = %identifier,
                "unrecognized constant identifier"
            );
            ConstantError::unrecognized(&identifier)
        })
    }

    /// Returns whether `value` identifies a member, without failing.
    fn contains<'a>(value: impl Into<Identifier<'a, Self>>) -> bool {
        match value.into() {
            Identifier::Name(name) => Self::from_name(&name).is_some(),
            Identifier::Code(code) => Self::from_code(code).is_some(),
            Identifier::Member(member) => Self::MEMBERS.contains(&member),
            other => Self::resolve_extended(other).is_ok(),
        }
    }

    /// Iterates over every member in declaration order.
    fn iter() -> std::iter::Copied<std::slice::Iter<'static, Self>> {
        Self::MEMBERS.iter().copied()
    }

    /// Returns a displayable view of the whole set.
    fn registry() -> Registry<Self> {
        Registry(PhantomData)
    }
}

/// Finds the member of `T` whose canonical name equals `name` upper-cased.
pub fn find_by_name<T: Constant>(name: &str) -> Option<T> {
    let wanted = name.to_uppercase();
    T::iter().find(|member| member.name() == wanted)
}

/// Finds the member of `T` with the given code.
pub fn find_by_code<T: Constant>(code: i64) -> Option<T> {
    T::iter().find(|member| member.code() == code)
}

/// Displayable view of a whole constant set.
///
/// Renders as the pipe-joined labels of its members, e.g.
/// `Resample.NEAREST | Resample.BILINEAR | Resample.BICUBIC`.
#[derive(Clone, Copy)]
pub struct Registry<T>(PhantomData<T>);

impl<T: Constant> Registry<T> {
    /// Number of members in the set.
    pub fn len(&self) -> usize {
        T::MEMBERS.len()
    }

    /// Returns true if the set has no members.
    pub fn is_empty(&self) -> bool {
        T::MEMBERS.is_empty()
    }

    /// Canonical names of every member, in declaration order.
    pub fn names(&self) -> Vec<&'static str> {
        T::iter().map(|member| member.name()).collect()
    }
}

impl<T: Constant> fmt::Display for Registry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, member) in T::iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{}.{}", T::REGISTRY, member.name())?;
        }
        Ok(())
    }
}

impl<T: Constant> fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Deserializes a member of `T` from a name or an integer code.
///
/// Human-readable formats accept either form. Compact formats are not
/// self-describing, so they read the canonical name that `Serialize` writes.
///
/// Used by the `Deserialize` impls generated by `#[derive(Constant)]`.
pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Constant,
{
    if deserializer.is_human_readable() {
        deserializer.deserialize_any(ConstantVisitor(PhantomData))
    } else {
        deserializer.deserialize_str(ConstantVisitor(PhantomData))
    }
}

struct ConstantVisitor<T>(PhantomData<T>);

impl<T: Constant> Visitor<'_> for ConstantVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a name or code of {}", T::registry())
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<T, E> {
        T::resolve(v).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<T, E> {
        T::resolve(v).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<T, E> {
        let code =
            i64::try_from(v).map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))?;
        T::resolve(code).map_err(E::custom)
    }
}
