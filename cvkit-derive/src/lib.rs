//! Procedural derive macros for cvkit.
//!
//! This crate provides the `Constant` derive, which generates the registry
//! boilerplate shared by every closed constant set in cvkit.

use darling::{FromDeriveInput, FromVariant, ast};
use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

/// A single unit variant of a constant set.
#[derive(Debug, FromVariant)]
#[darling(attributes(constant))]
struct ConstantVariant {
    ident: syn::Ident,
    /// `#[constant(name = "...")]` - overrides the generated canonical name
    #[darling(default)]
    name: Option<String>,
}

impl ConstantVariant {
    fn canonical_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| screaming_snake_case(&self.ident.to_string()))
    }
}

/// The input enum for the Constant derive.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(constant), supports(enum_unit))]
struct ConstantInput {
    ident: syn::Ident,
    data: ast::Data<ConstantVariant, ()>,

    /// `#[constant(registry = "...")]` - name shown in labels, defaults to the type name
    #[darling(default)]
    registry: Option<String>,

    /// `#[constant(from_name = "fn_name")]` - inherent fn replacing the name lookup
    #[darling(default)]
    from_name: Option<syn::Ident>,

    /// `#[constant(resolve_extended = "fn_name")]` - inherent fn resolving the
    /// identifier shapes beyond name, code and member
    #[darling(default)]
    resolve_extended: Option<syn::Ident>,
}

/// Derive macro for implementing the `Constant` trait on a fieldless enum.
///
/// Each variant's code is its discriminant and its canonical name is the
/// SCREAMING_SNAKE_CASE form of the variant ident (`BboxXyxy` becomes
/// `BBOX_XYXY`). Besides `Constant`, the macro implements `Display`, `FromStr`,
/// `TryFrom<i64>`, `serde::Serialize`, `serde::Deserialize` and the
/// member-to-`Identifier` conversion.
///
/// # Supported Attributes
///
/// - `#[constant(registry = "Name")]` on the enum - label prefix
/// - `#[constant(from_name = "fn")]` on the enum - custom name lookup
/// - `#[constant(resolve_extended = "fn")]` on the enum - extra identifier shapes
/// - `#[constant(name = "NAME")]` on a variant - explicit canonical name
///
/// # Example
///
/// ```rust,ignore
/// use cvkit_derive::Constant;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Constant)]
/// pub enum Resample {
///     Nearest = 0,
///     Bilinear = 1,
///     Bicubic = 2,
/// }
/// ```
#[proc_macro_derive(Constant, attributes(constant))]
pub fn derive_constant(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    ConstantInput::from_derive_input(&input)
        .and_then(|parsed| generate_constant(&parsed))
        .unwrap_or_else(|err| err.write_errors())
        .into()
}

fn generate_constant(input: &ConstantInput) -> darling::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let registry = input.registry.clone().unwrap_or_else(|| name.to_string());

    let variants = input
        .data
        .as_ref()
        .take_enum()
        .ok_or_else(|| darling::Error::unsupported_shape("struct"))?;

    if variants.is_empty() {
        return Err(
            darling::Error::custom("a constant set needs at least one member").with_span(name),
        );
    }

    verify_unique_names(&variants)?;

    let idents: Vec<_> = variants.iter().map(|v| &v.ident).collect();
    let names: Vec<_> = variants.iter().map(|v| v.canonical_name()).collect();

    let from_name = input.from_name.as_ref().map(|f| {
        quote! {
            fn from_name(name: &str) -> Option<Self> {
                Self::#f(name)
            }
        }
    });

    let resolve_extended = input.resolve_extended.as_ref().map(|f| {
        quote! {
            fn resolve_extended(
                identifier: crate::core::registry::Identifier<'_, Self>,
            ) -> crate::core::errors::ConstantResult<Self> {
                Self::#f(identifier)
            }
        }
    });

    Ok(quote! {
        impl crate::core::registry::Constant for #name {
            const REGISTRY: &'static str = #registry;
            const MEMBERS: &'static [Self] = &[#(Self::#idents),*];

            fn name(&self) -> &'static str {
                match self {
                    #(Self::#idents => #names,)*
                }
            }

            fn code(&self) -> i64 {
                *self as i64
            }

            #from_name
            #resolve_extended
        }

        impl ::std::fmt::Display for #name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&crate::core::registry::Constant::label(self))
            }
        }

        impl ::std::str::FromStr for #name {
            type Err = crate::core::errors::ConstantError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as crate::core::registry::Constant>::resolve(s)
            }
        }

        impl ::std::convert::TryFrom<i64> for #name {
            type Error = crate::core::errors::ConstantError;

            fn try_from(code: i64) -> Result<Self, Self::Error> {
                <Self as crate::core::registry::Constant>::resolve(code)
            }
        }

        impl<'a> ::std::convert::From<#name> for crate::core::registry::Identifier<'a, #name> {
            fn from(member: #name) -> Self {
                crate::core::registry::Identifier::Member(member)
            }
        }

        impl ::serde::Serialize for #name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(crate::core::registry::Constant::name(self))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for #name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                crate::core::registry::deserialize(deserializer)
            }
        }
    })
}

fn verify_unique_names(variants: &[&ConstantVariant]) -> darling::Result<()> {
    let mut errors = darling::Error::accumulator();
    let mut seen = std::collections::HashSet::new();

    for variant in variants {
        let canonical = variant.canonical_name();
        if !seen.insert(canonical.clone()) {
            errors.push(
                darling::Error::custom(format!("duplicate constant name `{}`", canonical))
                    .with_span(&variant.ident),
            );
        }
    }

    errors.finish()
}

/// Converts a CamelCase ident into SCREAMING_SNAKE_CASE.
///
/// An underscore is inserted before an uppercase letter that follows a
/// lowercase letter or a digit, so `Float32` stays `FLOAT32`.
fn screaming_snake_case(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 4);
    let mut prev: Option<char> = None;

    for c in ident.chars() {
        if c.is_uppercase() && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit()) {
            out.push('_');
        }
        out.extend(c.to_uppercase());
        prev = Some(c);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screaming_snake_case() {
        assert_eq!(screaming_snake_case("Nearest"), "NEAREST");
        assert_eq!(screaming_snake_case("BboxXyxy"), "BBOX_XYXY");
        assert_eq!(screaming_snake_case("Float16"), "FLOAT16");
        assert_eq!(screaming_snake_case("Int64"), "INT64");
        assert_eq!(screaming_snake_case("CLASS"), "CLASS");
    }
}
