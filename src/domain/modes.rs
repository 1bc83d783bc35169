//! Sampling and border modes.
//!
//! This module defines the enums that select how image operations interpolate
//! pixels and how they treat samples that fall outside the image.

use cvkit_derive::Constant;
use image::imageops::FilterType;

/// Interpolation mode used when resampling an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Constant)]
pub enum Resample {
    /// Take the nearest source pixel
    Nearest = 0,
    /// Linear interpolation over the 2x2 neighbourhood
    Bilinear = 1,
    /// Cubic interpolation over the 4x4 neighbourhood
    Bicubic = 2,
}

impl Resample {
    /// Returns the `image` crate filter closest to this mode.
    ///
    /// `image` names bilinear filtering `Triangle` and uses Catmull-Rom as its
    /// bicubic kernel.
    pub fn filter_type(self) -> FilterType {
        match self {
            Resample::Nearest => FilterType::Nearest,
            Resample::Bilinear => FilterType::Triangle,
            Resample::Bicubic => FilterType::CatmullRom,
        }
    }

    /// Returns true for the modes that blend neighbouring samples.
    pub fn interpolates(self) -> bool {
        !matches!(self, Resample::Nearest)
    }
}

/// How a filter extends the image beyond its border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Constant)]
pub enum BorderType {
    /// Pad with a constant value
    Constant = 0,
    /// Mirror without repeating the edge pixel
    Reflect = 1,
    /// Repeat the edge pixel
    Replicate = 2,
    /// Wrap around to the opposite edge
    Circular = 3,
}

/// Value used for sampling grid points outside the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Constant)]
pub enum SamplePadding {
    /// Out-of-bound samples are zero
    Zeros = 0,
    /// Out-of-bound samples take the border value
    Border = 1,
    /// Out-of-bound samples are reflected back into the input
    Reflection = 2,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::Constant;

    #[test]
    fn test_codes_match_declaration() {
        assert_eq!(Resample::Bicubic.code(), 2);
        assert_eq!(BorderType::Circular.code(), 3);
        assert_eq!(SamplePadding::Border.code(), 1);
    }

    #[test]
    fn test_filter_type_mapping() {
        assert_eq!(Resample::Nearest.filter_type(), FilterType::Nearest);
        assert_eq!(Resample::Bilinear.filter_type(), FilterType::Triangle);
        assert_eq!(
            Resample::resolve("bicubic").unwrap().filter_type(),
            FilterType::CatmullRom
        );
    }

    #[test]
    fn test_interpolates() {
        assert!(!Resample::Nearest.interpolates());
        assert!(Resample::Bilinear.interpolates());
        assert!(Resample::Bicubic.interpolates());
    }

    #[test]
    fn test_padding_and_border_names() {
        assert_eq!(
            SamplePadding::resolve("reflection").unwrap(),
            SamplePadding::Reflection
        );
        assert_eq!(BorderType::resolve("Reflect").unwrap(), BorderType::Reflect);
        // "reflect" belongs to BorderType only
        assert!(!SamplePadding::contains("reflect"));
    }
}
