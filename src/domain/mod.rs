//! Constant sets shared by the operations of the toolkit.
//!
//! Image and geometry operations tag their parameters with these types
//! (interpolation mode, border handling, padding, element dtype) and
//! augmentation pipelines tag their inputs with [`DataKey`].

pub mod data_key;
pub mod dtype;
pub mod modes;

pub use data_key::DataKey;
pub use dtype::DType;
pub use modes::{BorderType, Resample, SamplePadding};
