//! # cvkit
//!
//! Typed constant sets for computer-vision tensor pipelines, built on
//! [candle](https://github.com/huggingface/candle).
//!
//! Image and geometry operations take their mode parameters as closed sets of
//! named integer constants: the interpolation mode, how borders are extended,
//! how sampling grids are padded, the element dtype, and the kind of data a
//! tensor carries. This crate defines those sets and resolves user input
//! (names in any case, integer codes, candle dtypes, scalar tensors) to the
//! canonical member.
//!
//! ## Constant Sets
//!
//! - **Resample**: NEAREST, BILINEAR, BICUBIC
//! - **BorderType**: CONSTANT, REFLECT, REPLICATE, CIRCULAR
//! - **SamplePadding**: ZEROS, BORDER, REFLECTION
//! - **DType**: INT64, FLOAT16, FLOAT32, FLOAT64
//! - **DataKey**: INPUT, MASK, BBOX, BBOX_XYXY, BBOX_XYWH, KEYPOINTS, CLASS
//!
//! ## Modules
//!
//! * [`core`] - The `Constant` trait, error handling, configuration
//! * [`domain`] - The constant sets
//! * [`utils`] - Tensor helpers
//!
//! ## Quick Start
//!
//! ```rust
//! use cvkit::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mode = Resample::resolve("bicubic")?;
//! assert_eq!(mode, Resample::Bicubic);
//! assert!(BorderType::contains(3));
//!
//! let native = DType::to_native("float16")?;
//! assert_eq!(native, candle_core::DType::F16);
//!
//! println!("{}", SamplePadding::registry());
//! # Ok(())
//! # }
//! ```
//!
//! ### JSON Configuration
//!
//! ```rust
//! use cvkit::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SamplingConfig::from_json_str(r#"
//! {
//!   "resample": "nearest",
//!   "padding_mode": 1,
//!   "data_keys": ["input", "mask"]
//! }
//! "#)?;
//!
//! assert_eq!(config.padding_mode, SamplePadding::Border);
//! # Ok(())
//! # }
//! ```

// Core modules
pub mod core;
pub mod domain;
pub mod utils;

/// Prelude module for convenient imports.
///
/// Bring the essentials into scope with a single use statement:
///
/// ```rust
/// use cvkit::prelude::*;
/// ```
pub mod prelude {
    // Constant sets
    pub use crate::domain::{BorderType, DType, DataKey, Resample, SamplePadding};

    // Resolution (trait must be in scope for resolve/contains)
    pub use crate::core::registry::{Constant, Identifier};

    // Error Handling
    pub use crate::core::{ConfigError, ConstantError, ConstantResult};

    // Configuration
    pub use crate::core::config::{ConfigValidator, SamplingConfig};
}
