//! Parameters of a resampling operation.
//!
//! A `SamplingConfig` tags a warp or resize with the constant sets defined in
//! [`crate::domain`]. Each constant field accepts a member name in any case or
//! an integer code, so both of these documents describe the same operation:
//!
//! ```json
//! { "resample": "bicubic", "padding_mode": "border", "dtype": "float64" }
//! { "resample": 2, "padding_mode": 1, "dtype": 3 }
//! ```

use candle_core::DType as NativeDType;
use image::imageops::FilterType;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::errors::{ConfigError, ConfigValidator};
use crate::core::errors::ConstantResult;
use crate::domain::{BorderType, DType, DataKey, Resample, SamplePadding};

/// Configuration for a resampling operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Interpolation mode (default: BILINEAR).
    pub resample: Resample,
    /// Value used for grid points outside the input (default: ZEROS).
    pub padding_mode: SamplePadding,
    /// Border handling of the smoothing filter (default: CONSTANT).
    pub border_type: BorderType,
    /// Element type the operation computes in (default: FLOAT32).
    pub dtype: DType,
    /// Whether the extreme grid values address pixel centers (default: true).
    pub align_corners: bool,
    /// Kinds of data the operation is applied to (default: `[INPUT]`).
    pub data_keys: Vec<DataKey>,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            resample: Resample::Bilinear,
            padding_mode: SamplePadding::Zeros,
            border_type: BorderType::Constant,
            dtype: DType::Float32,
            align_corners: true,
            data_keys: vec![DataKey::Input],
        }
    }
}

impl SamplingConfig {
    /// Parses and validates a configuration from a JSON string.
    ///
    /// Missing fields take their default value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed JSON or unknown constant
    /// identifiers (the message names the offending value and the accepted
    /// members), and the validation error if the parsed values conflict.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        debug!(?config, "loaded sampling configuration");
        Ok(config)
    }

    /// Parses and validates a configuration from a JSON value.
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_value(value)?;
        config.validate()?;
        debug!(?config, "loaded sampling configuration");
        Ok(config)
    }

    /// Sets the interpolation mode.
    pub fn with_resample(mut self, resample: Resample) -> Self {
        self.resample = resample;
        self
    }

    /// Sets the padding mode.
    pub fn with_padding_mode(mut self, padding_mode: SamplePadding) -> Self {
        self.padding_mode = padding_mode;
        self
    }

    /// Sets the border type.
    pub fn with_border_type(mut self, border_type: BorderType) -> Self {
        self.border_type = border_type;
        self
    }

    /// Sets the element type.
    pub fn with_dtype(mut self, dtype: DType) -> Self {
        self.dtype = dtype;
        self
    }

    /// Sets the data keys.
    pub fn with_data_keys(mut self, data_keys: Vec<DataKey>) -> Self {
        self.data_keys = data_keys;
        self
    }

    /// Native dtype the operation computes in.
    pub fn native_dtype(&self) -> ConstantResult<NativeDType> {
        self.dtype.native()
    }

    /// `image` filter matching the interpolation mode.
    pub fn filter_type(&self) -> FilterType {
        self.resample.filter_type()
    }
}

impl ConfigValidator for SamplingConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.validate_non_empty(&self.data_keys, "data_keys")?;
        self.validate_unique(&self.data_keys, "data_keys")?;

        if self.resample.interpolates() && !self.dtype.is_float() {
            return Err(ConfigError::ValidationFailed {
                message: format!(
                    "{} interpolation needs a floating-point dtype, got {}",
                    self.resample, self.dtype
                ),
            });
        }

        Ok(())
    }

    fn get_defaults() -> Self {
        Self::default()
    }
}
