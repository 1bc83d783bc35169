//! Configuration error types and validation traits.

use std::collections::HashSet;
use std::hash::Hash;

use thiserror::Error;

use crate::core::errors::ConstantError;
use crate::core::registry::Constant;

/// Errors that can occur while loading or validating a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error indicating that a configuration is invalid.
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Error indicating that validation failed.
    #[error("validation failed: {message}")]
    ValidationFailed { message: String },

    /// A constant field held an identifier that does not resolve.
    #[error(transparent)]
    Constant(#[from] ConstantError),

    /// The configuration document could not be parsed, or one of its
    /// constant fields does not resolve.
    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// A trait for validating configuration parameters.
pub trait ConfigValidator {
    /// Validates the configuration.
    ///
    /// # Returns
    ///
    /// A Result indicating success or a ConfigError if validation fails.
    fn validate(&self) -> Result<(), ConfigError>;

    /// Returns the default configuration.
    fn get_defaults() -> Self
    where
        Self: Sized;

    /// Validates that a list of constants is not empty.
    ///
    /// # Arguments
    ///
    /// * `values` - The list to validate.
    /// * `field_name` - The name of the field being validated.
    fn validate_non_empty<T: Constant>(
        &self,
        values: &[T],
        field_name: &str,
    ) -> Result<(), ConfigError> {
        if values.is_empty() {
            Err(ConfigError::InvalidConfig {
                message: format!(
                    "{} must name at least one of {}",
                    field_name,
                    T::registry()
                ),
            })
        } else {
            Ok(())
        }
    }

    /// Validates that a list of constants has no repeated member.
    ///
    /// # Arguments
    ///
    /// * `values` - The list to validate.
    /// * `field_name` - The name of the field being validated.
    fn validate_unique<T: Constant + Hash>(
        &self,
        values: &[T],
        field_name: &str,
    ) -> Result<(), ConfigError> {
        let mut seen = HashSet::with_capacity(values.len());
        match values.iter().find(|value| !seen.insert(**value)) {
            Some(duplicate) => Err(ConfigError::ValidationFailed {
                message: format!("{} lists {} more than once", field_name, duplicate.label()),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DataKey;

    struct Keys(Vec<DataKey>);

    impl ConfigValidator for Keys {
        fn validate(&self) -> Result<(), ConfigError> {
            self.validate_non_empty(&self.0, "keys")?;
            self.validate_unique(&self.0, "keys")
        }

        fn get_defaults() -> Self {
            Keys(vec![DataKey::Input])
        }
    }

    #[test]
    fn test_defaults_validate() {
        assert!(Keys::get_defaults().validate().is_ok());
    }

    #[test]
    fn test_empty_keys() {
        let err = Keys(Vec::new()).validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfig { .. }));
        assert!(err.to_string().contains("DataKey.INPUT"));
    }

    #[test]
    fn test_duplicate_keys() {
        let err = Keys(vec![DataKey::Input, DataKey::Mask, DataKey::Input])
            .validate()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "validation failed: keys lists DataKey.INPUT more than once"
        );
    }
}
