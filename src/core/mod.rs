//! The core module of the constant registry.
//!
//! This module contains the fundamental components shared by every constant
//! set, including:
//! - The `Constant` trait and the identifier shapes it resolves
//! - Error handling
//! - Configuration types that tag operations with constants
//! - Numeric constants
//!
//! It also provides re-exports of commonly used types for convenience.

pub mod config;
pub mod constants;
pub mod errors;
pub mod registry;

pub use config::{ConfigError, ConfigValidator, SamplingConfig};
pub use constants::{PI, pi_tensor};
pub use errors::{ConstantError, ConstantResult};
pub use registry::{Constant, Identifier, Registry};

/// Initializes the tracing subscriber for logging.
///
/// This function sets up the tracing subscriber with environment filter and formatting layer.
/// It's typically called at the start of an application to enable logging.
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();
}
