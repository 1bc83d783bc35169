//! Constant Resolution Example
//!
//! This example resolves a user-supplied identifier against one of the
//! constant sets and prints the canonical member, its code and the full set.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example resolve_constant -- [OPTIONS] <SET> <VALUE>
//! ```
//!
//! # Arguments
//!
//! * `<SET>` - Constant set to resolve against (resample, border-type,
//!   sample-padding, dtype, data-key)
//! * `<VALUE>` - Member name (any case) or integer code
//! * `--native` - For dtype, also print the candle dtype
//!
//! # Example
//!
//! ```bash
//! RUST_LOG=debug cargo run --example resolve_constant -- dtype torch.float16 --native
//! ```

use clap::{Parser, ValueEnum};
use cvkit::core::init_tracing;
use cvkit::prelude::*;
use tracing::{error, info};

/// Constant sets selectable from the command line
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Set {
    Resample,
    BorderType,
    SamplePadding,
    Dtype,
    DataKey,
}

/// Command-line arguments for the constant resolution example
#[derive(Parser)]
#[command(name = "resolve_constant")]
#[command(about = "Resolve a name or code against a cvkit constant set")]
struct Args {
    /// Constant set to resolve against
    #[arg(value_enum)]
    set: Set,

    /// Member name (any case) or integer code
    value: String,

    /// Also print the native candle dtype (dtype set only)
    #[arg(long)]
    native: bool,
}

/// Integers are codes, everything else is a name.
fn identifier<T: Constant>(value: &str) -> Identifier<'_, T> {
    match value.parse::<i64>() {
        Ok(code) => Identifier::Code(code),
        Err(_) => Identifier::name(value),
    }
}

fn describe<T: Constant>(value: &str) -> ConstantResult<String> {
    let member = T::resolve(identifier::<T>(value))?;
    Ok(format!("{} (code {})", member.label(), member.code()))
}

fn registry_of(set: Set) -> String {
    match set {
        Set::Resample => Resample::registry().to_string(),
        Set::BorderType => BorderType::registry().to_string(),
        Set::SamplePadding => SamplePadding::registry().to_string(),
        Set::Dtype => DType::registry().to_string(),
        Set::DataKey => DataKey::registry().to_string(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args = Args::parse();

    let described = match args.set {
        Set::Resample => describe::<Resample>(&args.value),
        Set::BorderType => describe::<BorderType>(&args.value),
        Set::SamplePadding => describe::<SamplePadding>(&args.value),
        Set::Dtype => describe::<DType>(&args.value),
        Set::DataKey => describe::<DataKey>(&args.value),
    };

    match described {
        Ok(description) => info!("resolved {}", description),
        Err(e) => {
            error!("{}", e);
            return Err(e.into());
        }
    }

    if args.native {
        match args.set {
            Set::Dtype => {
                let native = DType::to_native(identifier::<DType>(&args.value))?;
                info!("native dtype: {}", native.as_str());
            }
            other => error!("--native only applies to dtype, not {:?}", other),
        }
    }

    info!("members: {}", registry_of(args.set));
    Ok(())
}
