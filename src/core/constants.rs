//! Numeric constants shared by the toolkit.

use candle_core::{Device, Tensor};

/// The constant π, at the precision kernels compute in.
pub const PI: f64 = std::f64::consts::PI;

/// Creates a rank-0 `f32` tensor holding π on `device`.
///
/// Geometry kernels (angle conversions, rotation matrices) broadcast against
/// this tensor instead of building their own.
///
/// # Examples
///
/// ```
/// use candle_core::Device;
/// use cvkit::core::constants::pi_tensor;
///
/// let pi = pi_tensor(&Device::Cpu)?;
/// assert_eq!(pi.rank(), 0);
/// # Ok::<(), candle_core::Error>(())
/// ```
pub fn pi_tensor(device: &Device) -> candle_core::Result<Tensor> {
    Tensor::new(PI as f32, device)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pi_tensor_value() {
        let pi = pi_tensor(&Device::Cpu).unwrap();
        assert_eq!(pi.dtype(), candle_core::DType::F32);
        let value = pi.to_scalar::<f32>().unwrap();
        assert!((value - std::f32::consts::PI).abs() < f32::EPSILON);
    }
}
