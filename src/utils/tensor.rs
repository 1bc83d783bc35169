//! Helpers for reading identifiers out of candle tensors.

use candle_core::{DType as NativeDType, Tensor};

/// Reads the value of a single-element integer tensor as `i64`.
///
/// Returns `Ok(None)` when the tensor holds more than one element or has a
/// floating-point dtype, since neither can stand for an integer code.
///
/// # Errors
///
/// Returns the candle error if the element cannot be read back to the host.
///
/// # Examples
///
/// ```
/// use candle_core::{Device, Tensor};
/// use cvkit::utils::tensor::integer_scalar;
///
/// let t = Tensor::new(3i64, &Device::Cpu)?;
/// assert_eq!(integer_scalar(&t)?, Some(3));
///
/// let f = Tensor::new(3.0f32, &Device::Cpu)?;
/// assert_eq!(integer_scalar(&f)?, None);
/// # Ok::<(), candle_core::Error>(())
/// ```
pub fn integer_scalar(tensor: &Tensor) -> candle_core::Result<Option<i64>> {
    if tensor.elem_count() != 1 || !tensor.dtype().is_int() {
        return Ok(None);
    }

    let value = tensor
        .flatten_all()?
        .to_dtype(NativeDType::I64)?
        .get(0)?
        .to_scalar::<i64>()?;

    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use candle_core::Device;

    #[test]
    fn test_rank_zero_and_rank_one_scalars() {
        let rank0 = Tensor::new(2u32, &Device::Cpu).unwrap();
        assert_eq!(integer_scalar(&rank0).unwrap(), Some(2));

        let rank1 = Tensor::new(&[1i64], &Device::Cpu).unwrap();
        assert_eq!(integer_scalar(&rank1).unwrap(), Some(1));

        let byte = Tensor::new(&[[0u8]], &Device::Cpu).unwrap();
        assert_eq!(integer_scalar(&byte).unwrap(), Some(0));
    }

    #[test]
    fn test_non_scalars_are_skipped() {
        let many = Tensor::new(&[1i64, 2], &Device::Cpu).unwrap();
        assert_eq!(integer_scalar(&many).unwrap(), None);

        let float = Tensor::new(1.0f64, &Device::Cpu).unwrap();
        assert_eq!(integer_scalar(&float).unwrap(), None);
    }
}
