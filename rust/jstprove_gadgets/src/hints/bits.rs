use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::errors::HintError;
use crate::field::FieldOrder;

pub const TO_BINARY_HINT_KEY: &str = "jstprove.to_binary";

/// Extracts the least significant `outputs.len()` bits of `inputs[0]`, in
/// little-endian order.
///
/// Higher-order bits are discarded; the reconstruction constraint in
/// `assert_bit_len` is what rejects inputs that do not fit.
///
/// ```text
/// input = 43, 4 outputs -> [1, 1, 0, 1]
/// ```
pub fn to_binary_hint(
    _order: &FieldOrder,
    inputs: &[BigUint],
    outputs: &mut [BigUint],
) -> Result<(), HintError> {
    super::expect_inputs(TO_BINARY_HINT_KEY, inputs, 1)?;
    let x = &inputs[0];
    for (i, out) in outputs.iter_mut().enumerate() {
        let i = u64::try_from(i).map_err(|_| HintError::Other(format!("bit index {i} too large")))?;
        *out = if x.bit(i) { BigUint::one() } else { BigUint::zero() };
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_little_endian_bits() {
        let p = FieldOrder::mersenne31();
        let mut out = vec![BigUint::zero(); 4];
        to_binary_hint(&p, &[BigUint::from(43u32)], &mut out).unwrap();
        let bits: Vec<u32> = out
            .iter()
            .map(|b| u32::try_from(b).unwrap())
            .collect();
        assert_eq!(bits, vec![1, 1, 0, 1]);
    }

    #[test]
    fn zero_outputs_is_fine() {
        let p = FieldOrder::mersenne31();
        let mut out: Vec<BigUint> = Vec::new();
        assert!(to_binary_hint(&p, &[BigUint::from(1u32)], &mut out).is_ok());
    }
}
