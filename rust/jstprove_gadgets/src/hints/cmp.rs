//! Output hints for the bounded comparator.
//!
//! Both hints order their operands with `cmp_in_field`, i.e. by canonical
//! signed representative, and must therefore receive the field order of the
//! circuit they serve.

use std::cmp::Ordering;

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::errors::HintError;
use crate::field::{FieldOrder, cmp_in_field};

pub const MIN_OUTPUT_HINT_KEY: &str = "jstprove.min_output";
pub const IS_LESS_OUTPUT_HINT_KEY: &str = "jstprove.is_less_output";

/// Produces the output of `BoundedComparator::min`.
///
/// # Inputs
/// - `inputs[0]`, `inputs[1]`: operands `a` and `b`.
///
/// # Outputs
/// - `outputs[0]`: `a` if `a < b` in signed order, otherwise `b`.
pub fn min_output_hint(
    order: &FieldOrder,
    inputs: &[BigUint],
    outputs: &mut [BigUint],
) -> Result<(), HintError> {
    super::expect_inputs(MIN_OUTPUT_HINT_KEY, inputs, 2)?;
    expect_single_output(MIN_OUTPUT_HINT_KEY, outputs)?;
    let (a, b) = (&inputs[0], &inputs[1]);

    outputs[0] = if cmp_in_field(a, b, order) == Ordering::Less {
        a.clone()
    } else {
        b.clone()
    };
    Ok(())
}

/// Produces the output of `BoundedComparator::is_less`.
///
/// # Inputs
/// - `inputs[0]`, `inputs[1]`: operands `a` and `b`.
///
/// # Outputs
/// - `outputs[0]`: `1` if `a < b` in signed order, otherwise `0`.
pub fn is_less_output_hint(
    order: &FieldOrder,
    inputs: &[BigUint],
    outputs: &mut [BigUint],
) -> Result<(), HintError> {
    super::expect_inputs(IS_LESS_OUTPUT_HINT_KEY, inputs, 2)?;
    expect_single_output(IS_LESS_OUTPUT_HINT_KEY, outputs)?;
    let (a, b) = (&inputs[0], &inputs[1]);

    outputs[0] = if cmp_in_field(a, b, order) == Ordering::Less {
        BigUint::one()
    } else {
        BigUint::zero()
    };
    Ok(())
}

fn expect_single_output(hint: &'static str, outputs: &[BigUint]) -> Result<(), HintError> {
    if outputs.len() != 1 {
        return Err(HintError::OutputArity {
            hint,
            expected: "1".to_string(),
            got: outputs.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;

    use super::*;

    fn toy() -> FieldOrder {
        FieldOrder::new(BigUint::from(13u32)).unwrap()
    }

    fn run(hint: crate::hints::HintFn, order: &FieldOrder, a: i64, b: i64) -> BigUint {
        let inputs = [
            order.from_signed(&BigInt::from(a)),
            order.from_signed(&BigInt::from(b)),
        ];
        let mut out = [BigUint::zero()];
        hint(order, &inputs, &mut out).unwrap();
        out[0].clone()
    }

    #[test]
    fn is_less_toy_scenario() {
        let p = toy();
        assert_eq!(run(is_less_output_hint, &p, 5, 6), BigUint::one());
        assert_eq!(run(is_less_output_hint, &p, 6, 5), BigUint::zero());
        assert_eq!(run(is_less_output_hint, &p, 6, 6), BigUint::zero());
    }

    #[test]
    fn is_less_with_negatives() {
        let p = toy();
        assert_eq!(run(is_less_output_hint, &p, -1, 1), BigUint::one());
        assert_eq!(run(is_less_output_hint, &p, -2, -3), BigUint::zero());
    }

    #[test]
    fn min_picks_signed_minimum() {
        let p = toy();
        assert_eq!(run(min_output_hint, &p, 5, 6), BigUint::from(5u32));
        assert_eq!(run(min_output_hint, &p, 2, -2), p.from_signed(&BigInt::from(-2)));
        assert_eq!(run(min_output_hint, &p, 4, 4), BigUint::from(4u32));
    }

    #[test]
    fn same_inputs_different_fields() {
        // 7 is negative in F_13 but positive in F_31.
        let p13 = toy();
        let p31 = FieldOrder::new(BigUint::from(31u32)).unwrap();
        let inputs = [BigUint::from(7u32), BigUint::from(1u32)];
        let mut out = [BigUint::zero()];
        is_less_output_hint(&p13, &inputs, &mut out).unwrap();
        assert_eq!(out[0], BigUint::one());
        is_less_output_hint(&p31, &inputs, &mut out).unwrap();
        assert_eq!(out[0], BigUint::zero());
    }

    #[test]
    fn wrong_arity_is_an_error() {
        let p = toy();
        let mut out = [BigUint::zero()];
        assert!(min_output_hint(&p, &[BigUint::one()], &mut out).is_err());
        let mut two = [BigUint::zero(), BigUint::zero()];
        assert!(is_less_output_hint(&p, &[BigUint::one(), BigUint::one()], &mut two).is_err());
    }
}
