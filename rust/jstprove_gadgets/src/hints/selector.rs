//! Indicator hints for the selector gadgets.
//!
//! Both hints write every output slot explicitly, so a reused buffer can
//! never leak a stale value into the indicator vector.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::errors::HintError;
use crate::field::FieldOrder;

pub const MUX_INDICATORS_HINT_KEY: &str = "jstprove.mux_indicators";
pub const MAP_INDICATORS_HINT_KEY: &str = "jstprove.map_indicators";

fn indicator(hit: bool) -> BigUint {
    if hit { BigUint::one() } else { BigUint::zero() }
}

/// One-hot vector for `mux`.
///
/// # Inputs
/// - `inputs[0]`: the selector `sel`.
///
/// # Outputs
/// - `outputs[i] = 1` if `sel == i`, else `0`. When `sel` is out of range all
///   outputs are zero and the surrounding constraints cannot be satisfied.
pub fn mux_indicators(
    _order: &FieldOrder,
    inputs: &[BigUint],
    outputs: &mut [BigUint],
) -> Result<(), HintError> {
    super::expect_inputs(MUX_INDICATORS_HINT_KEY, inputs, 1)?;
    let sel = &inputs[0];
    for (i, out) in outputs.iter_mut().enumerate() {
        *out = indicator(*sel == BigUint::from(i));
    }
    Ok(())
}

/// One-hot vector for `map`.
///
/// # Inputs
/// - `inputs[..n]`: the keys.
/// - `inputs[n]`: the query key.
///
/// # Outputs
/// - `n` indicators, `outputs[i] = 1` iff `keys[i] == query`. Duplicate keys
///   yield more than one `1`, which the sum constraint then rejects for this
///   particular witness.
pub fn map_indicators(
    _order: &FieldOrder,
    inputs: &[BigUint],
    outputs: &mut [BigUint],
) -> Result<(), HintError> {
    let Some((query, keys)) = inputs.split_last() else {
        return Err(HintError::InputArity {
            hint: MAP_INDICATORS_HINT_KEY,
            expected: "at least 1".to_string(),
            got: 0,
        });
    };
    if keys.len() != outputs.len() {
        return Err(HintError::OutputArity {
            hint: MAP_INDICATORS_HINT_KEY,
            expected: keys.len().to_string(),
            got: outputs.len(),
        });
    }
    for (key, out) in keys.iter().zip(outputs.iter_mut()) {
        *out = indicator(key == query);
    }
    Ok(())
}
