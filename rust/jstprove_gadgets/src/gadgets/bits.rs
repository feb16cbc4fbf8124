use num_bigint::BigUint;
use num_traits::One;

use crate::errors::GadgetError;
use crate::frontend::{RootApi, Variable};
use crate::hints::TO_BINARY_HINT_KEY;

// ─────────────────────────────────────────────────────────────────────────────
// FUNCTION: constrained_reconstruct_from_bits
// ─────────────────────────────────────────────────────────────────────────────

/// Checks that each element of a little-endian bitstring is in `{0,1}` and reconstructs the integer.
///
/// # Overview
/// For a given slice of variables `[b₀, b₁, ..., bₙ₋₁]` representing a bitstring in little-endian order,
/// this function:
/// 1. Enforces that each `bᵢ ∈ {0,1}` via the constraint `bᵢ(bᵢ − 1) = 0`.
/// 2. Reconstructs the integer `∑ bᵢ·2ⁱ` and returns the corresponding `Variable`.
///
/// Weights are big integers, so any bit length below the field size works.
///
/// # Example
/// ```ignore
/// // For bits = [1, 1, 0, 1], returns 11,
/// // since 1·2⁰ + 1·2¹ + 0·2² + 1·2³ = 11.
/// ```
pub fn constrained_reconstruct_from_bits<Builder: RootApi>(
    api: &mut Builder,
    least_significant_bits: &[Variable],
) -> Variable {
    let mut reconstructed = api.constant(0u32);
    let mut weight = BigUint::one();

    for &bit in least_significant_bits {
        api.assert_is_bool(bit);
        let term = api.mul(&weight, bit);
        reconstructed = api.add(reconstructed, term);
        weight <<= 1u32;
    }

    reconstructed
}

// ─────────────────────────────────────────────────────────────────────────────
// FUNCTION: assert_bit_len
// ─────────────────────────────────────────────────────────────────────────────

/// Proves that `x` decomposes into exactly `bit_len` boolean digits, i.e.
/// `0 ≤ x < 2^bit_len` as an unsigned residue in `[0, P)`.
///
/// The digits come from the `to_binary` hint; soundness rests on the booleanity
/// and reconstruction constraints. Because `2^bit_len < P`, a value that does
/// not fit has no satisfying decomposition.
///
/// # Errors
/// - [`GadgetError::BitLengthTooLarge`] if `bit_len` is not below the bit
///   length of the field order. Nothing is recorded in that case.
///
/// # Returns
/// The `bit_len` digit variables, least significant first.
pub fn assert_bit_len<Builder: RootApi>(
    api: &mut Builder,
    bit_len: usize,
    x: Variable,
) -> Result<Vec<Variable>, GadgetError> {
    let field_bits = api.field_order().bits();
    if u64::try_from(bit_len).map_or(true, |b| b >= field_bits) {
        return Err(GadgetError::BitLengthTooLarge {
            bit_len,
            field_bits,
        });
    }

    let bits = api.new_hint(TO_BINARY_HINT_KEY, &[x], bit_len);
    let reconstructed = constrained_reconstruct_from_bits(api, &bits);
    api.assert_is_equal(reconstructed, x);

    tracing::debug!("assert_bit_len: {bit_len} digits");
    Ok(bits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldOrder;
    use crate::frontend::CircuitBuilder;
    use crate::hints::build_gadget_hint_registry;
    use crate::witness::WitnessSolver;

    fn fits(order: FieldOrder, bit_len: usize, x: i64) -> bool {
        let mut api = CircuitBuilder::new(order);
        let v = api.input();
        assert_bit_len(&mut api, bit_len, v).unwrap();
        let circuit = api.build();
        let registry = build_gadget_hint_registry();
        WitnessSolver::new(&circuit, &registry).solve([x]).is_ok()
    }

    #[test]
    fn accepts_exactly_the_values_below_two_to_the_bit_len() {
        let p = FieldOrder::new(BigUint::from(13u32)).unwrap();
        for x in 0..13 {
            assert_eq!(fits(p.clone(), 2, x), x < 4, "x = {x}");
        }
        assert!(fits(p.clone(), 0, 0));
        assert!(!fits(p, 0, 1));
    }

    #[test]
    fn negative_values_do_not_fit() {
        assert!(fits(FieldOrder::goldilocks(), 33, (1 << 33) - 1));
        assert!(!fits(FieldOrder::goldilocks(), 33, -1));
    }

    #[test]
    fn rejects_bit_len_at_field_size() {
        let mut api = CircuitBuilder::new(FieldOrder::mersenne31());
        let v = api.input();
        assert_eq!(
            assert_bit_len(&mut api, 31, v).unwrap_err(),
            GadgetError::BitLengthTooLarge {
                bit_len: 31,
                field_bits: 31
            }
        );
        assert_eq!(api.num_constraints(), 0);
        assert_eq!(assert_bit_len(&mut api, 30, v).unwrap().len(), 30);
    }

    #[test]
    fn reconstructs_little_endian() {
        let mut api = CircuitBuilder::new(FieldOrder::mersenne31());
        let bits = api.inputs(4);
        let x = constrained_reconstruct_from_bits(&mut api, &bits);
        let circuit = api.build();
        let registry = build_gadget_hint_registry();
        let w = WitnessSolver::new(&circuit, &registry).solve([1, 1, 0, 1]).unwrap();
        assert_eq!(*w.value(x), BigUint::from(11u32));
        assert!(WitnessSolver::new(&circuit, &registry).solve([2, 0, 0, 0]).is_err());
    }
}
