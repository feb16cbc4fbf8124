//! Prover-side hint functions and the registry that resolves them.
//!
//! Hints compute auxiliary witness values that the constraints alone cannot
//! derive. They are NOT sound on their own; each gadget constrains the
//! properties a hint's output must satisfy.

use std::collections::HashMap;
use std::fmt;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::errors::HintError;
use crate::field::FieldOrder;

pub mod bits;
pub mod cmp;
pub mod selector;

pub use bits::{TO_BINARY_HINT_KEY, to_binary_hint};
pub use cmp::{IS_LESS_OUTPUT_HINT_KEY, MIN_OUTPUT_HINT_KEY, is_less_output_hint, min_output_hint};
pub use selector::{MAP_INDICATORS_HINT_KEY, MUX_INDICATORS_HINT_KEY, map_indicators, mux_indicators};

/// Signature shared by every hint: field order, concrete inputs, and an
/// output buffer pre-filled with zeros.
pub type HintFn = fn(&FieldOrder, &[BigUint], &mut [BigUint]) -> Result<(), HintError>;

// ─────────────────────────────────────────────────────────────────────────────
// STRUCT: HintRegistry
// ─────────────────────────────────────────────────────────────────────────────

/// Maps hint keys to functions. Built once per proving pipeline and handed to
/// the witness solver; there is no process-wide registry.
#[derive(Clone, Default)]
pub struct HintRegistry {
    hints: HashMap<String, HintFn>,
}

impl fmt::Debug for HintRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&String> = self.hints.keys().collect();
        keys.sort();
        f.debug_struct("HintRegistry").field("keys", &keys).finish()
    }
}

impl HintRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `hint` under `key`, returning the function it replaced.
    pub fn register(&mut self, key: &str, hint: HintFn) -> Option<HintFn> {
        self.hints.insert(key.to_string(), hint)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.hints.contains_key(key)
    }

    /// Runs the hint registered under `key` and reduces its outputs modulo
    /// the field order.
    ///
    /// # Errors
    /// - [`HintError::UnknownHint`] if nothing is registered under `key`.
    /// - Any error returned by the hint itself.
    pub fn call(
        &self,
        key: &str,
        order: &FieldOrder,
        inputs: &[BigUint],
        num_outputs: usize,
    ) -> Result<Vec<BigUint>, HintError> {
        let hint = self.hints.get(key).ok_or_else(|| HintError::UnknownHint {
            key: key.to_string(),
        })?;
        let mut outputs = vec![BigUint::zero(); num_outputs];
        hint(order, inputs, &mut outputs)?;
        Ok(outputs.iter().map(|v| order.reduce(v)).collect())
    }
}

/// Build a HintRegistry with every hint used by the gadgets in this crate.
#[must_use]
pub fn build_gadget_hint_registry() -> HintRegistry {
    let mut registry = HintRegistry::new();

    // The keys *must* match the ones used in new_hint(...)
    registry.register(MUX_INDICATORS_HINT_KEY, mux_indicators);
    registry.register(MAP_INDICATORS_HINT_KEY, map_indicators);
    registry.register(MIN_OUTPUT_HINT_KEY, min_output_hint);
    registry.register(IS_LESS_OUTPUT_HINT_KEY, is_less_output_hint);
    registry.register(TO_BINARY_HINT_KEY, to_binary_hint);

    registry
}

/// Arity check shared by the hints in this module.
pub(crate) fn expect_inputs(
    hint: &'static str,
    inputs: &[BigUint],
    expected: usize,
) -> Result<(), HintError> {
    if inputs.len() != expected {
        return Err(HintError::InputArity {
            hint,
            expected: expected.to_string(),
            got: inputs.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy() -> FieldOrder {
        FieldOrder::new(BigUint::from(13u32)).unwrap()
    }

    fn overflowing(_: &FieldOrder, _: &[BigUint], out: &mut [BigUint]) -> Result<(), HintError> {
        for o in out.iter_mut() {
            *o = BigUint::from(20u32);
        }
        Ok(())
    }

    #[test]
    fn gadget_registry_has_all_keys() {
        let registry = build_gadget_hint_registry();
        for key in [
            MUX_INDICATORS_HINT_KEY,
            MAP_INDICATORS_HINT_KEY,
            MIN_OUTPUT_HINT_KEY,
            IS_LESS_OUTPUT_HINT_KEY,
            TO_BINARY_HINT_KEY,
        ] {
            assert!(registry.contains(key), "missing {key}");
        }
    }

    #[test]
    fn unknown_key_is_reported() {
        let registry = HintRegistry::new();
        let err = registry.call("nope", &toy(), &[], 1).unwrap_err();
        assert_eq!(
            err,
            HintError::UnknownHint {
                key: "nope".to_string()
            }
        );
    }

    #[test]
    fn outputs_are_reduced() {
        let mut registry = HintRegistry::new();
        assert!(registry.register("test.overflow", overflowing).is_none());
        let out = registry.call("test.overflow", &toy(), &[], 2).unwrap();
        assert_eq!(out, vec![BigUint::from(7u32); 2]);
    }

    #[test]
    fn register_returns_replaced_hint() {
        let mut registry = build_gadget_hint_registry();
        assert!(registry.register(MIN_OUTPUT_HINT_KEY, overflowing).is_some());
    }
}
