//! Signed comparison of field elements whose difference is known to be small.
//!
//! Each comparison reduces to proving that one of two complementary
//! differences is non-negative:
//!
//! ```text
//! assert_is_less_eq -> (a - b,     b - a)
//! assert_is_less    -> (a - b - 1, b - a - 1)
//! is_less           -> (a - b,     b - a - 1)
//! is_less_eq        -> (a - b - 1, b - a)
//! min               -> (a - b,     b - a)
//! ```
//!
//! "Non-negative" means fitting in `abs_diff_upp_bit_len` bits. The negative
//! of `x` is `P - x`, so it only has a short decomposition once `x` is close to
//! `P`. The largest positive candidate is `|a - b|` and the smallest negative
//! one is `-(|a - b| + 1)`, so with `|a - b| <= absDiffUpp` it suffices that
//! `P - absDiffUpp - 1` needs more than `bitlen(absDiffUpp)` bits.
//!
//! Once `P - |a - b| - 1 < 2^bitlen(absDiffUpp)` a negative candidate fits too.
//! If at that point the positive candidate (at least `|a - b| - 1`) no longer
//! fits, the system still has a unique, reversed solution. That holds whenever
//! `P - 1 >= 2^(bitlen(absDiffUpp) + 1)`, which is what `allow_non_determinism
//! = false` enforces.

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Signed};

use crate::errors::GadgetError;
use crate::field::FieldOrder;
use crate::frontend::{RootApi, Variable};
use crate::gadgets::bits::assert_bit_len;
use crate::gadgets::selector::mux;
use crate::hints::{IS_LESS_OUTPUT_HINT_KEY, MIN_OUTPUT_HINT_KEY};

// ─────────────────────────────────────────────────────────────────────────────
// STRUCT: BoundedComparator
// ─────────────────────────────────────────────────────────────────────────────

/// Comparison methods for signed integers `a` and `b` with a known bound
/// `|a - b| <= absDiffUpp`. Every method performs exactly one binary
/// decomposition of length `abs_diff_upp_bit_len`.
///
/// # Guarantees
/// - `|a - b| <= absDiffUpp`: every method is correct and a witness exists.
/// - `absDiffUpp < |a - b| < P - 2^abs_diff_upp_bit_len`: either no witness
///   exists or the result is still correct.
/// - `|a - b| >= P - 2^abs_diff_upp_bit_len`: without non-determinism, either
///   no witness exists or the result is deterministically reversed. With
///   non-determinism allowed, the constraint system may admit several
///   solutions and the result is unspecified.
///
/// The comparator holds no circuit state and can be shared across any number
/// of calls on the same field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedComparator {
    abs_diff_upp_bit_len: usize,
}

impl BoundedComparator {
    /// Creates a comparator for `|a - b| <= abs_diff_upp` over a field of the
    /// given order. Lower bounds yield fewer constraints.
    ///
    /// # Errors
    /// - [`GadgetError::AbsDiffUppOutOfRange`] unless `0 < abs_diff_upp < P`.
    /// - [`GadgetError::AbsDiffUppTooHigh`] if `P - abs_diff_upp - 1` is not
    ///   longer in binary than `abs_diff_upp`.
    /// - [`GadgetError::NonDeterministicBound`] if `allow_non_determinism` is
    ///   false and `P < 2^(bitlen(abs_diff_upp) + 1) + 1`.
    pub fn new(
        order: &FieldOrder,
        abs_diff_upp: &BigInt,
        allow_non_determinism: bool,
    ) -> Result<Self, GadgetError> {
        let p = order.modulus();
        let upp = match abs_diff_upp.to_biguint() {
            Some(upp) if abs_diff_upp.is_positive() && upp < *p => upp,
            _ => {
                return Err(GadgetError::AbsDiffUppOutOfRange {
                    value: abs_diff_upp.clone(),
                    order: p.clone(),
                });
            }
        };

        // upp < P, so this cannot underflow.
        let smallest_neg = p - &upp - BigUint::one();
        let abs_diff_upp_bit_len = upp.bits();
        if smallest_neg.bits() <= abs_diff_upp_bit_len {
            return Err(GadgetError::AbsDiffUppTooHigh {
                value: abs_diff_upp.clone(),
                order: p.clone(),
            });
        }

        if !allow_non_determinism {
            let threshold = (BigUint::one() << (abs_diff_upp_bit_len + 1)) + BigUint::one();
            if *p < threshold {
                return Err(GadgetError::NonDeterministicBound {
                    value: abs_diff_upp.clone(),
                    order: p.clone(),
                });
            }
        }

        // Bounded by the field's bit length, which is far below usize::MAX.
        let abs_diff_upp_bit_len = usize::try_from(abs_diff_upp_bit_len).map_err(|_| {
            GadgetError::AbsDiffUppTooHigh {
                value: abs_diff_upp.clone(),
                order: p.clone(),
            }
        })?;

        tracing::debug!(
            "bounded comparator: absDiffUpp={abs_diff_upp}, bit length {abs_diff_upp_bit_len}"
        );
        Ok(Self {
            abs_diff_upp_bit_len,
        })
    }

    /// Length of every binary decomposition this comparator performs.
    #[must_use]
    pub fn abs_diff_upp_bit_len(&self) -> usize {
        self.abs_diff_upp_bit_len
    }

    fn assert_is_non_negative<Builder: RootApi>(
        &self,
        api: &mut Builder,
        x: Variable,
    ) -> Result<(), GadgetError> {
        assert_bit_len(api, self.abs_diff_upp_bit_len, x).map(|_| ())
    }

    /// Adds constraints that can be satisfied only if `a <= b`.
    ///
    /// # Errors
    /// Propagates [`GadgetError::BitLengthTooLarge`] if the comparator was
    /// built for a larger field than `api`'s.
    pub fn assert_is_less_eq<Builder: RootApi>(
        &self,
        api: &mut Builder,
        a: Variable,
        b: Variable,
    ) -> Result<(), GadgetError> {
        // a <= b <==> b - a >= 0
        let diff = api.sub(b, a);
        self.assert_is_non_negative(api, diff)
    }

    /// Adds constraints that can be satisfied only if `a < b`.
    ///
    /// # Errors
    /// As for [`BoundedComparator::assert_is_less_eq`].
    pub fn assert_is_less<Builder: RootApi>(
        &self,
        api: &mut Builder,
        a: Variable,
        b: Variable,
    ) -> Result<(), GadgetError> {
        // a < b <==> a <= b - 1
        let b_minus_one = api.sub(b, 1u32);
        self.assert_is_less_eq(api, a, b_minus_one)
    }

    /// Returns `1` if `a < b` and `0` if `a >= b`.
    ///
    /// # Errors
    /// As for [`BoundedComparator::assert_is_less_eq`].
    pub fn is_less<Builder: RootApi>(
        &self,
        api: &mut Builder,
        a: Variable,
        b: Variable,
    ) -> Result<Variable, GadgetError> {
        let res = api.new_hint(IS_LESS_OUTPUT_HINT_KEY, &[a, b], 1)[0];

        // a < b  <==> b - a - 1 >= 0
        // a >= b <==> a - b >= 0
        let a_minus_b = api.sub(a, b);
        let b_minus_a = api.sub(b, a);
        let b_minus_a_minus_one = api.sub(b_minus_a, 1u32);
        let (selected, _) = mux(api, res, &[a_minus_b, b_minus_a_minus_one])?;
        self.assert_is_non_negative(api, selected)?;

        Ok(res)
    }

    /// Returns `1` if `a <= b` and `0` if `a > b`.
    ///
    /// Computed as `is_less(a, b + 1)`, so `b + 1` must itself be a valid
    /// signed value, i.e. `b < (P - 1) / 2`.
    ///
    /// # Errors
    /// As for [`BoundedComparator::assert_is_less_eq`].
    pub fn is_less_eq<Builder: RootApi>(
        &self,
        api: &mut Builder,
        a: Variable,
        b: Variable,
    ) -> Result<Variable, GadgetError> {
        // a <= b <==> a < b + 1
        let b_plus_one = api.add(b, 1u32);
        self.is_less(api, a, b_plus_one)
    }

    /// Returns the minimum of `a` and `b`.
    ///
    /// # Errors
    /// As for [`BoundedComparator::assert_is_less_eq`].
    pub fn min<Builder: RootApi>(
        &self,
        api: &mut Builder,
        a: Variable,
        b: Variable,
    ) -> Result<Variable, GadgetError> {
        let min = api.new_hint(MIN_OUTPUT_HINT_KEY, &[a, b], 1)[0];

        let a_diff = api.sub(a, min);
        let b_diff = api.sub(b, min);

        // (a - min) * (b - min) == 0
        let product = api.mul(a_diff, b_diff);
        api.assert_is_zero(product);

        // (a - min) + (b - min) >= 0
        let excess = api.add(a_diff, b_diff);
        self.assert_is_non_negative(api, excess)?;

        Ok(min)
    }

    /// Returns the maximum of `a` and `b`, as `a + b - min(a, b)`.
    ///
    /// # Errors
    /// As for [`BoundedComparator::assert_is_less_eq`].
    pub fn max<Builder: RootApi>(
        &self,
        api: &mut Builder,
        a: Variable,
        b: Variable,
    ) -> Result<Variable, GadgetError> {
        let min = self.min(api, a, b)?;
        let sum = api.add(a, b);
        Ok(api.sub(sum, min))
    }
}
