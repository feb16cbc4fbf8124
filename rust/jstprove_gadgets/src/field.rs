//! Concrete prime-field arithmetic over big integers.
//!
//! Everything here runs outside the circuit: at build time for parameter
//! validation and at witness time inside hints. The field order is always an
//! explicit argument so the same code serves any field configuration.

use std::cmp::Ordering;

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;

use crate::errors::GadgetError;

/// Scalar field of BN254.
pub const BN254_SCALAR_MODULUS: &str =
    "21888242871839275222246405745257275088548364400416034343698204186575808495617";

/// Goldilocks prime 2^64 - 2^32 + 1.
pub const GOLDILOCKS_MODULUS: u64 = 0xFFFF_FFFF_0000_0001;

/// Mersenne prime 2^31 - 1.
pub const MERSENNE31_MODULUS: u64 = 0x7FFF_FFFF;

// ─────────────────────────────────────────────────────────────────────────────
// STRUCT: FieldOrder
// ─────────────────────────────────────────────────────────────────────────────

/// The order `P` of the prime field a circuit is defined over.
///
/// Primality is not checked; the caller is responsible for supplying a prime.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldOrder {
    modulus: BigUint,
}

impl FieldOrder {
    /// # Errors
    /// - [`GadgetError::InvalidFieldOrder`] if `modulus < 2`.
    pub fn new(modulus: BigUint) -> Result<Self, GadgetError> {
        if modulus < BigUint::from(2u32) {
            return Err(GadgetError::InvalidFieldOrder(modulus));
        }
        Ok(Self { modulus })
    }

    #[must_use]
    pub fn bn254() -> Self {
        let modulus = BigUint::parse_bytes(BN254_SCALAR_MODULUS.as_bytes(), 10)
            .unwrap_or_else(|| unreachable!("BN254 modulus literal is valid decimal"));
        Self { modulus }
    }

    #[must_use]
    pub fn goldilocks() -> Self {
        Self {
            modulus: BigUint::from(GOLDILOCKS_MODULUS),
        }
    }

    #[must_use]
    pub fn mersenne31() -> Self {
        Self {
            modulus: BigUint::from(MERSENNE31_MODULUS),
        }
    }

    #[must_use]
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Bit length of `P`.
    #[must_use]
    pub fn bits(&self) -> u64 {
        self.modulus.bits()
    }

    /// `P >> 1`, the largest value whose canonical signed representative is
    /// non-negative.
    #[must_use]
    pub fn half(&self) -> BigUint {
        &self.modulus >> 1u32
    }

    #[must_use]
    pub fn reduce(&self, x: &BigUint) -> BigUint {
        x % &self.modulus
    }

    #[must_use]
    pub fn add(&self, x: &BigUint, y: &BigUint) -> BigUint {
        (x + y) % &self.modulus
    }

    #[must_use]
    pub fn sub(&self, x: &BigUint, y: &BigUint) -> BigUint {
        let x = self.reduce(x);
        let y = self.reduce(y);
        if x >= y {
            x - y
        } else {
            &self.modulus - (y - x)
        }
    }

    #[must_use]
    pub fn mul(&self, x: &BigUint, y: &BigUint) -> BigUint {
        (x * y) % &self.modulus
    }

    #[must_use]
    pub fn neg(&self, x: &BigUint) -> BigUint {
        self.sub(&BigUint::zero(), x)
    }

    /// Maps a signed integer to its residue in `[0, P)`.
    #[must_use]
    pub fn from_signed(&self, x: &BigInt) -> BigUint {
        let p = BigInt::from_biguint(Sign::Plus, self.modulus.clone());
        let r = ((x % &p) + &p) % &p;
        r.to_biguint()
            .unwrap_or_else(|| unreachable!("residue is non-negative"))
    }

    /// Canonical signed representative: `v` if `v <= (P - 1) / 2`, else `v - P`.
    #[must_use]
    pub fn to_signed(&self, v: &BigUint) -> BigInt {
        let v = self.reduce(v);
        if v <= self.half() {
            BigInt::from_biguint(Sign::Plus, v)
        } else {
            BigInt::from_biguint(Sign::Minus, &self.modulus - v)
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// FUNCTION: cmp_in_field
// ─────────────────────────────────────────────────────────────────────────────

/// Compares `a` and `b` as signed integers in a field of the given order.
///
/// When exactly one operand lies above `P >> 1` the raw integer order
/// disagrees with the signed order, so it is reversed. Otherwise the raw
/// integer order is used as is. `P >> 1` itself counts as non-negative, which
/// keeps this consistent with [`FieldOrder::to_signed`]. A product-of-signs
/// rule that treats `P >> 1` as negative orders `(half, half + 1)` the wrong way.
///
/// ```text
/// P = 13, half = 6
/// cmp_in_field(5, 6)  -> Less     (both non-negative)
/// cmp_in_field(12, 1) -> Less     (12 represents -1)
/// cmp_in_field(7, 12) -> Less     (-6 < -1)
/// ```
#[must_use]
pub fn cmp_in_field(a: &BigUint, b: &BigUint, order: &FieldOrder) -> Ordering {
    let half = order.half();
    if (a > &half) != (b > &half) {
        a.cmp(b).reverse()
    } else {
        a.cmp(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy() -> FieldOrder {
        FieldOrder::new(BigUint::from(13u32)).unwrap()
    }

    fn u(n: u32) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn rejects_trivial_orders() {
        assert!(matches!(
            FieldOrder::new(u(1)),
            Err(GadgetError::InvalidFieldOrder(_))
        ));
        assert!(FieldOrder::new(u(2)).is_ok());
    }

    #[test]
    fn presets_have_expected_sizes() {
        assert_eq!(FieldOrder::bn254().bits(), 254);
        assert_eq!(FieldOrder::goldilocks().bits(), 64);
        assert_eq!(FieldOrder::mersenne31().bits(), 31);
    }

    #[test]
    fn signed_round_trip_in_toy_field() {
        let p = toy();
        for x in -6i64..=6 {
            let v = p.from_signed(&BigInt::from(x));
            assert_eq!(p.to_signed(&v), BigInt::from(x), "x = {x}");
        }
        assert_eq!(p.from_signed(&BigInt::from(-1)), u(12));
        assert_eq!(p.to_signed(&u(7)), BigInt::from(-6));
    }

    #[test]
    fn modular_arithmetic() {
        let p = toy();
        assert_eq!(p.add(&u(12), &u(3)), u(2));
        assert_eq!(p.sub(&u(3), &u(5)), u(11));
        assert_eq!(p.mul(&u(5), &u(6)), u(4));
        assert_eq!(p.neg(&u(0)), u(0));
        assert_eq!(p.neg(&u(1)), u(12));
    }

    #[test]
    fn cmp_in_field_follows_signed_order() {
        let p = toy();
        assert_eq!(cmp_in_field(&u(5), &u(6), &p), Ordering::Less);
        assert_eq!(cmp_in_field(&u(6), &u(6), &p), Ordering::Equal);
        assert_eq!(cmp_in_field(&u(12), &u(1), &p), Ordering::Less);
        assert_eq!(cmp_in_field(&u(1), &u(12), &p), Ordering::Greater);
        assert_eq!(cmp_in_field(&u(7), &u(12), &p), Ordering::Less);
        assert_eq!(cmp_in_field(&u(0), &u(12), &p), Ordering::Greater);
        // 6 is the largest non-negative value, 7 the smallest negative one
        assert_eq!(cmp_in_field(&u(6), &u(7), &p), Ordering::Greater);
    }

    #[test]
    fn cmp_in_field_matches_signed_representatives() {
        let p = toy();
        for a in 0u32..13 {
            for b in 0u32..13 {
                let expected = p.to_signed(&u(a)).cmp(&p.to_signed(&u(b)));
                assert_eq!(cmp_in_field(&u(a), &u(b), &p), expected, "a={a} b={b}");
            }
        }
    }
}
