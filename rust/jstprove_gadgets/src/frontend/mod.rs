//! Circuit-construction frontend.
//!
//! Gadgets are written against [`RootApi`] and never see concrete values.
//! [`CircuitBuilder`] is the recording implementation: it emits nodes,
//! constraints and deferred hint calls, and freezes them into a [`Circuit`]
//! that the witness solver evaluates later.

use num_bigint::{BigInt, BigUint, Sign};

use crate::field::FieldOrder;

pub mod builder;

pub use builder::{Circuit, CircuitBuilder, Constraint, HintCall, Node};

/// Opaque handle to a field element in the circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable(usize);

impl Variable {
    #[must_use]
    pub fn id(self) -> usize {
        self.0
    }
}

impl From<usize> for Variable {
    fn from(id: usize) -> Self {
        Self(id)
    }
}

/// Either an existing variable or a constant that the builder lifts into the
/// circuit on demand. Negative constants are reduced modulo the field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Variable(Variable),
    Value(BigInt),
}

impl From<Variable> for Operand {
    fn from(v: Variable) -> Self {
        Operand::Variable(v)
    }
}

impl From<&Variable> for Operand {
    fn from(v: &Variable) -> Self {
        Operand::Variable(*v)
    }
}

impl From<BigInt> for Operand {
    fn from(v: BigInt) -> Self {
        Operand::Value(v)
    }
}

impl From<&BigInt> for Operand {
    fn from(v: &BigInt) -> Self {
        Operand::Value(v.clone())
    }
}

impl From<BigUint> for Operand {
    fn from(v: BigUint) -> Self {
        Operand::Value(BigInt::from_biguint(Sign::Plus, v))
    }
}

impl From<&BigUint> for Operand {
    fn from(v: &BigUint) -> Self {
        Operand::Value(BigInt::from_biguint(Sign::Plus, v.clone()))
    }
}

macro_rules! operand_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Operand {
                fn from(v: $t) -> Self {
                    Operand::Value(BigInt::from(v))
                }
            }
        )*
    };
}

operand_from_int!(u8, u16, u32, u64, usize, i32, i64);

// ─────────────────────────────────────────────────────────────────────────────
// TRAIT: RootApi
// ─────────────────────────────────────────────────────────────────────────────

/// The constraint-system operations every gadget in this crate is built from.
///
/// All arithmetic is modulo [`RootApi::field_order`]. Assertions add
/// constraints that only a satisfying witness can meet; nothing is checked at
/// build time.
pub trait RootApi {
    fn field_order(&self) -> &FieldOrder;

    /// Lifts a constant into the circuit. Passing a variable returns it as is.
    fn constant(&mut self, x: impl Into<Operand>) -> Variable;

    fn add(&mut self, x: impl Into<Operand>, y: impl Into<Operand>) -> Variable;

    fn sub(&mut self, x: impl Into<Operand>, y: impl Into<Operand>) -> Variable;

    fn mul(&mut self, x: impl Into<Operand>, y: impl Into<Operand>) -> Variable;

    fn neg(&mut self, x: impl Into<Operand>) -> Variable {
        self.sub(0u32, x)
    }

    fn assert_is_equal(&mut self, x: impl Into<Operand>, y: impl Into<Operand>);

    fn assert_is_zero(&mut self, x: impl Into<Operand>) {
        self.assert_is_equal(x, 0u32);
    }

    /// Enforces `x ∈ {0, 1}` via `x·x − x = 0`.
    fn assert_is_bool(&mut self, x: impl Into<Operand>) {
        let x = self.constant(x);
        let x2 = self.mul(x, x);
        let diff = self.sub(x2, x);
        self.assert_is_zero(diff);
    }

    /// Two-way select: returns `if_true` when `cond == 1` and `if_false` when
    /// `cond == 0`. `cond` is constrained to be boolean.
    fn select(
        &mut self,
        cond: impl Into<Operand>,
        if_true: impl Into<Operand>,
        if_false: impl Into<Operand>,
    ) -> Variable {
        let cond = self.constant(cond);
        let if_true = self.constant(if_true);
        let if_false = self.constant(if_false);
        self.assert_is_bool(cond);
        // if_false + cond * (if_true - if_false)
        let delta = self.sub(if_true, if_false);
        let scaled = self.mul(cond, delta);
        self.add(if_false, scaled)
    }

    /// Allocates `num_outputs` unconstrained variables whose values the hint
    /// registered under `hint_key` supplies during witness generation.
    fn new_hint(&mut self, hint_key: &str, inputs: &[Variable], num_outputs: usize)
        -> Vec<Variable>;
}
