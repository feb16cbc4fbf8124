use std::collections::HashMap;
use std::ops::Range;

use num_bigint::BigUint;

use crate::field::FieldOrder;
use crate::frontend::{Operand, RootApi, Variable};

/// One entry of the circuit's append-only variable list. Operands always
/// refer to variables created earlier, so creation order is a valid
/// evaluation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Input(usize),
    Constant(BigUint),
    Add(Variable, Variable),
    Sub(Variable, Variable),
    Mul(Variable, Variable),
    /// Output `slot` of hint call `call`.
    Hint { call: usize, slot: usize },
}

/// A deferred hint invocation. Its outputs occupy a contiguous variable range
/// created right after the call was recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintCall {
    pub key: String,
    pub inputs: Vec<Variable>,
    pub outputs: Range<usize>,
}

/// `lhs == rhs` must hold in any satisfying witness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraint {
    pub lhs: Variable,
    pub rhs: Variable,
}

// ─────────────────────────────────────────────────────────────────────────────
// STRUCT: CircuitBuilder
// ─────────────────────────────────────────────────────────────────────────────

/// Records a circuit without evaluating anything.
///
/// Hints are only registered as [`HintCall`]s here; their functions run in
/// the witness solver, which keeps circuit construction and witness
/// generation structurally separate.
#[derive(Debug)]
pub struct CircuitBuilder {
    order: FieldOrder,
    nodes: Vec<Node>,
    num_inputs: usize,
    hint_calls: Vec<HintCall>,
    constraints: Vec<Constraint>,
    known_constants: HashMap<BigUint, Variable>,
}

impl CircuitBuilder {
    #[must_use]
    pub fn new(order: FieldOrder) -> Self {
        Self {
            order,
            nodes: Vec::new(),
            num_inputs: 0,
            hint_calls: Vec::new(),
            constraints: Vec::new(),
            known_constants: HashMap::new(),
        }
    }

    /// Allocates a prover-supplied input.
    pub fn input(&mut self) -> Variable {
        let idx = self.num_inputs;
        self.num_inputs += 1;
        self.push(Node::Input(idx))
    }

    pub fn inputs(&mut self, n: usize) -> Vec<Variable> {
        (0..n).map(|_| self.input()).collect()
    }

    #[must_use]
    pub fn num_variables(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    #[must_use]
    pub fn num_hint_calls(&self) -> usize {
        self.hint_calls.len()
    }

    /// Freezes the recorded circuit.
    #[must_use]
    pub fn build(self) -> Circuit {
        tracing::info!(
            "built circuit: {} inputs, {} variables, {} constraints, {} hint calls",
            self.num_inputs,
            self.nodes.len(),
            self.constraints.len(),
            self.hint_calls.len()
        );
        Circuit {
            order: self.order,
            nodes: self.nodes,
            num_inputs: self.num_inputs,
            hint_calls: self.hint_calls,
            constraints: self.constraints,
        }
    }

    fn push(&mut self, node: Node) -> Variable {
        let var = Variable::from(self.nodes.len());
        self.nodes.push(node);
        var
    }

    fn resolve(&mut self, x: impl Into<Operand>) -> Variable {
        match x.into() {
            Operand::Variable(v) => v,
            Operand::Value(val) => {
                let val = self.order.from_signed(&val);
                if let Some(&v) = self.known_constants.get(&val) {
                    return v;
                }
                let v = self.push(Node::Constant(val.clone()));
                self.known_constants.insert(val, v);
                v
            }
        }
    }
}

impl RootApi for CircuitBuilder {
    fn field_order(&self) -> &FieldOrder {
        &self.order
    }

    fn constant(&mut self, x: impl Into<Operand>) -> Variable {
        self.resolve(x)
    }

    fn add(&mut self, x: impl Into<Operand>, y: impl Into<Operand>) -> Variable {
        let x = self.resolve(x);
        let y = self.resolve(y);
        self.push(Node::Add(x, y))
    }

    fn sub(&mut self, x: impl Into<Operand>, y: impl Into<Operand>) -> Variable {
        let x = self.resolve(x);
        let y = self.resolve(y);
        self.push(Node::Sub(x, y))
    }

    fn mul(&mut self, x: impl Into<Operand>, y: impl Into<Operand>) -> Variable {
        let x = self.resolve(x);
        let y = self.resolve(y);
        self.push(Node::Mul(x, y))
    }

    fn assert_is_equal(&mut self, x: impl Into<Operand>, y: impl Into<Operand>) {
        let lhs = self.resolve(x);
        let rhs = self.resolve(y);
        self.constraints.push(Constraint { lhs, rhs });
    }

    fn new_hint(
        &mut self,
        hint_key: &str,
        inputs: &[Variable],
        num_outputs: usize,
    ) -> Vec<Variable> {
        let call = self.hint_calls.len();
        let start = self.nodes.len();
        self.hint_calls.push(HintCall {
            key: hint_key.to_string(),
            inputs: inputs.to_vec(),
            outputs: start..start + num_outputs,
        });
        (0..num_outputs)
            .map(|slot| self.push(Node::Hint { call, slot }))
            .collect()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// STRUCT: Circuit
// ─────────────────────────────────────────────────────────────────────────────

/// An immutable, fully recorded circuit.
#[derive(Debug, Clone)]
pub struct Circuit {
    order: FieldOrder,
    nodes: Vec<Node>,
    num_inputs: usize,
    hint_calls: Vec<HintCall>,
    constraints: Vec<Constraint>,
}

impl Circuit {
    #[must_use]
    pub fn field_order(&self) -> &FieldOrder {
        &self.order
    }

    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[must_use]
    pub fn hint_calls(&self) -> &[HintCall] {
        &self.hint_calls
    }

    #[must_use]
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    #[must_use]
    pub fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    #[must_use]
    pub fn num_variables(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    #[must_use]
    pub fn num_hint_calls(&self) -> usize {
        self.hint_calls.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> CircuitBuilder {
        CircuitBuilder::new(FieldOrder::new(BigUint::from(13u32)).unwrap())
    }

    #[test]
    fn constants_are_interned_and_reduced() {
        let mut api = builder();
        let a = api.constant(3u32);
        let b = api.constant(16u32);
        let c = api.constant(-10i64);
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(api.num_variables(), 1);
    }

    #[test]
    fn hint_outputs_are_contiguous_and_deferred() {
        let mut api = builder();
        let x = api.input();
        let outs = api.new_hint("some.hint", &[x], 3);
        let circuit = api.build();

        assert_eq!(outs.len(), 3);
        assert_eq!(circuit.num_hint_calls(), 1);
        let call = &circuit.hint_calls()[0];
        assert_eq!(call.key, "some.hint");
        assert_eq!(call.inputs, vec![x]);
        assert_eq!(call.outputs, outs[0].id()..outs[2].id() + 1);
        assert_eq!(circuit.nodes()[outs[1].id()], Node::Hint { call: 0, slot: 1 });
    }

    #[test]
    fn select_emits_boolean_constraint() {
        let mut api = builder();
        let c = api.input();
        let a = api.input();
        let b = api.input();
        let _ = api.select(c, a, b);
        assert_eq!(api.num_constraints(), 1);
    }
}
