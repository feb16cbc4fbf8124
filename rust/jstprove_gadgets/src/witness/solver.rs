use num_bigint::{BigInt, BigUint};

use crate::errors::SolveError;
use crate::field::FieldOrder;
use crate::frontend::{Circuit, Node, Variable};
use crate::hints::HintRegistry;

// ─────────────────────────────────────────────────────────────────────────────
// STRUCT: Witness
// ─────────────────────────────────────────────────────────────────────────────

/// A full assignment to every variable of a circuit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Witness {
    order: FieldOrder,
    values: Vec<BigUint>,
}

impl Witness {
    /// # Panics
    /// Panics if `var` does not belong to the circuit this witness solves.
    /// Use [`Witness::get`] for variables of unknown origin.
    #[must_use]
    pub fn value(&self, var: Variable) -> &BigUint {
        &self.values[var.id()]
    }

    /// Value of `var`, or `None` if it lies outside this witness.
    #[must_use]
    pub fn get(&self, var: Variable) -> Option<&BigUint> {
        self.values.get(var.id())
    }

    /// Canonical signed representative of `var`'s value.
    #[must_use]
    pub fn signed_value(&self, var: Variable) -> BigInt {
        self.order.to_signed(self.value(var))
    }

    #[must_use]
    pub fn values(&self, vars: &[Variable]) -> Vec<BigUint> {
        vars.iter().map(|&v| self.value(v).clone()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// STRUCT: WitnessSolver
// ─────────────────────────────────────────────────────────────────────────────

/// Evaluates a [`Circuit`] on concrete inputs, running each deferred hint
/// call once, then checks every constraint.
#[derive(Debug, Clone, Copy)]
pub struct WitnessSolver<'a> {
    circuit: &'a Circuit,
    registry: &'a HintRegistry,
}

impl<'a> WitnessSolver<'a> {
    #[must_use]
    pub fn new(circuit: &'a Circuit, registry: &'a HintRegistry) -> Self {
        Self { circuit, registry }
    }

    /// Computes and checks a witness. Inputs are signed integers reduced
    /// modulo the circuit's field order.
    ///
    /// # Errors
    /// - [`SolveError::InputCountMismatch`] if the number of inputs differs
    ///   from the circuit's.
    /// - [`SolveError::Hint`] if a hint is unknown or fails.
    /// - [`SolveError::Unsatisfied`] for the first violated constraint.
    pub fn solve<I, T>(&self, inputs: I) -> Result<Witness, SolveError>
    where
        I: IntoIterator<Item = T>,
        T: Into<BigInt>,
    {
        let witness = self.assign(inputs)?;
        self.check(&witness)?;
        tracing::info!(
            "witness solved: {} variables, {} constraints satisfied",
            witness.len(),
            self.circuit.num_constraints()
        );
        Ok(witness)
    }

    /// Computes an assignment without checking constraints.
    ///
    /// # Errors
    /// - [`SolveError::InputCountMismatch`] or [`SolveError::Hint`], as for
    ///   [`WitnessSolver::solve`].
    pub fn assign<I, T>(&self, inputs: I) -> Result<Witness, SolveError>
    where
        I: IntoIterator<Item = T>,
        T: Into<BigInt>,
    {
        let order = self.circuit.field_order();
        let inputs: Vec<BigUint> = inputs
            .into_iter()
            .map(|x| order.from_signed(&x.into()))
            .collect();
        if inputs.len() != self.circuit.num_inputs() {
            return Err(SolveError::InputCountMismatch {
                expected: self.circuit.num_inputs(),
                got: inputs.len(),
            });
        }

        let mut values: Vec<BigUint> = Vec::with_capacity(self.circuit.num_variables());
        let mut hint_outputs: Vec<Vec<BigUint>> = vec![Vec::new(); self.circuit.num_hint_calls()];

        for node in self.circuit.nodes() {
            let value = match node {
                Node::Input(idx) => inputs[*idx].clone(),
                Node::Constant(c) => c.clone(),
                Node::Add(x, y) => order.add(&values[x.id()], &values[y.id()]),
                Node::Sub(x, y) => order.sub(&values[x.id()], &values[y.id()]),
                Node::Mul(x, y) => order.mul(&values[x.id()], &values[y.id()]),
                Node::Hint { call, slot } => {
                    if *slot == 0 {
                        hint_outputs[*call] = self.run_hint(*call, &values)?;
                    }
                    hint_outputs[*call][*slot].clone()
                }
            };
            values.push(value);
        }

        Ok(Witness {
            order: order.clone(),
            values,
        })
    }

    /// Checks every constraint against `witness`.
    ///
    /// # Errors
    /// - [`SolveError::Unsatisfied`] for the first violated constraint.
    pub fn check(&self, witness: &Witness) -> Result<(), SolveError> {
        for (index, c) in self.circuit.constraints().iter().enumerate() {
            let lhs = witness.value(c.lhs);
            let rhs = witness.value(c.rhs);
            if lhs != rhs {
                tracing::debug!("constraint #{index} violated: {lhs} != {rhs}");
                return Err(SolveError::Unsatisfied {
                    index,
                    lhs: lhs.clone(),
                    rhs: rhs.clone(),
                });
            }
        }
        Ok(())
    }

    fn run_hint(&self, call: usize, values: &[BigUint]) -> Result<Vec<BigUint>, SolveError> {
        let call = &self.circuit.hint_calls()[call];
        let inputs: Vec<BigUint> = call.inputs.iter().map(|v| values[v.id()].clone()).collect();
        self.registry
            .call(
                &call.key,
                self.circuit.field_order(),
                &inputs,
                call.outputs.len(),
            )
            .map_err(|source| SolveError::Hint {
                key: call.key.clone(),
                source,
            })
    }
}
