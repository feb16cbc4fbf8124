//! Key/value map and n-to-1 multiplexer gadgets.
//!
//! Both are built by one engine: an indicator vector is obtained from a hint,
//! every indicator whose key differs from the query is forced to zero, and the
//! indicators must sum to one. Together these pin the single matching
//! candidate, provided one exists and it is unique.

use crate::errors::GadgetError;
use crate::frontend::{RootApi, Variable};
use crate::hints::{MAP_INDICATORS_HINT_KEY, MUX_INDICATORS_HINT_KEY};

/// Which lookup `generate_selector` builds.
#[derive(Debug, Clone, Copy)]
enum SelectorKind<'a> {
    /// Candidate `i` is selected by index `i`.
    Mux,
    /// Candidate `i` is selected by `keys[i]`.
    Map { keys: &'a [Variable] },
}

// ─────────────────────────────────────────────────────────────────────────────
// FUNCTION: map
// ─────────────────────────────────────────────────────────────────────────────

/// Key/value associative array: `out = values[i]` for the `i` with
/// `keys[i] == query_key`, and `indicators[i] == 1` at that index only.
///
/// If no key equals `query_key`, no witness exists. If several keys do, the
/// output is undefined: any linear combination of the matching values may be
/// proven, since nothing here enforces key uniqueness.
///
/// # Errors
/// - [`GadgetError::KeyValueLengthMismatch`] if `keys.len() != values.len()`.
/// - [`GadgetError::EmptyCandidates`] if there are no keys.
///
/// Both are returned before anything is added to the circuit.
pub fn map<Builder: RootApi>(
    api: &mut Builder,
    query_key: Variable,
    keys: &[Variable],
    values: &[Variable],
) -> Result<(Variable, Vec<Variable>), GadgetError> {
    if keys.len() != values.len() {
        return Err(GadgetError::KeyValueLengthMismatch {
            keys: keys.len(),
            values: values.len(),
        });
    }
    if keys.is_empty() {
        return Err(GadgetError::EmptyCandidates { gadget: "map" });
    }
    Ok(generate_selector(api, SelectorKind::Map { keys }, query_key, values))
}

// ─────────────────────────────────────────────────────────────────────────────
// FUNCTION: mux
// ─────────────────────────────────────────────────────────────────────────────

/// n-to-1 multiplexer: `out = inputs[sel]`, indices starting from zero.
///
/// `sel` must lie in `[0, n - 1]`, otherwise no witness exists.
///
/// With fewer than three inputs no indicator vector is produced and the
/// returned indicators are empty: two inputs collapse into a single
/// [`RootApi::select`], and a single input only asserts `sel == 0`.
///
/// # Errors
/// - [`GadgetError::EmptyCandidates`] if `inputs` is empty.
pub fn mux<Builder: RootApi>(
    api: &mut Builder,
    sel: Variable,
    inputs: &[Variable],
) -> Result<(Variable, Vec<Variable>), GadgetError> {
    match inputs {
        [] => Err(GadgetError::EmptyCandidates { gadget: "mux" }),
        [only] => {
            api.assert_is_zero(sel);
            Ok((*only, Vec::new()))
        }
        [first, second] => Ok((api.select(sel, *second, *first), Vec::new())),
        _ => Ok(generate_selector(api, SelectorKind::Mux, sel, inputs)),
    }
}

/// Shared constraint generation for [`map`] and [`mux`].
///
/// For every candidate `i`:
///
/// ```text
/// indicator[i] * (sel - key_i) == 0      (key_i = i for mux)
/// ```
///
/// forces the indicator to zero whenever the key differs from `sel`; it does
/// not force a one on a match. The closing constraint
///
/// ```text
/// Σ indicator[i] == 1
/// ```
///
/// supplies that, and `out = Σ indicator[i] * values[i]`.
///
/// A dishonest prover may split the unit mass across several indices that
/// share the query key; nothing here rules that out.
fn generate_selector<Builder: RootApi>(
    api: &mut Builder,
    kind: SelectorKind<'_>,
    sel: Variable,
    values: &[Variable],
) -> (Variable, Vec<Variable>) {
    let indicators = match kind {
        SelectorKind::Mux => api.new_hint(MUX_INDICATORS_HINT_KEY, &[sel], values.len()),
        SelectorKind::Map { keys } => {
            let mut hint_inputs = keys.to_vec();
            hint_inputs.push(sel);
            api.new_hint(MAP_INDICATORS_HINT_KEY, &hint_inputs, keys.len())
        }
    };

    let mut indicators_sum = api.constant(0u32);
    let mut out = api.constant(0u32);
    for (i, (&indicator, &value)) in indicators.iter().zip(values).enumerate() {
        // Indicators of non-selected candidates must be zero.
        let diff = match kind {
            SelectorKind::Mux => api.sub(sel, i),
            SelectorKind::Map { keys } => api.sub(sel, keys[i]),
        };
        let product = api.mul(indicator, diff);
        api.assert_is_zero(product);

        indicators_sum = api.add(indicators_sum, indicator);
        let term = api.mul(indicator, value);
        out = api.add(out, term);
    }
    api.assert_is_equal(indicators_sum, 1u32);

    tracing::debug!("selector over {} candidates", values.len());
    (out, indicators)
}
