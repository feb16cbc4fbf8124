//! Selector and bounded-comparison gadgets for `JSTprove` circuits.
//!
//! # Crate Structure
//!
//! - [`field`]: concrete prime-field arithmetic and the canonical signed
//!   ordering used by hints.
//!
//! - [`frontend`]: the [`frontend::RootApi`] trait every gadget is written
//!   against, and [`frontend::CircuitBuilder`], which records nodes,
//!   constraints and deferred hint calls.
//!
//! - [`gadgets`]: `map` / `mux` selectors, the [`gadgets::BoundedComparator`]
//!   and the bit-length assertion both of them rely on.
//!
//! - [`hints`]: prover-only hint functions and the [`hints::HintRegistry`]
//!   that the witness solver resolves them through.
//!
//! - [`witness`]: evaluates a built circuit on concrete inputs and checks
//!   every constraint.
//!
//! - [`config`]: JSON-deserialisable field and comparator settings.
//!
//! Typical usage builds a circuit with [`frontend::CircuitBuilder`], freezes
//! it, then hands it to [`witness::WitnessSolver`] together with
//! [`hints::build_gadget_hint_registry`].
#![allow(clippy::doc_markdown)]

pub mod config;
pub mod errors;
pub mod field;
pub mod frontend;
pub mod gadgets;
pub mod hints;
pub mod witness;

pub use errors::{ConfigError, GadgetError, HintError, SolveError};
pub use field::FieldOrder;
pub use gadgets::{BoundedComparator, map, mux};
pub use hints::build_gadget_hint_registry;
