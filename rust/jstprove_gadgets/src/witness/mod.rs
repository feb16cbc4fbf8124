//! Witness generation for recorded circuits.

pub mod solver;

pub use solver::{Witness, WitnessSolver};
