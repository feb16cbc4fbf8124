use num_bigint::{BigInt, BigUint};
use thiserror::Error;

/// Build-time configuration errors. Raised before any node or constraint is
/// recorded for the failing call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GadgetError {
    #[error("map requires as many keys as values: got {keys} keys and {values} values")]
    KeyValueLengthMismatch { keys: usize, values: usize },

    #[error("{gadget} requires at least one candidate")]
    EmptyCandidates { gadget: &'static str },

    #[error("absDiffUpp must be a positive number smaller than the field order {order}, got {value}")]
    AbsDiffUppOutOfRange { value: BigInt, order: BigUint },

    #[error("cannot construct the comparator, absDiffUpp={value} is too high for field order {order}")]
    AbsDiffUppTooHigh { value: BigInt, order: BigUint },

    #[error("absDiffUpp={value} must be smaller to ensure deterministic behaviour in field of order {order}")]
    NonDeterministicBound { value: BigInt, order: BigUint },

    #[error("bit length {bit_len} must be below the field bit length {field_bits}")]
    BitLengthTooLarge { bit_len: usize, field_bits: u64 },

    #[error("field order must be at least 2, got {0}")]
    InvalidFieldOrder(BigUint),
}

/// Errors returned by hint functions during witness generation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HintError {
    #[error("no hint registered under key '{key}'")]
    UnknownHint { key: String },

    #[error("hint '{hint}' expected {expected} inputs, got {got}")]
    InputArity {
        hint: &'static str,
        expected: String,
        got: usize,
    },

    #[error("hint '{hint}' expected {expected} outputs, got {got}")]
    OutputArity {
        hint: &'static str,
        expected: String,
        got: usize,
    },

    #[error("Other hint error: {0}")]
    Other(String),
}

/// Deferred failures surfaced while generating a witness for a built circuit.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolveError {
    #[error("circuit expects {expected} inputs, got {got}")]
    InputCountMismatch { expected: usize, got: usize },

    #[error("hint '{key}' failed: {source}")]
    Hint {
        key: String,
        #[source]
        source: HintError,
    },

    #[error("constraint #{index} is not satisfied: {lhs} != {rhs}")]
    Unsatisfied {
        index: usize,
        lhs: BigUint,
        rhs: BigUint,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse gadget config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid integer for '{field}': {value}")]
    InvalidInteger { field: &'static str, value: String },

    #[error(transparent)]
    Gadget(#[from] GadgetError),
}
