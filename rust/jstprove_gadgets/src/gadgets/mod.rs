pub mod bits;
pub mod bounded_cmp;
pub mod selector;

pub use bits::{assert_bit_len, constrained_reconstruct_from_bits};
pub use bounded_cmp::BoundedComparator;
pub use selector::{map, mux};
