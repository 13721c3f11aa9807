//! Utilities used for testing and benchmarking.

pub mod positions;

mod random;
pub use random::random_board;
