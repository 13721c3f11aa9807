//! Command-line front end for `flank-reversi`.
//!
//! A [`Session`] reads positions one after another, writes a [`Report`] for
//! each, and stops at the end of input or at the first unreadable position.

pub mod cli;

mod report;
mod session;

pub use report::*;
pub use session::*;
