//! Register operation engine.
//!
//! A [`RegContext`] is built once per VM instance and provides comparison
//! and arithmetic over [`Reg`](crate::Reg) values, falling back to the
//! workaround database on type conflicts.

mod arith;
mod compare;
mod context;
mod error;
mod op;

#[cfg(test)]
mod error_tests;

pub use context::RegContext;
pub use error::RegError;
pub use op::{BinaryOp, Operation};
