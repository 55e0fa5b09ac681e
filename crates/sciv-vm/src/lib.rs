//! Register values for the sciv script VM.
//!
//! This crate provides the value every interpreter slot holds, the two
//! stored layouts used across engine generations, and comparison and
//! arithmetic that respect the number/pointer split.

pub mod config;
mod data_error;
pub mod engine;
pub mod register;
pub mod save;
pub mod workaround;


// Re-export commonly used items at crate root
pub use config::VmConfig;
pub use data_error::DataError;
pub use engine::{BinaryOp, Operation, RegContext, RegError};
pub use register::{Encoding, Pointer, RawReg, Reg, SIGNAL_OFFSET};
pub use save::SavedRegisters;
pub use sciv_core::{SciVersion, SegmentId, SegmentKind, SegmentMap, SegmentTable};
pub use workaround::{
    CallOrigin, NoWorkarounds, Verdict, WorkaroundEntry, WorkaroundService, WorkaroundTable,
};
