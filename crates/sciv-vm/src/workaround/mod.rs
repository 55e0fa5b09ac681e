//! Compatibility database for historically relied-upon script bugs.
//!
//! The table is loaded once (from JSON or its compact binary form) and only
//! read afterwards. Register operations consult it through
//! [`WorkaroundService`] before reporting a type conflict.

mod binary;
mod json;
mod types;

#[cfg(test)]
mod json_tests;
#[cfg(test)]
mod types_tests;

pub use types::{
    CallOrigin, NoWorkarounds, OBJECT_REFERENCE_LIMIT, Verdict, WorkaroundEntry,
    WorkaroundService, WorkaroundTable,
};
