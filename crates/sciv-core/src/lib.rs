#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures shared by the sciv script VM.
//!
//! - **Segments**: the 13-bit segment id space and the [`SegmentTable`] seam
//!   through which the memory manager answers liveness queries
//! - **Versions**: the ordered [`SciVersion`] enumeration that selects
//!   register layouts and compatibility behavior

mod segment;
mod version;

#[cfg(test)]
mod segment_tests;

pub use segment::{
    NoSegments, OFFSET_MASK, SEGMENT_MASK, SegmentId, SegmentKind, SegmentMap, SegmentTable,
    UNINITIALIZED_SEGMENT,
};
pub use version::{ParseVersionError, SciVersion};
