//! Segment id space and the segment table seam.
//!
//! Segment ids are 13-bit. Id 0 marks a register as a plain number and
//! `0x1FFF` marks it as never written. Every other id names a heap region
//! owned by the memory manager, which answers liveness queries through
//! [`SegmentTable`].

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Segment id reserved for registers that were never written.
pub const UNINITIALIZED_SEGMENT: u16 = 0x1FFF;

/// Mask of the 13 meaningful segment bits.
pub const SEGMENT_MASK: u16 = 0x1FFF;

/// Mask of the 19 meaningful logical offset bits.
pub const OFFSET_MASK: u32 = 0x7FFFF;

/// Heap region identifier.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SegmentId(u16);

impl SegmentId {
    /// The "this register is a number" segment.
    pub const NUMBER: Self = Self(0);

    /// The "this register was never written" segment.
    pub const UNINITIALIZED: Self = Self(UNINITIALIZED_SEGMENT);

    #[inline]
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.0
    }

    #[inline]
    pub const fn is_number(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_uninitialized(self) -> bool {
        self.0 == UNINITIALIZED_SEGMENT
    }

    /// Whether this id can name a heap region at all.
    #[inline]
    pub const fn is_heap(self) -> bool {
        !self.is_number() && !self.is_uninitialized()
    }
}

impl From<u16> for SegmentId {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl fmt::Debug for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SegmentId({:04x})", self.0)
    }
}

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04x}", self.0 & SEGMENT_MASK)
    }
}

/// What kind of heap region a segment holds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    Script,
    Clones,
    Locals,
    Stack,
    Lists,
    Nodes,
    Hunk,
    DynMem,
    Array,
    String,
    Bitmap,
}

impl SegmentKind {
    /// Whether a pointer into this kind of segment may be offset by a number.
    ///
    /// Only flat memory (script bodies, local variable blocks, the VM stack
    /// and raw dynamic memory) has meaningful byte positions.
    pub fn admits_pointer_arithmetic(self) -> bool {
        matches!(
            self,
            Self::Script | Self::Locals | Self::Stack | Self::DynMem
        )
    }
}

// ============================================================================
// SegmentTable Trait
// ============================================================================

/// Read-only view of the memory manager's segment table.
pub trait SegmentTable {
    /// Kind of the live segment `id`, or `None` if nothing lives there.
    fn kind(&self, id: SegmentId) -> Option<SegmentKind>;

    fn is_live(&self, id: SegmentId) -> bool {
        self.kind(id).is_some()
    }
}

impl<T: SegmentTable + ?Sized> SegmentTable for &T {
    fn kind(&self, id: SegmentId) -> Option<SegmentKind> {
        (*self).kind(id)
    }
    fn is_live(&self, id: SegmentId) -> bool {
        (*self).is_live(id)
    }
}

/// Segment table with no live segments.
///
/// Useful when only numbers flow through the VM, e.g. when evaluating
/// constant expressions.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoSegments;

impl SegmentTable for NoSegments {
    fn kind(&self, _id: SegmentId) -> Option<SegmentKind> {
        None
    }
}

// ============================================================================
// Dynamic Segment Table
// ============================================================================

/// HashMap-backed segment table for hosts that build their heap at runtime.
#[derive(Clone, Debug, Default)]
pub struct SegmentMap {
    segments: HashMap<SegmentId, SegmentKind>,
}

impl SegmentMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `id` as live. Returns the kind it replaced, if any.
    ///
    /// The reserved number and uninitialized ids are never stored.
    pub fn insert(&mut self, id: SegmentId, kind: SegmentKind) -> Option<SegmentKind> {
        if !id.is_heap() {
            return None;
        }
        self.segments.insert(id, kind)
    }

    /// Mark `id` as freed.
    pub fn remove(&mut self, id: SegmentId) -> Option<SegmentKind> {
        self.segments.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl SegmentTable for SegmentMap {
    fn kind(&self, id: SegmentId) -> Option<SegmentKind> {
        self.segments.get(&id).copied()
    }
}

impl FromIterator<(SegmentId, SegmentKind)> for SegmentMap {
    fn from_iter<I: IntoIterator<Item = (SegmentId, SegmentKind)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (id, kind) in iter {
            map.insert(id, kind);
        }
        map
    }
}
