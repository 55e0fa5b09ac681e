//! Logical register values.
//!
//! A [`Reg`] is what every interpreter slot holds: a 16-bit number, a pointer
//! into a heap segment, or the uninitialized marker. The variant is explicit;
//! how a value is packed into the stored 32-bit pair is the concern of
//! [`Encoding`](super::Encoding).

use std::fmt;

use sciv_core::{OFFSET_MASK, SEGMENT_MASK, SegmentId};

use crate::engine::{Operation, RegError};
use crate::workaround::CallOrigin;

/// Offset of [`Reg::SIGNAL`], used to flag errors or finished operations.
pub const SIGNAL_OFFSET: u16 = 0xFFFF;

/// Position inside a live heap segment.
///
/// The segment is never the number or uninitialized id; construction goes
/// through [`Pointer::new`] which rejects both.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Pointer {
    segment: SegmentId,
    offset: u32,
}

impl Pointer {
    /// Returns `None` if `segment` is one of the reserved ids.
    pub fn new(segment: SegmentId, offset: u32) -> Option<Self> {
        segment.is_heap().then_some(Self {
            segment,
            offset: offset & OFFSET_MASK,
        })
    }

    #[inline]
    pub fn segment(self) -> SegmentId {
        self.segment
    }

    #[inline]
    pub fn offset(self) -> u32 {
        self.offset
    }

    /// Same segment, offset moved by `delta` (wrapping inside the offset range).
    pub fn offset_by(self, delta: i32) -> Self {
        Self {
            segment: self.segment,
            offset: self.offset.wrapping_add_signed(delta) & OFFSET_MASK,
        }
    }
}

/// Uniform interpreter value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Reg {
    /// Plain number. Arithmetic results occupy the low 16 bits; wider values
    /// only arise from extended-layout storage and are kept as read.
    Number(u32),
    /// Offset within a heap segment.
    Pointer(Pointer),
    /// Slot that was never written. Reading it is a script bug.
    Uninitialized,
}

impl Default for Reg {
    fn default() -> Self {
        Self::NULL
    }
}

impl Reg {
    /// `0000:0000`, the null value and the number zero.
    pub const NULL: Self = Self::Number(0);

    /// `0000:ffff`, a conventional "error / done" marker.
    ///
    /// Numerically indistinguishable from -1; callers agree on its meaning.
    pub const SIGNAL: Self = Self::Number(SIGNAL_OFFSET as u32);

    /// `0000:0001`.
    pub const TRUE: Self = Self::Number(1);

    /// Classify a logical `(segment, offset)` pair. No validation beyond the
    /// offset mask is performed.
    pub fn new(segment: SegmentId, offset: u32) -> Self {
        let offset = offset & OFFSET_MASK;
        if segment.is_number() {
            Self::Number(offset)
        } else if segment.is_uninitialized() {
            Self::Uninitialized
        } else {
            // is_heap() holds here
            Self::Pointer(Pointer { segment, offset })
        }
    }

    #[inline]
    pub const fn number(value: u16) -> Self {
        Self::Number(value as u32)
    }

    #[inline]
    pub const fn from_i16(value: i16) -> Self {
        Self::Number(value as u16 as u32)
    }

    pub fn segment(self) -> SegmentId {
        match self {
            Self::Number(_) => SegmentId::NUMBER,
            Self::Pointer(p) => p.segment,
            Self::Uninitialized => SegmentId::UNINITIALIZED,
        }
    }

    /// Logical offset. The uninitialized marker reads as 0.
    pub fn offset(self) -> u32 {
        match self {
            Self::Number(n) => n,
            Self::Pointer(p) => p.offset,
            Self::Uninitialized => 0,
        }
    }

    pub fn set_segment(&mut self, segment: SegmentId) {
        *self = Self::new(segment, self.offset());
    }

    pub fn set_offset(&mut self, offset: u32) {
        *self = Self::new(self.segment(), offset);
    }

    pub fn inc_offset(&mut self, delta: i32) {
        self.set_offset(self.offset().wrapping_add_signed(delta));
    }

    pub fn as_pointer(self) -> Option<Pointer> {
        match self {
            Self::Pointer(p) => Some(p),
            _ => None,
        }
    }

    #[inline]
    pub fn is_number(self) -> bool {
        matches!(self, Self::Number(_))
    }

    #[inline]
    pub fn is_pointer(self) -> bool {
        matches!(self, Self::Pointer(_))
    }

    #[inline]
    pub fn is_initialized(self) -> bool {
        !matches!(self, Self::Uninitialized)
    }

    #[inline]
    pub fn is_null(self) -> bool {
        self == Self::NULL
    }

    /// Low 16 bits of the offset, for call sites that know this is a number.
    #[inline]
    pub fn to_u16(self) -> u16 {
        self.offset() as u16
    }

    /// Low 16 bits of the offset, sign-extended.
    #[inline]
    pub fn to_i16(self) -> i16 {
        self.offset() as u16 as i16
    }

    /// Like [`to_u16`](Self::to_u16) but refuses pointers and uninitialized
    /// registers instead of coercing them.
    pub fn require_u16(self) -> Result<u16, RegError> {
        self.require_number(Operation::RequireUnsigned)
            .map(Self::to_u16)
    }

    /// Like [`to_i16`](Self::to_i16) but refuses pointers and uninitialized
    /// registers instead of coercing them.
    pub fn require_i16(self) -> Result<i16, RegError> {
        self.require_number(Operation::RequireSigned)
            .map(Self::to_i16)
    }

    fn require_number(self, operation: Operation) -> Result<Self, RegError> {
        match self {
            Self::Number(_) => Ok(self),
            Self::Pointer(_) => Err(RegError::TypeMismatch {
                operation,
                left: self,
                right: Self::NULL,
                origin: CallOrigin::default(),
            }),
            Self::Uninitialized => Err(RegError::UninitializedRead {
                operation,
                origin: CallOrigin::default(),
            }),
        }
    }
}

impl From<u16> for Reg {
    fn from(value: u16) -> Self {
        Self::number(value)
    }
}

impl From<i16> for Reg {
    fn from(value: i16) -> Self {
        Self::from_i16(value)
    }
}

impl From<bool> for Reg {
    fn from(value: bool) -> Self {
        if value { Self::TRUE } else { Self::NULL }
    }
}

impl From<Pointer> for Reg {
    fn from(p: Pointer) -> Self {
        Self::Pointer(p)
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04x}:{:04x}",
            self.segment().get() & SEGMENT_MASK,
            self.offset()
        )
    }
}
