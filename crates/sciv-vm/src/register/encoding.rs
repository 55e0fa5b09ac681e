//! Stored register layout.
//!
//! Registers are stored as a `(segment, offset)` pair of `u16` fields. Save
//! games persist this pair verbatim, so both layouts below are fixed:
//!
//! - **Classic**: fields hold the segment and offset as-is.
//! - **Extended**: bits 15-14 of the segment field carry offset bits 17-16.
//!   The logical segment is the low 14 bits of the segment field.
//!
//! ```text
//!            segment field               offset field
//!   extended [o17 o16 s13 .. s0]         [o15 .. o0]
//! ```

use serde::{Deserialize, Serialize};

use sciv_core::{SciVersion, SegmentId};

use super::value::Reg;

/// Bits of the stored segment field borrowed for the offset (extended layout).
const BORROWED_SEGMENT_BITS: u16 = 0xC000;
/// Bits of the stored segment field that hold the segment (extended layout).
const EXTENDED_SEGMENT_BITS: u16 = 0x3FFF;
/// Offset bits 17-16, as stored in the borrowed segment bits.
const HIGH_OFFSET_BITS: u32 = 0x30000;

/// Register as stored: two raw 16-bit fields.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct RawReg {
    pub segment: u16,
    pub offset: u16,
}

impl RawReg {
    pub const fn new(segment: u16, offset: u16) -> Self {
        Self { segment, offset }
    }

    /// Decode from the 4-byte save-game form (segment then offset, little-endian).
    pub fn from_le_bytes(bytes: [u8; 4]) -> Self {
        Self {
            segment: u16::from_le_bytes([bytes[0], bytes[1]]),
            offset: u16::from_le_bytes([bytes[2], bytes[3]]),
        }
    }

    /// Encode to the 4-byte save-game form.
    pub fn to_le_bytes(self) -> [u8; 4] {
        let mut bytes = [0u8; 4];
        bytes[0..2].copy_from_slice(&self.segment.to_le_bytes());
        bytes[2..4].copy_from_slice(&self.offset.to_le_bytes());
        bytes
    }
}

/// Register layout, fixed per VM instance.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Encoding {
    /// 16-bit offsets, segment field verbatim.
    #[default]
    Classic,
    /// 18-bit offsets, two offset bits folded into the segment field.
    Extended,
}

impl Encoding {
    pub fn for_version(version: SciVersion) -> Self {
        if version.has_extended_offsets() {
            Self::Extended
        } else {
            Self::Classic
        }
    }

    /// Largest offset the layout can store.
    pub const fn max_offset(self) -> u32 {
        match self {
            Self::Classic => 0xFFFF,
            Self::Extended => 0x3FFFF,
        }
    }

    pub fn segment(self, raw: RawReg) -> SegmentId {
        match self {
            Self::Classic => SegmentId::new(raw.segment),
            Self::Extended => SegmentId::new(raw.segment & EXTENDED_SEGMENT_BITS),
        }
    }

    /// Replace the segment, leaving any borrowed offset bits untouched.
    pub fn set_segment(self, raw: &mut RawReg, segment: SegmentId) {
        match self {
            Self::Classic => raw.segment = segment.get(),
            Self::Extended => {
                raw.segment = (raw.segment & BORROWED_SEGMENT_BITS)
                    | (segment.get() & EXTENDED_SEGMENT_BITS);
            }
        }
    }

    pub fn offset(self, raw: RawReg) -> u32 {
        match self {
            Self::Classic => raw.offset as u32,
            Self::Extended => {
                (((raw.segment & BORROWED_SEGMENT_BITS) as u32) << 2) | raw.offset as u32
            }
        }
    }

    /// Replace the offset, truncating it to the layout's width. The extended
    /// layout keeps the low 14 segment bits as they were.
    pub fn set_offset(self, raw: &mut RawReg, offset: u32) {
        match self {
            Self::Classic => raw.offset = offset as u16,
            Self::Extended => {
                raw.offset = offset as u16;
                raw.segment = (((offset & HIGH_OFFSET_BITS) >> 2) as u16)
                    | (raw.segment & EXTENDED_SEGMENT_BITS);
            }
        }
    }

    /// Pack a logical pair into storage.
    pub fn init(self, segment: SegmentId, offset: u32) -> RawReg {
        let mut raw = RawReg::default();
        self.set_segment(&mut raw, segment);
        self.set_offset(&mut raw, offset);
        raw
    }

    pub fn decode(self, raw: RawReg) -> Reg {
        Reg::new(self.segment(raw), self.offset(raw))
    }

    pub fn encode(self, reg: Reg) -> RawReg {
        self.init(reg.segment(), reg.offset())
    }

    /// The value `reg` becomes once written to storage and read back.
    pub fn normalize(self, reg: Reg) -> Reg {
        self.decode(self.encode(reg))
    }
}
