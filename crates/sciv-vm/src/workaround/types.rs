//! Workaround database types.

use std::cmp::Ordering;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use sciv_core::SciVersion;

use crate::engine::Operation;
use crate::register::Reg;

/// Largest number legacy scripts compare against object references.
pub const OBJECT_REFERENCE_LIMIT: u16 = 2000;

/// Identity of the script code currently executing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallOrigin {
    pub game: String,
    pub room: u16,
    pub script: u16,
    pub object: String,
    pub method: String,
    /// Set when execution is inside a local procedure rather than a method.
    #[serde(default)]
    pub local_call_offset: Option<u32>,
}

impl CallOrigin {
    pub fn new(game: impl Into<String>, room: u16, script: u16) -> Self {
        Self {
            game: game.into(),
            room,
            script,
            ..Self::default()
        }
    }

    pub fn method(mut self, object: impl Into<String>, method: impl Into<String>) -> Self {
        self.object = object.into();
        self.method = method.into();
        self
    }

    pub fn local_call(mut self, offset: u32) -> Self {
        self.local_call_offset = Some(offset);
        self
    }

    pub fn is_unknown(&self) -> bool {
        self.game.is_empty() && self.object.is_empty() && self.method.is_empty()
    }
}

impl fmt::Display for CallOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unknown() {
            return f.write_str("<unknown origin>");
        }
        write!(
            f,
            "{}::{} (game {}, room {}, script {}",
            self.object, self.method, self.game, self.room, self.script
        )?;
        if let Some(offset) = self.local_call_offset {
            write!(f, ", local call {offset:04x}")?;
        }
        f.write_str(")")
    }
}

/// Substitute number returned by a workaround.
///
/// Arithmetic uses it as the result; comparisons read its sign.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Verdict(pub u16);

impl Verdict {
    pub const GREATER: Self = Self(1);
    pub const EQUAL: Self = Self(0);
    pub const LESS: Self = Self(0xFFFF);

    pub fn reg(self) -> Reg {
        Reg::number(self.0)
    }

    pub fn ordering(self) -> Ordering {
        (self.0 as i16).cmp(&0)
    }
}

/// One known script inconsistency and the value that papers over it.
///
/// `None` fields match anything.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkaroundEntry {
    pub operation: Operation,
    pub script: u16,
    #[serde(default)]
    pub game: Option<String>,
    #[serde(default)]
    pub room: Option<u16>,
    #[serde(default)]
    pub object: Option<String>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub local_call_offset: Option<u32>,
    pub value: i16,
}

impl WorkaroundEntry {
    pub fn new(operation: Operation, script: u16, value: i16) -> Self {
        Self {
            operation,
            script,
            game: None,
            room: None,
            object: None,
            method: None,
            local_call_offset: None,
            value,
        }
    }

    pub fn matches(&self, origin: &CallOrigin, operation: Operation) -> bool {
        fn field<T: PartialEq + ?Sized>(want: Option<&T>, have: &T) -> bool {
            want.is_none_or(|w| w == have)
        }

        self.operation == operation
            && self.script == origin.script
            && field(self.game.as_deref(), origin.game.as_str())
            && field(self.room.as_ref(), &origin.room)
            && field(self.object.as_deref(), origin.object.as_str())
            && field(self.method.as_deref(), origin.method.as_str())
            && (self.local_call_offset.is_none()
                || self.local_call_offset == origin.local_call_offset)
    }

    pub fn verdict(&self) -> Verdict {
        Verdict(self.value as u16)
    }
}

// ============================================================================
// Lookup Service
// ============================================================================

/// Source of verdicts for register operations that would otherwise fail.
pub trait WorkaroundService {
    fn lookup(
        &self,
        origin: &CallOrigin,
        operation: Operation,
        left: Reg,
        right: Reg,
    ) -> Option<Verdict>;
}

impl<T: WorkaroundService + ?Sized> WorkaroundService for &T {
    fn lookup(
        &self,
        origin: &CallOrigin,
        operation: Operation,
        left: Reg,
        right: Reg,
    ) -> Option<Verdict> {
        (*self).lookup(origin, operation, left, right)
    }
}

/// Service that never has a verdict.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoWorkarounds;

impl WorkaroundService for NoWorkarounds {
    fn lookup(&self, _: &CallOrigin, _: Operation, _: Reg, _: Reg) -> Option<Verdict> {
        None
    }
}

// ============================================================================
// Table
// ============================================================================

/// Read-only workaround database, indexed by script number.
///
/// Besides per-script entries it can carry the legacy object reference rule:
/// early interpreters let scripts compare a pointer against a small number to
/// tell objects from integers, with the pointer always ordering above.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkaroundTable {
    object_reference_test: Option<u16>,
    by_script: IndexMap<u16, Vec<WorkaroundEntry>>,
}

impl WorkaroundTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in rules for `version`: the object reference rule up to SCI1.1.
    pub fn builtin(version: SciVersion) -> Self {
        let limit = (version <= SciVersion::Sci11).then_some(OBJECT_REFERENCE_LIMIT);
        Self::new().with_object_reference_test(limit)
    }

    pub fn with_object_reference_test(mut self, limit: Option<u16>) -> Self {
        self.object_reference_test = limit;
        self
    }

    pub fn object_reference_test(&self) -> Option<u16> {
        self.object_reference_test
    }

    pub fn insert(&mut self, entry: WorkaroundEntry) {
        self.by_script.entry(entry.script).or_default().push(entry);
    }

    pub fn len(&self) -> usize {
        self.by_script.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_script.is_empty()
    }

    /// Entries in insertion order, grouped by script.
    pub fn entries(&self) -> impl Iterator<Item = &WorkaroundEntry> {
        self.by_script.values().flatten()
    }

    fn object_reference_verdict(&self, left: Reg, right: Reg) -> Option<Verdict> {
        let limit = self.object_reference_test? as u32;
        let small_number = |r: Reg| r.is_number() && r.offset() <= limit;

        if left.is_pointer() && small_number(right) {
            Some(Verdict::GREATER)
        } else if right.is_pointer() && small_number(left) {
            Some(Verdict::LESS)
        } else {
            None
        }
    }
}

impl Extend<WorkaroundEntry> for WorkaroundTable {
    fn extend<I: IntoIterator<Item = WorkaroundEntry>>(&mut self, iter: I) {
        for entry in iter {
            self.insert(entry);
        }
    }
}

impl FromIterator<WorkaroundEntry> for WorkaroundTable {
    fn from_iter<I: IntoIterator<Item = WorkaroundEntry>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl WorkaroundService for WorkaroundTable {
    fn lookup(
        &self,
        origin: &CallOrigin,
        operation: Operation,
        left: Reg,
        right: Reg,
    ) -> Option<Verdict> {
        if operation == Operation::Comparison {
            if let Some(verdict) = self.object_reference_verdict(left, right) {
                return Some(verdict);
            }
        }

        self.by_script
            .get(&origin.script)?
            .iter()
            .find(|e| e.matches(origin, operation))
            .map(WorkaroundEntry::verdict)
    }
}
