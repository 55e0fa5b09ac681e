//! Per-VM-instance environment for register operations.

use sciv_core::{NoSegments, SciVersion, SegmentId, SegmentTable};

use crate::register::{Encoding, Reg};
use crate::workaround::{CallOrigin, NoWorkarounds, Verdict, WorkaroundService};

use super::{Operation, RegError};

/// Everything register arithmetic and comparison depend on besides their
/// operands: the engine version, the matching register layout, the segment
/// table and the workaround database, plus the script currently executing.
///
/// The context only borrows its collaborators, and every operation is pure
/// given the operands and those borrows.
pub struct RegContext<'a> {
    version: SciVersion,
    encoding: Encoding,
    segments: &'a dyn SegmentTable,
    workarounds: &'a dyn WorkaroundService,
    origin: CallOrigin,
}

impl<'a> RegContext<'a> {
    pub fn new(
        version: SciVersion,
        segments: &'a dyn SegmentTable,
        workarounds: &'a dyn WorkaroundService,
    ) -> Self {
        Self {
            version,
            encoding: Encoding::for_version(version),
            segments,
            workarounds,
            origin: CallOrigin::default(),
        }
    }

    /// Context with no live segments and no workarounds.
    pub fn standalone(version: SciVersion) -> RegContext<'static> {
        RegContext::new(version, &NoSegments, &NoWorkarounds)
    }

    pub fn with_origin(mut self, origin: CallOrigin) -> Self {
        self.origin = origin;
        self
    }

    /// Record which script code is executing, for workaround lookups and
    /// diagnostics.
    pub fn set_origin(&mut self, origin: CallOrigin) {
        self.origin = origin;
    }

    pub fn origin(&self) -> &CallOrigin {
        &self.origin
    }

    pub fn version(&self) -> SciVersion {
        self.version
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn segments(&self) -> &'a dyn SegmentTable {
        self.segments
    }

    /// Build a register the way storage would hold it.
    pub fn make(&self, segment: SegmentId, offset: u32) -> Reg {
        self.encoding.normalize(Reg::new(segment, offset))
    }

    pub(crate) fn workaround(&self, operation: Operation, left: Reg, right: Reg) -> Option<Verdict> {
        let verdict = self
            .workarounds
            .lookup(&self.origin, operation, left, right)?;
        tracing::debug!(
            %operation,
            %left,
            %right,
            origin = %self.origin,
            value = verdict.0,
            "workaround applied"
        );
        Some(verdict)
    }

    pub(crate) fn uninitialized(&self, operation: Operation) -> RegError {
        RegError::UninitializedRead {
            operation,
            origin: self.origin.clone(),
        }
    }

    /// Fail with `UninitializedRead` if either operand was never written.
    pub(crate) fn check_initialized(
        &self,
        operation: Operation,
        left: Reg,
        right: Reg,
    ) -> Result<(), RegError> {
        if left.is_initialized() && right.is_initialized() {
            Ok(())
        } else {
            Err(self.uninitialized(operation))
        }
    }
}
