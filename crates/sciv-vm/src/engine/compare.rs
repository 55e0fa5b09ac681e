//! Relational comparison of registers.
//!
//! Resolution order:
//! 1. an uninitialized operand fails with `UninitializedRead`
//! 2. operands in the same segment compare by offset (numbers as 16-bit
//!    values, signed unless asked otherwise)
//! 3. SCI2 and later order mixed operands deterministically
//! 4. otherwise the workaround database decides, or the comparison fails
//!
//! Segment ids are only ever tested for equality. Equality itself is plain
//! `==` on [`Reg`] and never reaches this module.

use std::cmp::Ordering;

use crate::register::Reg;

use super::{Operation, RegContext, RegError};

impl RegContext<'_> {
    /// Three-way comparison. `unsigned` selects magnitude comparison for
    /// numbers instead of sign-extended comparison.
    pub fn compare(&self, left: Reg, right: Reg, unsigned: bool) -> Result<Ordering, RegError> {
        self.check_initialized(Operation::Comparison, left, right)?;

        if left.segment() == right.segment() {
            return Ok(match (left, right) {
                (Reg::Number(_), Reg::Number(_)) if unsigned => left.to_u16().cmp(&right.to_u16()),
                (Reg::Number(_), Reg::Number(_)) => left.to_i16().cmp(&right.to_i16()),
                _ => left.offset().cmp(&right.offset()),
            });
        }

        if let Some(ordering) = self.specialized_compare(left, right) {
            return Ok(ordering);
        }

        match self.workaround(Operation::Comparison, left, right) {
            Some(verdict) => Ok(verdict.ordering()),
            None => Err(RegError::IncompatibleComparison {
                left,
                right,
                origin: self.origin().clone(),
            }),
        }
    }

    /// SCI2+ interpreters hand out numeric ids for engine-created objects and
    /// compare them against script pointers when sorting; numbers order above
    /// pointers and pointers in different segments order by offset.
    fn specialized_compare(&self, left: Reg, right: Reg) -> Option<Ordering> {
        if !self.version().is_sci32() {
            return None;
        }
        Some(match (left.is_number(), right.is_number()) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            _ => left.offset().cmp(&right.offset()),
        })
    }

    pub fn gt(&self, left: Reg, right: Reg) -> Result<bool, RegError> {
        Ok(self.compare(left, right, false)?.is_gt())
    }

    pub fn ge(&self, left: Reg, right: Reg) -> Result<bool, RegError> {
        Ok(self.compare(left, right, false)?.is_ge())
    }

    pub fn lt(&self, left: Reg, right: Reg) -> Result<bool, RegError> {
        Ok(self.compare(left, right, false)?.is_lt())
    }

    pub fn le(&self, left: Reg, right: Reg) -> Result<bool, RegError> {
        Ok(self.compare(left, right, false)?.is_le())
    }

    pub fn gt_u(&self, left: Reg, right: Reg) -> Result<bool, RegError> {
        Ok(self.compare(left, right, true)?.is_gt())
    }

    pub fn ge_u(&self, left: Reg, right: Reg) -> Result<bool, RegError> {
        Ok(self.compare(left, right, true)?.is_ge())
    }

    pub fn lt_u(&self, left: Reg, right: Reg) -> Result<bool, RegError> {
        Ok(self.compare(left, right, true)?.is_lt())
    }

    pub fn le_u(&self, left: Reg, right: Reg) -> Result<bool, RegError> {
        Ok(self.compare(left, right, true)?.is_le())
    }
}
