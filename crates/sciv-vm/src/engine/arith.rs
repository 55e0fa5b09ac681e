//! Register arithmetic.
//!
//! Numbers behave like a 16-bit accumulator: every result wraps
//! modulo 65536. Pointers only support moving by a number within
//! flat-memory segments and subtraction from another pointer into the same
//! segment. Any other mix goes to the workaround database before failing.

use sciv_core::SciVersion;

use crate::register::{Pointer, Reg};

use super::{BinaryOp, Operation, RegContext, RegError};

impl RegContext<'_> {
    /// Apply `op` to two registers.
    pub fn binary(&self, op: BinaryOp, left: Reg, right: Reg) -> Result<Reg, RegError> {
        match op {
            BinaryOp::Add => self.add(left, right),
            BinaryOp::Sub => self.sub(left, right),
            BinaryOp::Mul => self.mul(left, right),
            BinaryOp::Div => self.div(left, right),
            BinaryOp::Rem => self.rem(left, right),
            BinaryOp::Shl => self.shl(left, right),
            BinaryOp::Shr => self.shr(left, right),
            BinaryOp::And => self.bit_and(left, right),
            BinaryOp::Or => self.bit_or(left, right),
            BinaryOp::Xor => self.bit_xor(left, right),
        }
    }

    /// Apply `op` to a register and a signed immediate.
    pub fn binary_literal(&self, op: BinaryOp, left: Reg, right: i16) -> Result<Reg, RegError> {
        self.binary(op, left, Reg::from_i16(right))
    }

    /// Compound assignment: `target = target op right`. On error `target` is
    /// left unchanged.
    pub fn assign(&self, op: BinaryOp, target: &mut Reg, right: Reg) -> Result<(), RegError> {
        *target = self.binary(op, *target, right)?;
        Ok(())
    }

    pub fn add(&self, left: Reg, right: Reg) -> Result<Reg, RegError> {
        let op = Operation::Addition;
        self.check_initialized(op, left, right)?;

        match (left, right) {
            (Reg::Number(_), Reg::Number(_)) => {
                Ok(Reg::from_i16(left.to_i16().wrapping_add(right.to_i16())))
            }
            (Reg::Pointer(p), Reg::Number(_)) => {
                self.offset_pointer(op, p, right.to_i16() as i32, left, right)
            }
            // number + pointer: same as pointer + number
            (Reg::Number(_), Reg::Pointer(p)) => {
                self.offset_pointer(op, p, left.to_i16() as i32, right, left)
            }
            _ => self.fallback(op, left, right),
        }
    }

    pub fn sub(&self, left: Reg, right: Reg) -> Result<Reg, RegError> {
        let op = Operation::Subtraction;
        self.check_initialized(op, left, right)?;

        // Two numbers, or two pointers into one segment: a plain difference.
        if left.segment() == right.segment() {
            return Ok(Reg::from_i16(left.to_i16().wrapping_sub(right.to_i16())));
        }

        match (left, right) {
            (Reg::Pointer(p), Reg::Number(_)) => {
                self.offset_pointer(op, p, -(right.to_i16() as i32), left, right)
            }
            _ => self.fallback(op, left, right),
        }
    }

    pub fn mul(&self, left: Reg, right: Reg) -> Result<Reg, RegError> {
        self.numeric(Operation::Multiplication, left, right, |a, b| {
            (a as i16).wrapping_mul(b as i16) as u16
        })
    }

    /// Signed division, truncating toward zero.
    pub fn div(&self, left: Reg, right: Reg) -> Result<Reg, RegError> {
        let op = Operation::Division;
        self.check_initialized(op, left, right)?;
        if !(left.is_number() && right.is_number()) {
            return self.fallback(op, left, right);
        }
        if right.to_i16() == 0 {
            return self.division_by_zero(op, left, right);
        }
        Ok(Reg::from_i16(left.to_i16().wrapping_div(right.to_i16())))
    }

    /// Signed remainder; a negative remainder has the divisor added once.
    pub fn rem(&self, left: Reg, right: Reg) -> Result<Reg, RegError> {
        let op = Operation::Modulo;
        self.check_initialized(op, left, right)?;
        if !(left.is_number() && right.is_number()) {
            return self.fallback(op, left, right);
        }

        let (a, b) = (left.to_i16(), right.to_i16());
        if b == 0 {
            return self.division_by_zero(op, left, right);
        }
        // Negative operands were only defined from late SCI0 on.
        if self.version() <= SciVersion::Sci0Late && (a < 0 || b < 0) {
            tracing::warn!(
                dividend = a,
                divisor = b,
                origin = %self.origin(),
                "modulo of a negative number requested on an SCI0 interpreter"
            );
        }

        let mut value = a.wrapping_rem(b);
        if value < 0 {
            value = value.wrapping_add(b);
        }
        Ok(Reg::from_i16(value))
    }

    /// Logical shift left; counts of 32 or more clear the value.
    pub fn shl(&self, left: Reg, right: Reg) -> Result<Reg, RegError> {
        self.numeric(Operation::ShiftLeft, left, right, |a, b| {
            (a as u32).checked_shl(b as u32).unwrap_or(0) as u16
        })
    }

    /// Logical shift right; counts of 32 or more clear the value.
    pub fn shr(&self, left: Reg, right: Reg) -> Result<Reg, RegError> {
        self.numeric(Operation::ShiftRight, left, right, |a, b| {
            (a as u32).checked_shr(b as u32).unwrap_or(0) as u16
        })
    }

    pub fn bit_and(&self, left: Reg, right: Reg) -> Result<Reg, RegError> {
        self.numeric(Operation::BitwiseAnd, left, right, |a, b| a & b)
    }

    pub fn bit_or(&self, left: Reg, right: Reg) -> Result<Reg, RegError> {
        self.numeric(Operation::BitwiseOr, left, right, |a, b| a | b)
    }

    pub fn bit_xor(&self, left: Reg, right: Reg) -> Result<Reg, RegError> {
        self.numeric(Operation::BitwiseXor, left, right, |a, b| a ^ b)
    }

    /// Narrow to `u16`, consulting the workaround database for pointers.
    pub fn require_u16(&self, reg: Reg) -> Result<u16, RegError> {
        self.require(Operation::RequireUnsigned, reg)
            .map(Reg::to_u16)
    }

    /// Narrow to `i16`, consulting the workaround database for pointers.
    pub fn require_i16(&self, reg: Reg) -> Result<i16, RegError> {
        self.require(Operation::RequireSigned, reg)
            .map(Reg::to_i16)
    }

    fn require(&self, op: Operation, reg: Reg) -> Result<Reg, RegError> {
        match reg {
            Reg::Number(_) => Ok(reg),
            Reg::Uninitialized => Err(self.uninitialized(op)),
            // Nothing to compare against; the database sees NULL on the right.
            Reg::Pointer(_) => self.fallback(op, reg, Reg::NULL),
        }
    }

    /// Operation defined only on two numbers, computed on their low 16 bits.
    fn numeric(
        &self,
        op: Operation,
        left: Reg,
        right: Reg,
        f: impl FnOnce(u16, u16) -> u16,
    ) -> Result<Reg, RegError> {
        self.check_initialized(op, left, right)?;
        if left.is_number() && right.is_number() {
            Ok(Reg::number(f(left.to_u16(), right.to_u16())))
        } else {
            self.fallback(op, left, right)
        }
    }

    /// Move a pointer by `delta`. `left`/`right` are the operands as the
    /// workaround database should see them.
    fn offset_pointer(
        &self,
        op: Operation,
        pointer: Pointer,
        delta: i32,
        left: Reg,
        right: Reg,
    ) -> Result<Reg, RegError> {
        match self.segments().kind(pointer.segment()) {
            None => Err(RegError::DanglingPointer {
                operation: op,
                pointer: Reg::Pointer(pointer),
                origin: self.origin().clone(),
            }),
            Some(kind) if kind.admits_pointer_arithmetic() => Ok(self
                .encoding()
                .normalize(Reg::Pointer(pointer.offset_by(delta)))),
            Some(_) => self.fallback(op, left, right),
        }
    }

    fn fallback(&self, op: Operation, left: Reg, right: Reg) -> Result<Reg, RegError> {
        match self.workaround(op, left, right) {
            Some(verdict) => Ok(verdict.reg()),
            None => Err(RegError::TypeMismatch {
                operation: op,
                left,
                right,
                origin: self.origin().clone(),
            }),
        }
    }

    fn division_by_zero(&self, op: Operation, left: Reg, right: Reg) -> Result<Reg, RegError> {
        match self.workaround(op, left, right) {
            Some(verdict) => Ok(verdict.reg()),
            None => Err(RegError::DivisionByZero {
                operation: op,
                left,
                right,
                origin: self.origin().clone(),
            }),
        }
    }
}
