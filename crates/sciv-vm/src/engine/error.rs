//! Errors raised by register operations.

use crate::register::Reg;
use crate::workaround::CallOrigin;

use super::Operation;

/// Register operation failure. Never fatal on its own: the interpreter
/// decides whether to abort, substitute or report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegError {
    /// Number expected and pointer given (or the reverse), no workaround applied.
    #[error("invalid arithmetic operation ({operation} - params: {left} and {right}) from {origin}")]
    TypeMismatch {
        operation: Operation,
        left: Reg,
        right: Reg,
        origin: CallOrigin,
    },

    /// Relational comparison between values with no common ordering.
    #[error("incompatible comparison (params: {left} and {right}) from {origin}")]
    IncompatibleComparison {
        left: Reg,
        right: Reg,
        origin: CallOrigin,
    },

    /// Division or modulo with a zero divisor.
    #[error("{operation} by zero (params: {left} and {right}) from {origin}")]
    DivisionByZero {
        operation: Operation,
        left: Reg,
        right: Reg,
        origin: CallOrigin,
    },

    /// An operand still holds the uninitialized marker.
    #[error("uninitialized register read during {operation} from {origin}")]
    UninitializedRead {
        operation: Operation,
        origin: CallOrigin,
    },

    /// Pointer arithmetic on a segment the memory manager no longer has.
    #[error("{operation} on dangling pointer {pointer} from {origin}")]
    DanglingPointer {
        operation: Operation,
        pointer: Reg,
        origin: CallOrigin,
    },
}

impl RegError {
    /// Operation that failed.
    pub fn operation(&self) -> Operation {
        match self {
            Self::IncompatibleComparison { .. } => Operation::Comparison,
            Self::TypeMismatch { operation, .. }
            | Self::DivisionByZero { operation, .. }
            | Self::UninitializedRead { operation, .. }
            | Self::DanglingPointer { operation, .. } => *operation,
        }
    }

    /// Script location that triggered the failure.
    pub fn origin(&self) -> &CallOrigin {
        match self {
            Self::TypeMismatch { origin, .. }
            | Self::IncompatibleComparison { origin, .. }
            | Self::DivisionByZero { origin, .. }
            | Self::UninitializedRead { origin, .. }
            | Self::DanglingPointer { origin, .. } => origin,
        }
    }
}
