//! Operation kinds, as seen by diagnostics and the workaround database.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Every register operation that can hit a type conflict.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Comparison,
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Modulo,
    ShiftLeft,
    ShiftRight,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    RequireUnsigned,
    RequireSigned,
}

impl Operation {
    /// Human-readable name used in diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Comparison => "comparison",
            Self::Addition => "addition",
            Self::Subtraction => "subtraction",
            Self::Multiplication => "multiplication",
            Self::Division => "division",
            Self::Modulo => "modulo",
            Self::ShiftLeft => "shift left",
            Self::ShiftRight => "shift right",
            Self::BitwiseAnd => "bitwise AND",
            Self::BitwiseOr => "bitwise OR",
            Self::BitwiseXor => "bitwise XOR",
            Self::RequireUnsigned => "require unsigned number",
            Self::RequireSigned => "require signed number",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Binary register operators.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Shl,
    Shr,
    And,
    Or,
    Xor,
}

impl BinaryOp {
    pub const ALL: [Self; 10] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Rem,
        Self::Shl,
        Self::Shr,
        Self::And,
        Self::Or,
        Self::Xor,
    ];

    pub fn operation(self) -> Operation {
        match self {
            Self::Add => Operation::Addition,
            Self::Sub => Operation::Subtraction,
            Self::Mul => Operation::Multiplication,
            Self::Div => Operation::Division,
            Self::Rem => Operation::Modulo,
            Self::Shl => Operation::ShiftLeft,
            Self::Shr => Operation::ShiftRight,
            Self::And => Operation::BitwiseAnd,
            Self::Or => Operation::BitwiseOr,
            Self::Xor => Operation::BitwiseXor,
        }
    }

    /// Operator symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::And => "&",
            Self::Or => "|",
            Self::Xor => "^",
        }
    }
}
