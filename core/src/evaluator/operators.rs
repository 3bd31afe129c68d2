//! Operator vocabulary and application.

use core::fmt;

use crate::{errors::OperandError, value::Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    And,
    Or,
}

/// Every accepted operator spelling.
pub const OPERATORS: [(&str, Operator); 11] = [
    ("lt", Operator::Lt),
    ("<", Operator::Lt),
    ("lt=", Operator::Le),
    ("<=", Operator::Le),
    ("gt", Operator::Gt),
    (">", Operator::Gt),
    ("gt=", Operator::Ge),
    (">=", Operator::Ge),
    ("=", Operator::Eq),
    ("and", Operator::And),
    ("or", Operator::Or),
];

impl Operator {
    /// Look up an operator by any of its spellings.
    pub fn from_token(token: &str) -> Option<Operator> {
        OPERATORS
            .iter()
            .find(|(spelling, _)| *spelling == token)
            .map(|(_, op)| *op)
    }

    /// Whether the operator compares integers (as opposed to combining booleans).
    pub fn is_comparison(self) -> bool {
        !matches!(self, Operator::And | Operator::Or)
    }

    /// Compute `left OP right`.
    pub fn apply(self, left: &Value<'_>, right: &Value<'_>) -> Result<bool, OperandError> {
        if self.is_comparison() {
            let (left, right) = (left.as_integer()?, right.as_integer()?);
            Ok(match self {
                Operator::Lt => left < right,
                Operator::Le => left <= right,
                Operator::Gt => left > right,
                Operator::Ge => left >= right,
                _ => left == right,
            })
        } else {
            let (left, right) = (left.as_boolean()?, right.as_boolean()?);
            Ok(match self {
                Operator::And => left && right,
                _ => left || right,
            })
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spelling = match self {
            Operator::Lt => "lt",
            Operator::Le => "lt=",
            Operator::Gt => "gt",
            Operator::Ge => "gt=",
            Operator::Eq => "=",
            Operator::And => "and",
            Operator::Or => "or",
        };
        f.write_str(spelling)
    }
}
