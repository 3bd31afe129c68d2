//! Entries of the value stack.
//!
//! Values keep the textual model of the expression language: boolean literals
//! are normalized to `1`/`0` as soon as they are scanned, while operator
//! results are the words `true`/`false`. The two are interchangeable as
//! booleans, but only the normalized literal can stand in for an integer.

use core::fmt;

use crate::{ToString, errors::OperandError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value<'a> {
    /// Digits exactly as scanned. Parsed when an operator consumes them.
    Digits(&'a str),
    /// A `true`/`false` literal, normalized to `1`/`0`.
    Literal(bool),
    /// The result of applying an operator.
    Outcome(bool),
}

impl<'a> Value<'a> {
    /// Interpret the value as a signed base-10 integer.
    pub fn as_integer(&self) -> Result<i64, OperandError> {
        match *self {
            Value::Digits(digits) => {
                digits
                    .parse::<i64>()
                    .map_err(|source| OperandError::IntegerOverflow {
                        value: digits.to_string(),
                        source,
                    })
            }
            Value::Literal(flag) => Ok(i64::from(flag)),
            Value::Outcome(_) => Err(OperandError::NotAnInteger {
                value: self.to_string(),
            }),
        }
    }

    /// Interpret the value as a boolean: `1`/`true` or `0`/`false`.
    pub fn as_boolean(&self) -> Result<bool, OperandError> {
        match *self {
            Value::Literal(flag) | Value::Outcome(flag) => Ok(flag),
            Value::Digits("1") => Ok(true),
            Value::Digits("0") => Ok(false),
            Value::Digits(_) => Err(OperandError::NotABoolean {
                value: self.to_string(),
            }),
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Digits(digits) => write!(f, "{}", digits),
            Value::Literal(true) => write!(f, "1"),
            Value::Literal(false) => write!(f, "0"),
            Value::Outcome(flag) => write!(f, "{}", flag),
        }
    }
}
