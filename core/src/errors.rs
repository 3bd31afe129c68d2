//! Errors produced while evaluating a boolean expression.
//!
//! Every failure aborts the whole evaluation. The public [`EvalError`] carries
//! the original expression text so callers can report it as-is; the structural
//! cause ([`StackError`] or [`OperandError`]) is chained through
//! `Error::source` rather than flattened into the message.

use crate::String;
use crate::scanner::Span;
use core::num::ParseIntError;
use thiserror::Error;

/// Failure returned by [`evaluate`](crate::evaluate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A non-digit token that is neither a boolean literal nor a known operator.
    #[error("Unknown operator '{operator}' in boolean expression '{expression}'")]
    UnknownOperator {
        operator: String,
        expression: String,
        span: Span,
    },

    /// The stacks underflowed or a parenthesis was left open.
    #[error("Unable to parse boolean expression '{expression}'. Maybe expression is incomplete!")]
    Incomplete {
        expression: String,
        #[source]
        source: StackError,
    },

    /// An operator was applied to a value of the wrong kind.
    #[error("Invalid operand for '{operator}' in boolean expression '{expression}'")]
    InvalidOperand {
        operator: String,
        expression: String,
        span: Span,
        #[source]
        source: OperandError,
    },

    /// The final result is not a boolean (e.g. the whole expression is `5`).
    #[error("Boolean expression '{expression}' does not evaluate to a boolean")]
    NotBoolean {
        expression: String,
        #[source]
        source: OperandError,
    },

    /// More than one value was left after all operators were applied.
    #[error(
        "Unable to parse boolean expression '{expression}': {remaining} value(s) left unconsumed"
    )]
    TrailingValues { expression: String, remaining: usize },
}

impl EvalError {
    /// The original expression text.
    pub fn expression(&self) -> &str {
        match self {
            EvalError::UnknownOperator { expression, .. }
            | EvalError::Incomplete { expression, .. }
            | EvalError::InvalidOperand { expression, .. }
            | EvalError::NotBoolean { expression, .. }
            | EvalError::TrailingValues { expression, .. } => expression,
        }
    }

    /// Location of the offending token in the expression, when known.
    pub fn span(&self) -> Option<Span> {
        match self {
            EvalError::UnknownOperator { span, .. } | EvalError::InvalidOperand { span, .. } => {
                Some(span.clone())
            }
            EvalError::Incomplete { source, .. } => Some(source.span()),
            EvalError::NotBoolean { .. } | EvalError::TrailingValues { .. } => None,
        }
    }
}

/// Structural defect found by the stack machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StackError {
    /// A `)` with no matching `(` on the operator stack.
    #[error("no open parenthesis matches the closing parenthesis")]
    OperatorUnderflow { span: Span },

    /// An operator (or the final result) needed a value that was not there.
    #[error("value stack is empty")]
    ValueUnderflow { span: Span },

    /// A `(` was still pending when the input ended.
    #[error("parenthesis is never closed")]
    UnclosedParenthesis { span: Span },
}

impl StackError {
    pub fn span(&self) -> Span {
        match self {
            StackError::OperatorUnderflow { span }
            | StackError::ValueUnderflow { span }
            | StackError::UnclosedParenthesis { span } => span.clone(),
        }
    }
}

/// A value that cannot be used where it was consumed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperandError {
    /// Digits that do not fit a signed 64-bit integer.
    #[error("'{value}' is not a valid integer")]
    IntegerOverflow {
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// A comparison result (`true`/`false`) used as an integer.
    #[error("'{value}' is not an integer")]
    NotAnInteger { value: String },

    /// Anything other than `1`/`0`/`true`/`false` used as a boolean.
    #[error("'{value}' is not a boolean")]
    NotABoolean { value: String },
}
