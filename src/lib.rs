//! boolex - boolean condition expressions
//!
//! # Overview
//!
//! boolex evaluates the small condition language used to drive loops and
//! conditional steps in test scenarios, e.g. "repeat while `i lt 10`". Callers
//! substitute their variables into the string first and get a `bool` back.
//!
//! The language has:
//!
//! - integers (runs of ASCII digits) and the literals `true` / `false`
//! - comparisons: `lt`, `lt=`, `gt`, `gt=` (or `<`, `<=`, `>`, `>=`) and `=`
//! - connectives: `and`, `or`
//! - parentheses for grouping; a plain space is the only separator
//!
//! Operators have no precedence. They are applied in stack order, so mixed
//! chains should be parenthesized.
//!
//! # Quick Start
//!
//! ```
//! use boolex::evaluate;
//!
//! assert_eq!(evaluate("3 lt 10"), Ok(true));
//! assert_eq!(evaluate("(1 lt 2) and (3 gt 2)"), Ok(true));
//! assert!(evaluate("1 xor 2").is_err());
//! ```
//!
//! # Errors
//!
//! Every failure is an [`EvalError`] carrying the original expression. Use
//! [`render_error`] to print it with the offending token highlighted.

pub use boolex_core::{
    EvalError, Evaluator, EvaluatorOptions, OperandError, Operator, StackError, evaluate,
    evaluate_with,
};
pub use boolex_core::scanner::{self, Span, Token};

mod error_renderer;
pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};
