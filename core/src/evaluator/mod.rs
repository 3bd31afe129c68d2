//! Stack-machine evaluator for boolean expressions.
//!
//! The evaluator keeps two stacks: pending operators (interleaved with `(`
//! markers) and values. Tokens are pushed as they are scanned; a `)` applies
//! operators back to the matching `(`, and once the input is exhausted the
//! remaining operators are applied in stack order. There is no precedence
//! between operators and no short-circuiting, so grouping must be explicit:
//!
//! ```
//! use boolex_core::evaluate;
//!
//! assert_eq!(evaluate("(1 lt 2) and (3 gt 2)"), Ok(true));
//! assert_eq!(evaluate("2 >= 3"), Ok(false));
//! ```
//!
//! ## Design Principles
//!
//! - **Never panic**: malformed input surfaces as an [`EvalError`]
//! - **No shared state**: each call builds and drops its own stacks

mod eval;
mod operators;


pub use eval::Evaluator;
pub use operators::{OPERATORS, Operator};

use crate::errors::EvalError;

/// Knobs for a single evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluatorOptions {
    /// Reject expressions that leave more than one value on the stack, such
    /// as `1 2`. When disabled only the topmost value is used and the rest is
    /// silently dropped.
    pub strict_trailing_values: bool,
}

impl Default for EvaluatorOptions {
    fn default() -> Self {
        Self {
            strict_trailing_values: true,
        }
    }
}

/// Evaluate `expression` with default options.
pub fn evaluate(expression: &str) -> Result<bool, EvalError> {
    evaluate_with(EvaluatorOptions::default(), expression)
}

/// Evaluate `expression` with custom options.
///
/// ## Example
///
/// ```
/// use boolex_core::{EvaluatorOptions, evaluate_with};
///
/// let lenient = EvaluatorOptions { strict_trailing_values: false };
/// assert_eq!(evaluate_with(lenient, "1 2 lt 3"), Ok(true));
/// ```
pub fn evaluate_with(options: EvaluatorOptions, expression: &str) -> Result<bool, EvalError> {
    Evaluator::new(options, expression).run()
}
