//! Boolean condition expressions.
//!
//! Evaluates small infix conditions such as `i lt 10` or
//! `(1 lt 2) and (3 gt 2)` to a `bool`. See [`evaluator`] for the reduction
//! rules and [`scanner`] for the token grammar.
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

// Re-export for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use alloc::{format, string::String, string::ToString, vec::Vec};

pub mod errors;
pub mod evaluator;
pub mod scanner;
pub mod value;

pub use errors::{EvalError, OperandError, StackError};
pub use evaluator::{Evaluator, EvaluatorOptions, Operator, evaluate, evaluate_with};

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level
    /// Call this at the start of tests where you want to see logging output
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
