//! Shared `test_case!` macro for the integration tests.
//!
//! ```ignore
//! test_case! {
//!     name: less_than,
//!     input: "1 lt 2",
//!     result: true,
//! }
//!
//! test_case! {
//!     name: dangling_operator,
//!     input: "1 lt",
//!     error: EvalError::Incomplete { .. },
//! }
//! ```

macro_rules! test_case {
    {
        name: $name:ident,
        input: $input:expr,
        result: $result:expr $(,)?
    } => {
        #[test]
        fn $name() {
            let input: &str = $input;
            pretty_assertions::assert_eq!(
                boolex::evaluate(input),
                Ok($result),
                "input: {:?}",
                input
            );
        }
    };
    {
        name: $name:ident,
        input: $input:expr,
        error: $pattern:pat $(if $guard:expr)? $(,)?
    } => {
        #[test]
        fn $name() {
            let input: &str = $input;
            let result = boolex::evaluate(input);
            assert!(
                matches!(&result, Err($pattern) $(if $guard)?),
                "input: {:?}, got {:?}",
                input,
                result
            );
            if let Err(err) = result {
                assert_eq!(err.expression(), input);
            }
        }
    };
}
