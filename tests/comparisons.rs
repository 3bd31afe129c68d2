#[macro_use]
mod cases;

use boolex::{EvalError, OperandError};

// ======== Ordering Operators (word forms) ========

test_case! {
    name: less_than,
    input: "1 lt 2",
    result: true,
}

test_case! {
    name: less_than_equal_operands,
    input: "2 lt 2",
    result: false,
}

test_case! {
    name: less_than_or_equal,
    input: "2 lt= 2",
    result: true,
}

test_case! {
    name: greater_than,
    input: "3 gt 2",
    result: true,
}

test_case! {
    name: greater_than_or_equal,
    input: "2 gt= 2",
    result: true,
}

// ======== Ordering Operators (symbolic forms) ========

test_case! {
    name: symbolic_less_than,
    input: "1 < 2",
    result: true,
}

test_case! {
    name: symbolic_less_than_or_equal,
    input: "3 <= 2",
    result: false,
}

test_case! {
    name: symbolic_greater_than,
    input: "10 > 9",
    result: true,
}

test_case! {
    name: symbolic_greater_than_or_equal,
    input: "2 >= 3",
    result: false,
}

test_case! {
    name: without_spaces,
    input: "12<=12",
    result: true,
}

// ======== Equality ========

test_case! {
    name: integer_equality,
    input: "5 = 5",
    result: true,
}

test_case! {
    name: integer_inequality,
    input: "5 = 6",
    result: false,
}

test_case! {
    name: leading_zeros,
    input: "007 = 7",
    result: true,
}

test_case! {
    name: literal_compares_as_digit,
    input: "true = 1",
    result: true,
}

test_case! {
    name: not_equals_is_unknown,
    input: "5 != 6",
    error: EvalError::UnknownOperator { operator, .. } if operator == "!=",
}

test_case! {
    name: overflowing_integer,
    input: "1 lt 123456789012345678901234567890",
    error: EvalError::InvalidOperand { source: OperandError::IntegerOverflow { .. }, .. },
}

// ======== Operand order ========

#[test]
fn operand_order_matches_reading_order() {
    let values = [0i64, 1, 2, 7, 10, 99, 100, 4096, i64::MAX];
    for &a in &values {
        for &b in &values {
            if a == b {
                continue;
            }
            let cases = [
                (format!("{a} lt {b}"), a < b),
                (format!("{a} < {b}"), a < b),
                (format!("{a} lt= {b}"), a <= b),
                (format!("{a} gt {b}"), a > b),
                (format!("{a} > {b}"), a > b),
                (format!("{a} gt= {b}"), a >= b),
            ];
            for (expr, expected) in cases {
                pretty_assertions::assert_eq!(boolex::evaluate(&expr), Ok(expected), "{}", expr);
            }
        }
    }
}

#[test]
fn whitespace_does_not_matter() {
    pretty_assertions::assert_eq!(boolex::evaluate("1   lt   2"), boolex::evaluate("1 lt 2"));
    pretty_assertions::assert_eq!(boolex::evaluate("3   gt=   4"), boolex::evaluate("3 gt= 4"));
}
