use core::fmt;
use core::ops::Range;

use crate::evaluator::Operator;

/// Byte range of a token inside the expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span(pub Range<usize>);

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self(start..end)
    }

    pub fn str_of<'a>(&self, source: &'a str) -> &'a str {
        &source[self.0.start..self.0.end]
    }
}

/// A classified piece of the expression.
///
/// Spaces are consumed by the scanner and never surface as tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    OpenParen,
    CloseParen,
    Operator(Operator),
    /// `true` or `false`.
    Boolean(bool),
    /// A run of ASCII digits, kept as written.
    Integer(&'a str),
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::OpenParen => write!(f, "("),
            Token::CloseParen => write!(f, ")"),
            Token::Operator(op) => write!(f, "{}", op),
            Token::Boolean(value) => write!(f, "{}", value),
            Token::Integer(digits) => write!(f, "{}", digits),
        }
    }
}
