//! Left-to-right scanner for boolean expressions.
//!
//! The scanner is driven by a byte cursor and hands out one token at a time,
//! so the evaluator can interleave scanning with stack reduction. No token
//! list is ever built.
//!
//! Classification at the cursor, in priority order:
//!
//! 1. `(` opens a group.
//! 2. ` ` is skipped. It is the only separator; tabs and newlines are not.
//! 3. `)` closes a group.
//! 4. Anything that is not an ASCII digit starts a maximal run of characters
//!    that are neither digits nor separators. The run is either a boolean
//!    literal (`true`/`false`, case-sensitive) or must name a known operator.
//! 5. An ASCII digit starts a maximal run of digits.

mod token;


pub use token::{Span, Token};

use crate::{ToString, errors::EvalError, evaluator::Operator};

const SPACE: u8 = b' ';
const OPEN_PAREN: u8 = b'(';
const CLOSE_PAREN: u8 = b')';

/// Literal spellings of the two boolean values.
pub const BOOLEAN_LITERALS: [(&str, bool); 2] = [("true", true), ("false", false)];

fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '(' | ')')
}

/// Iterator over the tokens of an expression.
///
/// Yields `(Span, Token)` pairs. An unknown operator yields a single error
/// and ends the iteration.
pub struct Scanner<'a> {
    source: &'a str,
    cursor: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, cursor: 0 }
    }

    /// Scan the maximal run starting at the cursor whose characters satisfy
    /// `accept`. The first character is always taken.
    fn take_run(&self, accept: impl Fn(char) -> bool) -> &'a str {
        let source: &'a str = self.source;
        let rest = &source[self.cursor..];
        let mut chars = rest.char_indices();
        let first_len = chars.next().map_or(0, |(_, c)| c.len_utf8());
        let end = chars
            .find(|&(_, c)| !accept(c))
            .map_or(rest.len(), |(i, _)| i)
            .max(first_len);
        &rest[..end]
    }

    fn classify_word(&self, word: &'a str, span: Span) -> Result<Token<'a>, EvalError> {
        if let Some((_, value)) = BOOLEAN_LITERALS.iter().find(|(text, _)| *text == word) {
            return Ok(Token::Boolean(*value));
        }
        match Operator::from_token(word) {
            Some(op) => Ok(Token::Operator(op)),
            None => Err(EvalError::UnknownOperator {
                operator: word.to_string(),
                expression: self.source.to_string(),
                span,
            }),
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<(Span, Token<'a>), EvalError>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.source.as_bytes();
        while bytes.get(self.cursor) == Some(&SPACE) {
            self.cursor += 1;
        }

        let start = self.cursor;
        let token = match *bytes.get(start)? {
            OPEN_PAREN => {
                self.cursor += 1;
                Token::OpenParen
            }
            CLOSE_PAREN => {
                self.cursor += 1;
                Token::CloseParen
            }
            b if b.is_ascii_digit() => {
                let digits = self.take_run(|c| c.is_ascii_digit());
                self.cursor += digits.len();
                Token::Integer(digits)
            }
            _ => {
                let word = self.take_run(|c| !c.is_ascii_digit() && !is_separator(c));
                let span = Span::new(start, start + word.len());
                match self.classify_word(word, span) {
                    Ok(token) => {
                        self.cursor += word.len();
                        token
                    }
                    Err(err) => {
                        // Nothing after an unknown operator is scanned.
                        self.cursor = self.source.len();
                        return Some(Err(err));
                    }
                }
            }
        };

        Some(Ok((Span::new(start, self.cursor), token)))
    }
}
