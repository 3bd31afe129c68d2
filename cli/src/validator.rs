use boolex::{Token, scanner::Scanner};
use reedline::{ValidationResult, Validator};

/// Number of `(` still open at the end of `buffer`.
///
/// Returns `None` when the buffer cannot be scanned, so the line is submitted
/// and the evaluator reports the error.
pub fn calculate_depth(buffer: &str) -> Option<usize> {
    let mut depth: isize = 0;

    for item in Scanner::new(buffer) {
        match item {
            Ok((_, Token::OpenParen)) => depth += 1,
            Ok((_, Token::CloseParen)) => depth -= 1,
            Ok(_) => {}
            Err(_) => return None,
        }
    }

    Some(depth.max(0) as usize)
}

/// Keeps the REPL reading lines while parentheses are unbalanced.
pub struct ParenValidator;

impl Validator for ParenValidator {
    fn validate(&self, line: &str) -> ValidationResult {
        match calculate_depth(line) {
            Some(depth) if depth > 0 => ValidationResult::Incomplete,
            _ => ValidationResult::Complete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth() {
        assert_eq!(calculate_depth("1 lt 2"), Some(0));
        assert_eq!(calculate_depth("(1 lt 2) and ("), Some(1));
        assert_eq!(calculate_depth("((true"), Some(2));
        assert_eq!(calculate_depth("true))"), Some(0));
        assert_eq!(calculate_depth("(1 xor"), None);
    }
}
