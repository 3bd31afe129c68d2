//! Error rendering using ariadne
//!
//! Prints an [`EvalError`] as a report over the expression text, with the
//! offending token labelled when its position is known.

use crate::EvalError;
use ariadne::{Color, IndexType, Label, Report, ReportKind, Source};
use std::error::Error as _;
use std::io::Write;

const SOURCE_ID: &str = "<expression>";

/// Render an error with formatting to stderr
///
/// # Example
/// ```no_run
/// use boolex::{evaluate, render_error};
///
/// if let Err(e) = evaluate("1 lt") {
///     render_error(&e);
/// }
/// ```
pub fn render_error(error: &EvalError) {
    render_error_to_writer(error, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
pub fn render_error_to(error: &EvalError, writer: &mut dyn Write) -> std::io::Result<()> {
    render_error_to_writer(error, writer, true)
}

/// Render an error to a String (useful for logs, web UIs, etc.)
pub fn render_error_to_string(error: &EvalError) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
pub fn render_error_to_string_no_color(error: &EvalError) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    error: &EvalError,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let source = error.expression();
    let label = match (error, error.source()) {
        (_, Some(cause)) => cause.to_string(),
        (EvalError::UnknownOperator { .. }, None) => "unknown operator".to_string(),
        (EvalError::TrailingValues { .. }, None) => "unconsumed value".to_string(),
        (_, None) => error.to_string(),
    };

    if source.trim().is_empty() {
        return writeln!(writer, "Error: {}\n  {}", error, label);
    }

    // Zero-width positions (end of input) are reported against the whole expression.
    let span = match error.span() {
        Some(span) if !span.0.is_empty() => span.0,
        _ => 0..source.len(),
    };

    let mut report = Report::build(ReportKind::Error, (SOURCE_ID, span.clone()))
        .with_message(error.to_string())
        .with_config(
            ariadne::Config::default()
                .with_color(use_color)
                .with_index_type(IndexType::Byte),
        )
        .with_label(
            Label::new((SOURCE_ID, span))
                .with_message(label)
                .with_color(Color::Red),
        );

    if matches!(error, EvalError::InvalidOperand { .. } | EvalError::TrailingValues { .. }) {
        report = report
            .with_help("operators have no precedence; group sub-expressions with parentheses");
    }

    report
        .finish()
        .write((SOURCE_ID, Source::from(source)), &mut *writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluate;

    fn render(source: &str) -> String {
        let err = evaluate(source).expect_err("expression should fail");
        render_error_to_string_no_color(&err)
    }

    #[test]
    fn test_render_unknown_operator() {
        let output = render("1 xor 2");

        assert!(output.contains("Error"));
        assert!(output.contains("1 xor 2"));
        assert!(output.contains("'xor'"));
    }

    #[test]
    fn test_render_incomplete_expression_shows_cause() {
        let output = render("1 lt");

        assert!(output.contains("Maybe expression is incomplete"));
        assert!(output.contains("value stack is empty"));
    }

    #[test]
    fn test_render_empty_expression() {
        // Nothing to point at; must still produce a report.
        let output = render("");
        assert!(!output.is_empty());
    }

    #[test]
    fn test_render_multibyte_expression_keeps_snippet() {
        let output = render("1 lt 2 ééé");

        assert!(output.contains("1 lt 2 ééé"), "{}", output);
        assert!(output.contains("unknown operator"), "{}", output);

        let output = render("ééé");
        assert!(output.lines().count() > 1, "{}", output);
        assert!(output.contains("unknown operator"), "{}", output);
    }

    #[test]
    fn test_render_label_does_not_repeat_header() {
        let output = render("1 xor 2");
        assert_eq!(output.matches("Unknown operator 'xor'").count(), 1, "{}", output);
        assert!(output.contains("unknown operator"));

        let output = render("1 2");
        assert!(output.contains("unconsumed value"), "{}", output);
    }

    #[test]
    fn test_render_to_string_is_multiline() {
        let output = render("(1 lt 2) lt 3");

        assert!(output.lines().count() > 1);
        assert!(output.contains("parentheses"));
    }
}
