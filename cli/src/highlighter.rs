use boolex::{EvalError, Token, scanner::Scanner};
use nu_ansi_term::{Color, Style};
use reedline::StyledText;

const PLAIN: Color = Color::White;

fn token_color(token: &Token<'_>) -> Color {
    match token {
        Token::OpenParen | Token::CloseParen => Color::White,
        Token::Boolean(_) | Token::Integer(_) => Color::Cyan,
        Token::Operator(op) if op.is_comparison() => Color::Yellow,
        Token::Operator(_) => Color::Magenta,
    }
}

/// Colors the REPL input by running it through the expression scanner.
pub struct Highlighter;

impl reedline::Highlighter for Highlighter {
    fn highlight(&self, line: &str, _: usize) -> StyledText {
        let mut output = StyledText::new();
        let mut curr_end = 0;

        for item in Scanner::new(line) {
            let (span, color) = match item {
                Ok((span, token)) => (span, token_color(&token)),
                Err(EvalError::UnknownOperator { span, .. }) => (span, Color::Red),
                Err(_) => break,
            };
            if curr_end < span.0.start {
                output.push((Style::new().fg(PLAIN), line[curr_end..span.0.start].to_string()));
            }
            output.push((Style::new().fg(color), span.str_of(line).to_string()));
            curr_end = span.0.end;
        }

        if curr_end < line.len() {
            output.push((Style::new().fg(PLAIN), line[curr_end..].to_string()));
        }
        output
    }
}
