mod highlighter;
mod validator;

use boolex::{EvaluatorOptions, evaluate_with, render_error, scanner::Scanner};
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use reedline::{DefaultPrompt, DefaultPromptSegment, Reedline, Signal};
use std::io::{BufRead, BufReader};

/// boolex - evaluate boolean condition expressions
#[derive(Parser, Debug)]
#[command(name = "boolex")]
#[command(about = "Evaluate boolean condition expressions", long_about = None)]
struct Args {
    /// Keep only the last value when an expression leaves several behind
    #[arg(long)]
    lenient: bool,

    /// Print the scanned tokens (for debugging)
    #[arg(long)]
    debug_tokens: bool,

    /// Expression to evaluate (if not provided, reads from stdin)
    expression: Option<String>,
}

impl Args {
    fn options(&self) -> EvaluatorOptions {
        EvaluatorOptions {
            strict_trailing_values: !self.lenient,
        }
    }
}

/// Evaluate one expression and print the outcome. Returns whether it succeeded.
fn interpret_input(args: &Args, input: &str) -> bool {
    if args.debug_tokens {
        println!("=== Tokens ===");
        for item in Scanner::new(input) {
            match item {
                Ok((span, token)) => println!("{:>3}..{:<3} {}", span.0.start, span.0.end, token),
                Err(_) => break,
            }
        }
        println!();
    }

    match evaluate_with(args.options(), input) {
        Ok(value) => {
            println!("{}", value);
            true
        }
        Err(e) => {
            tracing::debug!(error = ?e, "evaluation failed");
            render_error(&e);
            false
        }
    }
}

fn run_repl(args: &Args) -> Result<usize> {
    let mut line_editor = Reedline::create()
        .with_highlighter(Box::new(highlighter::Highlighter))
        .with_validator(Box::new(validator::ParenValidator));
    let prompt = DefaultPrompt::new(
        DefaultPromptSegment::Basic("boolex".to_string()),
        DefaultPromptSegment::Empty,
    );

    println!("boolex REPL - Type expressions to evaluate (Ctrl+D or Ctrl+C to exit)");

    let mut failures = 0;
    loop {
        match line_editor.read_line(&prompt).into_diagnostic()? {
            Signal::Success(buffer) => {
                // Newlines only come from unbalanced parentheses; spaces are the
                // only separator the scanner knows.
                let input = buffer.replace('\n', " ");
                if input.trim().is_empty() {
                    continue;
                }
                if !interpret_input(args, &input) {
                    failures += 1;
                }
            }
            Signal::CtrlD | Signal::CtrlC => {
                println!("\nGoodbye!");
                return Ok(failures);
            }
        }
    }
}

/// `lines()` leaves the `\r` of CRLF input behind; it is not a separator.
fn strip_line_ending(line: &str) -> &str {
    line.trim_end_matches('\r')
}

fn run_pipe(args: &Args) -> Result<usize> {
    let stdin = std::io::stdin();
    let reader = BufReader::new(stdin.lock());

    let mut failures = 0;
    for line in reader.lines() {
        let line = line.into_diagnostic()?;
        let line = strip_line_ending(&line);
        if line.trim().is_empty() {
            continue;
        }
        if !interpret_input(args, line) {
            failures += 1;
        }
    }
    Ok(failures)
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .into_diagnostic()?;

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let failures = if let Some(expr) = &args.expression {
        usize::from(!interpret_input(&args, expr))
    } else if atty::is(atty::Stream::Stdin) {
        run_repl(&args)?
    } else {
        run_pipe(&args)?
    };

    if failures > 0 {
        miette::bail!("{} expression(s) failed to evaluate", failures);
    }
    Ok(())
}
