//! Two-stack evaluation.

use crate::{
    ToString, Vec,
    errors::{EvalError, OperandError, StackError},
    evaluator::{EvaluatorOptions, Operator},
    scanner::{Scanner, Span, Token},
    value::Value,
};

/// Entry of the operator stack.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Pending {
    /// A `(` waiting for its `)`.
    Group(Span),
    Operator(Operator, Span),
}

/// Evaluator for a single expression.
///
/// Both stacks live only as long as one call to [`Evaluator::run`].
pub struct Evaluator<'a> {
    options: EvaluatorOptions,
    expression: &'a str,
    operators: Vec<Pending>,
    values: Vec<Value<'a>>,
}

impl<'a> Evaluator<'a> {
    pub fn new(options: EvaluatorOptions, expression: &'a str) -> Self {
        Self {
            options,
            expression,
            operators: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Scan the whole expression, reducing as groups close, then drain what
    /// is left and return the single remaining value.
    pub fn run(mut self) -> Result<bool, EvalError> {
        for token in Scanner::new(self.expression) {
            let (span, token) = token?;
            match token {
                Token::OpenParen => self.operators.push(Pending::Group(span)),
                Token::CloseParen => self.close_group(span)?,
                Token::Operator(op) => self.operators.push(Pending::Operator(op, span)),
                Token::Boolean(flag) => self.values.push(Value::Literal(flag)),
                Token::Integer(digits) => self.values.push(Value::Digits(digits)),
            }
        }

        self.drain()?;
        let end = Span::new(self.expression.len(), self.expression.len());
        let result = self.pop_value(&end)?;

        if self.options.strict_trailing_values && !self.values.is_empty() {
            return Err(EvalError::TrailingValues {
                expression: self.expression.to_string(),
                remaining: self.values.len(),
            });
        }

        let result = result
            .as_boolean()
            .map_err(|source| EvalError::NotBoolean {
                expression: self.expression.to_string(),
                source,
            })?;
        tracing::debug!(
            "Boolean expression {} evaluates to {}",
            self.expression,
            result
        );
        Ok(result)
    }

    /// Apply pending operators until the matching `(` is popped.
    fn close_group(&mut self, close: Span) -> Result<(), EvalError> {
        loop {
            match self.operators.pop() {
                Some(Pending::Group(_)) => return Ok(()),
                Some(Pending::Operator(op, span)) => self.reduce(op, span)?,
                None => {
                    return Err(self.incomplete(StackError::OperatorUnderflow { span: close }));
                }
            }
        }
    }

    /// Apply every remaining operator.
    fn drain(&mut self) -> Result<(), EvalError> {
        while let Some(pending) = self.operators.pop() {
            match pending {
                Pending::Operator(op, span) => self.reduce(op, span)?,
                Pending::Group(span) => {
                    return Err(self.incomplete(StackError::UnclosedParenthesis { span }));
                }
            }
        }
        Ok(())
    }

    /// Pop the right operand, then the left one, and push `left OP right`.
    fn reduce(&mut self, op: Operator, span: Span) -> Result<(), EvalError> {
        let right = self.pop_value(&span)?;
        let left = self.pop_value(&span)?;
        let outcome = op
            .apply(&left, &right)
            .map_err(|source| self.invalid_operand(&span, source))?;
        tracing::trace!(%left, %op, %right, %outcome, "reduced");
        self.values.push(Value::Outcome(outcome));
        Ok(())
    }

    fn pop_value(&mut self, span: &Span) -> Result<Value<'a>, EvalError> {
        self.values.pop().ok_or_else(|| {
            self.incomplete(StackError::ValueUnderflow { span: span.clone() })
        })
    }

    fn incomplete(&self, source: StackError) -> EvalError {
        EvalError::Incomplete {
            expression: self.expression.to_string(),
            source,
        }
    }

    fn invalid_operand(&self, span: &Span, source: OperandError) -> EvalError {
        EvalError::InvalidOperand {
            operator: span.str_of(self.expression).to_string(),
            expression: self.expression.to_string(),
            span: span.clone(),
            source,
        }
    }
}
