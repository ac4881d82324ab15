//! # tally
//!
//! tally evaluates arithmetic expressions over literal numbers with a fixed
//! operator set: `+ - * / % ^` plus prefix negate `~`, postfix factorial `!`,
//! average `@`, min `&`, and max `$`, with parentheses for grouping and
//! insignificant whitespace.
//!
//! Evaluation is a pure, stateless computation: each call lexes the input,
//! builds an expression tree, and folds it to one `f64`. Concurrent callers
//! need no coordination.
//!
//! Two behaviors are deliberate and worth knowing about:
//!
//! - `^` is left-associative: `2 ^ 3 ^ 2` is `(2 ^ 3) ^ 2 = 64`.
//! - The `@ & $` tier binds tighter than `^`, `* / %`, and `+ -`.

use thiserror::Error;

use tally_lexer::{Lexer, Token};

pub use tally_ast::ast;
pub use tally_eval::EvalError;
pub use tally_parser::ParseError;

/// Represents all errors the evaluator can surface: syntax errors from
/// lexing/parsing and domain errors from evaluation. Messages are meant to
/// be shown to the end user verbatim.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Evaluate an arithmetic expression to a single number.
///
/// # Errors
///
/// Returns a syntax error for malformed input (unbalanced parentheses,
/// unrecognized characters, misplaced operators) and a domain error for
/// mathematically undefined operations (division or modulo by zero,
/// factorial of a negative or fractional value). No partial results are
/// returned on failure.
///
/// # Examples
///
/// ```
/// assert_eq!(tally::evaluate("1 + 2 * 3").unwrap(), 7.0);
/// assert_eq!(tally::evaluate("4 + (5 + 2! - 3!) + ((5 * 3) @ 13)").unwrap(), 19.0);
/// assert!(tally::evaluate("10 / 0").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<f64, Error> {
    let expr = parse(expression)?;
    Ok(tally_eval::evaluate_expression(&expr)?)
}

/// Parse an expression into its tree without evaluating it.
///
/// # Errors
///
/// Returns the same syntax errors as [`evaluate`].
pub fn parse(expression: &str) -> Result<ast::ExpressionNode, Error> {
    let tokens: Vec<Token> = Lexer::new(expression).collect();
    Ok(tally_parser::parse_expression(&tokens)?)
}
