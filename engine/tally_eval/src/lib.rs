//! Evaluator for the tally arithmetic expression engine.
//!
//! Folds a `tally_ast` expression tree bottom-up into a single `f64`.
//! Operands are uniformly promoted to floating point; mathematically
//! undefined operations (division or modulo by zero, factorial of a negative
//! or fractional value) are domain errors, never infinities or NaN results.

pub mod error;
pub mod evaluator;

pub use error::EvalError;
pub use evaluator::evaluate_expression;
