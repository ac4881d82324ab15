//! Expression tree for the tally arithmetic expression engine.
//!
//! The parser builds an [`ast::ExpressionNode`] tree from the token stream
//! and the evaluator folds it bottom-up into a single `f64`. Operator sets
//! are closed enums, so evaluation is exhaustive match dispatch with no
//! runtime registry.

/// Node and operator definitions for parsed expressions.
pub mod ast;
/// Conversions from lexer token types into operator enums.
pub mod conversions;

pub use ast::{
    BinaryExpressionNode, BinaryOperator, ExpressionNode, LiteralNode, UnaryExpressionNode,
    UnaryOperator,
};
pub use conversions::ConversionError;
