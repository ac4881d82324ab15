//! Parser for the tally arithmetic expression engine.
//!
//! Consumes the semantic tokens produced by `tally_lexer` and builds a
//! `tally_ast` expression tree using precedence climbing. Binary tiers bind,
//! tightest first: `@ & $`, then `^`, then `* / %`, then `+ -`, every one of
//! them left-associative. Postfix `!` binds tighter than prefix `~`, and a
//! `-` in operand position attaches to the following number or group before
//! `!` does, so `-3!` is the factorial of a negative value.

pub mod parser;

pub use parser::error::ParseError;
pub use parser::token_stream::TokenSlice;
pub use parser::{parse_expression, MAX_NESTING_DEPTH};
