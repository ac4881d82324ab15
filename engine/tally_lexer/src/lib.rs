//! Tokenizer for the tally arithmetic expression engine.
//!
//! Turns a raw expression string into a flat sequence of semantic tokens:
//! number literals, the fixed operator set (`+ - * / % ^ ~ ! @ $ &`), and
//! parentheses. Whitespace is insignificant and dropped during lexing; any
//! other character becomes an error token that the parser reports as a
//! syntax error with its position.

pub mod lexer;
pub mod token;

pub use lexer::Lexer;
pub use token::{Location, Token, TokenType};
