use nom::error::ErrorKind;
use thiserror::Error;

use crate::parser::token_stream::TokenSlice;

/// Represents all errors that can occur while parsing an expression.
///
/// Messages are user-facing and name the offending lexeme and its column;
/// callers surface them verbatim.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The lexer produced an error token (unrecognized character or an
    /// unrepresentable literal).
    #[error("Invalid token '{lexeme}' at column {column}.")]
    InvalidToken { lexeme: String, column: usize },
    /// Found a token that cannot start or continue an expression here.
    #[error("Unexpected token '{lexeme}' at column {column}.")]
    UnexpectedToken { lexeme: String, column: usize },
    /// Reached the end of input while an operand was still expected.
    #[error("Unexpected end of input.")]
    UnexpectedEndOfInput,
    /// A `(` was never closed.
    #[error("Expected closing parenthesis ')' for the group opened at column {column}.")]
    ExpectedClosingParen { column: usize },
    /// A complete expression was parsed but tokens remain (stray `)` included).
    #[error("Extra tokens after expression, starting with '{lexeme}' at column {column}.")]
    UnexpectedTrailingTokens { lexeme: String, column: usize },
    /// Parentheses or prefix chains nest beyond the supported depth.
    #[error("Expression nesting exceeds the supported depth of {limit}.")]
    NestingTooDeep { limit: usize },
}

impl ParseError {
    /// An `UnexpectedToken` (or end-of-input) error anchored at the front of
    /// the given token slice.
    pub fn at(input: TokenSlice<'_>) -> Self {
        match input.peek() {
            Some(token) => ParseError::UnexpectedToken {
                lexeme: token.lexeme.clone(),
                column: token.location.column,
            },
            None => ParseError::UnexpectedEndOfInput,
        }
    }
}

impl<'a> nom::error::ParseError<TokenSlice<'a>> for ParseError {
    fn from_error_kind(input: TokenSlice<'a>, _kind: ErrorKind) -> Self {
        ParseError::at(input)
    }

    fn append(_input: TokenSlice<'a>, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}
