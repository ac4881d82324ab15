// Conversions from lexer token types into the closed operator enums.

use thiserror::Error;

use crate::ast::{BinaryOperator, UnaryOperator};
use tally_lexer::TokenType;

/// Raised when a token type does not name an operator of the requested arity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("token '{0}' is not a binary operator")]
    NotBinaryOperator(String),
    #[error("token '{0}' is not a unary operator")]
    NotUnaryOperator(String),
}

impl TryFrom<&TokenType> for BinaryOperator {
    type Error = ConversionError;

    fn try_from(token_type: &TokenType) -> Result<Self, Self::Error> {
        match token_type {
            TokenType::Plus => Ok(BinaryOperator::Add),
            TokenType::Minus => Ok(BinaryOperator::Sub),
            TokenType::Star => Ok(BinaryOperator::Mul),
            TokenType::Slash => Ok(BinaryOperator::Div),
            TokenType::Percent => Ok(BinaryOperator::Mod),
            TokenType::Caret => Ok(BinaryOperator::Pow),
            TokenType::At => Ok(BinaryOperator::Average),
            TokenType::Ampersand => Ok(BinaryOperator::Min),
            TokenType::Dollar => Ok(BinaryOperator::Max),
            other => Err(ConversionError::NotBinaryOperator(other.to_string())),
        }
    }
}

impl TryFrom<&TokenType> for UnaryOperator {
    type Error = ConversionError;

    fn try_from(token_type: &TokenType) -> Result<Self, Self::Error> {
        match token_type {
            TokenType::Tilde => Ok(UnaryOperator::Negate),
            TokenType::Bang => Ok(UnaryOperator::Factorial),
            other => Err(ConversionError::NotUnaryOperator(other.to_string())),
        }
    }
}
