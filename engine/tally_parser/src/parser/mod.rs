// Parser implementation for arithmetic expressions using nom over token slices.
// Precedence climbing for the binary tiers, dedicated prefix/postfix handling
// for `~` and `!`, and an explicit nesting-depth bound.

use nom::IResult;

use tally_ast::{BinaryOperator, ExpressionNode, LiteralNode, UnaryOperator};
use tally_lexer::{Token, TokenType};

pub mod error;
pub mod token_stream;


use error::ParseError;
use token_stream::TokenSlice;

/// Hard bound on parenthesis and prefix-chain nesting. Exceeding it is a
/// syntax error rather than a stack overflow.
pub const MAX_NESTING_DEPTH: usize = 128;

type ParseResult<'a> = IResult<TokenSlice<'a>, ExpressionNode, ParseError>;

/// Parse a complete expression from lexed tokens.
///
/// The whole token stream must form exactly one expression: trailing tokens
/// (a stray `)` included) are an error, as is an empty stream or any error
/// token the lexer produced.
///
/// # Errors
///
/// Returns a [`ParseError`] describing the first offending token.
pub fn parse_expression(tokens: &[Token]) -> Result<ExpressionNode, ParseError> {
    // Error tokens are lexer rejections; report the first one up front so the
    // message points at the bad character rather than a parse dead-end.
    if let Some(token) = tokens
        .iter()
        .find(|t| matches!(t.token_type, TokenType::Error(_)))
    {
        return Err(ParseError::InvalidToken {
            lexeme: token.lexeme.clone(),
            column: token.location.column,
        });
    }

    let input = TokenSlice::new(tokens);
    match parse_binary_expression(input, 0, 0) {
        Ok((rest, expr)) => match rest.peek() {
            None => Ok(expr),
            Some(token) => Err(ParseError::UnexpectedTrailingTokens {
                lexeme: token.lexeme.clone(),
                column: token.location.column,
            }),
        },
        Err(nom::Err::Error(e) | nom::Err::Failure(e)) => Err(e),
        Err(nom::Err::Incomplete(_)) => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// The binary operator named by a token, if any.
fn get_binary_operator(token_type: &TokenType) -> Option<BinaryOperator> {
    BinaryOperator::try_from(token_type).ok()
}

/// Binding strength of a binary tier. Tightest first: `@ & $` outrank `^`,
/// which outranks `* / %`, which outranks `+ -`.
fn get_operator_precedence(op: &BinaryOperator) -> u8 {
    match op {
        BinaryOperator::Add | BinaryOperator::Sub => 1,
        BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod => 2,
        BinaryOperator::Pow => 3,
        BinaryOperator::Average | BinaryOperator::Min | BinaryOperator::Max => 4,
    }
}

fn check_depth(depth: usize) -> Result<(), nom::Err<ParseError>> {
    if depth > MAX_NESTING_DEPTH {
        Err(nom::Err::Failure(ParseError::NestingTooDeep {
            limit: MAX_NESTING_DEPTH,
        }))
    } else {
        Ok(())
    }
}

/// Parses a binary expression with precedence climbing.
///
/// Every tier is left-associative, `^` included: the leftmost pair folds
/// first, so `2 ^ 3 ^ 2` groups as `(2 ^ 3) ^ 2`. Same-tier chains are
/// consumed by the loop, not by recursion, so chain length never deepens
/// the stack.
fn parse_binary_expression(input: TokenSlice<'_>, min_precedence: u8, depth: usize) -> ParseResult<'_> {
    let (mut input, mut left) = parse_unary_expression(input, depth)?;

    while let Some(token) = input.peek() {
        let Some(op) = get_binary_operator(&token.token_type) else {
            break;
        };

        let precedence = get_operator_precedence(&op);
        if precedence < min_precedence {
            break;
        }
        log::debug!("binary climb: '{op}' at precedence {precedence} (min {min_precedence})");

        // Left-associative throughout, so the right-hand side climbs one
        // level tighter.
        let (next_input, right) = parse_binary_expression(input.advance(), precedence + 1, depth)?;
        left = ExpressionNode::binary(left, op, right);
        input = next_input;
    }

    Ok((input, left))
}

/// Parses prefix `~` chains. `~` binds looser than postfix `!`, so `~3!`
/// negates the factorial.
fn parse_unary_expression(input: TokenSlice<'_>, depth: usize) -> ParseResult<'_> {
    check_depth(depth)?;

    if let Some(token) = input.peek() {
        if token.token_type == TokenType::Tilde {
            let (rest, operand) = parse_unary_expression(input.advance(), depth + 1)?;
            return Ok((rest, ExpressionNode::unary(UnaryOperator::Negate, operand)));
        }
    }

    parse_postfix_expression(input, depth)
}

/// Parses postfix `!` chains: `3!!` is `(3!)!`.
fn parse_postfix_expression(input: TokenSlice<'_>, depth: usize) -> ParseResult<'_> {
    let (mut input, mut expr) = parse_primary_expression(input, depth)?;

    while let Some(token) = input.peek() {
        if token.token_type != TokenType::Bang {
            break;
        }
        expr = ExpressionNode::unary(UnaryOperator::Factorial, expr);
        input = input.advance();
    }

    Ok((input, expr))
}

/// Parses a primary expression: a number literal, an optionally negative
/// number or group, or a parenthesized sub-expression.
///
/// A leading `-` here is part of the operand, not the binary subtraction
/// operator, and it attaches before postfix `!` does: `-3!` is the factorial
/// of -3 (a domain error downstream), while `~3!` is `-(3!)`.
fn parse_primary_expression(input: TokenSlice<'_>, depth: usize) -> ParseResult<'_> {
    let Some(token) = input.peek() else {
        return Err(nom::Err::Error(ParseError::UnexpectedEndOfInput));
    };

    match &token.token_type {
        TokenType::Integer(n) => Ok((
            input.advance(),
            ExpressionNode::Literal(LiteralNode::Int(*n)),
        )),
        TokenType::Float(x) => Ok((
            input.advance(),
            ExpressionNode::Literal(LiteralNode::Float(*x)),
        )),
        TokenType::Minus => parse_negative_operand(input, depth),
        TokenType::LeftParen => parse_paren_group(input, depth),
        _ => Err(nom::Err::Error(ParseError::at(input))),
    }
}

/// Parses `-<number>` or `-(...)`. Anything else after the `-` (another `-`,
/// a `~`) is rejected, matching the literal grammar `-?digits(.digits)?`.
fn parse_negative_operand(input: TokenSlice<'_>, depth: usize) -> ParseResult<'_> {
    let after_minus = input.advance();
    let Some(token) = after_minus.peek() else {
        return Err(nom::Err::Error(ParseError::UnexpectedEndOfInput));
    };

    match &token.token_type {
        TokenType::Integer(n) => Ok((
            after_minus.advance(),
            ExpressionNode::Literal(LiteralNode::Int(-n)),
        )),
        TokenType::Float(x) => Ok((
            after_minus.advance(),
            ExpressionNode::Literal(LiteralNode::Float(-x)),
        )),
        TokenType::LeftParen => {
            let (rest, group) = parse_paren_group(after_minus, depth)?;
            Ok((rest, ExpressionNode::unary(UnaryOperator::Negate, group)))
        }
        _ => Err(nom::Err::Error(ParseError::at(after_minus))),
    }
}

/// Parses `( expression )`, erroring on a missing `)` and bounding depth.
fn parse_paren_group(input: TokenSlice<'_>, depth: usize) -> ParseResult<'_> {
    // `input` is positioned at the opening parenthesis.
    let Some(open) = input.peek() else {
        return Err(nom::Err::Error(ParseError::UnexpectedEndOfInput));
    };
    check_depth(depth + 1)?;
    log::debug!("entering group opened at column {}", open.location.column);

    let (rest, inner) = parse_binary_expression(input.advance(), 0, depth + 1)?;
    match rest.peek() {
        Some(token) if token.token_type == TokenType::RightParen => Ok((rest.advance(), inner)),
        _ => Err(nom::Err::Failure(ParseError::ExpectedClosingParen {
            column: open.location.column,
        })),
    }
}
