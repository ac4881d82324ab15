//! Lexer for arithmetic expressions using the 'logos' crate
//! Recognizes number literals, the fixed operator set, and parentheses

use crate::token::{Location, Token, TokenType};
use logos::Logos;

/// Raw token type used by the logos lexer
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum RawToken {
    // --- Literals ---
    #[regex(r"[0-9]+", |lex| lex.slice().parse().ok())]
    IntLiteral(i64),
    #[regex(r"[0-9]+\.[0-9]+", |lex| lex.slice().parse().ok())]
    FloatLiteral(f64),

    // --- Operators ---
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("^")]
    Caret,
    #[token("~")]
    Tilde,
    #[token("!")]
    Bang,
    #[token("@")]
    At,
    #[token("$")]
    Dollar,
    #[token("&")]
    Ampersand,

    // --- Delimiters ---
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,

    // --- Whitespace (skipped) ---
    #[regex(r"[ \t\n\r]+", logos::skip)]
    // --- Error ---
    Error,
}

/// Expression lexer
pub struct Lexer<'source> {
    /// The logos lexer instance
    logos_lexer: logos::Lexer<'source, RawToken>,
    /// Current line number (1-based)
    line: usize,
    /// Current column number (1-based)
    column: usize,
    /// Current byte offset in source
    offset: usize,
}

impl<'source> Lexer<'source> {
    /// Create a new lexer for the given source text
    pub fn new(source: &'source str) -> Self {
        Self {
            logos_lexer: RawToken::lexer(source),
            line: 1,
            column: 1,
            offset: 0,
        }
    }

    /// Convert a RawToken to our semantic Token type
    fn convert_token(&self, raw_token: RawToken, lexeme: &str) -> Token {
        let location = Location {
            line: self.line,
            column: self.column,
            offset: self.offset,
        };

        let token_type = match raw_token {
            // Literals
            RawToken::IntLiteral(n) => TokenType::Integer(n),
            RawToken::FloatLiteral(x) => TokenType::Float(x),

            // Operators
            RawToken::Plus => TokenType::Plus,
            RawToken::Minus => TokenType::Minus,
            RawToken::Star => TokenType::Star,
            RawToken::Slash => TokenType::Slash,
            RawToken::Percent => TokenType::Percent,
            RawToken::Caret => TokenType::Caret,
            RawToken::Tilde => TokenType::Tilde,
            RawToken::Bang => TokenType::Bang,
            RawToken::At => TokenType::At,
            RawToken::Dollar => TokenType::Dollar,
            RawToken::Ampersand => TokenType::Ampersand,

            // Delimiters
            RawToken::LParen => TokenType::LeftParen,
            RawToken::RParen => TokenType::RightParen,

            RawToken::Error => TokenType::Error(format!(
                "Invalid token at {}:{}",
                self.line, self.column
            )),
        };

        Token::new(token_type, lexeme.to_string(), location)
    }

    /// Update line and column numbers based on lexeme
    fn update_position(&mut self, lexeme: &str) {
        for c in lexeme.chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            self.offset += c.len_utf8();
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let raw_token = self.logos_lexer.next()?;

        // Skipped whitespace never reaches us as a token; walk the gap
        // between the previous token's end and this one's start so the
        // location below is measured from the real source position.
        let span = self.logos_lexer.span();
        let source = self.logos_lexer.source();
        if span.start > self.offset {
            let gap = &source[self.offset..span.start];
            self.update_position(gap);
        }

        let lexeme = self.logos_lexer.slice();
        let token = match raw_token {
            Ok(token) => self.convert_token(token, lexeme),
            Err(_) => Token::new(
                TokenType::Error(format!("Invalid token at {}:{}", self.line, self.column)),
                lexeme.to_string(),
                Location {
                    line: self.line,
                    column: self.column,
                    offset: self.offset,
                },
            ),
        };
        self.update_position(lexeme);
        Some(token)
    }
}
