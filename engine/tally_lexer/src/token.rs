use std::fmt;

/// Represents a token's location in the source expression.
///
/// Tracks line and column numbers (1-based) and the byte offset (0-based).
/// Expressions are usually a single line, but embedded newlines count as
/// ordinary whitespace and bump the line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    /// The 1-based line number in the source expression
    pub line: usize,
    /// The 1-based column number in the source expression
    pub column: usize,
    /// The 0-based byte offset from the start of the source
    pub offset: usize,
}

/// Represents the type of a token in an arithmetic expression.
///
/// The operator set is closed and fixed at compile time; there is no
/// identifier or keyword category.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenType {
    // Literals
    Integer(i64),
    Float(f64),

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    Tilde,
    Bang,
    At,
    Dollar,
    Ampersand,

    // Delimiters
    LeftParen,
    RightParen,

    /// A character (or unrepresentable literal) the lexer could not accept
    Error(String),
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenType::Integer(n) => write!(f, "{n}"),
            TokenType::Float(x) => write!(f, "{x}"),
            TokenType::Plus => write!(f, "+"),
            TokenType::Minus => write!(f, "-"),
            TokenType::Star => write!(f, "*"),
            TokenType::Slash => write!(f, "/"),
            TokenType::Percent => write!(f, "%"),
            TokenType::Caret => write!(f, "^"),
            TokenType::Tilde => write!(f, "~"),
            TokenType::Bang => write!(f, "!"),
            TokenType::At => write!(f, "@"),
            TokenType::Dollar => write!(f, "$"),
            TokenType::Ampersand => write!(f, "&"),
            TokenType::LeftParen => write!(f, "("),
            TokenType::RightParen => write!(f, ")"),
            TokenType::Error(msg) => write!(f, "error: {msg}"),
        }
    }
}

/// A semantic token: its type, the exact source text it was lexed from, and
/// where in the source it starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub token_type: TokenType,
    pub lexeme: String,
    pub location: Location,
}

impl Token {
    pub fn new(token_type: TokenType, lexeme: String, location: Location) -> Self {
        Self {
            token_type,
            lexeme,
            location,
        }
    }
}
