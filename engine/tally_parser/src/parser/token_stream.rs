use tally_lexer::Token;

/// A cursor over the lexed tokens of one expression.
///
/// Cheap to copy; `advance` returns a new slice rather than mutating, which
/// keeps backtracking in the parser free of bookkeeping.
#[derive(Debug, Clone, Copy)]
pub struct TokenSlice<'a>(pub &'a [Token]);

impl<'a> TokenSlice<'a> {
    /// Create a new token slice from lexed tokens
    pub fn new(tokens: &'a [Token]) -> Self {
        TokenSlice(tokens)
    }

    /// Get the current token without advancing
    pub fn peek(&self) -> Option<&'a Token> {
        self.0.first()
    }

    /// A slice positioned one token further along
    pub fn advance(&self) -> Self {
        if self.0.is_empty() {
            *self
        } else {
            TokenSlice(&self.0[1..])
        }
    }

    /// Check if we're at the end of input
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of tokens remaining
    pub fn len(&self) -> usize {
        self.0.len()
    }
}
