//! Lexical analysis error type.

/// An error that occurred during tokenization, such as an unrecognized
/// character that matches none of the lexer's token rules.
#[derive(Debug)]
pub struct LexError {
    pub message: String,
}

impl LexError {
    pub(super) fn unexpected_character(c: char) -> Self {
        LexError {
            message: format!("unexpected character '{}'", c),
        }
    }

    pub(super) fn unterminated_string() -> Self {
        LexError {
            message: "unterminated string constant".to_string(),
        }
    }

    pub(super) fn integer_overflow(lexeme: &str) -> Self {
        LexError {
            message: format!("integer constant '{}' does not fit in 16 bits", lexeme),
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for LexError {}
