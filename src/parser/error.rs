//! Parse error type.

/// An error that occurred while parsing a token stream into a [`crate::ast::Node`].
///
/// Carries no source span: the token stream this parser consumes
/// carries none either.
#[derive(Debug)]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub(super) fn new(message: impl Into<String>) -> Self {
        ParseError {
            message: message.into(),
        }
    }

    pub(super) fn unexpected(expected: &str, found: Option<&str>) -> Self {
        match found {
            Some(found) => ParseError::new(format!("expected {}, found {}", expected, found)),
            None => ParseError::new(format!("expected {}, found end of input", expected)),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ParseError {}
