//! Lexical analyzer for the Jack programming language.
//!
//! This module provides the [`tokenize`] entry point, which converts
//! source text into a stream of [`Token`](crate::token::Token)s for
//! parsing.
//!
//! # Overview
//!
//! The lexer performs the following tasks, in order:
//! - Strips `//` line comments and `/* ... */` block comments
//! - Scans the remaining text character by character
//! - Recognizes keywords, symbols, integer constants, string constants,
//!   and identifiers
//!
//! # Supported Tokens
//!
//! - **Keywords**: the 21 reserved words listed in
//!   [`crate::token::Keyword`]
//! - **Symbols**: the 19 punctuation characters listed in
//!   [`crate::token::Symbol`]
//! - **Integer constants**: sequences of ASCII digits, stored as `u16`
//! - **String constants**: `"`-delimited, may not contain a newline or
//!   another `"`
//! - **Identifiers**: `[A-Za-z_]\w*`
//!
//! # Examples
//!
//! ```
//! use jackc::lexer::tokenize;
//! use jackc::token::Token;
//!
//! let tokens = tokenize("let x = 1;").unwrap();
//! assert!(matches!(tokens[0], Token::Keyword(_)));
//! ```
//!
//! # Module Structure
//!
//! - [`error`] - Error type for lexical analysis
//! - `cursor` - Position tracking and character navigation
//! - `comment` - Comment stripping pre-pass
//! - `scan` - Token recognition and reading
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::token`] - Token type definitions
//! * [`crate::parser`] - Parser that consumes the token stream

mod comment;
mod cursor;
mod error;
mod scan;


pub use error::LexError;

use crate::token::Token;

/// A lexical analyzer that tokenizes Jack source code.
///
/// The `Lexer` maintains its position within the (already
/// comment-stripped) input. It is designed to be used once per source
/// file, via the top-level [`tokenize`] function.
pub struct Lexer<'a> {
    pub(super) input: &'a str,
    pub(super) pos: usize,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Lexer { input, pos: 0 }
    }

    /// Tokenizes the entire input and returns the token stream.
    ///
    /// Unlike [`tokenize`], this assumes comments have already been
    /// stripped from `input`.
    fn scan_all(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();
            if self.is_eof() {
                break;
            }
            tokens.push(self.next_token()?);
        }

        Ok(tokens)
    }
}

/// Tokenizes Jack source text.
///
/// This strips comments first (see [`comment::strip`]), then scans the
/// remainder into a token stream. Returns an error on the first
/// unrecognized character, rather than silently skipping it.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let stripped = comment::strip(source);
    Lexer::new(&stripped).scan_all()
}
