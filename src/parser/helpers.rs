//! Token navigation and the `expect*` family used by every production.

use super::Parser;
use super::error::ParseError;
use crate::ast::Node;
use crate::token::{Keyword, Symbol, Token};

impl Parser {
    /// A human-readable description of a token, used in error messages.
    pub(super) fn describe(token: &Token) -> String {
        match token {
            Token::Keyword(k) => format!("keyword '{}'", k.lexeme()),
            Token::Symbol(s) => format!("'{}'", s.lexeme()),
            Token::IntegerConstant(n) => format!("integer constant '{}'", n),
            Token::StringConstant(s) => format!("string constant \"{}\"", s),
            Token::Identifier(s) => format!("identifier '{}'", s),
        }
    }

    /// Returns a reference to the current token, or `None` at end of
    /// stream.
    pub(super) fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Returns the token `n` positions ahead of the current one,
    /// without consuming anything. Used for the two-token lookahead
    /// that disambiguates `term`'s identifier-prefixed productions.
    pub(super) fn peek(&self, n: usize) -> Option<&Token> {
        self.tokens.get(self.pos + n)
    }

    pub(super) fn is_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub(super) fn advance(&mut self) {
        self.pos += 1;
    }

    /// Consumes the current token as a leaf node, regardless of kind.
    /// Used once a caller has already confirmed what the token is.
    pub(super) fn advance_leaf(&mut self) -> Node {
        let node = Node::leaf(self.current().expect("caller confirmed a token exists"));
        self.advance();
        node
    }

    pub(super) fn check_keyword(&self, keyword: Keyword) -> bool {
        matches!(self.current(), Some(Token::Keyword(k)) if *k == keyword)
    }

    pub(super) fn check_symbol(&self, symbol: Symbol) -> bool {
        matches!(self.current(), Some(Token::Symbol(s)) if *s == symbol)
    }

    /// Asserts the current token is `keyword` and consumes it as a leaf.
    pub(super) fn expect_keyword(&mut self, keyword: Keyword) -> Result<Node, ParseError> {
        if self.check_keyword(keyword) {
            Ok(self.advance_leaf())
        } else {
            Err(self.unexpected(&format!("keyword '{}'", keyword.lexeme())))
        }
    }

    /// Asserts the current token is `symbol` and consumes it as a leaf.
    pub(super) fn expect_symbol(&mut self, symbol: Symbol) -> Result<Node, ParseError> {
        if self.check_symbol(symbol) {
            Ok(self.advance_leaf())
        } else {
            Err(self.unexpected(&format!("'{}'", symbol.lexeme())))
        }
    }

    /// Asserts the current token is an identifier and consumes it as a
    /// leaf, also returning its text.
    pub(super) fn expect_identifier(&mut self) -> Result<(Node, String), ParseError> {
        match self.current() {
            Some(Token::Identifier(name)) => {
                let name = name.clone();
                let node = self.advance_leaf();
                Ok((node, name))
            }
            _ => Err(self.unexpected("an identifier")),
        }
    }

    fn unexpected(&self, expected: &str) -> ParseError {
        ParseError::unexpected(expected, self.current().map(Self::describe).as_deref())
    }

    pub(super) fn unexpected_token(&self, expected: &str) -> ParseError {
        self.unexpected(expected)
    }
}
