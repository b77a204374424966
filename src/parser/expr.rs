//! `expression`, `term`, `subroutineCall`, `expressionList`.
//!
//! `term` carries Jack's parsing ambiguity: an `identifier` may start a
//! bare variable reference, an indexed variable, or either form of
//! subroutine call, disambiguated by one token of lookahead past the
//! identifier (see `parse_term`).

use super::Parser;
use super::error::ParseError;
use crate::ast::Node;
use crate::token::{Symbol, Token};

impl Parser {
    /// `expression → term (op term)*`
    pub(super) fn parse_expression(&mut self) -> Result<Node, ParseError> {
        let mut children = vec![self.parse_term()?];

        while self.current().is_some_and(Token::is_op) {
            children.push(self.advance_leaf());
            children.push(self.parse_term()?);
        }

        Ok(Node::interior("expression", children))
    }

    /// `term → integerConstant | stringConstant | keywordConstant
    ///       | '(' expression ')' | unaryOp term
    ///       | identifier | identifier '[' expression ']' | subroutineCall`
    pub(super) fn parse_term(&mut self) -> Result<Node, ParseError> {
        match self.current() {
            Some(Token::IntegerConstant(_)) | Some(Token::StringConstant(_)) => {
                Ok(Node::interior("term", vec![self.advance_leaf()]))
            }
            Some(token) if token.is_keyword_constant() => {
                Ok(Node::interior("term", vec![self.advance_leaf()]))
            }
            Some(token) if token.is_unary_op() => {
                let op = self.advance_leaf();
                let operand = self.parse_term()?;
                Ok(Node::interior("term", vec![op, operand]))
            }
            Some(Token::Symbol(Symbol::LParen)) => {
                let children = vec![
                    self.expect_symbol(Symbol::LParen)?,
                    self.parse_expression()?,
                    self.expect_symbol(Symbol::RParen)?,
                ];
                Ok(Node::interior("term", children))
            }
            Some(Token::Identifier(_)) => self.parse_identifier_term(),
            _ => Err(self.unexpected_token("a term")),
        }
    }

    /// The four identifier-prefixed `term` alternatives: bare variable,
    /// indexed variable, and the two subroutine-call shapes. Resolved
    /// by inspecting the token directly after the identifier.
    fn parse_identifier_term(&mut self) -> Result<Node, ParseError> {
        match self.peek(1) {
            Some(Token::Symbol(Symbol::Dot)) | Some(Token::Symbol(Symbol::LParen)) => {
                let call = self.parse_subroutine_call()?;
                Ok(Node::interior("term", vec![call]))
            }
            Some(Token::Symbol(Symbol::LBracket)) => {
                let children = vec![
                    self.expect_identifier()?.0,
                    self.expect_symbol(Symbol::LBracket)?,
                    self.parse_expression()?,
                    self.expect_symbol(Symbol::RBracket)?,
                ];
                Ok(Node::interior("term", children))
            }
            _ => Ok(Node::interior("term", vec![self.expect_identifier()?.0])),
        }
    }

    /// `subroutineCall → identifier '(' expressionList ')'
    ///                  | identifier '.' identifier '(' expressionList ')'`
    ///
    /// Always produces its own `subroutineCall` node (the always-wrap
    /// resolution of the original source's splice-vs-wrap ambiguity).
    pub(super) fn parse_subroutine_call(&mut self) -> Result<Node, ParseError> {
        let mut children = vec![self.expect_identifier()?.0];

        if self.check_symbol(Symbol::Dot) {
            children.push(self.expect_symbol(Symbol::Dot)?);
            children.push(self.expect_identifier()?.0);
        }

        children.push(self.expect_symbol(Symbol::LParen)?);
        children.push(self.parse_expression_list()?);
        children.push(self.expect_symbol(Symbol::RParen)?);

        Ok(Node::interior("subroutineCall", children))
    }

    /// `expressionList → ( expression (',' expression)* )?`
    ///
    /// Always produces a node, possibly with no children. Separators
    /// are preserved as leaf children but do not count toward the
    /// argument count.
    fn parse_expression_list(&mut self) -> Result<Node, ParseError> {
        let mut children = Vec::new();

        if !self.check_symbol(Symbol::RParen) {
            children.push(self.parse_expression()?);

            while self.check_symbol(Symbol::Comma) {
                children.push(self.expect_symbol(Symbol::Comma)?);
                children.push(self.parse_expression()?);
            }
        }

        Ok(Node::interior("expressionList", children))
    }
}
