//! `statements` and the five statement productions.

use super::Parser;
use super::error::ParseError;
use crate::ast::Node;
use crate::token::{Keyword, Symbol};

impl Parser {
    /// `statements → statement*`
    ///
    /// Always produces a node, possibly empty. Stops as soon as the
    /// current token is not one of the five statement-starting
    /// keywords; per the grammar's error policy, it is the caller's
    /// responsibility to then consume the closing `'}'`.
    pub(super) fn parse_statements(&mut self) -> Result<Node, ParseError> {
        let mut children = Vec::new();

        loop {
            let statement = match self.current() {
                Some(crate::token::Token::Keyword(Keyword::Let)) => self.parse_let_statement()?,
                Some(crate::token::Token::Keyword(Keyword::If)) => self.parse_if_statement()?,
                Some(crate::token::Token::Keyword(Keyword::While)) => {
                    self.parse_while_statement()?
                }
                Some(crate::token::Token::Keyword(Keyword::Do)) => self.parse_do_statement()?,
                Some(crate::token::Token::Keyword(Keyword::Return)) => {
                    self.parse_return_statement()?
                }
                _ => break,
            };
            children.push(statement);
        }

        Ok(Node::interior("statements", children))
    }

    /// `letStatement → 'let' identifier ('[' expression ']')? '=' expression ';'`
    fn parse_let_statement(&mut self) -> Result<Node, ParseError> {
        let mut children = vec![
            self.expect_keyword(Keyword::Let)?,
            self.expect_identifier()?.0,
        ];

        if self.check_symbol(Symbol::LBracket) {
            children.push(self.expect_symbol(Symbol::LBracket)?);
            children.push(self.parse_expression()?);
            children.push(self.expect_symbol(Symbol::RBracket)?);
        }

        children.push(self.expect_symbol(Symbol::Eq)?);
        children.push(self.parse_expression()?);
        children.push(self.expect_symbol(Symbol::Semicolon)?);

        Ok(Node::interior("letStatement", children))
    }

    /// `ifStatement → 'if' '(' expression ')' '{' statements '}'
    ///                ('else' '{' statements '}')?`
    fn parse_if_statement(&mut self) -> Result<Node, ParseError> {
        let mut children = vec![
            self.expect_keyword(Keyword::If)?,
            self.expect_symbol(Symbol::LParen)?,
            self.parse_expression()?,
            self.expect_symbol(Symbol::RParen)?,
            self.expect_symbol(Symbol::LBrace)?,
            self.parse_statements()?,
            self.expect_symbol(Symbol::RBrace)?,
        ];

        if self.check_keyword(Keyword::Else) {
            children.push(self.expect_keyword(Keyword::Else)?);
            children.push(self.expect_symbol(Symbol::LBrace)?);
            children.push(self.parse_statements()?);
            children.push(self.expect_symbol(Symbol::RBrace)?);
        }

        Ok(Node::interior("ifStatement", children))
    }

    /// `whileStatement → 'while' '(' expression ')' '{' statements '}'`
    fn parse_while_statement(&mut self) -> Result<Node, ParseError> {
        let children = vec![
            self.expect_keyword(Keyword::While)?,
            self.expect_symbol(Symbol::LParen)?,
            self.parse_expression()?,
            self.expect_symbol(Symbol::RParen)?,
            self.expect_symbol(Symbol::LBrace)?,
            self.parse_statements()?,
            self.expect_symbol(Symbol::RBrace)?,
        ];

        Ok(Node::interior("whileStatement", children))
    }

    /// `doStatement → 'do' subroutineCall ';'`
    fn parse_do_statement(&mut self) -> Result<Node, ParseError> {
        let children = vec![
            self.expect_keyword(Keyword::Do)?,
            self.parse_subroutine_call()?,
            self.expect_symbol(Symbol::Semicolon)?,
        ];

        Ok(Node::interior("doStatement", children))
    }

    /// `returnStatement → 'return' expression? ';'`
    fn parse_return_statement(&mut self) -> Result<Node, ParseError> {
        let mut children = vec![self.expect_keyword(Keyword::Return)?];

        if !self.check_symbol(Symbol::Semicolon) {
            children.push(self.parse_expression()?);
        }

        children.push(self.expect_symbol(Symbol::Semicolon)?);

        Ok(Node::interior("returnStatement", children))
    }
}
