//! `class`, `classVarDec`, `subroutineDec`, `parameterList`,
//! `subroutineBody`, and `varDec`.

use super::Parser;
use super::error::ParseError;
use crate::ast::Node;
use crate::token::{Keyword, Symbol, Token};

impl Parser {
    /// `class → 'class' identifier '{' classVarDec* subroutineDec* '}'`
    ///
    /// The top-level entry point; every other production is reached
    /// from here.
    pub(super) fn parse_class(&mut self) -> Result<Node, ParseError> {
        let mut children = vec![
            self.expect_keyword(Keyword::Class)?,
            self.expect_identifier()?.0,
            self.expect_symbol(Symbol::LBrace)?,
        ];

        while self.check_keyword(Keyword::Static) || self.check_keyword(Keyword::Field) {
            children.push(self.parse_class_var_dec()?);
        }

        while self.check_keyword(Keyword::Constructor)
            || self.check_keyword(Keyword::Function)
            || self.check_keyword(Keyword::Method)
        {
            children.push(self.parse_subroutine_dec()?);
        }

        children.push(self.expect_symbol(Symbol::RBrace)?);

        Ok(Node::interior("class", children))
    }

    /// `classVarDec → ('static'|'field') type identifier (',' identifier)* ';'`
    fn parse_class_var_dec(&mut self) -> Result<Node, ParseError> {
        let keyword = if self.check_keyword(Keyword::Static) {
            self.expect_keyword(Keyword::Static)?
        } else {
            self.expect_keyword(Keyword::Field)?
        };

        let mut children = vec![keyword, self.parse_type()?, self.expect_identifier()?.0];

        while self.check_symbol(Symbol::Comma) {
            children.push(self.expect_symbol(Symbol::Comma)?);
            children.push(self.expect_identifier()?.0);
        }

        children.push(self.expect_symbol(Symbol::Semicolon)?);

        Ok(Node::interior("classVarDec", children))
    }

    /// A `type`: `int`, `char`, `boolean`, or a class-name identifier.
    /// Not itself a production with its own node: the type token is
    /// spliced directly into its parent, matching the grammar skeleton.
    pub(super) fn parse_type(&mut self) -> Result<Node, ParseError> {
        match self.current() {
            Some(Token::Keyword(Keyword::Int | Keyword::Char | Keyword::Boolean)) => {
                Ok(self.advance_leaf())
            }
            Some(Token::Identifier(_)) => Ok(self.advance_leaf()),
            _ => Err(self.unexpected_token("a type (int, char, boolean, or a class name)")),
        }
    }

    /// `'void'` or a `type`, as used by a `subroutineDec`'s return type.
    fn parse_void_or_type(&mut self) -> Result<Node, ParseError> {
        if self.check_keyword(Keyword::Void) {
            self.expect_keyword(Keyword::Void)
        } else {
            self.parse_type()
        }
    }

    /// `subroutineDec → ('constructor'|'function'|'method') ('void'|type)
    ///                   identifier '(' parameterList ')' subroutineBody`
    fn parse_subroutine_dec(&mut self) -> Result<Node, ParseError> {
        let kind = if self.check_keyword(Keyword::Constructor) {
            self.expect_keyword(Keyword::Constructor)?
        } else if self.check_keyword(Keyword::Function) {
            self.expect_keyword(Keyword::Function)?
        } else {
            self.expect_keyword(Keyword::Method)?
        };

        let children = vec![
            kind,
            self.parse_void_or_type()?,
            self.expect_identifier()?.0,
            self.expect_symbol(Symbol::LParen)?,
            self.parse_parameter_list()?,
            self.expect_symbol(Symbol::RParen)?,
            self.parse_subroutine_body()?,
        ];

        Ok(Node::interior("subroutineDec", children))
    }

    /// `parameterList → ( type identifier (',' type identifier)* )?`
    ///
    /// Always produces a node, possibly with no children.
    fn parse_parameter_list(&mut self) -> Result<Node, ParseError> {
        let mut children = Vec::new();

        if !self.check_symbol(Symbol::RParen) {
            children.push(self.parse_type()?);
            children.push(self.expect_identifier()?.0);

            while self.check_symbol(Symbol::Comma) {
                children.push(self.expect_symbol(Symbol::Comma)?);
                children.push(self.parse_type()?);
                children.push(self.expect_identifier()?.0);
            }
        }

        Ok(Node::interior("parameterList", children))
    }

    /// `subroutineBody → '{' varDec* statements '}'`
    fn parse_subroutine_body(&mut self) -> Result<Node, ParseError> {
        let mut children = vec![self.expect_symbol(Symbol::LBrace)?];

        while self.check_keyword(Keyword::Var) {
            children.push(self.parse_var_dec()?);
        }

        children.push(self.parse_statements()?);
        children.push(self.expect_symbol(Symbol::RBrace)?);

        Ok(Node::interior("subroutineBody", children))
    }

    /// `varDec → 'var' type identifier (',' identifier)* ';'`
    fn parse_var_dec(&mut self) -> Result<Node, ParseError> {
        let mut children = vec![
            self.expect_keyword(Keyword::Var)?,
            self.parse_type()?,
            self.expect_identifier()?.0,
        ];

        while self.check_symbol(Symbol::Comma) {
            children.push(self.expect_symbol(Symbol::Comma)?);
            children.push(self.expect_identifier()?.0);
        }

        children.push(self.expect_symbol(Symbol::Semicolon)?);

        Ok(Node::interior("varDec", children))
    }
}
