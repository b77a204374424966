//! Recursive-descent parser for the Jack grammar.
//!
//! This module provides the [`Parser`] struct and the top-level
//! [`parse`] entry point, which together transform a token stream into
//! a [`Node`](crate::ast::Node) tree faithful to the Jack grammar.
//!
//! # Overview
//!
//! Each production is a method taking `&mut self` (positioned on a
//! shared token slice) and returning `Result<Node, ParseError>`. One-
//! and two-token lookahead disambiguate the grammar's few ambiguous
//! prefixes, most notably `term`, where an `identifier` may start a
//! bare variable reference, an indexed variable, or either form of
//! subroutine call (see [`expr`] for the resolution).
//!
//! # Grammar
//!
//! ```text
//! class          → 'class' identifier '{' classVarDec* subroutineDec* '}'
//! classVarDec    → ('static'|'field') type identifier (',' identifier)* ';'
//! subroutineDec  → ('constructor'|'function'|'method') ('void'|type)
//!                   identifier '(' parameterList ')' subroutineBody
//! parameterList  → ( type identifier (',' type identifier)* )?
//! subroutineBody → '{' varDec* statements '}'
//! varDec         → 'var' type identifier (',' identifier)* ';'
//! statements     → statement*
//! letStatement   → 'let' identifier ('[' expression ']')? '=' expression ';'
//! ifStatement    → 'if' '(' expression ')' '{' statements '}'
//!                  ('else' '{' statements '}')?
//! whileStatement → 'while' '(' expression ')' '{' statements '}'
//! doStatement    → 'do' subroutineCall ';'
//! returnStatement→ 'return' expression? ';'
//! expression     → term (op term)*
//! term           → integerConstant | stringConstant | keywordConstant
//!                | '(' expression ')' | unaryOp term
//!                | identifier | identifier '[' expression ']' | subroutineCall
//! subroutineCall → identifier '(' expressionList ')'
//!                | identifier '.' identifier '(' expressionList ')'
//! expressionList → ( expression (',' expression)* )?
//! ```
//!
//! # Module Structure
//!
//! - [`error`] - Parse error type
//! - `helpers` - Token navigation and the `expect*` family
//! - `class` - `class`, `classVarDec`, `subroutineDec`, `parameterList`,
//!   `subroutineBody`, `varDec`
//! - `stmt` - `statements` and the five statement productions
//! - `expr` - `expression`, `term`, `subroutineCall`, `expressionList`
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::lexer`] - Produces the token stream consumed by the parser
//! * [`crate::ast`] - The `Node` tree produced by the parser
//! * [`crate::codegen`] - Consumes the tree to emit VM text

mod class;
mod error;
mod expr;
mod helpers;
mod stmt;

#[cfg(test)]
mod tests;

pub use error::ParseError;

use crate::ast::Node;
use crate::token::Token;

/// A recursive-descent parser positioned over an owned token stream.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, pos: 0 }
    }

    /// Parses the entire token stream as a `class` declaration.
    pub fn parse(&mut self) -> Result<Node, ParseError> {
        self.parse_class()
    }
}

/// Parses `tokens` into a `class` node.
///
/// This is the crate's top-level parsing entry point.
pub fn parse(tokens: Vec<Token>) -> Result<Node, ParseError> {
    Parser::new(tokens).parse()
}
