//! A whole-program compiler for the Jack programming language (the
//! nand2tetris curriculum's small class-based source language),
//! targeting the stack-based Hack VM.
//!
//! This library provides the three-stage compilation pipeline: lexical
//! analysis, parsing, and code generation.
//!
//! # Modules
//!
//! - [`token`] - Token types: the closed `Keyword`/`Symbol` sets and
//!   their classification predicates
//! - [`lexer`] - Lexical analysis (comment stripping, tokenization)
//! - [`ast`] - The concrete syntax tree (CST) and its `to_xml` dump
//! - [`parser`] - Recursive-descent parser, token stream -> CST
//! - [`symbol`] - The two-level (class, subroutine) symbol table
//! - [`codegen`] - VM-text code generation
//!
//! # Example
//!
//! ```
//! use jackc::{codegen, lexer, parser};
//!
//! let source = "class Main { function void main() { return; } }";
//! let tokens = lexer::tokenize(source).expect("lex error");
//! let tree = parser::parse(tokens).expect("parse error");
//! let vm_text = codegen::compile(&tree).expect("codegen error");
//!
//! assert_eq!(vm_text, "function Main.main 0\npush constant 0\nreturn\n");
//! ```
//!
//! # Non-goals
//!
//! No optimization, no type checking beyond "variable is defined at
//! use site", no source-location tracking in diagnostics, no
//! incremental recompilation, no linking: each translation unit emits
//! independent VM text. File I/O, directory globbing, and multi-file
//! orchestration live in the `jackc` binary's `driver` module, not here.

pub mod ast;
pub mod codegen;
pub mod lexer;
pub mod parser;
pub mod symbol;
pub mod token;
