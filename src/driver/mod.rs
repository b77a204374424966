//! Per-file driver: binds `tokenize`/`parse`/`compile` (and
//! `Node::to_xml`) into file and directory translation.
//!
//! This module is the CLI's caller of the library core: file I/O,
//! directory globbing, and multi-file orchestration. It is declared
//! only from `main.rs` and is not part of the public library.

use std::fs;
use std::path::{Path, PathBuf};

use jackc::codegen::{self, CodegenError};
use jackc::lexer::{self, LexError};
use jackc::parser::{self, ParseError};

/// A compilation error from any phase of the pipeline, or from the I/O
/// the driver itself performs. Unifies `LexError`/`ParseError`/
/// `CodegenError` into one type so the CLI can report one error per
/// file and keep going instead of aborting the whole batch.
pub(crate) enum CompileError {
    Lex(LexError),
    Parse(ParseError),
    Codegen(CodegenError),
    Io(std::io::Error),
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileError::Lex(e) => write!(f, "{}", e),
            CompileError::Parse(e) => write!(f, "{}", e),
            CompileError::Codegen(e) => write!(f, "{}", e),
            CompileError::Io(e) => write!(f, "{}", e),
        }
    }
}

/// A compilation error together with the file it occurred in, so the
/// CLI can report `path: message` without threading the path through
/// every phase's error type.
pub(crate) struct CompileErrorWithContext {
    path: PathBuf,
    error: CompileError,
}

impl CompileErrorWithContext {
    fn new(path: &Path, error: CompileError) -> Self {
        CompileErrorWithContext {
            path: path.to_path_buf(),
            error,
        }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn error(&self) -> &CompileError {
        &self.error
    }
}

/// Reads, tokenizes, parses, and compiles `path`, writing the emitted
/// VM text to a sibling file with the `.vm` extension.
fn compile_file(path: &Path) -> Result<(), CompileErrorWithContext> {
    tracing::info!(file = %path.display(), "compiling");

    let source =
        fs::read_to_string(path).map_err(|e| CompileErrorWithContext::new(path, CompileError::Io(e)))?;

    let tokens = lexer::tokenize(&source)
        .map_err(|e| CompileErrorWithContext::new(path, CompileError::Lex(e)))?;
    tracing::debug!(file = %path.display(), tokens = tokens.len(), "tokenized");

    let tree = parser::parse(tokens)
        .map_err(|e| CompileErrorWithContext::new(path, CompileError::Parse(e)))?;
    tracing::debug!(file = %path.display(), "parsed");

    let vm_text = codegen::compile(&tree)
        .map_err(|e| CompileErrorWithContext::new(path, CompileError::Codegen(e)))?;
    tracing::debug!(file = %path.display(), bytes = vm_text.len(), "emitted VM text");

    let out_path = path.with_extension("vm");
    fs::write(&out_path, &vm_text)
        .map_err(|e| CompileErrorWithContext::new(path, CompileError::Io(e)))?;
    tracing::info!(file = %out_path.display(), "wrote VM text");

    Ok(())
}

/// Reads, tokenizes, and parses `path`, returning the parse tree's
/// `to_xml()` dump instead of compiling it.
fn parse_file(path: &Path) -> Result<String, CompileErrorWithContext> {
    tracing::info!(file = %path.display(), "parsing");

    let source =
        fs::read_to_string(path).map_err(|e| CompileErrorWithContext::new(path, CompileError::Io(e)))?;

    let tokens = lexer::tokenize(&source)
        .map_err(|e| CompileErrorWithContext::new(path, CompileError::Lex(e)))?;
    let tree = parser::parse(tokens)
        .map_err(|e| CompileErrorWithContext::new(path, CompileError::Parse(e)))?;

    Ok(tree.to_xml())
}

/// Resolves `path` to the list of `.jack` files it names: itself, if
/// it is a file; every `*.jack` entry directly inside it (non-
/// recursive), in sorted filename order, if it is a directory.
fn jack_files(path: &Path) -> Result<Vec<PathBuf>, CompileErrorWithContext> {
    if path.is_dir() {
        let mut files: Vec<PathBuf> = fs::read_dir(path)
            .map_err(|e| CompileErrorWithContext::new(path, CompileError::Io(e)))?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "jack"))
            .collect();
        files.sort();
        Ok(files)
    } else {
        Ok(vec![path.to_path_buf()])
    }
}

/// Compiles every `.jack` file found at `path` (a file or a directory),
/// reporting each failure without aborting the rest of the batch.
/// Returns whether every file compiled successfully.
pub(crate) fn build(path: &Path) -> bool {
    let files = match jack_files(path) {
        Ok(files) => files,
        Err(error) => {
            crate::diagnostics::report_error(&error);
            return false;
        }
    };

    let mut all_ok = true;
    for file in &files {
        if let Err(error) = compile_file(file) {
            crate::diagnostics::report_error(&error);
            all_ok = false;
        }
    }
    all_ok
}

/// Parses every `.jack` file found at `path` and prints each one's
/// `to_xml()` dump to stdout. Returns whether every file parsed
/// successfully.
pub(crate) fn parse_dump(path: &Path) -> bool {
    let files = match jack_files(path) {
        Ok(files) => files,
        Err(error) => {
            crate::diagnostics::report_error(&error);
            return false;
        }
    };

    let multiple = files.len() > 1;
    let mut all_ok = true;
    for file in &files {
        match parse_file(file) {
            Ok(xml) => {
                if multiple {
                    println!("==> {} <==", file.display());
                }
                print!("{}", xml);
            }
            Err(error) => {
                crate::diagnostics::report_error(&error);
                all_ok = false;
            }
        }
    }
    all_ok
}
