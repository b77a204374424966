//! Code generator: walks a `class` [`Node`] with a lexically scoped
//! symbol table and emits VM text.
//!
//! # Overview
//!
//! [`compile`] is the crate's top-level codegen entry point. It builds
//! the class-level symbol table once (`static`/`field` variables, plus
//! which subroutine names are `method`s), then emits each
//! `subroutineDec` in source order, concatenating their VM text.
//!
//! # Module Structure
//!
//! - [`error`] - Codegen error type
//! - `subroutine` - Class-scope construction and per-subroutine emission
//! - `stmt` - Statement emission (`let`, `if`, `while`, `do`, `return`)
//! - `expr` - Expression and term emission, including the left-fold
//!   operator order and operator lowering
//! - `call` - `subroutineCall` emission (short form, qualified form,
//!   implicit-`this` and instance-method dispatch)
//! - `labels` - Per-subroutine label allocation
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::ast`] - The tree this module walks
//! * [`crate::symbol`] - The scope types this module populates and reads

mod call;
mod error;
mod expr;
mod labels;
mod stmt;
mod subroutine;


pub use error::CodegenError;

use crate::ast::Node;
use crate::symbol::SubroutineScope;
use std::rc::Rc;

/// Compiles a `class` node into VM text.
pub fn compile(class_node: &Node) -> Result<String, CodegenError> {
    if class_node.name() != "class" {
        return Err(CodegenError::not_a_class(class_node.name()));
    }

    let class_name = class_node
        .find("identifier")
        .and_then(Node::value)
        .ok_or_else(|| CodegenError::malformed_tree("class node has no name"))?;

    let class_scope = Rc::new(subroutine::build_class_scope(class_node)?);

    let mut out = String::new();
    for subroutine_dec in class_node.find_all("subroutineDec") {
        subroutine::compile_subroutine(subroutine_dec, &class_scope, class_name, &mut out)?;
    }

    Ok(out)
}

/// Resolves `name` against `scope`, returning the VM segment and index
/// to `push`/`pop` it. Used by every term/statement emitter that reads
/// or writes a variable.
pub(super) fn resolve(
    scope: &SubroutineScope,
    name: &str,
) -> Result<(&'static str, u16), CodegenError> {
    scope
        .get(name)
        .map(|symbol| (symbol.kind.segment(), symbol.index))
        .ok_or_else(|| CodegenError::undefined_variable(name))
}
