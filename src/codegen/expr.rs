//! `expression` and `term` emission.
//!
//! Expression emission recurses over an index into the `expression`
//! node's children slice rather than mutating or slicing the tree on
//! each call, so the tree stays immutable and safe to re-traverse
//! throughout codegen.

use super::call::compile_subroutine_call;
use super::error::CodegenError;
use super::resolve;
use crate::ast::Node;
use crate::symbol::SubroutineScope;

/// Emits `expr` (an `expression` node) as a left-fold in which each
/// operator is emitted only after its entire right-hand residual
/// expression has been, not after a single right term: for `a + b + c`
/// the emission order is `push a / push b / push c / add / add`.
pub(super) fn compile_expression(
    expr: &Node,
    scope: &SubroutineScope,
    class_name: &str,
    out: &mut String,
) -> Result<(), CodegenError> {
    compile_expression_from(expr.children(), 0, scope, class_name, out)
}

fn compile_expression_from(
    children: &[Node],
    start: usize,
    scope: &SubroutineScope,
    class_name: &str,
    out: &mut String,
) -> Result<(), CodegenError> {
    let term = children.get(start).ok_or_else(|| {
        CodegenError::malformed_tree("expression node has no term at the expected position")
    })?;
    compile_term(term, scope, class_name, out)?;

    if start + 1 < children.len() {
        let operator = children[start + 1]
            .value()
            .ok_or_else(|| CodegenError::malformed_tree("expression operator has no value"))?
            .to_string();
        compile_expression_from(children, start + 2, scope, class_name, out)?;
        compile_operator(&operator, out)?;
    }

    Ok(())
}

fn compile_operator(operator: &str, out: &mut String) -> Result<(), CodegenError> {
    let instruction = match operator {
        "+" => "add\n",
        "-" => "sub\n",
        "*" => "call Math.multiply 2\n",
        "/" => "call Math.divide 2\n",
        "<" => "lt\n",
        ">" => "gt\n",
        "&" => "and\n",
        "|" => "or\n",
        "=" => "eq\n",
        other => {
            return Err(CodegenError::malformed_tree(format!(
                "unknown binary operator '{}'",
                other
            )));
        }
    };
    out.push_str(instruction);
    Ok(())
}

/// Emits a `term` node, dispatching on its shape: a single literal,
/// keyword constant, identifier, or subroutine call; a two-child unary
/// application; a three-child parenthesized expression; or a
/// four-child indexed-variable read.
fn compile_term(
    term: &Node,
    scope: &SubroutineScope,
    class_name: &str,
    out: &mut String,
) -> Result<(), CodegenError> {
    let children = term.children();
    match children.len() {
        1 => compile_atomic_term(&children[0], scope, class_name, out),
        2 => compile_unary_term(&children[0], &children[1], scope, class_name, out),
        3 => compile_expression(&children[1], scope, class_name, out),
        4 => compile_indexed_read(&children[0], &children[2], scope, class_name, out),
        _ => Err(CodegenError::malformed_tree("malformed term node")),
    }
}

fn compile_atomic_term(
    child: &Node,
    scope: &SubroutineScope,
    class_name: &str,
    out: &mut String,
) -> Result<(), CodegenError> {
    match child.name() {
        "integerConstant" => {
            let value = child
                .value()
                .ok_or_else(|| CodegenError::malformed_tree("integerConstant has no value"))?;
            out.push_str(&format!("push constant {}\n", value));
            Ok(())
        }
        "stringConstant" => {
            let value = child
                .value()
                .ok_or_else(|| CodegenError::malformed_tree("stringConstant has no value"))?;
            compile_string_literal(value, out);
            Ok(())
        }
        "keyword" => compile_keyword_constant(
            child
                .value()
                .ok_or_else(|| CodegenError::malformed_tree("keyword constant has no value"))?,
            out,
        ),
        "identifier" => {
            let name = child
                .value()
                .ok_or_else(|| CodegenError::malformed_tree("identifier has no value"))?;
            let (segment, index) = resolve(scope, name)?;
            out.push_str(&format!("push {} {}\n", segment, index));
            Ok(())
        }
        "subroutineCall" => compile_subroutine_call(child, scope, class_name, out),
        other => Err(CodegenError::malformed_tree(format!(
            "unexpected term child '{}'",
            other
        ))),
    }
}

fn compile_unary_term(
    op: &Node,
    operand: &Node,
    scope: &SubroutineScope,
    class_name: &str,
    out: &mut String,
) -> Result<(), CodegenError> {
    compile_term(operand, scope, class_name, out)?;
    match op.value() {
        Some("-") => out.push_str("neg\n"),
        Some("~") => out.push_str("not\n"),
        other => {
            return Err(CodegenError::malformed_tree(format!(
                "unknown unary operator '{:?}'",
                other
            )));
        }
    }
    Ok(())
}

/// Array-read term `a[i]`: `push <a> / <i> / add / pop pointer 1 / push that 0`.
fn compile_indexed_read(
    array: &Node,
    index_expr: &Node,
    scope: &SubroutineScope,
    class_name: &str,
    out: &mut String,
) -> Result<(), CodegenError> {
    let name = array
        .value()
        .ok_or_else(|| CodegenError::malformed_tree("indexed term has no array name"))?;
    let (segment, index) = resolve(scope, name)?;
    out.push_str(&format!("push {} {}\n", segment, index));
    compile_expression(index_expr, scope, class_name, out)?;
    out.push_str("add\n");
    out.push_str("pop pointer 1\n");
    out.push_str("push that 0\n");
    Ok(())
}

fn compile_keyword_constant(value: &str, out: &mut String) -> Result<(), CodegenError> {
    match value {
        "true" => out.push_str("push constant 0\nnot\n"),
        "false" | "null" => out.push_str("push constant 0\n"),
        "this" => out.push_str("push pointer 0\n"),
        other => {
            return Err(CodegenError::malformed_tree(format!(
                "unknown keyword constant '{}'",
                other
            )));
        }
    }
    Ok(())
}

/// `push constant <len> / call String.new 1`, then `push constant
/// <code> / call String.appendChar 2` per character.
fn compile_string_literal(value: &str, out: &mut String) {
    out.push_str(&format!("push constant {}\n", value.chars().count()));
    out.push_str("call String.new 1\n");
    for ch in value.chars() {
        out.push_str(&format!("push constant {}\n", ch as u32));
        out.push_str("call String.appendChar 2\n");
    }
}
