//! Statement emission.

use super::call::compile_subroutine_call;
use super::error::CodegenError;
use super::expr::compile_expression;
use super::labels::LabelAllocator;
use super::resolve;
use crate::ast::Node;
use crate::symbol::SubroutineScope;

pub(super) fn compile_statements(
    statements: &Node,
    scope: &SubroutineScope,
    class_name: &str,
    labels: &mut LabelAllocator,
    out: &mut String,
) -> Result<(), CodegenError> {
    for statement in statements.children() {
        match statement.name() {
            "letStatement" => compile_let(statement, scope, class_name, out)?,
            "ifStatement" => compile_if(statement, scope, class_name, labels, out)?,
            "whileStatement" => compile_while(statement, scope, class_name, labels, out)?,
            "doStatement" => compile_do(statement, scope, class_name, out)?,
            "returnStatement" => compile_return(statement, scope, class_name, out)?,
            other => {
                return Err(CodegenError::malformed_tree(format!(
                    "unexpected statement node '{}'",
                    other
                )));
            }
        }
    }
    Ok(())
}

/// `let name = expr;` or, when `name` carries an index, the indexed
/// form `let name[index] = expr;`:
/// `push <name> / <index> / add / <expr> / pop temp 0 / pop pointer 1 /
/// push temp 0 / pop that 0`.
fn compile_let(
    statement: &Node,
    scope: &SubroutineScope,
    class_name: &str,
    out: &mut String,
) -> Result<(), CodegenError> {
    let children = statement.children();
    let name = children
        .get(1)
        .and_then(Node::value)
        .ok_or_else(|| CodegenError::malformed_tree("letStatement has no target name"))?;

    let is_indexed = children.get(2).and_then(Node::value) == Some("[");

    if is_indexed {
        let expressions = statement.find_all("expression");
        let index_expr = *expressions
            .first()
            .ok_or_else(|| CodegenError::malformed_tree("indexed letStatement has no index"))?;
        let value_expr = *expressions
            .get(1)
            .ok_or_else(|| CodegenError::malformed_tree("indexed letStatement has no value"))?;

        let (segment, base) = resolve(scope, name)?;
        out.push_str(&format!("push {} {}\n", segment, base));
        compile_expression(index_expr, scope, class_name, out)?;
        out.push_str("add\n");
        compile_expression(value_expr, scope, class_name, out)?;
        out.push_str("pop temp 0\n");
        out.push_str("pop pointer 1\n");
        out.push_str("push temp 0\n");
        out.push_str("pop that 0\n");
    } else {
        let value_expr = statement
            .find("expression")
            .ok_or_else(|| CodegenError::malformed_tree("letStatement has no value expression"))?;
        compile_expression(value_expr, scope, class_name, out)?;
        let (segment, index) = resolve(scope, name)?;
        out.push_str(&format!("pop {} {}\n", segment, index));
    }

    Ok(())
}

/// `if (cond) { ... } [else { ... }]`. All three labels are always
/// allocated, even in the no-`else` form, so `LabelAllocator` counters
/// stay in lockstep across subroutines regardless of which branches a
/// given `if` happens to take.
fn compile_if(
    statement: &Node,
    scope: &SubroutineScope,
    class_name: &str,
    labels: &mut LabelAllocator,
    out: &mut String,
) -> Result<(), CodegenError> {
    let condition = statement
        .find("expression")
        .ok_or_else(|| CodegenError::malformed_tree("ifStatement has no condition"))?;
    let blocks = statement.find_all("statements");
    let if_true = labels.unique_label("IF_TRUE");
    let if_false = labels.unique_label("IF_FALSE");
    let if_end = labels.unique_label("IF_END");

    compile_expression(condition, scope, class_name, out)?;
    out.push_str(&format!("if-goto {}\n", if_true));
    out.push_str(&format!("goto {}\n", if_false));
    out.push_str(&format!("label {}\n", if_true));
    compile_statements(blocks[0], scope, class_name, labels, out)?;

    if let Some(else_block) = blocks.get(1) {
        out.push_str(&format!("goto {}\n", if_end));
        out.push_str(&format!("label {}\n", if_false));
        compile_statements(else_block, scope, class_name, labels, out)?;
        out.push_str(&format!("label {}\n", if_end));
    } else {
        out.push_str(&format!("label {}\n", if_false));
    }

    Ok(())
}

/// `while (cond) { ... }`:
/// `label WHILE_EXP / <cond> / not / if-goto WHILE_END / <body> /
/// goto WHILE_EXP / label WHILE_END`.
fn compile_while(
    statement: &Node,
    scope: &SubroutineScope,
    class_name: &str,
    labels: &mut LabelAllocator,
    out: &mut String,
) -> Result<(), CodegenError> {
    let condition = statement
        .find("expression")
        .ok_or_else(|| CodegenError::malformed_tree("whileStatement has no condition"))?;
    let body = statement
        .find("statements")
        .ok_or_else(|| CodegenError::malformed_tree("whileStatement has no body"))?;
    let while_exp = labels.unique_label("WHILE_EXP");
    let while_end = labels.unique_label("WHILE_END");

    out.push_str(&format!("label {}\n", while_exp));
    compile_expression(condition, scope, class_name, out)?;
    out.push_str("not\n");
    out.push_str(&format!("if-goto {}\n", while_end));
    compile_statements(body, scope, class_name, labels, out)?;
    out.push_str(&format!("goto {}\n", while_exp));
    out.push_str(&format!("label {}\n", while_end));

    Ok(())
}

/// `do call;` emits the call and discards its return value.
fn compile_do(
    statement: &Node,
    scope: &SubroutineScope,
    class_name: &str,
    out: &mut String,
) -> Result<(), CodegenError> {
    let call = statement
        .find("subroutineCall")
        .ok_or_else(|| CodegenError::malformed_tree("doStatement has no subroutineCall"))?;
    compile_subroutine_call(call, scope, class_name, out)?;
    out.push_str("pop temp 0\n");
    Ok(())
}

/// `return;` pushes a dummy `0` (every Jack subroutine returns a value
/// on the VM stack, even `void` ones). `return expr;` pushes `expr`.
fn compile_return(
    statement: &Node,
    scope: &SubroutineScope,
    class_name: &str,
    out: &mut String,
) -> Result<(), CodegenError> {
    match statement.find("expression") {
        Some(expr) => compile_expression(expr, scope, class_name, out)?,
        None => out.push_str("push constant 0\n"),
    }
    out.push_str("return\n");
    Ok(())
}
