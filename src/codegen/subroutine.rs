//! Class-scope construction and per-subroutine emission: the `function`
//! header, the constructor/method calling-convention preludes, and the
//! body statements.

use super::error::CodegenError;
use super::labels::LabelAllocator;
use super::stmt::compile_statements;
use crate::ast::Node;
use crate::symbol::{ClassScope, Kind, SubroutineScope};
use std::rc::Rc;

/// Builds the class-level scope from a `class` node's `classVarDec` and
/// `subroutineDec` children: `static`/`field` variables, densely
/// numbered per kind, plus the set of subroutine names declared
/// `method` (needed to resolve the implicit-`this` and instance-method
/// call conventions in `call.rs`).
pub(super) fn build_class_scope(class_node: &Node) -> Result<ClassScope, CodegenError> {
    let mut scope = ClassScope::new();

    for class_var_dec in class_node.find_all("classVarDec") {
        let children = class_var_dec.children();
        let kind = match children.first().and_then(Node::value) {
            Some("static") => Kind::Static,
            Some("field") => Kind::Field,
            other => {
                return Err(CodegenError::malformed_tree(format!(
                    "classVarDec starts with unexpected token {:?}",
                    other
                )));
            }
        };
        let type_name = children
            .get(1)
            .and_then(Node::value)
            .ok_or_else(|| CodegenError::malformed_tree("classVarDec has no type"))?;

        for name in children[2..]
            .iter()
            .filter(|child| child.name() == "identifier")
            .filter_map(Node::value)
        {
            scope.declare(name, type_name, kind);
        }
    }

    for subroutine_dec in class_node.find_all("subroutineDec") {
        let children = subroutine_dec.children();
        if children.first().and_then(Node::value) == Some("method") {
            let name = children
                .get(2)
                .and_then(Node::value)
                .ok_or_else(|| CodegenError::malformed_tree("subroutineDec has no name"))?;
            scope.declare_method(name);
        }
    }

    Ok(scope)
}

/// Emits one `subroutineDec`'s VM code: the `function` header, the
/// constructor/method prelude, and the body.
pub(super) fn compile_subroutine(
    subroutine_dec: &Node,
    class_scope: &Rc<ClassScope>,
    class_name: &str,
    out: &mut String,
) -> Result<(), CodegenError> {
    let children = subroutine_dec.children();
    let kind = children
        .first()
        .and_then(Node::value)
        .ok_or_else(|| CodegenError::malformed_tree("subroutineDec has no kind"))?;
    let name = children
        .get(2)
        .and_then(Node::value)
        .ok_or_else(|| CodegenError::malformed_tree("subroutineDec has no name"))?;
    let parameter_list = subroutine_dec
        .find("parameterList")
        .ok_or_else(|| CodegenError::malformed_tree("subroutineDec has no parameterList"))?;
    let body = subroutine_dec
        .find("subroutineBody")
        .ok_or_else(|| CodegenError::malformed_tree("subroutineDec has no subroutineBody"))?;

    let mut scope = SubroutineScope::new(Rc::clone(class_scope));

    if kind == "method" {
        // Bound as argument 0, ahead of the declared parameters, so the
        // method's own body can read `this` like any other variable.
        scope.declare("this", class_name, Kind::Argument);
    }

    for (type_name, param_name) in typed_pairs(parameter_list.children())? {
        scope.declare(param_name, type_name, Kind::Argument);
    }

    for var_dec in body.find_all("varDec") {
        let var_children = var_dec.children();
        let type_name = var_children
            .get(1)
            .and_then(Node::value)
            .ok_or_else(|| CodegenError::malformed_tree("varDec has no type"))?;
        for var_name in var_children[2..]
            .iter()
            .filter(|child| child.name() == "identifier")
            .filter_map(Node::value)
        {
            scope.declare(var_name, type_name, Kind::Local);
        }
    }

    out.push_str(&format!(
        "function {}.{} {}\n",
        class_name,
        name,
        scope.count(Kind::Local)
    ));

    match kind {
        "constructor" => {
            out.push_str(&format!(
                "push constant {}\ncall Memory.alloc 1\npop pointer 0\n",
                class_scope.count(Kind::Field)
            ));
        }
        "method" => out.push_str("push argument 0\npop pointer 0\n"),
        "function" => {}
        other => {
            return Err(CodegenError::malformed_tree(format!(
                "unknown subroutine kind '{}'",
                other
            )));
        }
    }

    let statements = body
        .find("statements")
        .ok_or_else(|| CodegenError::malformed_tree("subroutineBody has no statements"))?;
    let mut labels = LabelAllocator::new();
    compile_statements(statements, &scope, class_name, &mut labels, out)
}

/// Extracts `(type, name)` pairs from a flat `type identifier (','
/// type identifier)*` child list, as found in both `parameterList` and
/// the grammar it shares its shape with.
fn typed_pairs(children: &[Node]) -> Result<Vec<(&str, &str)>, CodegenError> {
    let mut pairs = Vec::new();
    let mut i = 0;

    while i < children.len() {
        let type_name = children
            .get(i)
            .and_then(Node::value)
            .ok_or_else(|| CodegenError::malformed_tree("parameterList has a malformed type"))?;
        let name = children
            .get(i + 1)
            .and_then(Node::value)
            .ok_or_else(|| CodegenError::malformed_tree("parameterList has a malformed name"))?;
        pairs.push((type_name, name));
        i += 2;

        if children.get(i).and_then(Node::value) == Some(",") {
            i += 1;
        }
    }

    Ok(pairs)
}
