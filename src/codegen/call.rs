//! `subroutineCall` emission: short-form `f(args)` and qualified-form
//! `X.f(args)`, including the implicit-`this` and instance-method
//! calling conventions (constructors, methods, and receiver dispatch
//! on a resolved instance variable).

use super::error::CodegenError;
use super::expr::compile_expression;
use crate::ast::Node;
use crate::symbol::SubroutineScope;

pub(super) fn compile_subroutine_call(
    call: &Node,
    scope: &SubroutineScope,
    class_name: &str,
    out: &mut String,
) -> Result<(), CodegenError> {
    let children = call.children();

    let (callee, implicit_args, expression_list) = match children.len() {
        4 => short_form(children, scope, class_name, out)?,
        6 => qualified_form(children, scope, out)?,
        _ => return Err(CodegenError::malformed_tree("malformed subroutineCall node")),
    };

    let arg_expressions = expression_list.find_all("expression");
    for expr in &arg_expressions {
        compile_expression(expr, scope, class_name, out)?;
    }

    let arg_count = implicit_args + arg_expressions.len();
    out.push_str(&format!("call {} {}\n", callee, arg_count));
    Ok(())
}

/// `f(args)`. If `f` is a known `method` of the current class, this is
/// an implicit-`this` call: push `pointer 0` first and count it as an
/// extra argument. Otherwise it is a `function`/`constructor` of the
/// current class.
fn short_form<'a>(
    children: &'a [Node],
    scope: &SubroutineScope,
    class_name: &str,
    out: &mut String,
) -> Result<(String, usize, &'a Node), CodegenError> {
    let name = children[0]
        .value()
        .ok_or_else(|| CodegenError::malformed_tree("subroutineCall has no callee name"))?;

    let implicit_args = if scope.class_scope().is_method(name) {
        out.push_str("push pointer 0\n");
        1
    } else {
        0
    };

    Ok((format!("{}.{}", class_name, name), implicit_args, &children[2]))
}

/// `X.f(args)`. If `X` resolves to a known symbol, this is a method
/// call on that instance: push the receiver and dispatch on its
/// declared type. Otherwise `X` names a class and this is a
/// `function`/`constructor` call.
fn qualified_form<'a>(
    children: &'a [Node],
    scope: &SubroutineScope,
    out: &mut String,
) -> Result<(String, usize, &'a Node), CodegenError> {
    let receiver = children[0]
        .value()
        .ok_or_else(|| CodegenError::malformed_tree("subroutineCall has no receiver name"))?;
    let method_name = children[2]
        .value()
        .ok_or_else(|| CodegenError::malformed_tree("subroutineCall has no method name"))?;

    if let Some(symbol) = scope.get(receiver) {
        let segment = symbol.kind.segment();
        let index = symbol.index;
        let type_name = symbol.type_name.clone();
        out.push_str(&format!("push {} {}\n", segment, index));
        Ok((format!("{}.{}", type_name, method_name), 1, &children[4]))
    } else {
        Ok((format!("{}.{}", receiver, method_name), 0, &children[4]))
    }
}
