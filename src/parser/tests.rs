use super::*;
use crate::lexer::tokenize;

fn parse_source(source: &str) -> Node {
    let tokens = tokenize(source).unwrap_or_else(|e| panic!("tokenize failed: {}", e));
    parse(tokens).unwrap_or_else(|e| panic!("parse failed: {}", e))
}

fn parse_error(source: &str) -> ParseError {
    let tokens = tokenize(source).unwrap_or_else(|e| panic!("tokenize failed: {}", e));
    parse(tokens).expect_err("expected a parse error")
}

#[test]
fn parses_minimal_class() {
    let class = parse_source("class Main { }");
    assert_eq!(class.name(), "class");
    assert_eq!(class.find("identifier").unwrap().value(), Some("Main"));
}

#[test]
fn parses_class_var_decs_of_both_kinds() {
    let class = parse_source("class Foo { field int x, y; static boolean flag; }");
    let decs = class.find_all("classVarDec");
    assert_eq!(decs.len(), 2);
    assert_eq!(decs[0].children()[0].value(), Some("field"));
    let names: Vec<&str> = decs[0]
        .find_all("identifier")
        .into_iter()
        .map(|n| n.value().unwrap())
        .collect();
    assert_eq!(names, vec!["x", "y"]);
    assert_eq!(decs[1].children()[0].value(), Some("static"));
}

#[test]
fn parses_subroutine_dec_shape() {
    let class = parse_source(
        "class Main { function void main() { return; } }",
    );
    let sub = class.find("subroutineDec").unwrap();
    assert_eq!(sub.children()[0].value(), Some("function"));
    assert_eq!(sub.children()[1].value(), Some("void"));
    assert_eq!(sub.children()[2].value(), Some("main"));
    assert_eq!(sub.find("parameterList").unwrap().children().len(), 0);
    assert!(sub.find("subroutineBody").is_some());
}

#[test]
fn parses_parameter_list_with_multiple_params() {
    let class = parse_source("class Number { function int plus(int a, int b) { return a; } }");
    let sub = class.find("subroutineDec").unwrap();
    let params = sub.find("parameterList").unwrap();
    let names: Vec<&str> = params
        .find_all("identifier")
        .into_iter()
        .map(|n| n.value().unwrap())
        .collect();
    assert_eq!(names, vec!["a", "b"]);
}

#[test]
fn parses_var_dec_with_multiple_names() {
    let class = parse_source(
        "class Main { function void main() { var int a, b, c; return; } }",
    );
    let body = class
        .find("subroutineDec")
        .unwrap()
        .find("subroutineBody")
        .unwrap();
    let var_dec = body.find("varDec").unwrap();
    let names: Vec<&str> = var_dec
        .find_all("identifier")
        .into_iter()
        .map(|n| n.value().unwrap())
        .collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[test]
fn parses_let_statement_without_index() {
    let class = parse_source(
        "class Main { function void main() { let x = 1; return; } }",
    );
    let statements = statements_of(&class);
    let let_stmt = &statements.children()[0];
    assert_eq!(let_stmt.name(), "letStatement");
    assert_eq!(let_stmt.children().len(), 5); // let, ident, =, expr, ;
}

#[test]
fn parses_let_statement_with_index() {
    let class = parse_source(
        "class Main { function void main() { let a[i] = 1; return; } }",
    );
    let statements = statements_of(&class);
    let let_stmt = &statements.children()[0];
    assert_eq!(let_stmt.children().len(), 8); // let, ident, [, expr, ], =, expr, ;
}

#[test]
fn parses_if_without_else() {
    let class = parse_source(
        "class Main { function void main() { if (true) { let x = 1; } return; } }",
    );
    let statements = statements_of(&class);
    let if_stmt = &statements.children()[0];
    assert_eq!(if_stmt.name(), "ifStatement");
    assert_eq!(if_stmt.children().len(), 7);
}

#[test]
fn parses_if_with_else() {
    let class = parse_source(
        "class Main { function void main() { if (true) { let x = 1; } else { let x = 2; } return; } }",
    );
    let statements = statements_of(&class);
    let if_stmt = &statements.children()[0];
    assert_eq!(if_stmt.children().len(), 11);
}

#[test]
fn parses_while_statement() {
    let class = parse_source(
        "class Main { function void main() { while (true) { let x = 1; } return; } }",
    );
    let statements = statements_of(&class);
    assert_eq!(statements.children()[0].name(), "whileStatement");
}

#[test]
fn parses_do_statement_with_short_call() {
    let class = parse_source("class Main { function void main() { do draw(); return; } }");
    let statements = statements_of(&class);
    let do_stmt = &statements.children()[0];
    assert_eq!(do_stmt.name(), "doStatement");
    let call = do_stmt.find("subroutineCall").unwrap();
    assert_eq!(call.children()[0].value(), Some("draw"));
}

#[test]
fn parses_do_statement_with_qualified_call() {
    let class =
        parse_source("class Main { function void main() { do Output.println(); return; } }");
    let statements = statements_of(&class);
    let call = statements.children()[0].find("subroutineCall").unwrap();
    assert_eq!(call.children()[0].value(), Some("Output"));
    assert_eq!(call.children()[2].value(), Some("println"));
}

#[test]
fn parses_return_with_and_without_expression() {
    let class = parse_source(
        "class Main { function void main() { return; } function int f() { return 1; } }",
    );
    let subs = class.find_all("subroutineDec");
    let body0 = subs[0].find("subroutineBody").unwrap();
    let ret0 = body0.find("statements").unwrap().children()[0].clone();
    assert_eq!(ret0.children().len(), 2); // return, ;

    let body1 = subs[1].find("subroutineBody").unwrap();
    let ret1 = body1.find("statements").unwrap().children()[0].clone();
    assert_eq!(ret1.children().len(), 3); // return, expr, ;
}

#[test]
fn identifier_followed_by_dot_is_a_call() {
    let term = term_of_expression("Keyboard.keyPressed()");
    assert!(term.find("subroutineCall").is_some());
}

#[test]
fn identifier_followed_by_paren_is_a_call() {
    let term = term_of_expression("draw()");
    assert!(term.find("subroutineCall").is_some());
}

#[test]
fn identifier_followed_by_bracket_is_indexed_variable() {
    let term = term_of_expression("a[1]");
    assert_eq!(term.children().len(), 4); // ident, [, expr, ]
}

#[test]
fn bare_identifier_is_a_variable() {
    let term = term_of_expression("x");
    assert_eq!(term.children().len(), 1);
    assert_eq!(term.children()[0].name(), "identifier");
}

#[test]
fn expression_preserves_left_fold_child_order() {
    let expr = expression_of("1 + 2 + 3");
    // term, +, term, +, term
    assert_eq!(expr.children().len(), 5);
    assert_eq!(expr.children()[1].value(), Some("+"));
    assert_eq!(expr.children()[3].value(), Some("+"));
}

#[test]
fn unary_minus_wraps_its_operand_term() {
    let term = term_of_expression("-x");
    assert_eq!(term.children()[0].value(), Some("-"));
    assert_eq!(term.children()[1].name(), "term");
}

#[test]
fn parenthesized_expression_term() {
    let term = term_of_expression("(1 + 2)");
    assert_eq!(term.children().len(), 3); // (, expr, )
    assert_eq!(term.children()[1].name(), "expression");
}

#[test]
fn expression_list_counts_only_expressions_not_commas() {
    let class =
        parse_source("class Main { function void main() { do f(1, 2, 3); return; } }");
    let call = statements_of(&class).children()[0]
        .find("subroutineCall")
        .unwrap();
    let expr_list = call.find("expressionList").unwrap();
    assert_eq!(expr_list.find_all("expression").len(), 3);
}

#[test]
fn empty_expression_list_is_still_a_node() {
    let class = parse_source("class Main { function void main() { do f(); return; } }");
    let call = statements_of(&class).children()[0]
        .find("subroutineCall")
        .unwrap();
    let expr_list = call.find("expressionList").unwrap();
    assert_eq!(expr_list.children().len(), 0);
}

#[test]
fn to_xml_round_trips_leaf_text_in_document_order() {
    let source = "class Main { function void main() { let x = 1; return; } }";
    let tokens = tokenize(source).unwrap();
    let expected: String = tokens.iter().map(|t| t.text()).collect();
    let tree = parse_source(source);
    assert_eq!(tree.leaf_text(), expected);
}

#[test]
fn missing_semicolon_is_a_fatal_parse_error() {
    let err = parse_error("class Main { function void main() { let x = 1 return; } }");
    assert!(err.to_string().contains(";"));
}

#[test]
fn missing_closing_brace_is_a_fatal_parse_error() {
    let err = parse_error("class Main { function void main() { return; }");
    assert!(!err.to_string().is_empty());
}

#[test]
fn keyword_constant_term() {
    for (source, expected) in [("true", "true"), ("false", "false"), ("null", "null"), ("this", "this")] {
        let term = term_of_expression(source);
        assert_eq!(term.children()[0].value(), Some(expected));
    }
}

fn statements_of(class: &Node) -> Node {
    class
        .find("subroutineDec")
        .unwrap()
        .find("subroutineBody")
        .unwrap()
        .find("statements")
        .unwrap()
        .clone()
}

fn expression_of(expr_source: &str) -> Node {
    let source = format!(
        "class Main {{ function void main() {{ let x = {}; return; }} }}",
        expr_source
    );
    let class = parse_source(&source);
    statements_of(&class).children()[0]
        .find("expression")
        .unwrap()
        .clone()
}

fn term_of_expression(expr_source: &str) -> Node {
    expression_of(expr_source).children()[0].clone()
}
