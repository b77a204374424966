use super::*;

fn leaf(kind: &'static str, text: &str) -> Node {
    Node::Leaf {
        kind,
        text: text.to_string(),
    }
}

#[test]
fn find_returns_first_matching_child() {
    let node = Node::interior(
        "letStatement",
        vec![
            leaf("keyword", "let"),
            leaf("identifier", "x"),
            leaf("symbol", "="),
        ],
    );
    assert_eq!(node.find("identifier").unwrap().value(), Some("x"));
    assert!(node.find("symbol").is_some());
    assert!(node.find("stringConstant").is_none());
}

#[test]
fn find_all_returns_every_match_in_order() {
    let node = Node::interior(
        "parameterList",
        vec![
            leaf("keyword", "int"),
            leaf("identifier", "a"),
            leaf("symbol", ","),
            leaf("keyword", "int"),
            leaf("identifier", "b"),
        ],
    );
    let names: Vec<&str> = node
        .find_all("identifier")
        .into_iter()
        .map(|n| n.value().unwrap())
        .collect();
    assert_eq!(names, vec!["a", "b"]);
}

#[test]
fn leaf_text_concatenates_document_order() {
    let node = Node::interior(
        "expression",
        vec![
            Node::interior("term", vec![leaf("integerConstant", "1")]),
            leaf("symbol", "+"),
            Node::interior("term", vec![leaf("integerConstant", "2")]),
        ],
    );
    assert_eq!(node.leaf_text(), "1+2");
}

#[test]
fn leaf_has_no_children_and_no_name_lookup() {
    let node = leaf("identifier", "x");
    assert!(node.children().is_empty());
    assert_eq!(node.name(), "identifier");
    assert_eq!(node.value(), Some("x"));
}

#[test]
fn interior_value_is_none() {
    let node = Node::interior("statements", vec![]);
    assert_eq!(node.value(), None);
}
