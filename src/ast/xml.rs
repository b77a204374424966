//! `to_xml` diagnostic serialization, grounded on the original
//! tokenizer/parser's `ToXML`/`generateXMLWithIndent`: leaf nodes render
//! as `<kind> value </kind>`, interior nodes as `<name>` / indented
//! children / `</name>`, two spaces per nesting level.

use super::Node;

impl Node {
    /// Renders this node (and its subtree) as the nand2tetris debug XML
    /// format used by the reference tools' `-T`/parse-dump mode.
    pub fn to_xml(&self) -> String {
        let mut out = String::new();
        self.write_xml(0, &mut out);
        out
    }

    fn write_xml(&self, indent: usize, out: &mut String) {
        let pad = "  ".repeat(indent);
        match self {
            Node::Leaf { kind, text } => {
                out.push_str(&pad);
                out.push('<');
                out.push_str(kind);
                out.push_str("> ");
                out.push_str(&escape(text));
                out.push_str(" </");
                out.push_str(kind);
                out.push_str(">\n");
            }
            Node::Interior { name, children } => {
                out.push_str(&pad);
                out.push('<');
                out.push_str(name);
                out.push_str(">\n");
                for child in children {
                    child.write_xml(indent + 1, out);
                }
                out.push_str(&pad);
                out.push_str("</");
                out.push_str(name);
                out.push_str(">\n");
            }
        }
    }
}

/// Escapes the five XML-significant characters. `&` must be escaped
/// first or the other substitutions would double-escape it.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_all_five_characters() {
        assert_eq!(
            escape(r#"<>&"'"#),
            "&lt;&gt;&amp;&quot;&apos;"
        );
    }

    #[test]
    fn leaf_renders_kind_value_kind() {
        let node = Node::Leaf {
            kind: "integerConstant",
            text: "42".to_string(),
        };
        assert_eq!(node.to_xml(), "<integerConstant> 42 </integerConstant>\n");
    }

    #[test]
    fn interior_indents_children_by_two_spaces() {
        let node = Node::interior(
            "expressionList",
            vec![Node::Leaf {
                kind: "identifier",
                text: "x".to_string(),
            }],
        );
        assert_eq!(
            node.to_xml(),
            "<expressionList>\n  <identifier> x </identifier>\n</expressionList>\n"
        );
    }

    #[test]
    fn empty_interior_has_no_body_lines() {
        let node = Node::interior("expressionList", vec![]);
        assert_eq!(node.to_xml(), "<expressionList>\n</expressionList>\n");
    }
}
