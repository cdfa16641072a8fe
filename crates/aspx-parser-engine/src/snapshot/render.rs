use crate::tree::{Document, Node, NodeKind};

use super::normalize::preview;

/// Renders the tree one node per line, children indented two spaces.
///
/// Tags show their name, other nodes a quoted preview of their text. Each
/// line ends with the node's `@line:column`, and tags with an error get a
/// trailing `!Error`. Attributes follow their node as `- key = "value"`.
pub fn render(doc: &Document) -> String {
    let mut out = String::from("Root\n");
    for node in doc.descendants() {
        render_node(&mut out, node);
    }
    out
}

fn render_node(out: &mut String, node: Node<'_>) {
    let indent = "  ".repeat(node.depth().saturating_sub(1));
    let kind = node.kind();
    let label = if kind.is_tag() {
        node.name().to_string()
    } else {
        format!("{:?}", preview(node.value(), 60))
    };

    out.push_str(&format!(
        "{indent}{kind:?} {label} @{}:{}",
        node.line(),
        node.column()
    ));
    if !node.error().is_none() {
        out.push_str(&format!(" !{:?}", node.error()));
    }
    out.push('\n');

    if matches!(kind, NodeKind::Open | NodeKind::Directive) {
        for attribute in node.attributes().iter() {
            let marker = if attribute.is_data_bound() {
                " [bound]"
            } else if attribute.is_expression_builder() {
                " [expr]"
            } else {
                ""
            };
            out.push_str(&format!(
                "{indent}  - {} = {:?}{marker}\n",
                attribute.key(),
                attribute.value()
            ));
        }
    }
}
