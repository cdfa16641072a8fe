use serde::Serialize;

use crate::tree::{Attribute, Document, Node};

#[derive(Debug, Serialize)]
pub struct Snap {
    pub nodes: Vec<NodeSnap>,
}

#[derive(Debug, Serialize)]
pub struct NodeSnap {
    pub kind: String,
    pub depth: usize,
    pub span: (usize, usize),
    pub name: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<AttributeSnap>,
}

#[derive(Debug, Serialize)]
pub struct AttributeSnap {
    pub key: String,
    pub value: String,
    pub body: (usize, usize),
    pub data_bound: bool,
    pub expression_builder: bool,
}

/// Flattens every non-root node, in document order, with its depth.
pub fn normalize(doc: &Document) -> Snap {
    let nodes = doc.descendants().map(node_snap).collect();
    Snap { nodes }
}

fn node_snap(node: Node<'_>) -> NodeSnap {
    let span = node.span();
    NodeSnap {
        kind: format!("{:?}", node.kind()),
        depth: node.depth(),
        span: (span.start, span.end),
        name: preview(node.name(), 40),
        text: preview(node.value(), 60),
        error: (!node.error().is_none()).then(|| format!("{:?}", node.error())),
        attributes: node.attributes().iter().map(attribute_snap).collect(),
    }
}

fn attribute_snap(attribute: Attribute<'_>) -> AttributeSnap {
    let body = attribute
        .body_fragment()
        .span()
        .map_or((0, 0), |s| (s.start, s.end));
    AttributeSnap {
        key: attribute.key().to_string(),
        value: attribute.value().to_string(),
        body,
        data_bound: attribute.is_data_bound(),
        expression_builder: attribute.is_expression_builder(),
    }
}

/// First `max` characters of `s`, with `...` appended when cut.
pub fn preview(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &s[..cut]),
        None => s.to_string(),
    }
}
