use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::{
    error::FragmentError,
    lexer::chars::eq_ignore_case,
    options::ParseOptions,
    parser::Parser,
    source::Source,
};

use super::{
    kind::{NodeKind, TagError},
    node::{Node, NodeData, NodeId},
    traverse::Descendants,
};

/// A parsed page: the source buffer plus the node tree built over it.
///
/// Built once by [`Document::parse`] and read-only afterwards. Nodes are
/// reached through [`Node`] handles that borrow the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub(crate) source: Source,
    pub(crate) nodes: Vec<NodeData>,
    options: ParseOptions,
}

impl Document {
    /// Parses `text` with the default options.
    pub fn parse(text: impl Into<String>) -> Result<Self, FragmentError> {
        Self::parse_with(text, &ParseOptions::default())
    }

    /// Parses `text`.
    ///
    /// Malformed markup never fails: unbalanced tags are flagged on their
    /// nodes. An `Err` means an internal offset was out of range.
    pub fn parse_with(text: impl Into<String>, options: &ParseOptions) -> Result<Self, FragmentError> {
        let source = Source::new(text);
        let nodes = Parser::new(&source, options).run()?;
        Ok(Self {
            source,
            nodes,
            options: options.clone(),
        })
    }

    pub fn root(&self) -> Node<'_> {
        Node::new(self, NodeId::ROOT)
    }

    pub fn text(&self) -> &str {
        self.source.as_str()
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    pub fn node(&self, id: NodeId) -> Option<Node<'_>> {
        (id.0 < self.nodes.len()).then(|| Node::new(self, id))
    }

    /// Number of nodes including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Every node except the root, in document order.
    pub fn descendants(&self) -> Descendants<'_> {
        self.root().descendants()
    }

    /// First node whose name matches, ignoring case.
    pub fn find(&self, name: &str) -> Option<Node<'_>> {
        self.descendants()
            .find(|node| eq_ignore_case(node.name(), name))
    }

    /// All nodes whose name matches, ignoring case.
    pub fn find_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = Node<'a>> + 'a {
        self.descendants()
            .filter(move |node| eq_ignore_case(node.name(), name))
    }

    /// Every node carrying a well-formedness error, in document order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.descendants()
            .filter(|node| !node.error().is_none())
            .map(Diagnostic::from_node)
            .collect()
    }
}

impl FromStr for Document {
    type Err = FragmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// An unbalanced tag found during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    #[serde(skip)]
    pub node: NodeId,
    pub kind: NodeKind,
    pub error: TagError,
    pub name: String,
    pub line: usize,
    pub column: usize,
}

impl Diagnostic {
    fn from_node(node: Node<'_>) -> Self {
        Self {
            node: node.id(),
            kind: node.kind(),
            error: node.error(),
            name: node.name().to_string(),
            line: node.line(),
            column: node.column(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {} <{}>",
            self.line, self.column, self.error, self.name
        )
    }
}
