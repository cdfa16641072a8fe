use std::fmt;

use crate::{
    lexer::chars::eq_ignore_case,
    source::{Fragment, Span},
};

use super::{
    attribute::{AttributeData, AttributeList},
    document::Document,
    kind::{NodeKind, TagError},
    traverse::{Ancestors, Descendants},
};

/// Index of a node in its document's arena. The root is always `NodeId(0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

/// Arena storage for one node. Spans are checked against the source when the
/// node is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NodeData {
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    pub name: Span,
    pub value: Span,
    pub children: Vec<NodeId>,
    pub attributes: Vec<AttributeData>,
    pub self_closing: bool,
    pub error: TagError,
}

impl NodeData {
    pub fn new(kind: NodeKind, parent: Option<NodeId>, value: Span) -> Self {
        Self {
            kind,
            parent,
            name: value,
            value,
            children: Vec::new(),
            attributes: Vec::new(),
            self_closing: false,
            error: TagError::None,
        }
    }
}

/// A borrowed handle to one node of a [`Document`].
///
/// Handles are `Copy` and cheap; every accessor reads straight from the
/// document's arena and returns slices of the original buffer.
#[derive(Clone, Copy)]
pub struct Node<'a> {
    doc: &'a Document,
    id: NodeId,
}

impl<'a> Node<'a> {
    pub(crate) fn new(doc: &'a Document, id: NodeId) -> Self {
        Self { doc, id }
    }

    pub(crate) fn data(&self) -> &'a NodeData {
        &self.doc.nodes[self.id.0]
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn document(&self) -> &'a Document {
        self.doc
    }

    pub fn kind(&self) -> NodeKind {
        self.data().kind
    }

    pub fn error(&self) -> TagError {
        self.data().error
    }

    /// Qualified name. For tags this is `prefix:local`; for every other kind
    /// it is the same text as [`Node::value`].
    pub fn name(&self) -> &'a str {
        self.doc.source.slice(self.data().name)
    }

    /// The whole matched region.
    pub fn value(&self) -> &'a str {
        self.doc.source.slice(self.data().value)
    }

    pub fn name_fragment(&self) -> Fragment<'a> {
        Fragment::bound(&self.doc.source, self.data().name)
    }

    pub fn value_fragment(&self) -> Fragment<'a> {
        Fragment::bound(&self.doc.source, self.data().value)
    }

    pub fn span(&self) -> Span {
        self.data().value
    }

    /// 1-based line of the node's first character.
    pub fn line(&self) -> usize {
        self.doc.source.position(self.span().start).0
    }

    /// 1-based byte column of the node's first character.
    pub fn column(&self) -> usize {
        self.doc.source.position(self.span().start).1
    }

    /// Namespace prefix of a tag name, e.g. `asp` for `asp:Label`.
    ///
    /// Empty for names without a prefix and for nodes that are not tags.
    pub fn prefix(&self) -> &'a str {
        if !self.kind().is_tag() {
            return "";
        }
        split_qualified(self.name()).0
    }

    /// Tag name without its prefix.
    ///
    /// The root reports the whole buffer; other non-tag kinds report an empty
    /// string.
    pub fn local_name(&self) -> &'a str {
        match self.kind() {
            NodeKind::Root => self.name(),
            NodeKind::Open | NodeKind::Close => split_qualified(self.name()).1,
            _ => "",
        }
    }

    pub fn parent(&self) -> Option<Node<'a>> {
        self.data().parent.map(|id| Node::new(self.doc, id))
    }

    /// Direct children in document order.
    pub fn children(&self) -> impl ExactSizeIterator<Item = Node<'a>> + DoubleEndedIterator + 'a {
        let doc = self.doc;
        self.data()
            .children
            .iter()
            .map(move |&id| Node::new(doc, id))
    }

    pub fn child(&self, index: usize) -> Option<Node<'a>> {
        self.data()
            .children
            .get(index)
            .map(|&id| Node::new(self.doc, id))
    }

    /// First direct child whose name matches, ignoring case.
    pub fn child_by_name(&self, name: &str) -> Option<Node<'a>> {
        self.children().find(|child| eq_ignore_case(child.name(), name))
    }

    pub fn first_child(&self) -> Option<Node<'a>> {
        self.children().next()
    }

    pub fn last_child(&self) -> Option<Node<'a>> {
        self.children().next_back()
    }

    pub fn has_children(&self) -> bool {
        !self.data().children.is_empty()
    }

    pub fn child_count(&self) -> usize {
        self.data().children.len()
    }

    pub fn attributes(&self) -> AttributeList<'a> {
        AttributeList::new(*self)
    }

    /// True for `<name/>`.
    pub fn is_self_closing(&self) -> bool {
        self.data().self_closing
    }

    /// Whether this node opened a scope that a close tag has to end.
    pub fn requires_closing_tag(&self) -> bool {
        self.kind() == NodeKind::Open
            && !self.is_self_closing()
            && !self.doc.options().is_empty_element(self.local_name())
    }

    /// Parent, grandparent, and so on up to the root.
    pub fn ancestors(&self) -> Ancestors<'a> {
        Ancestors::new(self.parent())
    }

    /// Every node below this one, in document order.
    pub fn descendants(&self) -> Descendants<'a> {
        Descendants::new(*self)
    }

    /// Nesting depth; the root is 0.
    pub fn depth(&self) -> usize {
        self.ancestors().count()
    }
}

/// Splits `prefix:local` at the first colon. A leading colon is not a prefix.
fn split_qualified(name: &str) -> (&str, &str) {
    match name.find(':') {
        Some(i) if i > 0 => (&name[..i], &name[i + 1..]),
        _ => ("", name),
    }
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.doc, other.doc) && self.id == other.id
    }
}

impl Eq for Node<'_> {}

impl fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id.0)
            .field("kind", &self.kind())
            .field("span", &self.span())
            .field("error", &self.error())
            .finish()
    }
}
