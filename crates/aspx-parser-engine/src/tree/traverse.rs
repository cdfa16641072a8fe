use super::node::{Node, NodeId};

/// Preorder walk over the nodes below a starting node.
///
/// Preorder is document order: concatenating the values of the nodes this
/// yields from the root reproduces the source text.
pub struct Descendants<'a> {
    start: Node<'a>,
    stack: Vec<NodeId>,
}

impl<'a> Descendants<'a> {
    pub(crate) fn new(start: Node<'a>) -> Self {
        let stack = start.data().children.iter().rev().copied().collect();
        Self { start, stack }
    }
}

impl<'a> Iterator for Descendants<'a> {
    type Item = Node<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = Node::new(self.start.document(), id);
        self.stack
            .extend(node.data().children.iter().rev().copied());
        Some(node)
    }
}

/// Walk from a node's parent up to the root.
pub struct Ancestors<'a> {
    next: Option<Node<'a>>,
}

impl<'a> Ancestors<'a> {
    pub(crate) fn new(first: Option<Node<'a>>) -> Self {
        Self { next: first }
    }
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = Node<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.parent();
        Some(node)
    }
}
