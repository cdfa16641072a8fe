use std::fmt;

use crate::{
    binding::Binding,
    lexer::chars::eq_ignore_case,
    source::{Fragment, Span},
};

use super::node::{Node, NodeId};

/// Arena storage for one attribute of a tag or directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AttributeData {
    /// `key="value"` including the closing quote.
    pub body: Span,
    pub key: Span,
    /// Value without quotes.
    pub value: Span,
    pub data_bound: bool,
    pub expression_builder: bool,
}

/// One `key=value` pair on a tag or directive.
#[derive(Clone, Copy)]
pub struct Attribute<'a> {
    owner: Node<'a>,
    data: &'a AttributeData,
}

impl<'a> Attribute<'a> {
    fn source_slice(&self, span: Span) -> &'a str {
        self.owner.document().source().slice(span)
    }

    fn fragment(&self, span: Span) -> Fragment<'a> {
        Fragment::bound(self.owner.document().source(), span)
    }

    pub fn key(&self) -> &'a str {
        self.source_slice(self.data.key)
    }

    pub fn value(&self) -> &'a str {
        self.source_slice(self.data.value)
    }

    /// The whole `key="value"` text.
    pub fn body(&self) -> &'a str {
        self.source_slice(self.data.body)
    }

    pub fn key_fragment(&self) -> Fragment<'a> {
        self.fragment(self.data.key)
    }

    pub fn value_fragment(&self) -> Fragment<'a> {
        self.fragment(self.data.value)
    }

    pub fn body_fragment(&self) -> Fragment<'a> {
        self.fragment(self.data.body)
    }

    /// True when the value is a single `<%# ... %>` expression.
    pub fn is_data_bound(&self) -> bool {
        self.data.data_bound
    }

    /// True when the value is a single `<%$ ... %>` expression, such as
    /// `<%$ Resources:Labels, Title %>`.
    pub fn is_expression_builder(&self) -> bool {
        self.data.expression_builder
    }

    /// The tag or directive this attribute belongs to.
    pub fn owner(&self) -> NodeId {
        self.owner.id()
    }

    pub fn owner_node(&self) -> Node<'a> {
        self.owner
    }

    /// The parsed binding expression, for data-bound values.
    pub fn binding(&self) -> Option<Binding<'a>> {
        if !self.is_data_bound() {
            return None;
        }
        Binding::parse(self.value())
    }
}

impl fmt::Display for Attribute<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.body())
    }
}

impl fmt::Debug for Attribute<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attribute")
            .field("key", &self.key())
            .field("value", &self.value())
            .field("data_bound", &self.is_data_bound())
            .field("expression_builder", &self.is_expression_builder())
            .finish()
    }
}

/// The attributes of one node, addressable by position or by key.
#[derive(Clone, Copy)]
pub struct AttributeList<'a> {
    owner: Node<'a>,
}

impl<'a> AttributeList<'a> {
    pub(crate) fn new(owner: Node<'a>) -> Self {
        Self { owner }
    }

    fn items(&self) -> &'a [AttributeData] {
        &self.owner.data().attributes
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// First attribute whose key matches, ignoring case.
    pub fn get(&self, key: &str) -> Option<Attribute<'a>> {
        self.iter().find(|attribute| eq_ignore_case(attribute.key(), key))
    }

    pub fn get_index(&self, index: usize) -> Option<Attribute<'a>> {
        let owner = self.owner;
        self.items()
            .get(index)
            .map(|data| Attribute { owner, data })
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = Attribute<'a>> + 'a {
        let owner = self.owner;
        self.items().iter().map(move |data| Attribute { owner, data })
    }
}

impl<'a> IntoIterator for AttributeList<'a> {
    type Item = Attribute<'a>;
    type IntoIter = Box<dyn ExactSizeIterator<Item = Attribute<'a>> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl fmt::Debug for AttributeList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
