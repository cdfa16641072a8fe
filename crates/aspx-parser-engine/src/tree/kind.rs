use std::fmt;

use serde::Serialize;

/// The kind of a node in the parse tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeKind {
    /// The document itself; spans the whole buffer.
    Root,
    /// `<name ...>` or `<name ... />`
    Open,
    /// `</name>`
    Close,
    /// Literal text, including characters no other rule claimed.
    Text,
    /// `<%@ ... %>`
    Directive,
    /// `<% %>`, `<%= %>`, `<%: %>` or `<%# %>`
    Code,
    /// `<%-- --%>` or `<!-- -->`
    Comment,
}

impl NodeKind {
    /// Open and Close nodes carry a tag name with an optional prefix.
    pub fn is_tag(self) -> bool {
        matches!(self, NodeKind::Open | NodeKind::Close)
    }
}

/// Well-formedness state of a tag node.
///
/// Malformed markup never fails a parse; it is recorded here instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum TagError {
    #[default]
    None,
    /// An open tag that needed a matching close tag and never got one.
    UnclosedOpenTag,
    /// A close tag with no matching open tag among its ancestors.
    UnopenedCloseTag,
}

impl TagError {
    pub fn is_none(self) -> bool {
        self == TagError::None
    }
}

impl fmt::Display for TagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TagError::None => "no error",
            TagError::UnclosedOpenTag => "open tag is never closed",
            TagError::UnopenedCloseTag => "close tag has no matching open tag",
        })
    }
}

/// The flavor of a Code node, decided by the character after `<%`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CodeKind {
    /// `<%= expr %>`
    Expression,
    /// `<%: expr %>`
    EncodedExpression,
    /// `<%# expr %>`
    DataBind,
    /// Any other `<% ... %>` block.
    Statement,
}

/// Which comment syntax produced a Comment node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CommentKind {
    /// `<%-- --%>`, stripped on the server.
    Server,
    /// `<!-- -->`, sent to the client.
    Markup,
}
