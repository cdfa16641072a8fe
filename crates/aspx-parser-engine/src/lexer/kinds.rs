//! # Region Kinds
//!
//! Each markup construct owns its delimiters. Scanners and classifiers refer
//! to these constants; they never hardcode `<%` or `-->` themselves.

/// `<%@ Page Language="C#" %>`
pub struct Directive;

impl Directive {
    pub const OPEN: &'static str = "<%";
    pub const MARKER: char = '@';
    pub const CLOSE: &'static str = "%>";
}

/// `<% code %>` and its expression forms.
pub struct CodeBlock;

impl CodeBlock {
    pub const OPEN: &'static str = "<%";
    pub const CLOSE: &'static str = "%>";
    /// `<%= expr %>`, whitespace allowed before the `=`.
    pub const EXPRESSION: char = '=';
    /// `<%: expr %>`, an HTML-encoded expression.
    pub const ENCODED: char = ':';
    /// `<%# expr %>`
    pub const DATA_BIND: char = '#';
}

/// `<%-- comment --%>`. Anything else recognized as a comment is `<!-- -->`.
pub struct ServerComment;

impl ServerComment {
    pub const OPEN: &'static str = "<%--";
    pub const CLOSE: &'static str = "--%>";
}

/// `<!-- comment -->`
pub struct MarkupComment;

impl MarkupComment {
    pub const CLOSE: &'static str = "-->";
}

/// `<name attr="value">` and `<name/>`
pub struct OpenTag;

impl OpenTag {
    pub const OPEN: char = '<';
    pub const SELF_CLOSE: char = '/';
    pub const CLOSE: char = '>';
    pub const ASSIGN: char = '=';
}

/// `</name>`
pub struct CloseTag;

impl CloseTag {
    pub const OPEN: &'static str = "</";
    pub const CLOSE: char = '>';
}

/// Attribute value quote characters.
pub const QUOTES: [char; 2] = ['"', '\''];
