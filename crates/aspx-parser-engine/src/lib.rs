//! # aspx-parser-engine
//!
//! Parser for Web Forms style pages: markup interleaved with server-side code
//! regions (`<%@ %>` directives, `<% %>` code blocks, `<%= %>` and `<%# %>`
//! expressions, `<%-- --%>` comments).
//!
//! Parsing builds a [`Document`]: the immutable source text plus a tree of
//! typed nodes. Nodes never copy text. Each one records byte ranges into the
//! source, and every accessor slices the original buffer.
//!
//! ```
//! use aspx_parser_engine::{Document, NodeKind, TagError};
//!
//! let doc = Document::parse(r#"<asp:Label id="title" runat="server" /><p>hi"#).unwrap();
//! let label = doc.find("asp:Label").unwrap();
//! assert_eq!(label.prefix(), "asp");
//! assert_eq!(label.attributes().get("ID").unwrap().value(), "title");
//!
//! let p = doc.find("p").unwrap();
//! assert_eq!(p.kind(), NodeKind::Open);
//! assert_eq!(p.error(), TagError::UnclosedOpenTag);
//! ```
//!
//! ## Modules
//!
//! - **`source`**: the buffer, byte spans, line index and `Fragment` views
//! - **`lexer`**: anchored rules recognizing one region kind at an offset
//! - **`parser`**: the scanning state machine that builds the tree
//! - **`tree`**: `Document`, `Node`, `Attribute` and the kind enums
//! - **`classify`**: code, comment, include and server-control queries
//! - **`binding`**: `<%# ... %>` expression parsing
//! - **`options`**: lexical settings (`ParseOptions`)
//! - **`snapshot`**: tree rendering, normalization and invariant checks
//!
//! Malformed markup never fails a parse. Unbalanced tags are flagged with a
//! [`TagError`] and listed by [`Document::diagnostics`].

pub mod binding;
pub mod classify;
pub mod error;
pub mod lexer;
pub mod options;
mod parser;
pub mod snapshot;
pub mod source;
pub mod tree;

pub use binding::{Binding, Direction};
pub use classify::ServerInclude;
pub use error::FragmentError;
pub use options::ParseOptions;
pub use source::{Fragment, Span};
pub use tree::{
    Attribute, AttributeList, CodeKind, CommentKind, Diagnostic, Document, Node, NodeId, NodeKind,
    TagError,
};
