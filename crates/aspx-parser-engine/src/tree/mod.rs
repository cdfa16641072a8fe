//! # Node Tree
//!
//! The output of a parse: an arena of nodes owned by a [`Document`], reached
//! through borrowed [`Node`] handles.
//!
//! ## Modules
//!
//! - **`document`**: `Document`, the owner of the buffer and the arena
//! - **`node`**: `NodeId` and the `Node` handle with the per-node API
//! - **`attribute`**: `Attribute` and `AttributeList` handles
//! - **`kind`**: `NodeKind`, `TagError` and the classification enums
//! - **`elements`**: the built-in empty-element table
//! - **`traverse`**: preorder and ancestor iterators
//!
//! The only owning edges are parent to children. A node's parent is an index
//! back into the arena, and the root is always at index 0.

pub mod attribute;
pub mod document;
pub mod elements;
pub mod kind;
pub mod node;
pub mod traverse;

pub use attribute::{Attribute, AttributeList};
pub use document::{Diagnostic, Document};
pub use kind::{CodeKind, CommentKind, NodeKind, TagError};
pub use node::{Node, NodeId};
pub use traverse::{Ancestors, Descendants};
