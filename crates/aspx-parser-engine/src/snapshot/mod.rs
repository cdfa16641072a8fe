//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts a parsed document to a stable, serializable `Snap`
//!   for `insta` snapshot testing
//! - **`render`**: Indented one-line-per-node tree dump, shared by tests and the
//!   CLI
//! - **`invariants`**: Runtime checks for parser correctness (fragments in
//!   bounds, node values tiling the buffer in document order, parent links
//!   consistent with child lists)

pub mod invariants;
pub mod normalize;
pub mod render;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
pub use render::render;
