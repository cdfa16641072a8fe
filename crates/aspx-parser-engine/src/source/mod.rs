//! # Source Buffer
//!
//! The immutable document text and the byte-range views that address it.
//!
//! ## Modules
//!
//! - **`span`**: `Span`, a plain `[start, end)` byte range
//! - **`lines`**: `LineIndex`, line-start table for 1-based line/column lookup
//! - **`fragment`**: `Fragment`, a span bound to a buffer with derived text,
//!   line and column
//!
//! Every offset handed to [`Source::span`] is range-checked and must sit on a
//! UTF-8 character boundary; spans produced that way can be sliced without
//! further checks.

pub mod fragment;
pub mod lines;
pub mod span;

pub use fragment::Fragment;
pub use lines::LineIndex;
pub use span::Span;

use crate::error::FragmentError;

/// The immutable text of one document plus its line index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    text: String,
    lines: LineIndex,
}

impl Source {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let lines = LineIndex::new(&text);
        Self { text, lines }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Span covering the whole buffer.
    pub fn full_span(&self) -> Span {
        Span::new(0, self.text.len())
    }

    /// Validates `start..start + len` against the buffer.
    pub fn span(&self, start: usize, len: usize) -> Result<Span, FragmentError> {
        let out_of_range = FragmentError::OutOfRange {
            start,
            len,
            source_len: self.text.len(),
        };
        let end = start
            .checked_add(len)
            .ok_or_else(|| out_of_range.clone())?;
        if end > self.text.len() {
            return Err(out_of_range);
        }
        for offset in [start, end] {
            if !self.text.is_char_boundary(offset) {
                return Err(FragmentError::NotCharBoundary { offset });
            }
        }
        Ok(Span::new(start, end))
    }

    /// Re-validates an already constructed span.
    pub fn check(&self, span: Span) -> Result<Span, FragmentError> {
        let len = span.end.checked_sub(span.start).ok_or(FragmentError::OutOfRange {
            start: span.start,
            len: 0,
            source_len: self.text.len(),
        })?;
        self.span(span.start, len)
    }

    /// Text of a span produced by [`Source::span`] or [`Source::check`].
    ///
    /// # Panics
    /// Panics if `span` did not come from this buffer's checks.
    pub fn slice(&self, span: Span) -> &str {
        &self.text[span.start..span.end]
    }

    /// `(line, column)` of a byte offset, both 1-based.
    pub fn position(&self, offset: usize) -> (usize, usize) {
        self.lines.position(offset)
    }

    /// Width in bytes of the character starting at `offset`, or 0 at the end.
    pub fn char_width_at(&self, offset: usize) -> usize {
        self.text[offset..].chars().next().map_or(0, char::len_utf8)
    }
}
