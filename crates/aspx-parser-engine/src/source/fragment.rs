use crate::error::FragmentError;

use super::{Source, span::Span};

/// A `(start, length)` view into a [`Source`] with its derived position.
///
/// A fragment is in one of three states:
/// - **bound**: attached to a buffer with a checked range; `text()` returns the
///   slice and `line()`/`column()` are known
/// - **detached**: a range with no buffer behind it; `text()` is empty and the
///   range is never checked
/// - **undefined**: no range at all; `text()` fails with
///   [`FragmentError::Undefined`]
///
/// Line and column are computed once, when the fragment is bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment<'a> {
    source: Option<&'a Source>,
    span: Option<Span>,
    line: Option<usize>,
    column: Option<usize>,
}

impl<'a> Fragment<'a> {
    /// A fragment that has not been given a range yet.
    pub const fn undefined() -> Self {
        Self {
            source: None,
            span: None,
            line: None,
            column: None,
        }
    }

    /// A range with no buffer behind it.
    pub const fn detached(span: Span) -> Self {
        Self {
            source: None,
            span: Some(span),
            line: None,
            column: None,
        }
    }

    /// Binds `start..start + len` of `source`, checking the range.
    pub fn bind(source: &'a Source, start: usize, len: usize) -> Result<Self, FragmentError> {
        let span = source.span(start, len)?;
        Ok(Self::bound(source, span))
    }

    /// Binds a span that has already been checked against `source`.
    pub(crate) fn bound(source: &'a Source, span: Span) -> Self {
        let (line, column) = source.position(span.start);
        Self {
            source: Some(source),
            span: Some(span),
            line: Some(line),
            column: Some(column),
        }
    }

    /// True once the fragment has a range.
    pub fn is_defined(&self) -> bool {
        self.span.is_some()
    }

    /// True when the fragment is attached to a buffer.
    pub fn is_bound(&self) -> bool {
        self.source.is_some() && self.span.is_some()
    }

    pub fn span(&self) -> Option<Span> {
        self.span
    }

    pub fn start(&self) -> Option<usize> {
        self.span.map(|s| s.start)
    }

    pub fn len(&self) -> Option<usize> {
        self.span.map(Span::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len().is_none_or(|len| len == 0)
    }

    /// 1-based line of the fragment start, when bound.
    pub fn line(&self) -> Option<usize> {
        self.line
    }

    /// 1-based byte column of the fragment start, when bound.
    pub fn column(&self) -> Option<usize> {
        self.column
    }

    /// The text the fragment covers.
    pub fn text(&self) -> Result<&'a str, FragmentError> {
        let span = self.span.ok_or(FragmentError::Undefined)?;
        match self.source {
            Some(source) => Ok(source.slice(span)),
            None => Ok(""),
        }
    }
}

impl Default for Fragment<'_> {
    fn default() -> Self {
        Self::undefined()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bound_fragment_reports_text_and_position() {
        let source = Source::new("<a>\n  <b>");
        let frag = Fragment::bind(&source, 6, 3).unwrap();
        assert_eq!(frag.text(), Ok("<b>"));
        assert_eq!(frag.line(), Some(2));
        assert_eq!(frag.column(), Some(3));
        assert!(frag.is_bound());
    }

    #[test]
    fn undefined_fragment_fails_on_text() {
        let frag = Fragment::undefined();
        assert!(!frag.is_defined());
        assert_eq!(frag.text(), Err(FragmentError::Undefined));
        assert_eq!(frag.line(), None);
    }

    #[test]
    fn detached_fragment_is_empty_and_unchecked() {
        let frag = Fragment::detached(Span::new(100, 250));
        assert_eq!(frag.text(), Ok(""));
        assert_eq!(frag.len(), Some(150));
        assert!(!frag.is_bound());
    }

    #[test]
    fn bind_checks_range() {
        let source = Source::new("abc");
        assert!(Fragment::bind(&source, 2, 2).is_err());
        assert!(Fragment::bind(&source, 3, 0).is_ok());
    }
}
