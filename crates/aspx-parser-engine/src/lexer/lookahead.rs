//! Positions of every closing delimiter in the buffer, found once per parse.
//!
//! A region whose closing delimiter never occurs after the cursor cannot
//! match, so rules ask here first instead of scanning to the end of the
//! buffer. Each lookup is a binary search, which keeps a page full of
//! unterminated quotes, code blocks or comments linear to parse.

use memchr::{memchr_iter, memmem};

use super::{
    kinds::{CodeBlock, MarkupComment, ServerComment},
    values::ValueSyntax,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terminator {
    DoubleQuote,
    SingleQuote,
    /// `>`
    TagClose,
    /// `%>`
    CodeClose,
    /// `%>` after which an open tag can go on.
    TagBindClose,
    /// `%>` after which a directive can go on.
    DirectiveBindClose,
    /// `--%>`
    ServerCommentClose,
    /// `-->`
    MarkupCommentClose,
}

#[derive(Debug, Clone, Default)]
pub struct Lookahead {
    double_quote: Vec<usize>,
    single_quote: Vec<usize>,
    tag_close: Vec<usize>,
    code_close: Vec<usize>,
    tag_bind_close: Vec<usize>,
    directive_bind_close: Vec<usize>,
    server_comment_close: Vec<usize>,
    markup_comment_close: Vec<usize>,
}

impl Lookahead {
    pub fn new(text: &str) -> Self {
        let code_close = occurrences(text, CodeBlock::CLOSE);
        let followed_by = |syntax: &ValueSyntax| -> Vec<usize> {
            code_close
                .iter()
                .copied()
                .filter(|&at| {
                    text.get(at + CodeBlock::CLOSE.len()..)
                        .is_some_and(syntax.continues)
                })
                .collect()
        };

        Self {
            double_quote: occurrences(text, "\""),
            single_quote: occurrences(text, "'"),
            tag_close: occurrences(text, ">"),
            tag_bind_close: followed_by(&ValueSyntax::TAG),
            directive_bind_close: followed_by(&ValueSyntax::DIRECTIVE),
            server_comment_close: occurrences(text, ServerComment::CLOSE),
            markup_comment_close: occurrences(text, MarkupComment::CLOSE),
            code_close,
        }
    }

    /// Start of the first `terminator` at or after `from`.
    pub fn next(&self, terminator: Terminator, from: usize) -> Option<usize> {
        let positions = self.positions(terminator);
        let index = positions.partition_point(|&at| at < from);
        positions.get(index).copied()
    }

    /// The terminator that closes a value quoted with `quote`.
    pub fn quote(quote: char) -> Terminator {
        match quote {
            '\'' => Terminator::SingleQuote,
            _ => Terminator::DoubleQuote,
        }
    }

    fn positions(&self, terminator: Terminator) -> &[usize] {
        match terminator {
            Terminator::DoubleQuote => &self.double_quote,
            Terminator::SingleQuote => &self.single_quote,
            Terminator::TagClose => &self.tag_close,
            Terminator::CodeClose => &self.code_close,
            Terminator::TagBindClose => &self.tag_bind_close,
            Terminator::DirectiveBindClose => &self.directive_bind_close,
            Terminator::ServerCommentClose => &self.server_comment_close,
            Terminator::MarkupCommentClose => &self.markup_comment_close,
        }
    }
}

/// Byte offsets of every occurrence of `needle`, ascending. None of the
/// delimiters can overlap itself, so non-overlapping search finds them all.
fn occurrences(text: &str, needle: &str) -> Vec<usize> {
    let haystack = text.as_bytes();
    match needle.as_bytes() {
        [byte] => memchr_iter(*byte, haystack).collect(),
        bytes => memmem::find_iter(haystack, bytes).collect(),
    }
}
