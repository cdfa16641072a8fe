//! # Lexical Rules
//!
//! Anchored matchers that recognize one region kind starting exactly at a
//! given offset. Nothing here searches forward: each rule answers "does a
//! region of my kind begin here" and reports how far it reaches.
//!
//! ## Modules
//!
//! - **`kinds`**: delimiter constants owned by each region kind
//! - **`patterns`**: compiled regexes for the regular regions (text, comments,
//!   code blocks) and for value classification
//! - **`tag`**: open and close tag scanners
//! - **`directive`**: `<%@ ... %>` scanner
//! - **`values`**: attribute values, shared by tags and directives
//! - **`lookahead`**: where each closing delimiter next occurs
//! - **`cursor`** / **`chars`**: scanning primitives
//!
//! Open tags and directives carry a variable number of attributes, so they are
//! scanned by hand rather than with a single regex.
//!
//! Before running, every rule checks [`Lookahead`] for its closing delimiter.
//! An unterminated `"`, `%>` or `-->` therefore costs a lookup per attempt,
//! not a scan to the end of the buffer.

pub mod chars;
pub mod cursor;
pub mod directive;
pub mod kinds;
pub mod lookahead;
pub mod patterns;
pub mod tag;
pub mod values;

use crate::{options::ParseOptions, source::Span};

pub use lookahead::{Lookahead, Terminator};

/// The rules bound to one buffer and one set of options.
pub struct Lexer<'t> {
    text: &'t str,
    options: &'t ParseOptions,
    ahead: Lookahead,
}

impl<'t> Lexer<'t> {
    pub fn new(text: &'t str, options: &'t ParseOptions) -> Self {
        Self {
            text,
            options,
            ahead: Lookahead::new(text),
        }
    }

    pub fn text(&self) -> &'t str {
        self.text
    }

    pub fn options(&self) -> &'t ParseOptions {
        self.options
    }

    pub fn ahead(&self) -> &Lookahead {
        &self.ahead
    }

    /// Runs the cascade at `offset`, skipping rules that are inactive in the
    /// current mode.
    pub fn match_region(&self, offset: usize, inside_non_parsed: bool) -> Option<RuleMatch> {
        Rule::CASCADE
            .into_iter()
            .filter(|rule| !inside_non_parsed || rule.active_in_non_parsed())
            .find_map(|rule| rule.match_at(self, offset))
    }

    /// Plain text: one or more characters up to the next `<`.
    pub fn match_text(&self, offset: usize) -> Option<Span> {
        patterns::match_at(patterns::text(), self.text, offset)
    }
}

/// One `name[=value]` pair as captured by a tag or directive scanner.
///
/// For quoted values `value` excludes the quotes. A valueless attribute gets an
/// empty `value` positioned at the end of its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeCapture {
    pub name: Span,
    pub value: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagMatch {
    pub span: Span,
    pub name: Span,
    pub attributes: Vec<AttributeCapture>,
    pub self_closing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloseTagMatch {
    pub span: Span,
    pub name: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveMatch {
    pub span: Span,
    pub attributes: Vec<AttributeCapture>,
}

/// The region rules tried after plain text, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Directive,
    ServerComment,
    MarkupComment,
    InlineExpression,
    DataBindExpression,
    InlineCode,
    OpenTag,
    CloseTag,
}

impl Rule {
    /// Evaluation order at every cursor position; the first match wins.
    pub const CASCADE: [Rule; 8] = [
        Rule::Directive,
        Rule::ServerComment,
        Rule::MarkupComment,
        Rule::InlineExpression,
        Rule::DataBindExpression,
        Rule::InlineCode,
        Rule::OpenTag,
        Rule::CloseTag,
    ];

    /// Whether the rule still runs inside an opaque element body.
    pub fn active_in_non_parsed(self) -> bool {
        matches!(
            self,
            Rule::ServerComment | Rule::MarkupComment | Rule::CloseTag
        )
    }

    /// The delimiter that ends this rule's region, and the least distance
    /// from the region start at which it can begin (`<%@%>`, `<%---%>`,
    /// `<!--->`, `<%%>`, `<a>`, `</a>`).
    pub fn terminator(self) -> (Terminator, usize) {
        match self {
            Rule::Directive => (Terminator::CodeClose, 3),
            Rule::ServerComment => (Terminator::ServerCommentClose, 3),
            Rule::MarkupComment => (Terminator::MarkupCommentClose, 3),
            Rule::InlineExpression | Rule::DataBindExpression | Rule::InlineCode => {
                (Terminator::CodeClose, 2)
            }
            Rule::OpenTag => (Terminator::TagClose, 2),
            Rule::CloseTag => (Terminator::TagClose, 3),
        }
    }

    /// Tries this rule at `offset`.
    pub fn match_at(self, lexer: &Lexer<'_>, offset: usize) -> Option<RuleMatch> {
        let (terminator, gap) = self.terminator();
        lexer.ahead().next(terminator, offset + gap)?;

        let simple = |re: &regex::Regex| patterns::match_at(re, lexer.text(), offset);
        match self {
            Rule::Directive => directive::scan_directive(lexer, offset).map(RuleMatch::Directive),
            Rule::ServerComment => simple(patterns::server_comment()).map(RuleMatch::Comment),
            Rule::MarkupComment => simple(patterns::markup_comment()).map(RuleMatch::Comment),
            Rule::InlineExpression => simple(patterns::inline_expression()).map(RuleMatch::Code),
            Rule::DataBindExpression => {
                simple(patterns::data_bind_expression()).map(RuleMatch::Code)
            }
            Rule::InlineCode => simple(patterns::inline_code()).map(RuleMatch::Code),
            Rule::OpenTag => tag::scan_open_tag(lexer, offset).map(RuleMatch::OpenTag),
            Rule::CloseTag => tag::scan_close_tag(lexer, offset).map(RuleMatch::CloseTag),
        }
    }
}

/// What a region rule recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleMatch {
    Directive(DirectiveMatch),
    Comment(Span),
    Code(Span),
    OpenTag(TagMatch),
    CloseTag(CloseTagMatch),
}

impl RuleMatch {
    /// The whole matched region.
    pub fn span(&self) -> Span {
        match self {
            RuleMatch::Directive(m) => m.span,
            RuleMatch::Comment(span) | RuleMatch::Code(span) => *span,
            RuleMatch::OpenTag(m) => m.span,
            RuleMatch::CloseTag(m) => m.span,
        }
    }
}
