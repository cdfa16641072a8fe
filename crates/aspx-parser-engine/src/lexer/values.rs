//! `name[=value]` values, shared by the open-tag and directive scanners.
//!
//! A value is one of, in order of preference: double-quoted, single-quoted,
//! a `<%# ... %>` expression, an unquoted run, or nothing at all. The first
//! alternative after which the owner can still go on is taken. A data-binding
//! value ends at the first `%>` that satisfies that same test, so
//! `t=<%# a %>b %>` is one value when a tag continues only after the second.

use crate::source::Span;

use super::{
    chars::is_word_char,
    cursor::Cursor,
    kinds::{CodeBlock, Directive, OpenTag},
    lookahead::{Lookahead, Terminator},
};

/// What differs between tag attributes and directive attributes.
pub struct ValueSyntax {
    /// Characters of an unquoted value.
    pub unquoted: fn(char) -> bool,
    /// Whether the owner can go on with `rest` after a value.
    pub continues: fn(&str) -> bool,
    /// The `%>` positions at which a data-binding value may end.
    pub bind_close: Terminator,
}

impl ValueSyntax {
    /// Unquoted `[^\s=/>]*`; the tag goes on with whitespace, `/` or `>`.
    pub const TAG: ValueSyntax = ValueSyntax {
        unquoted: tag_unquoted,
        continues: continues_tag,
        bind_close: Terminator::TagBindClose,
    };

    /// Unquoted `[^\s"'%>]*`; the directive goes on with whitespace, a name
    /// or `%>`.
    pub const DIRECTIVE: ValueSyntax = ValueSyntax {
        unquoted: directive_unquoted,
        continues: continues_directive,
        bind_close: Terminator::DirectiveBindClose,
    };

    /// Scans the value of the attribute `name`, the cursor sitting just past
    /// the name. On success the cursor is left after the value.
    pub fn scan(&self, cur: &mut Cursor<'_>, name: Span, ahead: &Lookahead) -> Option<Span> {
        for alternative in ALTERNATIVES {
            let mut attempt = cur.clone();
            if let Some(value) = alternative(self, &mut attempt, name, ahead)
                && (self.continues)(attempt.rest())
            {
                *cur = attempt;
                return Some(value);
            }
        }
        None
    }
}

type Alternative = fn(&ValueSyntax, &mut Cursor<'_>, Span, &Lookahead) -> Option<Span>;

const ALTERNATIVES: [Alternative; 5] = [
    |_, cur, _, ahead| quoted(cur, '"', ahead),
    |_, cur, _, ahead| quoted(cur, '\'', ahead),
    |syntax, cur, _, ahead| data_bind(cur, syntax.bind_close, ahead),
    |syntax, cur, _, _| unquoted(cur, syntax.unquoted),
    |_, _, name, _| Some(Span::empty(name.end)),
];

/// `\s*=\s*`
fn assignment(cur: &mut Cursor<'_>) -> bool {
    cur.skip_whitespace();
    if !cur.eat(OpenTag::ASSIGN) {
        return false;
    }
    cur.skip_whitespace();
    true
}

fn quoted(cur: &mut Cursor<'_>, quote: char, ahead: &Lookahead) -> Option<Span> {
    if !assignment(cur) || !cur.eat(quote) {
        return None;
    }
    let start = cur.pos();
    let end = ahead.next(Lookahead::quote(quote), start)?;
    cur.i = end + quote.len_utf8();
    Some(Span::new(start, end))
}

fn data_bind(cur: &mut Cursor<'_>, close: Terminator, ahead: &Lookahead) -> Option<Span> {
    if !assignment(cur) {
        return None;
    }
    let start = cur.pos();
    if !cur.eat_str(CodeBlock::OPEN) || !cur.eat(CodeBlock::DATA_BIND) {
        return None;
    }
    let end = ahead.next(close, cur.pos())? + CodeBlock::CLOSE.len();
    cur.i = end;
    Some(Span::new(start, end))
}

fn unquoted(cur: &mut Cursor<'_>, allowed: fn(char) -> bool) -> Option<Span> {
    if !assignment(cur) {
        return None;
    }
    let start = cur.pos();
    cur.eat_while(allowed);
    Some(Span::new(start, cur.pos()))
}

fn tag_unquoted(c: char) -> bool {
    !c.is_whitespace() && c != OpenTag::ASSIGN && c != OpenTag::SELF_CLOSE && c != OpenTag::CLOSE
}

fn directive_unquoted(c: char) -> bool {
    !c.is_whitespace() && !matches!(c, '"' | '\'' | '%' | '>')
}

fn continues_tag(rest: &str) -> bool {
    rest.starts_with(|c: char| c.is_whitespace() || c == OpenTag::SELF_CLOSE || c == OpenTag::CLOSE)
}

fn continues_directive(rest: &str) -> bool {
    rest.starts_with(|c: char| c.is_whitespace() || is_word_char(c))
        || rest.starts_with(Directive::CLOSE)
}
