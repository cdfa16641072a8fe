use crate::source::Span;

use super::{
    AttributeCapture, DirectiveMatch, Lexer,
    chars::{is_directive_name_char, is_word_char},
    cursor::Cursor,
    kinds::Directive,
    lookahead::Lookahead,
    values::ValueSyntax,
};

/// Scans `<%@ name[=value] ... %>` starting exactly at `offset`. Attribute
/// values follow [`ValueSyntax::DIRECTIVE`].
pub fn scan_directive(lexer: &Lexer<'_>, offset: usize) -> Option<DirectiveMatch> {
    let mut cur = Cursor::new(lexer.text(), offset);
    if !cur.eat_str(Directive::OPEN) {
        return None;
    }
    cur.skip_whitespace();
    if !cur.eat(Directive::MARKER) {
        return None;
    }

    let mut attributes = Vec::new();
    loop {
        let saved = cur.clone();
        cur.skip_whitespace();
        match scan_attribute(&mut cur, lexer.ahead()) {
            Some(attribute) => attributes.push(attribute),
            None => {
                cur = saved;
                break;
            }
        }
    }

    cur.skip_whitespace();
    if !cur.eat_str(Directive::CLOSE) {
        return None;
    }
    Some(DirectiveMatch {
        span: Span::new(offset, cur.pos()),
        attributes,
    })
}

fn scan_attribute(cur: &mut Cursor<'_>, ahead: &Lookahead) -> Option<AttributeCapture> {
    let start = cur.pos();
    if !cur.peek().is_some_and(is_word_char) {
        return None;
    }
    cur.bump();
    cur.eat_while(is_directive_name_char);
    // the name must be followed by something
    cur.peek()?;
    let name = Span::new(start, cur.pos());
    let value = ValueSyntax::DIRECTIVE.scan(cur, name, ahead)?;
    Some(AttributeCapture { name, value })
}
