use crate::source::Span;

use super::{
    AttributeCapture, CloseTagMatch, Lexer, TagMatch,
    chars::{is_attribute_name_char, is_word_char},
    cursor::Cursor,
    kinds::{CloseTag, OpenTag},
    lookahead::Lookahead,
    values::ValueSyntax,
};

/// Scans `<name attr=value ... [/]>` starting exactly at `offset`.
///
/// Attribute values follow [`ValueSyntax::TAG`].
pub fn scan_open_tag(lexer: &Lexer<'_>, offset: usize) -> Option<TagMatch> {
    let mut cur = Cursor::new(lexer.text(), offset);
    if !cur.eat(OpenTag::OPEN) {
        return None;
    }
    let options = lexer.options();
    let name = scan_name(&mut cur, |c| options.is_tag_name_char(c))?;

    let mut attributes = Vec::new();
    loop {
        let saved = cur.clone();
        if cur.skip_whitespace() == 0 {
            break;
        }
        match scan_attribute(&mut cur, lexer.ahead()) {
            Some(attribute) => attributes.push(attribute),
            None => {
                cur = saved;
                break;
            }
        }
    }

    cur.skip_whitespace();
    let self_closing = cur.eat(OpenTag::SELF_CLOSE);
    if !cur.eat(OpenTag::CLOSE) {
        return None;
    }

    Some(TagMatch {
        span: Span::new(offset, cur.pos()),
        name,
        attributes,
        self_closing,
    })
}

/// Scans `</name>` starting exactly at `offset`.
pub fn scan_close_tag(lexer: &Lexer<'_>, offset: usize) -> Option<CloseTagMatch> {
    let mut cur = Cursor::new(lexer.text(), offset);
    if !cur.eat_str(CloseTag::OPEN) {
        return None;
    }
    let options = lexer.options();
    let name = scan_name(&mut cur, |c| options.is_tag_name_char(c))?;
    cur.skip_whitespace();
    if !cur.eat(CloseTag::CLOSE) {
        return None;
    }
    Some(CloseTagMatch {
        span: Span::new(offset, cur.pos()),
        name,
    })
}

fn scan_name(cur: &mut Cursor<'_>, is_name_char: impl Fn(char) -> bool) -> Option<Span> {
    let start = cur.pos();
    if cur.eat_while(is_name_char) == 0 {
        return None;
    }
    Some(Span::new(start, cur.pos()))
}

fn scan_attribute(cur: &mut Cursor<'_>, ahead: &Lookahead) -> Option<AttributeCapture> {
    let start = cur.pos();
    if !cur.peek().is_some_and(is_word_char) {
        return None;
    }
    cur.bump();
    cur.eat_while(is_attribute_name_char);
    let name = Span::new(start, cur.pos());
    let value = ValueSyntax::TAG.scan(cur, name, ahead)?;
    Some(AttributeCapture { name, value })
}
