use crate::lexer::chars::eq_ignore_case;

/// Elements that never take a close tag.
///
/// `P` is not listed, so a page that omits `</p>` reports an unclosed tag.
pub const EMPTY_ELEMENTS: &[&str] = &[
    "!DOCTYPE",
    "WBR",
    "RT",
    "PLAINTEXT",
    "PARAM",
    "OPTION",
    "META",
    "LINK",
    "LI",
    "INPUT",
    "IMG",
    "HR",
    "FRAME",
    "EMBED",
    "COL",
    "BR",
    "BGSOUND",
    "BASEFONT",
    "BASE",
    "AREA",
];

/// Case-insensitive membership in [`EMPTY_ELEMENTS`].
pub fn is_empty_element(local_name: &str) -> bool {
    EMPTY_ELEMENTS
        .iter()
        .any(|name| eq_ignore_case(name, local_name))
}
