//! Character classes and name comparison shared by the scanners.

/// Word character: letters, digits and underscore (the `\w` class).
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Attribute-name continuation: `[-\w:]`.
pub fn is_attribute_name_char(c: char) -> bool {
    is_word_char(c) || c == '-' || c == ':'
}

/// Directive attribute-name continuation: `[\w:]`.
pub fn is_directive_name_char(c: char) -> bool {
    is_word_char(c) || c == ':'
}

/// Case-insensitive name comparison without allocating.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
