use serde::{Deserialize, Serialize};

use crate::{
    lexer::chars::{eq_ignore_case, is_word_char},
    tree::elements,
};

/// Lexical knobs for a parse.
///
/// The defaults reproduce the Web Forms dialect: tag names are word characters
/// plus `:` and `.`, the built-in empty-element set applies, and only
/// `<script>` bodies are opaque.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Characters accepted in tag names in addition to word characters.
    pub tag_name_chars: String,
    /// Element names treated as empty on top of the built-in set.
    pub extra_empty_elements: Vec<String>,
    /// Elements whose body is scanned only for their own close tag.
    pub non_parsed_elements: Vec<String>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            tag_name_chars: ":.".to_string(),
            extra_empty_elements: Vec::new(),
            non_parsed_elements: vec!["script".to_string()],
        }
    }
}

impl ParseOptions {
    pub fn is_tag_name_char(&self, c: char) -> bool {
        is_word_char(c) || self.tag_name_chars.contains(c)
    }

    /// Whether an element with this local name never opens a scope.
    pub fn is_empty_element(&self, local_name: &str) -> bool {
        elements::is_empty_element(local_name)
            || self
                .extra_empty_elements
                .iter()
                .any(|name| eq_ignore_case(name, local_name))
    }

    /// Whether an element with this name has an opaque body.
    pub fn is_non_parsed_element(&self, name: &str) -> bool {
        self.non_parsed_elements
            .iter()
            .any(|candidate| eq_ignore_case(candidate, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_web_forms_dialect() {
        let options = ParseOptions::default();
        assert!(options.is_tag_name_char('a'));
        assert!(options.is_tag_name_char(':'));
        assert!(options.is_tag_name_char('.'));
        assert!(!options.is_tag_name_char('-'));
        assert!(options.is_non_parsed_element("SCRIPT"));
        assert!(!options.is_non_parsed_element("style"));
        assert!(options.is_empty_element("Br"));
        assert!(!options.is_empty_element("p"));
    }

    #[test]
    fn extra_empty_elements_are_case_insensitive() {
        let options = ParseOptions {
            extra_empty_elements: vec!["Source".to_string()],
            ..ParseOptions::default()
        };
        assert!(options.is_empty_element("SOURCE"));
    }

    #[test]
    fn hyphenated_tag_names_when_configured() {
        let options = ParseOptions {
            tag_name_chars: ":.-".to_string(),
            ..ParseOptions::default()
        };
        assert!(options.is_tag_name_char('-'));
    }
}
