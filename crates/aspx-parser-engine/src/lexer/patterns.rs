//! Compiled, process-wide pattern table.
//!
//! Every pattern is anchored with `\A` and run against the buffer sliced at the
//! cursor, so a match can only start exactly at the cursor. Each regex is
//! compiled once on first use and shared by every parse.

use std::sync::OnceLock;

use regex::Regex;

use crate::source::Span;

fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("Invalid built-in pattern"))
}

macro_rules! pattern {
    ($(#[$doc:meta])* $name:ident => $re:expr) => {
        $(#[$doc])*
        pub fn $name() -> &'static Regex {
            static RE: OnceLock<Regex> = OnceLock::new();
            compiled(&RE, $re)
        }
    };
}

pattern! {
    /// One or more characters up to the next `<`.
    text => r"\A[^<]+"
}

pattern! {
    /// `<%-- ... --%>`, ending at the first `-%>` preceded by a dash run.
    server_comment => r"\A<%--(?:[^-]*-)*?-%>"
}

pattern! {
    /// `<!-- ... -->`, non-greedy.
    markup_comment => r"\A<!--(?:[^-]*-)*?->"
}

pattern! {
    /// `<%= ... %>`, allowing whitespace before the `=`.
    inline_expression => r"(?s)\A<%\s*?=.*?%>"
}

pattern! {
    /// `<%# ... %>`
    data_bind_expression => r"(?s)\A<%#.*?%>"
}

pattern! {
    /// `<% ... %>` not immediately followed by `@`, `=`, `#` or `$`.
    inline_code => r"(?s)\A<%(?:[^@=#$].*?)??%>"
}

pattern! {
    /// A whole attribute value that is a single data-binding expression.
    data_bound_value => r"(?s)\A\s*<%\s*?#.*?%>\s*\z"
}

pattern! {
    /// A whole attribute value that is a single `<%$ ... %>` expression builder.
    expression_builder_value => r"(?s)\A\s*<%\s*\$\s*(?P<code>.*)?%>\s*\z"
}

pattern! {
    /// `<!-- #include file="..." -->` style server-side includes.
    server_include => r#"\A<!--\s*#(?i:include)\s*(?P<path_type>\w+)\s*=\s*["']?(?P<path>[^"']*?)["']?\s*-->"#
}

pattern! {
    /// The code of a data-binding expression, between `<%#` and `%>`.
    data_bind_code => r"(?s)\A\s*<%\s*?#(?P<encode>:)?(?P<code>.*?)%>\s*\z"
}

pattern! {
    /// `Bind("Field", ...)` or `Eval("Field", ...)`.
    binding_call => r"(?is)\A\s*(?P<function>bind|eval)\s*\((?P<params>.*)\)\s*\z"
}

pattern! {
    /// `BindItem.Field` or `Item.Field` (strongly typed model binding).
    binding_item => r"(?is)\A\s*(?P<function>binditem|item)\.(?P<field>[\w.]+)\s*\z"
}

pattern! {
    /// A leading quoted argument.
    quoted_argument => r#"\A\s*["'](?P<value>[^"']*)["']"#
}

/// Runs an anchored pattern at `offset`, returning the absolute span.
pub fn match_at(re: &Regex, text: &str, offset: usize) -> Option<Span> {
    let rest = text.get(offset..)?;
    let m = re.find(rest)?;
    debug_assert_eq!(m.start(), 0, "pattern is not anchored");
    Some(Span::new(offset + m.start(), offset + m.end()))
}
