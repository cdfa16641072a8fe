//! Data-binding expressions: the code inside `<%# ... %>` and whether it binds
//! one way (`Eval`, `Item`) or two ways (`Bind`, `BindItem`).

use serde::Serialize;

use crate::lexer::patterns;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    /// Read-only: `Eval("Field")`, `Item.Field` or any other expression.
    OneWay,
    /// Read and write back: `Bind("Field")` or `BindItem.Field`.
    TwoWay,
}

/// A parsed `<%# ... %>` value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Binding<'a> {
    /// The code between `<%#` (or `<%#:`) and `%>`, trimmed.
    pub code: &'a str,
    /// Written as `<%#: ... %>`.
    pub encoded: bool,
    pub direction: Direction,
    /// The bound field, when the expression names one.
    pub field: Option<&'a str>,
    /// Raw argument list of a `Bind(...)` or `Eval(...)` call.
    pub params: Option<&'a str>,
}

impl<'a> Binding<'a> {
    /// Parses a value that is a single data-binding expression, surrounding
    /// whitespace allowed. Returns `None` for anything else.
    pub fn parse(value: &'a str) -> Option<Self> {
        let caps = patterns::data_bind_code().captures(value)?;
        let code = caps.name("code").map_or("", |m| m.as_str()).trim();
        let encoded = caps.name("encode").is_some();

        let mut binding = Binding {
            code,
            encoded,
            direction: Direction::OneWay,
            field: None,
            params: None,
        };

        if let Some(call) = patterns::binding_call().captures(code) {
            let params = call.name("params").map(|m| m.as_str());
            binding.direction = direction_of(call.name("function").map(|m| m.as_str()));
            binding.field = params
                .and_then(|p| patterns::quoted_argument().captures(p))
                .and_then(|arg| arg.name("value"))
                .map(|m| m.as_str());
            binding.params = params;
        } else if let Some(item) = patterns::binding_item().captures(code) {
            binding.direction = direction_of(item.name("function").map(|m| m.as_str()));
            binding.field = item.name("field").map(|m| m.as_str());
        }

        Some(binding)
    }

    pub fn is_two_way(&self) -> bool {
        self.direction == Direction::TwoWay
    }
}

fn direction_of(function: Option<&str>) -> Direction {
    match function {
        Some(f) if f.eq_ignore_ascii_case("bind") || f.eq_ignore_ascii_case("binditem") => {
            Direction::TwoWay
        }
        _ => Direction::OneWay,
    }
}
