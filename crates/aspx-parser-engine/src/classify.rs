//! Finer-grained questions about nodes that the tree itself does not encode:
//! which flavor of code block, which comment syntax, server-side includes and
//! server controls.

use serde::Serialize;

use crate::{
    lexer::{
        chars::eq_ignore_case,
        kinds::{CodeBlock, ServerComment},
        patterns,
    },
    tree::{CodeKind, CommentKind, Node, NodeKind},
};

/// `<!-- #include file="..." -->` or `<!-- #include virtual="..." -->`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerInclude<'a> {
    /// `file` or `virtual` as written.
    pub path_type: &'a str,
    pub path: &'a str,
}

impl<'a> Node<'a> {
    /// Flavor of a Code node; `None` for every other kind.
    pub fn code_kind(&self) -> Option<CodeKind> {
        if self.kind() != NodeKind::Code {
            return None;
        }
        let body = self.value().strip_prefix(CodeBlock::OPEN).unwrap_or_default();
        if body.trim_start().starts_with(CodeBlock::EXPRESSION) {
            return Some(CodeKind::Expression);
        }
        Some(match body.chars().next() {
            Some(CodeBlock::DATA_BIND) => CodeKind::DataBind,
            Some(CodeBlock::ENCODED) => CodeKind::EncodedExpression,
            _ => CodeKind::Statement,
        })
    }

    /// Syntax of a Comment node; `None` for every other kind.
    pub fn comment_kind(&self) -> Option<CommentKind> {
        if self.kind() != NodeKind::Comment {
            return None;
        }
        Some(if self.value().starts_with(ServerComment::OPEN) {
            CommentKind::Server
        } else {
            CommentKind::Markup
        })
    }

    /// The include target of a `#include` markup comment.
    pub fn server_include(&self) -> Option<ServerInclude<'a>> {
        if self.comment_kind()? != CommentKind::Markup {
            return None;
        }
        let caps = patterns::server_include().captures(self.value())?;
        Some(ServerInclude {
            path_type: caps.name("path_type")?.as_str(),
            path: caps.name("path")?.as_str(),
        })
    }

    /// An open tag carrying `runat="server"`.
    pub fn is_server_control(&self) -> bool {
        self.kind() == NodeKind::Open
            && self
                .attributes()
                .get("runat")
                .is_some_and(|runat| eq_ignore_case(runat.value().trim(), "server"))
    }
}
