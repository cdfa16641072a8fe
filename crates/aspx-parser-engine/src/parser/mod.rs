//! # Parser Engine
//!
//! A single forward pass over the buffer. At each position plain text is tried
//! first, then the region cascade from [`crate::lexer::Rule::CASCADE`]. When
//! nothing matches, one character is taken as text so the cursor always moves.
//!
//! ## Scope tracking
//!
//! `current` is the node new children attach to. An open tag that needs a
//! close tag becomes `current` and is flagged [`TagError::UnclosedOpenTag`]
//! until a close tag with the same name pops it. A close tag pops to the
//! parent of the nearest open ancestor with a matching name; with no such
//! ancestor it is flagged [`TagError::UnopenedCloseTag`] and scope is left
//! alone.
//!
//! ## Non-parsed elements
//!
//! Inside `<script>` (or any configured non-parsed element) only comments and
//! close tags are recognized. A close tag for a different element is taken as
//! text, one character at a time.

mod attributes;

use log::{debug, trace};

use crate::{
    error::FragmentError,
    lexer::{CloseTagMatch, DirectiveMatch, Lexer, RuleMatch, TagMatch, chars::eq_ignore_case},
    options::ParseOptions,
    source::{Source, Span},
    tree::{
        NodeId, NodeKind, TagError,
        node::NodeData,
    },
};

pub(crate) struct Parser<'s> {
    source: &'s Source,
    options: &'s ParseOptions,
    nodes: Vec<NodeData>,
    current: NodeId,
    inside_non_parsed: bool,
    close_does_not_terminate: bool,
}

impl<'s> Parser<'s> {
    pub fn new(source: &'s Source, options: &'s ParseOptions) -> Self {
        Self {
            source,
            options,
            nodes: vec![NodeData::new(NodeKind::Root, None, source.full_span())],
            current: NodeId::ROOT,
            inside_non_parsed: false,
            close_does_not_terminate: false,
        }
    }

    /// Runs the scan to the end of the buffer and hands back the arena.
    pub fn run(mut self) -> Result<Vec<NodeData>, FragmentError> {
        let source = self.source;
        let text = source.as_str();
        let lexer = Lexer::new(text, self.options);
        let mut cursor = 0;

        while cursor != text.len() {
            if let Some(span) = lexer.match_text(cursor) {
                self.push_text(span)?;
                cursor = span.end;
                if cursor == text.len() {
                    break;
                }
            }

            self.close_does_not_terminate = false;
            let end = match lexer.match_region(cursor, self.inside_non_parsed) {
                Some(region) => {
                    let end = region.span().end;
                    self.apply(region)?;
                    (!self.close_does_not_terminate).then_some(end)
                }
                None => None,
            };

            cursor = match end {
                Some(end) => end,
                None => {
                    let width = source.char_width_at(cursor);
                    self.push_text(source.span(cursor, width)?)?;
                    cursor + width
                }
            };
        }

        self.log_summary();
        Ok(self.nodes)
    }

    fn apply(&mut self, region: RuleMatch) -> Result<(), FragmentError> {
        match region {
            RuleMatch::Directive(m) => self.directive(m),
            RuleMatch::Comment(span) => self.add_node(NodeKind::Comment, span).map(drop),
            RuleMatch::Code(span) => self.add_node(NodeKind::Code, span).map(drop),
            RuleMatch::OpenTag(m) => self.open_tag(m),
            RuleMatch::CloseTag(m) => self.close_tag(m),
        }
    }

    /// Appends a child of `current` whose name and value are both `value`.
    fn add_node(&mut self, kind: NodeKind, value: Span) -> Result<NodeId, FragmentError> {
        let value = self.source.check(value)?;
        let id = NodeId(self.nodes.len());
        self.nodes
            .push(NodeData::new(kind, Some(self.current), value));
        self.nodes[self.current.0].children.push(id);
        Ok(id)
    }

    /// Appends text, extending the previous sibling when it is text too.
    fn push_text(&mut self, span: Span) -> Result<(), FragmentError> {
        let last = self.nodes[self.current.0].children.last().copied();
        if let Some(last) = last
            && self.nodes[last.0].kind == NodeKind::Text
        {
            let merged = self.source.check(self.nodes[last.0].value.cover(span))?;
            let node = &mut self.nodes[last.0];
            node.value = merged;
            node.name = merged;
            return Ok(());
        }
        self.add_node(NodeKind::Text, span).map(drop)
    }

    fn directive(&mut self, m: DirectiveMatch) -> Result<(), FragmentError> {
        let id = self.add_node(NodeKind::Directive, m.span)?;
        self.nodes[id.0].attributes = attributes::collect(self.source, &m.attributes)?;
        Ok(())
    }

    fn open_tag(&mut self, m: TagMatch) -> Result<(), FragmentError> {
        let source = self.source;
        let id = self.add_node(NodeKind::Open, m.span)?;
        let name = source.check(m.name)?;
        let attributes = attributes::collect(source, &m.attributes)?;
        {
            let node = &mut self.nodes[id.0];
            node.name = name;
            node.attributes = attributes;
            node.self_closing = m.self_closing;
        }

        if m.self_closing {
            return Ok(());
        }
        let name = source.slice(name);
        if self.options.is_empty_element(local_name(name)) {
            return Ok(());
        }

        self.nodes[id.0].error = TagError::UnclosedOpenTag;
        if self.options.is_non_parsed_element(name) {
            trace!("entering non-parsed <{name}> at byte {}", m.span.start);
            self.inside_non_parsed = true;
        }
        trace!("push <{name}> depth {}", self.depth_of(id));
        self.current = id;
        Ok(())
    }

    fn close_tag(&mut self, m: CloseTagMatch) -> Result<(), FragmentError> {
        let source = self.source;
        let name_span = source.check(m.name)?;
        let name = source.slice(name_span);

        if self.options.is_non_parsed_element(name) {
            if self.inside_non_parsed {
                trace!("leaving non-parsed </{name}> at byte {}", m.span.start);
            }
            self.inside_non_parsed = false;
        } else if self.inside_non_parsed {
            self.close_does_not_terminate = true;
            return Ok(());
        }

        let opener = self.matching_open(name);
        if let Some(open) = opener {
            let node = &mut self.nodes[open.0];
            node.error = TagError::None;
            self.current = node.parent.unwrap_or(NodeId::ROOT);
            trace!("pop </{name}> to depth {}", self.depth_of(self.current));
        }

        let id = self.add_node(NodeKind::Close, m.span)?;
        let node = &mut self.nodes[id.0];
        node.name = name_span;
        node.error = if opener.is_some() {
            TagError::None
        } else {
            TagError::UnopenedCloseTag
        };
        Ok(())
    }

    /// Nearest Open node from `current` upwards whose name matches. Other
    /// kinds on the way are skipped.
    fn matching_open(&self, name: &str) -> Option<NodeId> {
        let mut next = Some(self.current);
        while let Some(id) = next {
            let node = &self.nodes[id.0];
            if node.kind == NodeKind::Open && eq_ignore_case(self.source.slice(node.name), name) {
                return Some(id);
            }
            next = node.parent;
        }
        None
    }

    fn depth_of(&self, id: NodeId) -> usize {
        std::iter::successors(self.nodes[id.0].parent, |p| self.nodes[p.0].parent).count()
    }

    fn log_summary(&self) {
        debug!(
            "parsed {} bytes into {} nodes",
            self.source.len(),
            self.nodes.len()
        );
        for node in &self.nodes {
            if node.error != TagError::None {
                let (line, column) = self.source.position(node.value.start);
                debug!(
                    "{line}:{column}: {} <{}>",
                    node.error,
                    self.source.slice(node.name)
                );
            }
        }
    }
}

fn local_name(name: &str) -> &str {
    match name.find(':') {
        Some(i) if i > 0 => &name[i + 1..],
        _ => name,
    }
}
