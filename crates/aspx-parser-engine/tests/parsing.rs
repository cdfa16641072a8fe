use aspx_parser_engine::{
    CodeKind, CommentKind, Direction, Document, FragmentError, NodeKind, ParseOptions, TagError,
    snapshot,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::time::{Duration, Instant};

fn parse(text: &str) -> Document {
    let doc = Document::parse(text).unwrap();
    snapshot::invariants(&doc);
    doc
}

fn fixture(name: &str) -> Document {
    let text = std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.aspx",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();
    parse(&text)
}

/// Kind and name of each direct child of `node`.
fn shape(node: aspx_parser_engine::Node<'_>) -> Vec<(NodeKind, &str)> {
    node.children().map(|c| (c.kind(), c.name())).collect()
}

#[rstest]
#[case("")]
#[case("plain text")]
#[case("<a><b></b></a>")]
#[case("</x>")]
#[case("<<<>>>")]
#[case("<%")]
#[case("<%-- unterminated")]
#[case("a < b > c")]
#[case("<script>if (a<b) {}</script>")]
#[case("<div title=\"é\">ü</div>")]
#[case("<%@ Page %><% x %><%= y %><%# z %><!-- c --><%-- d --%>")]
fn values_reassemble_the_input(#[case] input: &str) {
    let doc = parse(input);
    let rebuilt: String = doc.descendants().map(|n| n.value()).collect();
    assert_eq!(rebuilt, input);
}

#[test]
fn balanced_tags_clear_their_errors() {
    let doc = parse("<a><b></b></a>");
    let root = doc.root();
    assert_eq!(
        shape(root),
        vec![(NodeKind::Open, "a"), (NodeKind::Close, "a")]
    );
    let a = root.first_child().unwrap();
    assert_eq!(
        shape(a),
        vec![(NodeKind::Open, "b"), (NodeKind::Close, "b")]
    );
    assert!(doc.descendants().all(|n| n.error() == TagError::None));
    assert!(doc.diagnostics().is_empty());
}

#[test]
fn missing_close_leaves_outer_tag_unclosed() {
    let doc = parse("<a><b></b>");
    let a = doc.root().first_child().unwrap();
    assert_eq!(a.error(), TagError::UnclosedOpenTag);
    assert_eq!(a.first_child().unwrap().error(), TagError::None);
}

#[test]
fn stray_close_tag_stays_at_root() {
    let doc = parse("</x>");
    let close = doc.root().first_child().unwrap();
    assert_eq!(doc.root().child_count(), 1);
    assert_eq!(close.kind(), NodeKind::Close);
    assert_eq!(close.error(), TagError::UnopenedCloseTag);
    assert_eq!(close.parent(), Some(doc.root()));
}

#[test]
fn stray_close_tag_leaves_scope_at_root() {
    let doc = parse("</x>y<p>");
    let root = doc.root();
    assert_eq!(
        shape(root),
        vec![
            (NodeKind::Close, "x"),
            (NodeKind::Text, "y"),
            (NodeKind::Open, "p"),
        ]
    );
    assert!(root.children().all(|n| n.parent() == Some(root)));
    assert_eq!(root.first_child().unwrap().error(), TagError::UnopenedCloseTag);
    assert_eq!(root.last_child().unwrap().error(), TagError::UnclosedOpenTag);
}

#[test]
fn close_tag_matches_case_insensitively_and_skips_other_kinds() {
    let doc = parse("<Panel><% x %>text</PANEL>");
    let panel = doc.root().first_child().unwrap();
    assert_eq!(panel.error(), TagError::None);
    assert_eq!(
        shape(doc.root()),
        vec![(NodeKind::Open, "Panel"), (NodeKind::Close, "PANEL")]
    );
}

#[test]
fn void_element_never_opens_scope() {
    let doc = parse("<br><p>hi</p>");
    assert_eq!(
        shape(doc.root()),
        vec![
            (NodeKind::Open, "br"),
            (NodeKind::Open, "p"),
            (NodeKind::Close, "p"),
        ]
    );
    let p = doc.root().child(1).unwrap();
    assert_eq!(shape(p), vec![(NodeKind::Text, "hi")]);
    assert!(!doc.root().first_child().unwrap().requires_closing_tag());
    assert!(p.requires_closing_tag());
}

#[test]
fn prefixed_void_element_uses_local_name() {
    let doc = parse("<x:br>after");
    let br = doc.root().first_child().unwrap();
    assert_eq!(br.local_name(), "br");
    assert_eq!(br.error(), TagError::None);
    assert!(!br.has_children());
}

#[test]
fn self_closing_tag_never_opens_scope() {
    let doc = parse("<asp:Image runat=server/>tail");
    let image = doc.root().first_child().unwrap();
    assert!(image.is_self_closing());
    assert!(!image.has_children());
    assert_eq!(image.error(), TagError::None);
    assert_eq!(doc.root().child(1).unwrap().value(), "tail");
}

#[test]
fn script_body_is_opaque() {
    let doc = parse("<script>if (a<b) {}</script>");
    let script = doc.root().first_child().unwrap();
    assert_eq!(shape(script), vec![(NodeKind::Text, "if (a<b) {}")]);
    assert_eq!(script.error(), TagError::None);
    assert_eq!(doc.root().child(1).unwrap().kind(), NodeKind::Close);
}

#[test]
fn script_body_keeps_comments_but_not_code() {
    let doc = parse("<SCRIPT><!-- hide --><%= x %></b></SCRIPT>");
    let script = doc.root().first_child().unwrap();
    assert_eq!(
        shape(script),
        vec![
            (NodeKind::Comment, "<!-- hide -->"),
            (NodeKind::Text, "<%= x %></b>"),
        ]
    );
}

#[test]
fn configured_non_parsed_elements() {
    let options = ParseOptions {
        non_parsed_elements: vec!["style".into(), "script".into()],
        ..ParseOptions::default()
    };
    let doc = Document::parse_with("<style>a > b { }</style><b>", &options).unwrap();
    snapshot::invariants(&doc);
    let style = doc.root().first_child().unwrap();
    assert_eq!(shape(style), vec![(NodeKind::Text, "a > b { }")]);
    assert_eq!(doc.root().child(2).unwrap().name(), "b");
}

#[test]
fn configured_empty_elements() {
    let options = ParseOptions {
        extra_empty_elements: vec!["source".into()],
        ..ParseOptions::default()
    };
    let doc = Document::parse_with("<source src=a.mp4><p>", &options).unwrap();
    assert_eq!(doc.root().child_count(), 2);
    assert_eq!(doc.root().first_child().unwrap().error(), TagError::None);
}

#[test]
fn attribute_body_includes_quotes() {
    let doc = parse(r#"<a id="x">"#);
    let attrs = doc.root().first_child().unwrap().attributes();
    assert_eq!(attrs.len(), 1);
    let id = attrs.get_index(0).unwrap();
    assert_eq!(id.key(), "id");
    assert_eq!(id.value(), "x");
    assert_eq!(id.body(), r#"id="x""#);
    assert_eq!(id.to_string(), r#"id="x""#);
    assert_eq!(id.owner(), doc.root().first_child().unwrap().id());
    assert_eq!(id.owner_node().name(), "a");
}

#[test]
fn attribute_lookup_ignores_case() {
    let doc = parse(r#"<asp:Label ID='lbl' Text=hi Visible>"#);
    let attrs = doc.root().first_child().unwrap().attributes();
    assert_eq!(attrs.get("id").unwrap().value(), "lbl");
    assert_eq!(attrs.get("TEXT").unwrap().body(), "Text=hi");
    assert_eq!(attrs.get("visible").unwrap().value(), "");
    assert!(attrs.get("missing").is_none());
    assert!(attrs.contains_key("TEXT"));
    let keys: Vec<_> = attrs.iter().map(|a| a.key()).collect();
    assert_eq!(keys, vec!["ID", "Text", "Visible"]);
}

#[test]
fn data_bound_attribute() {
    let doc = parse(r#"<a Text='<%# Eval("x") %>' Title="<%= y %>">"#);
    let attrs = doc.root().first_child().unwrap().attributes();
    let text = attrs.get("Text").unwrap();
    assert!(text.is_data_bound());
    assert_eq!(text.value(), r#"<%# Eval("x") %>"#);
    let binding = text.binding().unwrap();
    assert_eq!(binding.direction, Direction::OneWay);
    assert_eq!(binding.field, Some("x"));

    let title = attrs.get("Title").unwrap();
    assert!(!title.is_data_bound());
    assert!(title.binding().is_none());
}

#[test]
fn data_bind_value_runs_to_a_close_the_tag_can_follow() {
    let doc = parse("<a t=<%# a %>b %>>");
    assert_eq!(shape(doc.root()), vec![(NodeKind::Open, "a")]);
    let t = doc.root().first_child().unwrap().attributes().get("t").unwrap();
    assert_eq!(t.value(), "<%# a %>b %>");
    assert!(t.is_data_bound());
}

#[test]
fn expression_builder_attribute() {
    let doc = parse(r#"<asp:Literal Text="<%$ Resources:Labels, Title %>" runat="server" />"#);
    let attrs = doc.root().first_child().unwrap().attributes();
    let text = attrs.get("Text").unwrap();
    assert!(text.is_expression_builder());
    assert!(!text.is_data_bound());
    assert!(text.binding().is_none());
    assert!(!attrs.get("runat").unwrap().is_expression_builder());
}

#[rstest]
#[case("<a b=\"")]
#[case("<a t='")]
#[case("a<%")]
#[case("a<%=")]
#[case("a<!--")]
#[case("a<%--")]
#[case("<%@ P a=")]
fn unterminated_regions_parse_in_linear_time(#[case] unit: &str) {
    let input = unit.repeat(96 * 1024 / unit.len());
    let started = Instant::now();
    let doc = Document::parse(input.as_str()).unwrap();
    let elapsed = started.elapsed();
    assert_eq!(doc.text(), input);
    assert!(
        elapsed < Duration::from_secs(5),
        "{} bytes of {unit:?} took {elapsed:?}",
        input.len()
    );
}

#[test]
fn adjacent_fallback_characters_form_one_text_node() {
    let doc = parse("ab");
    assert_eq!(doc.root().child_count(), 1);

    let doc = parse("<<");
    assert_eq!(shape(doc.root()), vec![(NodeKind::Text, "<<")]);
}

#[test]
fn directive_attributes() {
    let doc = parse(r#"<%@ Register TagPrefix="uc" Src="~/Nav.ascx" %>"#);
    let directive = doc.root().first_child().unwrap();
    assert_eq!(directive.kind(), NodeKind::Directive);
    assert_eq!(directive.name(), directive.value());
    assert_eq!(directive.prefix(), "");
    assert_eq!(directive.local_name(), "");
    let attrs = directive.attributes();
    assert_eq!(attrs.get_index(0).unwrap().key(), "Register");
    assert_eq!(attrs.get("src").unwrap().value(), "~/Nav.ascx");
}

#[test]
fn root_reports_whole_buffer() {
    let doc = parse("<p>x</p>");
    let root = doc.root();
    assert_eq!(root.kind(), NodeKind::Root);
    assert_eq!(root.name(), "<p>x</p>");
    assert_eq!(root.value(), "<p>x</p>");
    assert_eq!(root.local_name(), "<p>x</p>");
    assert_eq!(root.prefix(), "");
    assert!(root.parent().is_none());
    assert_eq!(root.depth(), 0);
    assert_eq!((root.line(), root.column()), (1, 1));
}

#[test]
fn positions_are_one_based() {
    let doc = parse("<a>\n  <b>\r\n<c>");
    let positions: Vec<_> = doc
        .descendants()
        .filter(|n| n.kind() == NodeKind::Open)
        .map(|n| (n.name(), n.line(), n.column()))
        .collect();
    assert_eq!(positions, vec![("a", 1, 1), ("b", 2, 3), ("c", 3, 1)]);
    let b = doc.find("b").unwrap();
    assert_eq!(b.value_fragment().line(), Some(2));
    assert_eq!(b.name_fragment().column(), Some(4));
}

#[test]
fn fragments_bind_checked_ranges() {
    use aspx_parser_engine::{Fragment, source::Source};

    let source = Source::new("hello");
    let fragment = Fragment::bind(&source, 1, 3).unwrap();
    assert_eq!(fragment.text(), Ok("ell"));
    assert_eq!(
        Fragment::bind(&source, 4, 2).unwrap_err(),
        FragmentError::OutOfRange {
            start: 4,
            len: 2,
            source_len: 5
        }
    );
    assert_eq!(Fragment::undefined().text(), Err(FragmentError::Undefined));
}

#[test]
fn from_str_and_lookup() {
    let doc: Document = "<ul><li>a<li>b</ul>".parse().unwrap();
    assert_eq!(doc.find_all("LI").count(), 2);
    let ul = doc.find("ul").unwrap();
    assert_eq!(ul.child_by_name("li").unwrap().line(), 1);
    assert_eq!(ul.last_child().unwrap().value(), "b");
    assert_eq!(doc.node(ul.id()), Some(ul));
    assert_eq!(ul.to_string(), "<ul>");
}

#[test]
fn product_list_page() {
    let doc = fixture("product_list");

    let directive = doc.root().first_child().unwrap();
    assert_eq!(directive.kind(), NodeKind::Directive);
    assert_eq!(
        directive.attributes().get("language").unwrap().value(),
        "C#"
    );

    let comments: Vec<_> = doc
        .descendants()
        .filter_map(|n| n.comment_kind())
        .collect();
    assert_eq!(comments, vec![CommentKind::Server, CommentKind::Markup]);

    let include = doc
        .descendants()
        .find_map(|n| n.server_include())
        .unwrap();
    assert_eq!((include.path_type, include.path), ("file", "header.inc"));

    let script = doc.find("script").unwrap();
    assert_eq!(script.child_count(), 1);
    assert!(script.first_child().unwrap().value().contains(r#""<b>" + name + "</b>""#));

    let code: Vec<_> = doc.descendants().filter_map(|n| n.code_kind()).collect();
    assert_eq!(
        code,
        vec![
            CodeKind::Expression,
            CodeKind::DataBind,
            CodeKind::Statement,
            CodeKind::Statement,
        ]
    );

    let controls: Vec<_> = doc
        .descendants()
        .filter(|n| n.is_server_control())
        .map(|n| n.name())
        .collect();
    assert_eq!(controls, vec!["head", "asp:Repeater", "asp:TextBox"]);

    let repeater = doc.find("asp:repeater").unwrap();
    assert_eq!((repeater.prefix(), repeater.local_name()), ("asp", "Repeater"));
    assert!(repeater.child_by_name("ItemTemplate").is_some());

    let price = doc
        .find("asp:TextBox")
        .unwrap()
        .attributes()
        .get("Text")
        .unwrap()
        .binding()
        .unwrap();
    assert!(price.is_two_way());
    assert_eq!(price.field, Some("Price"));

    let diagnostics: Vec<_> = doc
        .diagnostics()
        .into_iter()
        .map(|d| (d.name, d.error, d.line, d.column))
        .collect();
    assert_eq!(
        diagnostics,
        vec![
            ("p".to_string(), TagError::UnclosedOpenTag, 18, 26),
            ("div".to_string(), TagError::UnopenedCloseTag, 18, 35),
        ]
    );
}

#[test]
fn unbalanced_page_renders_with_errors() {
    let doc = fixture("unbalanced");
    insta::assert_snapshot!(snapshot::render(&doc), @r#"
Root
Open div @1:1 !UnclosedOpenTag
  - class = "outer"
  Text "\n  " @1:18
  Open span @2:3 !UnclosedOpenTag
    Text "open\n  " @2:9
    Close em @3:3 !UnopenedCloseTag
    Text "\n" @3:8
    Open table @4:1
      Open tr @4:8 !UnclosedOpenTag
        Open td @4:12 !UnclosedOpenTag
          Text "cell" @4:16
    Close table @4:20
    Text "\n" @4:28
"#);

    let messages: Vec<_> = doc.diagnostics().iter().map(|d| d.to_string()).collect();
    assert_eq!(
        messages,
        vec![
            "1:1: open tag is never closed <div>",
            "2:3: open tag is never closed <span>",
            "3:3: close tag has no matching open tag <em>",
            "4:8: open tag is never closed <tr>",
            "4:12: open tag is never closed <td>",
        ]
    );
}
