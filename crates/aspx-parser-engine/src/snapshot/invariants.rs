use crate::tree::{Document, Node, NodeKind};

/// Panics with a description of the first structural property `doc` breaks.
///
/// Checked: every fragment is in bounds, on char boundaries and slices to its
/// reported text; node values tile the buffer in document order; parent links
/// agree with child lists; attributes sit inside their owner; no two adjacent
/// siblings are both text.
pub fn check(doc: &Document) {
    let len = doc.len();
    let text = doc.text();
    let root = doc.root();

    assert_eq!(root.kind(), NodeKind::Root, "node 0 is not the root");
    assert!(root.parent().is_none(), "root has a parent");
    assert_eq!(root.value(), text, "root value does not span the buffer");
    check_text_merged(root);

    let mut cursor = 0;
    for node in doc.descendants() {
        let span = node.span();
        assert!(
            span.start <= span.end && span.end <= len,
            "node span out of bounds: {span:?} (source len: {len})"
        );
        assert!(
            text.is_char_boundary(span.start) && text.is_char_boundary(span.end),
            "node span splits a character: {span:?}"
        );
        assert_eq!(
            span.start, cursor,
            "gap or overlap before {:?} node at {span:?}",
            node.kind()
        );
        assert!(!span.is_empty(), "empty {:?} node at {span:?}", node.kind());
        cursor = span.end;

        check_fragments(node);
        check_links(node);
        check_attributes(node);
    }
    assert_eq!(cursor, len, "nodes stop at byte {cursor} of {len}");
}

fn check_fragments(node: Node<'_>) {
    let text = node.document().text();
    for fragment in [node.value_fragment(), node.name_fragment()] {
        let span = fragment.span().expect("node fragments are always defined");
        assert!(fragment.is_bound(), "node fragment not bound: {span:?}");
        assert_eq!(
            fragment.text().ok(),
            text.get(span.start..span.end),
            "fragment text differs from buffer at {span:?}"
        );
    }
    let name = node.name_fragment().span().unwrap_or_default();
    let value = node.span();
    assert!(
        value.start <= name.start && name.end <= value.end,
        "name {name:?} outside value {value:?}"
    );
}

fn check_links(node: Node<'_>) {
    let parent = node.parent().expect("non-root node without parent");
    assert!(
        parent.children().any(|sibling| sibling == node),
        "node {:?} missing from its parent's children",
        node.id()
    );
    for child in node.children() {
        assert_eq!(child.parent(), Some(node), "child {:?} has wrong parent", child.id());
    }
    check_text_merged(node);
}

fn check_text_merged(node: Node<'_>) {
    let kinds: Vec<_> = node.children().map(|c| c.kind()).collect();
    assert!(
        !kinds
            .windows(2)
            .any(|w| w[0] == NodeKind::Text && w[1] == NodeKind::Text),
        "adjacent text siblings under {:?}",
        node.id()
    );
}

fn check_attributes(node: Node<'_>) {
    let owner = node.span();
    for attribute in node.attributes().iter() {
        let spans = [
            attribute.body_fragment(),
            attribute.key_fragment(),
            attribute.value_fragment(),
        ]
        .map(|f| f.span().expect("attribute fragments are always defined"));
        let [body, key, value] = spans;
        for span in spans {
            assert!(
                owner.start <= span.start && span.end <= owner.end,
                "attribute span {span:?} outside owner {owner:?}"
            );
        }
        assert!(
            body.start == key.start && value.end <= body.end,
            "attribute body {body:?} does not cover key {key:?} and value {value:?}"
        );
    }
}
