use super::*;

fn first_element<'a, 'input>(doc: &'a roxmltree::Document<'input>, tag: &str) -> roxmltree::Node<'a, 'input> {
    doc.descendants()
        .find(|n| n.has_tag_name(tag))
        .unwrap()
}

#[test]
fn finish_without_edits_returns_source() {
    let source = "<a><b/></a>";
    assert_eq!(Splice::new(source).finish(), source);
}

#[test]
fn edits_apply_in_source_order_regardless_of_insertion_order() {
    let source = "0123456789";
    let mut splice = Splice::new(source);
    splice.replace(7..8, "x");
    splice.insert(2, "[");
    splice.delete(4..6);
    assert_eq!(splice.finish(), "01[236x89");
}

#[test]
fn same_point_inserts_keep_call_order() {
    let mut splice = Splice::new("ab");
    splice.insert(1, "1");
    splice.insert(1, "2");
    assert_eq!(splice.finish(), "a12b");
}

#[test]
fn edits_inside_deleted_range_are_dropped() {
    let mut splice = Splice::new("<a><b/><c/></a>");
    splice.delete(3..11);
    splice.insert(5, "zzz");
    assert_eq!(splice.finish(), "<a></a>");
}

#[test]
fn set_attribute_replaces_existing_value() {
    let source = r#"<g id="x" data-rows="4"/>"#;
    let doc = roxmltree::Document::parse(source).unwrap();
    let mut splice = Splice::new(source);
    splice.set_attribute(first_element(&doc, "g"), "data-rows", "12");
    assert_eq!(splice.finish(), r#"<g id="x" data-rows="12"/>"#);
}

#[test]
fn set_attribute_preserves_single_quotes() {
    let source = "<g data-rows='4'></g>";
    let doc = roxmltree::Document::parse(source).unwrap();
    let mut splice = Splice::new(source);
    splice.set_attribute(first_element(&doc, "g"), "data-rows", "5");
    assert_eq!(splice.finish(), "<g data-rows='5'></g>");
}

#[test]
fn set_attribute_appends_after_tag_name() {
    let source = r#"<svg><g id="x"/><g/></svg>"#;
    let doc = roxmltree::Document::parse(source).unwrap();
    let mut splice = Splice::new(source);
    let groups: Vec<_> = doc.descendants().filter(|n| n.has_tag_name("g")).collect();
    splice.set_attribute(groups[0], "data-rows", "2");
    splice.set_attribute(groups[1], "data-rows", "3");
    assert_eq!(splice.finish(), r#"<svg><g data-rows="2" id="x"/><g data-rows="3"/></svg>"#);
}

#[test]
fn remove_attribute_takes_leading_whitespace() {
    let source = r#"<g id="x"   data-total-seats="40" data-rows="2"/>"#;
    let doc = roxmltree::Document::parse(source).unwrap();
    let mut splice = Splice::new(source);
    splice.remove_attribute(first_element(&doc, "g"), "data-total-seats");
    assert_eq!(splice.finish(), r#"<g id="x" data-rows="2"/>"#);
}

#[test]
fn remove_missing_attribute_is_noop() {
    let source = r#"<g id="x"/>"#;
    let doc = roxmltree::Document::parse(source).unwrap();
    let mut splice = Splice::new(source);
    splice.remove_attribute(first_element(&doc, "g"), "data-total-seats");
    assert_eq!(splice.finish(), source);
}

#[test]
fn remove_node_drops_whole_element() {
    let source = "<svg><text>hi<tspan>!</tspan></text><rect/></svg>";
    let doc = roxmltree::Document::parse(source).unwrap();
    let mut splice = Splice::new(source);
    splice.remove_node(first_element(&doc, "text"));
    splice.remove_node(first_element(&doc, "tspan"));
    assert_eq!(splice.finish(), "<svg><rect/></svg>");
}

#[test]
fn start_tag_end_skips_quoted_angle_brackets() {
    let source = r#"<svg data-note="a > b"><g/></svg>"#;
    let doc = roxmltree::Document::parse(source).unwrap();
    let end = start_tag_end(source, doc.root_element());
    assert_eq!(&source[..end], r#"<svg data-note="a > b">"#);
}

#[test]
fn self_closing_detection() {
    let source = "<svg><g/><g></g></svg>";
    let doc = roxmltree::Document::parse(source).unwrap();
    let groups: Vec<_> = doc.descendants().filter(|n| n.has_tag_name("g")).collect();
    assert!(is_self_closing(source, groups[0]));
    assert!(!is_self_closing(source, groups[1]));
    assert!(!is_self_closing(source, doc.root_element()));
}

#[test]
fn tag_qname_keeps_prefix() {
    let source = r#"<svg:svg xmlns:svg="http://www.w3.org/2000/svg"/>"#;
    let doc = roxmltree::Document::parse(source).unwrap();
    assert_eq!(tag_qname(source, doc.root_element()), "svg:svg");
}
