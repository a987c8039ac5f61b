use docdom::{
    collect_ids, find_by, find_element, find_element_mut, find_parent_mut, Element, Tag,
};

fn sample() -> Element {
    Element::div().id("page").child(
        Element::ul()
            .id("list")
            .attr("role", "tree")
            .class("js-toc-tree")
            .child(
                Element::li()
                    .id("li-1")
                    .child(Element::anchor("Intro").id("intro").attr("href", "#Intro")),
            )
            .child(Element::li().id("li-2").child(
                Element::anchor("").id("summary").child(Element::span("Sum")).child(Element::span("mary")),
            )),
    )
}

// ============================================================================
// Lookup
// ============================================================================

#[test]
fn test_find_element_by_id() {
    let root = sample();
    assert_eq!(find_element(&root, "intro").map(|e| e.tag.clone()), Some(Tag::A));
    assert!(find_element(&root, "missing").is_none());
}

#[test]
fn test_find_by_role_and_class() {
    let root = sample();
    let tree = find_by(&root, &|el| {
        el.get_attr("role") == Some("tree") && el.has_class("js-toc-tree")
    });
    assert_eq!(tree.map(|e| e.id.as_str()), Some("list"));
}

#[test]
fn test_find_element_mut_edits_in_place() {
    let mut root = sample();
    find_element_mut(&mut root, "intro").unwrap().set_attr("tabindex", "0");
    assert_eq!(find_element(&root, "intro").unwrap().get_attr("tabindex"), Some("0"));
}

#[test]
fn test_find_parent() {
    let mut root = sample();
    let parent = find_parent_mut(&mut root, "intro").unwrap();
    assert_eq!(parent.id, "li-1");
    assert!(find_parent_mut(&mut root, "page").is_none());
}

#[test]
fn test_collect_ids_tree_order() {
    let root = sample();
    let ids = collect_ids(&root);
    let intro = ids.iter().position(|id| id == "intro").unwrap();
    let summary = ids.iter().position(|id| id == "summary").unwrap();
    assert_eq!(ids[0], "page");
    assert!(intro < summary);
}

// ============================================================================
// Content
// ============================================================================

#[test]
fn test_text_content_concatenates_descendants() {
    let root = sample();
    assert_eq!(find_element(&root, "summary").unwrap().text_content(), "Summary");
}

#[test]
fn test_child_replaces_text() {
    let el = Element::anchor("label").child(Element::span("inner"));
    assert_eq!(el.child_elements().len(), 1);
    assert_eq!(el.text_content(), "inner");
}

#[test]
fn test_first_element_child() {
    let root = sample();
    let li = find_element(&root, "li-1").unwrap();
    assert_eq!(li.first_element_child().map(|e| e.id.as_str()), Some("intro"));
    assert!(find_element(&root, "intro").unwrap().first_element_child().is_none());
}

// ============================================================================
// Attributes and classes
// ============================================================================

#[test]
fn test_classes_are_unique() {
    let mut el = Element::anchor("x");
    assert!(el.add_class("focus"));
    assert!(!el.add_class("focus"));
    assert_eq!(el.classes, vec!["focus".to_string()]);
    assert!(el.remove_class("focus"));
    assert!(!el.remove_class("focus"));
}

#[test]
fn test_toggle_class() {
    let mut el = Element::anchor("x");
    el.toggle_class("hover", true);
    assert!(el.has_class("hover"));
    el.toggle_class("hover", false);
    assert!(!el.has_class("hover"));
}

#[test]
fn test_display_style() {
    let mut el = Element::div();
    assert_eq!(el.display(), None);
    el.set_display(Some("none"));
    assert!(el.is_hidden());
    el.set_display(Some("inline-block"));
    assert_eq!(el.display(), Some("inline-block"));
    el.set_display(None);
    assert_eq!(el.get_attr("style"), None);
}
