//! Serialized nested-list outlines.
//!
//! An outline is a JSON array of entries, each with a label, an optional
//! link and optional children:
//!
//! ```json
//! [
//!   {"label": "Intro", "href": "#Intro", "children": [
//!     {"label": "A", "href": "#A"}
//!   ]},
//!   {"label": "Summary", "href": "#Summary"}
//! ]
//! ```
//!
//! [`Outline::to_element`] turns it into the `ul[role=tree] > li > a + ul`
//! markup a [`TreeIndex`](crate::TreeIndex) is built from.

use docdom::Element;
use serde::{Deserialize, Serialize};

use crate::error::OutlineError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineEntry {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<OutlineEntry>,
}

impl OutlineEntry {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
            aria_label: None,
            children: Vec::new(),
        }
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    pub fn child(mut self, child: OutlineEntry) -> Self {
        self.children.push(child);
        self
    }

    /// Entries with a link become `a`, the rest `span`.
    fn to_element(&self) -> Element {
        let mut label = match &self.href {
            Some(href) => Element::anchor(self.label.clone()).attr("href", href.clone()),
            None => Element::span(self.label.clone()),
        };
        if let Some(aria) = &self.aria_label {
            label.set_attr("aria-label", aria.clone());
        }

        let mut li = Element::li().child(label);
        if !self.children.is_empty() {
            li.push_child(Element::ul().children(self.children.iter().map(Self::to_element)));
        }
        li
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Outline {
    pub entries: Vec<OutlineEntry>,
}

impl Outline {
    pub fn new(entries: Vec<OutlineEntry>) -> Self {
        Self { entries }
    }

    /// Parse and validate a JSON outline.
    pub fn from_json(json: &str) -> Result<Self, OutlineError> {
        let outline: Outline = serde_json::from_str(json)?;
        outline.validate()?;
        Ok(outline)
    }

    /// Pretty-printed JSON in the form [`Outline::from_json`] reads.
    pub fn to_json(&self) -> Result<String, OutlineError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Every entry needs a non-blank label or `aria_label`.
    pub fn validate(&self) -> Result<(), OutlineError> {
        validate_entries(&self.entries, "")
    }

    /// Tree root markup with the given root ID and class.
    pub fn to_element(&self, id: &str, class: &str) -> Element {
        Element::ul()
            .id(id)
            .attr("role", "tree")
            .class(class)
            .children(self.entries.iter().map(OutlineEntry::to_element))
    }
}

fn validate_entries(entries: &[OutlineEntry], prefix: &str) -> Result<(), OutlineError> {
    for (i, entry) in entries.iter().enumerate() {
        let path = if prefix.is_empty() {
            i.to_string()
        } else {
            format!("{prefix}.{i}")
        };
        let named = !entry.label.trim().is_empty()
            || entry.aria_label.as_deref().is_some_and(|l| !l.trim().is_empty());
        if !named {
            return Err(OutlineError::EmptyLabel { path });
        }
        validate_entries(&entry.children, &path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested() {
        let outline = Outline::from_json(
            r##"[{"label": "Intro", "href": "#Intro", "children": [{"label": "A"}]}]"##,
        )
        .unwrap();
        assert_eq!(outline.entries.len(), 1);
        assert_eq!(outline.entries[0].children[0], OutlineEntry::new("A"));
    }

    #[test]
    fn test_empty_label_reports_path() {
        let err = Outline::from_json(r#"[{"label": "x", "children": [{"label": " "}]}]"#)
            .unwrap_err();
        match err {
            OutlineError::EmptyLabel { path } => assert_eq!(path, "0.0"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_aria_label_names_blank_entry() {
        let outline = Outline::new(vec![OutlineEntry::new("").aria_label("Overview")]);
        assert!(outline.validate().is_ok());
    }

    #[test]
    fn test_to_json_omits_empty_fields() {
        let outline = Outline::new(vec![OutlineEntry::new("Packages")
            .href("/pkg/")
            .child(OutlineEntry::new("fmt").href("/pkg/fmt/"))]);
        let json = outline.to_json().unwrap();
        assert!(json.contains(r#""href": "/pkg/fmt/""#));
        assert!(!json.contains("aria_label"));
        assert_eq!(Outline::from_json(&json).unwrap(), outline);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            Outline::from_json("{"),
            Err(OutlineError::Json(_))
        ));
    }

    #[test]
    fn test_to_element_markup() {
        let outline = Outline::new(vec![
            OutlineEntry::new("Intro").href("#Intro").child(OutlineEntry::new("A")),
        ]);
        let root = outline.to_element("toc", "js-toc-tree");
        assert_eq!(root.get_attr("role"), Some("tree"));
        let li = &root.child_elements()[0];
        let children = li.child_elements();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].get_attr("href"), Some("#Intro"));
        assert_eq!(children[1].tag, docdom::Tag::Ul);
        assert_eq!(children[1].child_elements()[0].child_elements()[0].tag, docdom::Tag::Span);
    }
}
