use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// Element kind. Only the tags the navigation tree cares about get their
/// own variant; everything else is carried by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    A,
    Span,
    Ul,
    Li,
    Nav,
    Div,
    Button,
    /// `h1` through `h6`.
    Heading(u8),
    Other(String),
}

impl Tag {
    /// Parse a lowercase or uppercase tag name.
    pub fn parse(name: &str) -> Self {
        let lower = name.to_ascii_lowercase();
        match lower.as_str() {
            "a" => Tag::A,
            "span" => Tag::Span,
            "ul" => Tag::Ul,
            "li" => Tag::Li,
            "nav" => Tag::Nav,
            "div" => Tag::Div,
            "button" => Tag::Button,
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => Tag::Heading(lower.as_bytes()[1] - b'0'),
            _ => Tag::Other(lower),
        }
    }

    pub fn name(&self) -> String {
        match self {
            Tag::A => "a".to_string(),
            Tag::Span => "span".to_string(),
            Tag::Ul => "ul".to_string(),
            Tag::Li => "li".to_string(),
            Tag::Nav => "nav".to_string(),
            Tag::Div => "div".to_string(),
            Tag::Button => "button".to_string(),
            Tag::Heading(level) => format!("h{level}"),
            Tag::Other(name) => name.clone(),
        }
    }

    /// Heading level, if this is a heading tag.
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            Tag::Heading(level) => Some(*level),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: Tag,

    // Markup
    pub attrs: BTreeMap<String, String>,
    pub classes: Vec<String>,

    // Content
    pub content: Content,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        let prefix = tag.name();
        Self {
            id: generate_id(&prefix),
            tag,
            attrs: BTreeMap::new(),
            classes: Vec::new(),
            content: Content::None,
        }
    }

    pub fn anchor(text: impl Into<String>) -> Self {
        Self::new(Tag::A).text(text)
    }

    pub fn span(text: impl Into<String>) -> Self {
        Self::new(Tag::Span).text(text)
    }

    pub fn ul() -> Self {
        Self::new(Tag::Ul)
    }

    pub fn li() -> Self {
        Self::new(Tag::Li)
    }

    pub fn nav() -> Self {
        Self::new(Tag::Nav)
    }

    pub fn div() -> Self {
        Self::new(Tag::Div)
    }

    pub fn button() -> Self {
        Self::new(Tag::Button)
    }

    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Self::new(Tag::Heading(level.clamp(1, 6))).text(text)
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Markup
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        self.push_child(child);
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    /// Append a child, replacing text content if there was any.
    pub fn push_child(&mut self, child: Element) {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
    }

    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    pub fn child_elements_mut(&mut self) -> &mut [Element] {
        match &mut self.content {
            Content::Children(children) => children,
            _ => &mut [],
        }
    }

    pub fn first_element_child(&self) -> Option<&Element> {
        self.child_elements().first()
    }

    pub fn has_element_children(&self) -> bool {
        !self.child_elements().is_empty()
    }

    /// Concatenated text of this element and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }

    // Attributes
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(name.into(), value.into());
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.attrs.remove(name)
    }

    /// Set the inline `display` style, or clear it with `None`.
    pub fn set_display(&mut self, display: Option<&str>) {
        match display {
            Some(value) => self.set_attr("style", format!("display: {value}")),
            None => {
                self.remove_attr("style");
            }
        }
    }

    /// Inline `display` value set via [`Element::set_display`].
    pub fn display(&self) -> Option<&str> {
        self.get_attr("style")
            .and_then(|style| style.strip_prefix("display:"))
            .map(str::trim)
    }

    pub fn is_hidden(&self) -> bool {
        self.display() == Some("none")
    }

    // Classes
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class. Returns true if it was not present.
    pub fn add_class(&mut self, class: impl Into<String>) -> bool {
        let class = class.into();
        if self.has_class(&class) {
            return false;
        }
        self.classes.push(class);
        true
    }

    /// Remove a class. Returns true if it was present.
    pub fn remove_class(&mut self, class: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != class);
        self.classes.len() != before
    }

    pub fn toggle_class(&mut self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }
}

fn collect_text(element: &Element, out: &mut String) {
    match &element.content {
        Content::None => {}
        Content::Text(text) => out.push_str(text),
        Content::Children(children) => {
            for child in children {
                collect_text(child, out);
            }
        }
    }
}
