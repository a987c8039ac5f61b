//! Expand/collapse-all control of the table of contents.
//!
//! The control holds two labels: the first ("expand all") is shown while
//! the tree is collapsed, the second ("collapse all") once it is expanded.

use docdom::{find_element_mut, Element};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandToggle {
    id: String,
    expanded: bool,
    enabled: bool,
}

impl ExpandToggle {
    /// Set the initial label visibility of the control `id`. Both labels
    /// are hidden when the tree has nothing to expand, and clicks are then
    /// ignored.
    pub fn attach(document: &mut Element, id: &str, has_nested: bool) -> Option<Self> {
        let toggle = find_element_mut(document, id)?;
        let labels = toggle.child_elements_mut();
        if let Some(collapse_label) = labels.get_mut(1) {
            collapse_label.set_display(Some("none"));
        }
        if !has_nested {
            if let Some(expand_label) = labels.get_mut(0) {
                expand_label.set_display(Some("none"));
            }
        }
        Some(Self {
            id: id.to_string(),
            expanded: false,
            enabled: has_nested,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Flip the state and swap the visible label. Returns false if the
    /// control is disabled or gone from the document.
    pub fn click(&mut self, document: &mut Element) -> bool {
        if !self.enabled {
            return false;
        }
        let Some(toggle) = find_element_mut(document, &self.id) else {
            return false;
        };
        self.expanded = !self.expanded;
        let (hidden, shown) = if self.expanded { (0, 1) } else { (1, 0) };
        let labels = toggle.child_elements_mut();
        if let Some(label) = labels.get_mut(hidden) {
            label.set_display(Some("none"));
        }
        if let Some(label) = labels.get_mut(shown) {
            label.set_display(Some("inline-block"));
        }
        true
    }
}
