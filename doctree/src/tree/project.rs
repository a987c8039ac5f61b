//! Projection of item state onto the host document.

use docdom::{find_element_mut, Content, Element};

use super::TreeIndex;

impl TreeIndex {
    /// Write `aria-expanded`, `aria-selected`, `tabindex` and the `focus` /
    /// `hover` classes for every item under the tree root.
    pub fn sync(&self, document: &mut Element) {
        if self.items.is_empty() {
            return;
        }
        let Some(root) = find_element_mut(document, &self.root_id) else {
            log::debug!("[tree] root {} gone, nothing to sync", self.root_id);
            return;
        };
        self.project(root);
    }

    fn project(&self, element: &mut Element) {
        if let Some(&index) = self.by_element.get(&element.id) {
            let item = &self.items[index];
            let state = &self.state[index];
            if item.is_expandable {
                element.set_attr("aria-expanded", state.expanded.to_string());
            } else {
                element.toggle_class("focus", state.focused);
                element.toggle_class("hover", state.hovered);
            }
            match state.selected {
                Some(selected) => element.set_attr("aria-selected", selected.to_string()),
                None => {
                    element.remove_attr("aria-selected");
                }
            }
            element.set_attr("tabindex", state.tab_index.to_string());
        }

        if let Some(&index) = self.by_focus_target.get(&element.id) {
            element.toggle_class("focus", self.state[index].focused);
        }

        if let Content::Children(children) = &mut element.content {
            for child in children {
                self.project(child);
            }
        }
    }
}
