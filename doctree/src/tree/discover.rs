//! Item discovery: walks the tree root once, builds the flat item list and
//! writes the static ARIA decoration.

use docdom::text::slugify;
use docdom::{Content, Element, Tag};

use super::item::TreeNode;

#[derive(Debug, Default)]
pub(super) struct Discovery {
    pub items: Vec<TreeNode>,
}

impl Discovery {
    pub fn run(root: &mut Element) -> Self {
        let mut discovery = Self::default();
        discovery.walk(root, None);
        discovery
    }

    /// Links and labels become items whose group is `group`. Any other
    /// element with children is walked with the most recent item as group.
    fn walk(&mut self, element: &mut Element, group: Option<usize>) {
        let is_list_item = element.tag == Tag::Li;
        let Content::Children(children) = &mut element.content else {
            return;
        };

        let mut current = group;
        let mut holds_item = false;
        for idx in 0..children.len() {
            if is_item_tag(&children[idx].tag) {
                current = Some(self.push_item(children, idx, group));
                holds_item = true;
            } else if children[idx].has_element_children() {
                self.walk(&mut children[idx], current);
            }
        }

        if is_list_item && holds_item {
            element.set_attr("role", "none");
        }
    }

    fn push_item(&mut self, siblings: &mut [Element], idx: usize, group: Option<usize>) -> usize {
        let index = self.items.len();
        let parent = group.map(|g| &self.items[g]);
        let depth = parent.map_or(0, |p| p.depth) + 1;

        let element = &siblings[idx];
        let label = match element.get_attr("aria-label").map(str::trim) {
            Some(aria) if !aria.is_empty() => aria.to_string(),
            _ => element.text_content().trim().to_string(),
        };

        let list = siblings[idx + 1..]
            .iter()
            .position(|el| el.tag == Tag::Ul)
            .map(|offset| idx + 1 + offset);
        let group_id = list.map(|_| {
            let parent_label = parent.map_or("", |p| p.label.as_str());
            slugify(&format!("{parent_label} index group {label}"))
        });

        let element = &mut siblings[idx];
        element.set_attr("tabindex", "-1");
        element.set_attr("aria-level", depth.to_string());
        if element.get_attr("role").is_none() {
            element.set_attr("role", "treeitem");
        }
        if let Some(group_id) = &group_id {
            element.set_attr("aria-owns", group_id.clone());
            element.set_attr("aria-expanded", "false");
        }

        let node = TreeNode {
            label,
            depth,
            is_expandable: group_id.is_some(),
            is_visible: false,
            group,
            index,
            element_id: element.id.clone(),
            first_child_id: element.first_element_child().map(|c| c.id.clone()),
            group_id: group_id.clone(),
            href: element.get_attr("href").map(str::to_string),
        };

        if let (Some(list), Some(group_id)) = (list, group_id) {
            let list = &mut siblings[list];
            list.set_attr("role", "group");
            list.id = group_id;
        }

        log::trace!(
            "[tree] discovered item {} {:?} depth={} expandable={}",
            index,
            node.label,
            node.depth,
            node.is_expandable
        );
        self.items.push(node);
        index
    }
}

fn is_item_tag(tag: &Tag) -> bool {
    matches!(tag, Tag::A | Tag::Span)
}
