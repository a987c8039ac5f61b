//! Tree item types.

/// One navigable entry of the tree.
///
/// Structural data only; the mutable state lives in [`ItemState`] and is
/// owned by the [`TreeIndex`](super::TreeIndex).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// Display text, from `aria-label` or the element text.
    pub label: String,
    /// 1 for root items.
    pub depth: usize,
    /// Followed by a child list. Fixed at construction.
    pub is_expandable: bool,
    /// Every ancestor group is expanded.
    pub is_visible: bool,
    /// Parent item, `None` for root items.
    pub group: Option<usize>,
    /// Position in the flat, depth-first order.
    pub index: usize,
    /// ID of the item element in the host document.
    pub element_id: String,
    /// ID of the item element's first element child.
    pub first_child_id: Option<String>,
    /// Generated ID of the child list (the `aria-owns` target).
    pub group_id: Option<String>,
    pub href: Option<String>,
}

impl TreeNode {
    pub fn in_group(&self) -> bool {
        self.group.is_some()
    }

    /// Element that carries the `focus` class: the first element child for
    /// expandable items, the item element otherwise.
    pub fn focus_target(&self) -> Option<&str> {
        if self.is_expandable {
            self.first_child_id.as_deref()
        } else {
            Some(&self.element_id)
        }
    }
}

/// Mutable per-item state, projected onto ARIA attributes by `sync`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemState {
    /// `aria-expanded`; only meaningful for expandable items.
    pub expanded: bool,
    /// `aria-selected`; `None` until the item has taken part in a selection.
    pub selected: Option<bool>,
    /// `tabindex`, 0 for the roving tab stop and -1 otherwise.
    pub tab_index: i32,
    /// Has the `focus` affordance class.
    pub focused: bool,
    /// Has the `hover` affordance class.
    pub hovered: bool,
}

impl Default for ItemState {
    fn default() -> Self {
        Self {
            expanded: false,
            selected: None,
            tab_index: -1,
            focused: false,
            hovered: false,
        }
    }
}

impl ItemState {
    pub fn is_selected(&self) -> bool {
        self.selected == Some(true)
    }
}
