//! Plain-text rendering of the visible part of a tree.

use docdom::text::{pad_to_width, truncate_to_width};

use crate::tree::TreeIndex;

/// One line per visible item, `width` cells wide:
///
/// ```text
/// >* ▾ Intro
///        A
///    ▸ Summary
/// ```
///
/// Column 1 marks the focused item, column 2 the selected one, then the
/// item is indented by depth with an expand marker for expandable items.
pub fn render_lines(tree: &TreeIndex, width: usize) -> Vec<String> {
    tree.visible_items()
        .map(|item| {
            let state = tree.state(item.index).copied().unwrap_or_default();
            let focus = if state.focused { '>' } else { ' ' };
            let selected = if state.is_selected() { '*' } else { ' ' };
            let marker = match (item.is_expandable, state.expanded) {
                (true, true) => '▾',
                (true, false) => '▸',
                (false, _) => ' ',
            };
            let indent = "  ".repeat(item.depth.saturating_sub(1));
            let line = format!("{focus}{selected} {indent}{marker} {}", item.label);
            pad_to_width(&truncate_to_width(&line, width), width)
        })
        .collect()
}
