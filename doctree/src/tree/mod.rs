//! Accessible navigation tree following the WAI-ARIA treeview pattern.
//!
//! [`TreeIndex`] discovers the items under a tree root once, keeps their
//! expansion, selection and focus state in memory, and projects that state
//! onto the host document with [`TreeIndex::sync`].

mod discover;
mod events;
mod item;
mod project;
mod state;

use std::collections::HashMap;
use std::fmt;

pub use events::EventResult;
pub use item::{ItemState, TreeNode};

use crate::config::TreeConfig;
use crate::debounce::Debounce;
use crate::observer::IntersectionTracker;

/// Callback run with the item whose heading scrolled into view.
pub type ActivationCallback = Box<dyn FnMut(&mut TreeIndex, usize)>;

struct Observer {
    debounce: Debounce<usize>,
    callback: ActivationCallback,
}

/// Owns every item of one tree and all of their state.
pub struct TreeIndex {
    root_id: String,
    config: TreeConfig,
    allow_multiple_expansion: bool,

    items: Vec<TreeNode>,
    /// Lowercase first character of each label, parallel to `items`.
    first_chars: Vec<String>,
    state: Vec<ItemState>,
    by_element: HashMap<String, usize>,
    by_focus_target: HashMap<String, usize>,

    first_item: Option<usize>,
    last_visible_item: Option<usize>,
    selected_item: Option<usize>,
    focused_item: Option<usize>,

    tracker: Option<IntersectionTracker>,
    observers: Vec<Observer>,
}

impl fmt::Debug for TreeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeIndex")
            .field("root_id", &self.root_id)
            .field("items", &self.items.len())
            .field("selected_item", &self.selected_item)
            .field("focused_item", &self.focused_item)
            .field("observers", &self.observers.len())
            .finish()
    }
}
