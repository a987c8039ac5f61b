//! Page-level wiring of the documentation trees.
//!
//! A [`Page`] is created when a document loads and dropped on navigation.
//! It owns the table-of-contents tree (built from the page headings and
//! driven by scroll position), the site outline tree, and the TOC's
//! expand/collapse-all control.

use std::time::Instant;

use docdom::{find_by, Element, Event};

use crate::config::{Location, TreeConfig};
use crate::observer::IntersectionEntry;
use crate::toc::{add_links_to_toc_with, TocNesting};
use crate::toggle::ExpandToggle;
use crate::tree::{EventResult, TreeIndex};

/// Class of the table-of-contents tree root.
pub const TOC_TREE_CLASS: &str = "js-toc-tree";
/// Class of the site outline tree root.
pub const OUTLINE_TREE_CLASS: &str = "js-outline-tree";
/// Class of the TOC expand/collapse-all control.
pub const EXPAND_TOC_CLASS: &str = "js-expand-toc";

#[derive(Debug)]
pub struct Page {
    location: Location,
    toc: Option<TreeIndex>,
    outline: Option<TreeIndex>,
    toggle: Option<ExpandToggle>,
}

impl Page {
    pub fn load(document: &mut Element, location: Location) -> Self {
        Self::load_with(document, location, TocNesting::default())
    }

    /// Like [`Page::load`], placing dedented TOC headings by `nesting`.
    pub fn load_with(document: &mut Element, location: Location, nesting: TocNesting) -> Self {
        let mut page = Self {
            location,
            toc: None,
            outline: None,
            toggle: None,
        };

        if let Some(toc_id) = find_tree_root(document, TOC_TREE_CLASS) {
            let has_nested = add_links_to_toc_with(document, &toc_id, nesting);
            let toggle_id = find_by(document, &|el| el.has_class(EXPAND_TOC_CLASS))
                .map(|el| el.id.clone());
            page.toggle = toggle_id
                .as_deref()
                .and_then(|id| ExpandToggle::attach(document, id, has_nested));

            let mut config = TreeConfig::new()
                .scroll_observers(true)
                .location(page.location.clone());
            if let (true, Some(id)) = (has_nested, toggle_id) {
                config = config.toggle(id);
            }
            page.toc = Some(TreeIndex::new(document, &toc_id, config));
        }

        if let Some(outline_id) = find_tree_root(document, OUTLINE_TREE_CLASS) {
            let config = TreeConfig::new()
                .multiple_expansion(true)
                .location(page.location.clone());
            page.outline = Some(TreeIndex::new(document, &outline_id, config));
        }

        log::debug!(
            "[page] loaded {} toc={} outline={}",
            page.location.path,
            page.toc.as_ref().map_or(0, TreeIndex::len),
            page.outline.as_ref().map_or(0, TreeIndex::len)
        );
        page
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn toc(&self) -> Option<&TreeIndex> {
        self.toc.as_ref()
    }

    pub fn toc_mut(&mut self) -> Option<&mut TreeIndex> {
        self.toc.as_mut()
    }

    pub fn outline(&self) -> Option<&TreeIndex> {
        self.outline.as_ref()
    }

    pub fn outline_mut(&mut self) -> Option<&mut TreeIndex> {
        self.outline.as_mut()
    }

    pub fn toggle(&self) -> Option<&ExpandToggle> {
        self.toggle.as_ref()
    }

    /// Click on the expand/collapse-all control.
    pub fn click_toggle(&mut self, document: &mut Element) -> bool {
        let (Some(toggle), Some(toc)) = (self.toggle.as_mut(), self.toc.as_mut()) else {
            return false;
        };
        if !toggle.click(document) {
            return false;
        }
        toc.toggle_all();
        toc.sync(document);
        true
    }

    /// Route an event to the tree owning its target and project the result.
    /// Untargeted key events go to whichever tree holds focus. Focus
    /// moving anywhere blurs the item focused in every other tree.
    pub fn dispatch(&mut self, document: &mut Element, event: &Event) -> EventResult {
        let owns = |tree: &TreeIndex| match event.target() {
            Some(target) => {
                tree.item_by_element(target).is_some()
                    || tree.items().iter().any(|item| item.first_child_id.as_deref() == Some(target))
            }
            None => tree.focused_item().is_some(),
        };

        let mut trees: Vec<&mut TreeIndex> = [self.toc.as_mut(), self.outline.as_mut()]
            .into_iter()
            .flatten()
            .collect();
        let owner = trees.iter().position(|tree| owns(&**tree));

        let mut result = EventResult::Ignored;
        if let Some(owner) = owner {
            result = trees[owner].dispatch(event);
            trees[owner].sync(document);
        }

        if let Event::Focus { target } = event {
            for (index, tree) in trees.iter_mut().enumerate() {
                if Some(index) != owner {
                    blur_tree(tree, document, target);
                }
            }
        }
        result
    }

    /// Feed heading intersection reports to the TOC tree.
    pub fn on_intersection(&mut self, entries: &[IntersectionEntry], now: Instant) -> Option<usize> {
        self.toc.as_mut()?.on_intersection(entries, now)
    }

    /// Run due activation callbacks and project any changes.
    pub fn tick(&mut self, document: &mut Element, now: Instant) -> usize {
        let Some(toc) = self.toc.as_mut() else {
            return 0;
        };
        let fired = toc.poll(now);
        if fired > 0 {
            toc.sync(document);
        }
        fired
    }
}

/// Drop focus from `tree` after it moved to `new_target`.
fn blur_tree(tree: &mut TreeIndex, document: &mut Element, new_target: &str) {
    let Some(index) = tree.focused_item() else {
        return;
    };
    let Some(element_id) = tree.item(index).map(|item| item.element_id.clone()) else {
        return;
    };
    log::debug!("[page] focus left {} for {}", tree.root_id(), new_target);
    tree.handle_event(
        index,
        &Event::Blur {
            target: element_id,
            new_target: Some(new_target.to_string()),
        },
    );
    tree.sync(document);
}

/// ID of the first `[role=tree]` element carrying `class`.
fn find_tree_root(document: &Element, class: &str) -> Option<String> {
    find_by(document, &|el| el.get_attr("role") == Some("tree") && el.has_class(class))
        .map(|el| el.id.clone())
}
