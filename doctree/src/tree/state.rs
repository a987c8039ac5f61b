//! Tree construction, visibility, selection, focus movement and
//! scroll-driven activation.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use docdom::{collect_ids, find_element_mut, find_parent_mut, Element};

use super::discover::Discovery;
use super::item::{ItemState, TreeNode};
use super::{Observer, TreeIndex};
use crate::config::TreeConfig;
use crate::debounce::Debounce;
use crate::error::TreeError;
use crate::observer::{target_id_from_href, IntersectionEntry, IntersectionTracker};

impl TreeIndex {
    /// Build the tree under the element `root_id` of `document`.
    ///
    /// A missing root or a root without items yields a disabled tree: every
    /// operation is a no-op and the expand-all control's container is hidden.
    pub fn new(document: &mut Element, root_id: &str, config: TreeConfig) -> Self {
        match Self::try_new(document, root_id, config.clone()) {
            Ok(tree) => tree,
            Err(err) => {
                log::debug!("[tree] disabled: {err}");
                if let Some(toggle) = &config.toggle {
                    if let Some(container) = find_parent_mut(document, toggle) {
                        container.set_display(Some("none"));
                    }
                }
                Self::disabled(root_id, config)
            }
        }
    }

    /// Like [`TreeIndex::new`], but reports why the tree could not be built.
    pub fn try_new(
        document: &mut Element,
        root_id: &str,
        config: TreeConfig,
    ) -> Result<Self, TreeError> {
        let root = find_element_mut(document, root_id)
            .ok_or_else(|| TreeError::RootNotFound(root_id.to_string()))?;
        let discovery = Discovery::run(root);
        if discovery.items.is_empty() {
            return Err(TreeError::NoItems(root_id.to_string()));
        }

        let mut tree = Self::disabled(root_id, config);
        tree.install(discovery.items);
        tree.update_visible_items();

        let active = tree.find_active_item();
        if tree.config.use_scroll_observers {
            tree.observe_targets(document);
            tree.set_tab_stop(0);
        }

        match active {
            Some(active) => {
                log::debug!("[tree] active item {} {:?}", active, tree.items[active].label);
                tree.select_item(active);
                tree.expand_ancestors(active);
            }
            None if !tree.config.use_scroll_observers => tree.set_tab_stop(0),
            None => {}
        }

        tree.sync(document);
        Ok(tree)
    }

    fn disabled(root_id: &str, config: TreeConfig) -> Self {
        Self {
            root_id: root_id.to_string(),
            allow_multiple_expansion: config.allow_multiple_expansion,
            config,
            items: Vec::new(),
            first_chars: Vec::new(),
            state: Vec::new(),
            by_element: HashMap::new(),
            by_focus_target: HashMap::new(),
            first_item: None,
            last_visible_item: None,
            selected_item: None,
            focused_item: None,
            tracker: None,
            observers: Vec::new(),
        }
    }

    fn install(&mut self, items: Vec<TreeNode>) {
        self.first_chars = items
            .iter()
            .map(|item| {
                item.label
                    .chars()
                    .next()
                    .map(|c| c.to_lowercase().collect())
                    .unwrap_or_default()
            })
            .collect();
        self.state = vec![ItemState::default(); items.len()];
        self.by_element = items
            .iter()
            .map(|item| (item.element_id.clone(), item.index))
            .collect();
        self.by_focus_target = items
            .iter()
            .filter(|item| item.is_expandable)
            .filter_map(|item| Some((item.first_child_id.clone()?, item.index)))
            .collect();
        self.items = items;
    }

    /// Last item whose link is contained in the location: the hash when
    /// observing scroll position, the path otherwise.
    fn find_active_item(&self) -> Option<usize> {
        let location = &self.config.location;
        let haystack = if self.config.use_scroll_observers {
            &location.hash
        } else {
            &location.path
        };
        self.items
            .iter()
            .rev()
            .find(|item| {
                item.href
                    .as_deref()
                    .is_some_and(|href| haystack.contains(href))
            })
            .map(|item| item.index)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn root_id(&self) -> &str {
        &self.root_id
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// False when discovery found no items.
    pub fn is_enabled(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[TreeNode] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&TreeNode> {
        self.items.get(index)
    }

    pub fn state(&self, index: usize) -> Option<&ItemState> {
        self.state.get(index)
    }

    pub fn first_chars(&self) -> &[String] {
        &self.first_chars
    }

    /// Index of the first item whose label matches.
    pub fn find(&self, label: &str) -> Option<usize> {
        self.items.iter().position(|item| item.label == label)
    }

    /// Item whose element has the given ID.
    pub fn item_by_element(&self, element_id: &str) -> Option<usize> {
        self.by_element.get(element_id).copied()
    }

    pub fn visible_items(&self) -> impl Iterator<Item = &TreeNode> {
        self.items.iter().filter(|item| item.is_visible)
    }

    pub fn first_item(&self) -> Option<usize> {
        self.first_item
    }

    pub fn last_visible_item(&self) -> Option<usize> {
        self.last_visible_item
    }

    pub fn selected_item(&self) -> Option<usize> {
        self.selected_item
    }

    /// Item holding keyboard focus.
    pub fn focused_item(&self) -> Option<usize> {
        self.focused_item
    }

    /// Item with `tabindex=0`.
    pub fn tab_stop(&self) -> Option<usize> {
        self.state.iter().position(|s| s.tab_index == 0)
    }

    pub fn allow_multiple_expansion(&self) -> bool {
        self.allow_multiple_expansion
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        match (self.items.get(index), self.state.get(index)) {
            (Some(item), Some(state)) => item.is_expandable && state.expanded,
            _ => false,
        }
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.state.get(index).is_some_and(ItemState::is_selected)
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.items.get(index).is_some_and(|item| item.is_visible)
    }

    /// True if `ancestor` is on the group chain of `index`.
    pub fn is_ancestor(&self, ancestor: usize, index: usize) -> bool {
        let mut group = self.items.get(index).and_then(|item| item.group);
        while let Some(parent) = group {
            if parent == ancestor {
                return true;
            }
            group = self.items[parent].group;
        }
        false
    }

    // =========================================================================
    // Visibility
    // =========================================================================

    /// Recompute item visibility and the first/last visible items.
    pub fn update_visible_items(&mut self) {
        self.first_item = if self.items.is_empty() { None } else { Some(0) };
        self.last_visible_item = None;
        for index in 0..self.items.len() {
            let visible = self.ancestors_expanded(index);
            self.items[index].is_visible = visible;
            if visible {
                self.last_visible_item = Some(index);
            }
        }
    }

    /// Only expandable ancestors can hide an item.
    fn ancestors_expanded(&self, index: usize) -> bool {
        let mut group = self.items[index].group;
        while let Some(parent) = group {
            if self.items[parent].is_expandable && !self.state[parent].expanded {
                return false;
            }
            group = self.items[parent].group;
        }
        true
    }

    // =========================================================================
    // Selection and focus
    // =========================================================================

    /// Select `index` and make it the tab stop without moving keyboard focus.
    ///
    /// In single-expansion mode every expanded item other than `index` that
    /// does not contain it is collapsed first.
    pub fn select_item(&mut self, index: usize) {
        if index >= self.items.len() {
            return;
        }

        if !self.allow_multiple_expansion {
            let mut collapsed = false;
            for other in 0..self.items.len() {
                if other != index && self.state[other].expanded && !self.is_ancestor(other, index) {
                    log::trace!("[tree] collapsing {} outside selection", other);
                    self.state[other].expanded = false;
                    collapsed = true;
                }
            }
            if collapsed {
                self.update_visible_items();
            }
        }

        for (other, state) in self.state.iter_mut().enumerate() {
            if other != index && state.selected.is_some() {
                state.selected = Some(false);
            }
        }
        self.state[index].selected = Some(true);
        self.selected_item = Some(index);
        self.set_tab_stop(index);
        log::debug!("[tree] selected {} {:?}", index, self.items[index].label);
    }

    /// Make `index` the tab stop and give it keyboard focus.
    pub fn focus_item(&mut self, index: usize) {
        if index >= self.items.len() {
            return;
        }
        self.set_tab_stop(index);
        self.move_focus(index);
    }

    fn set_tab_stop(&mut self, index: usize) {
        for (other, state) in self.state.iter_mut().enumerate() {
            state.tab_index = if other == index { 0 } else { -1 };
        }
    }

    pub(super) fn move_focus(&mut self, index: usize) {
        if self.focused_item == Some(index) {
            return;
        }
        if let Some(old) = self.focused_item.take() {
            self.state[old].focused = false;
        }
        self.state[index].focused = true;
        self.focused_item = Some(index);
        log::trace!("[tree] focus {} {:?}", index, self.items[index].label);
    }

    /// Focus the next visible item after `index`, if there is one.
    pub fn focus_next(&mut self, index: usize) {
        let next = (index.saturating_add(1)..self.items.len()).find(|&i| self.items[i].is_visible);
        if let Some(next) = next {
            self.focus_item(next);
        }
    }

    /// Focus the closest visible item before `index`, if there is one.
    pub fn focus_previous(&mut self, index: usize) {
        let end = index.min(self.items.len());
        let previous = (0..end).rev().find(|&i| self.items[i].is_visible);
        if let Some(previous) = previous {
            self.focus_item(previous);
        }
    }

    pub fn focus_parent(&mut self, index: usize) {
        if let Some(group) = self.items.get(index).and_then(|item| item.group) {
            self.focus_item(group);
        }
    }

    pub fn focus_first(&mut self) {
        if let Some(first) = self.first_item {
            self.focus_item(first);
        }
    }

    pub fn focus_last(&mut self) {
        if let Some(last) = self.last_visible_item {
            self.focus_item(last);
        }
    }

    /// Focus the next visible item whose label starts with `ch`, searching
    /// after `index` and wrapping around once. Returns the focused item.
    pub fn focus_by_first_character(&mut self, index: usize, ch: char) -> Option<usize> {
        if self.items.is_empty() {
            return None;
        }
        let needle: String = ch.to_lowercase().collect();
        let mut start = index.saturating_add(1);
        if start >= self.items.len() {
            start = 0;
        }
        let found = self
            .index_of_first_char(start, &needle)
            .or_else(|| self.index_of_first_char(0, &needle))?;
        self.focus_item(found);
        Some(found)
    }

    fn index_of_first_char(&self, start: usize, needle: &str) -> Option<usize> {
        (start..self.first_chars.len())
            .find(|&i| self.items[i].is_visible && self.first_chars[i] == needle)
    }

    // =========================================================================
    // Expansion
    // =========================================================================

    /// Expand `index` if it is expandable.
    pub fn expand(&mut self, index: usize) {
        if !self.items.get(index).is_some_and(|item| item.is_expandable) {
            return;
        }
        self.state[index].expanded = true;
        self.update_visible_items();
    }

    /// Collapse `index` if it is expanded, otherwise its parent group.
    /// Focus moves to whichever item was collapsed.
    pub fn collapse(&mut self, index: usize) {
        let target = if self.is_expanded(index) {
            Some(index)
        } else {
            self.items.get(index).and_then(|item| item.group)
        };
        if let Some(target) = target {
            self.state[target].expanded = false;
            self.update_visible_items();
            self.focus_item(target);
        }
    }

    /// Expand every expandable item that shares a parent with `index`.
    pub fn expand_all_siblings(&mut self, index: usize) {
        let Some(group) = self.items.get(index).map(|item| item.group) else {
            return;
        };
        for sibling in 0..self.items.len() {
            if self.items[sibling].group == group && self.items[sibling].is_expandable {
                self.expand(sibling);
            }
        }
    }

    /// Expand every group on the path to `index`.
    pub fn expand_ancestors(&mut self, index: usize) {
        let mut group = self.items.get(index).and_then(|item| item.group);
        while let Some(parent) = group {
            self.expand(parent);
            group = self.items[parent].group;
        }
    }

    /// Expand-all control: flips multiple-expansion mode and toggles every
    /// expandable item.
    pub fn toggle_all(&mut self) {
        self.allow_multiple_expansion = !self.allow_multiple_expansion;
        for index in 0..self.items.len() {
            if !self.items[index].is_expandable {
                continue;
            }
            if self.is_expanded(index) {
                self.collapse(index);
            } else {
                self.expand(index);
            }
        }
    }

    // =========================================================================
    // Scroll-driven activation
    // =========================================================================

    /// Register a callback run, debounced by `delay`, with every item whose
    /// heading becomes the first fully visible one.
    pub fn add_observer<F>(&mut self, callback: F, delay: Duration)
    where
        F: FnMut(&mut TreeIndex, usize) + 'static,
    {
        self.observers.push(Observer {
            debounce: Debounce::new(delay),
            callback: Box::new(callback),
        });
    }

    /// Start tracking every heading referenced by an item link. Links whose
    /// heading is missing from the document are skipped.
    fn observe_targets(&mut self, document: &Element) {
        self.add_observer(
            |tree, item| {
                tree.expand_ancestors(item);
                tree.expand(item);
                tree.select_item(item);
            },
            self.config.debounce_delay(),
        );

        let mut positions: HashMap<String, usize> = HashMap::new();
        for (position, id) in collect_ids(document).into_iter().enumerate() {
            positions.entry(id).or_insert(position);
        }

        let origin = &self.config.location.origin;
        let mut observed: Vec<(usize, String)> = Vec::new();
        for href in self.items.iter().filter_map(|item| item.href.as_deref()) {
            if href.is_empty() {
                continue;
            }
            let id = target_id_from_href(href, origin);
            match positions.get(&id) {
                Some(&position) if !observed.iter().any(|(_, o)| *o == id) => {
                    observed.push((position, id));
                }
                Some(_) => {}
                None => log::trace!("[observer] no heading for {href}"),
            }
        }
        observed.sort_by_key(|(position, _)| *position);
        log::debug!("[observer] observing {} headings", observed.len());

        self.tracker = Some(IntersectionTracker::new(
            observed.into_iter().map(|(_, id)| id).collect(),
            self.config.activation_order,
        ));
    }

    /// Feed one batch of observer reports. Returns the item scheduled for
    /// activation, if any heading is intersecting.
    pub fn on_intersection(&mut self, entries: &[IntersectionEntry], now: Instant) -> Option<usize> {
        let id = self.tracker.as_mut()?.record(entries)?;
        let suffix = format!("#{id}");
        let item = self
            .items
            .iter()
            .find(|item| item.href.as_deref().is_some_and(|h| h.ends_with(&suffix)))?
            .index;
        for observer in &mut self.observers {
            observer.debounce.call(item, now);
        }
        log::trace!("[observer] {} intersecting, scheduled item {}", id, item);
        Some(item)
    }

    /// Run every activation callback whose delay has elapsed. Returns the
    /// number of callbacks run.
    pub fn poll(&mut self, now: Instant) -> usize {
        let mut observers = std::mem::take(&mut self.observers);
        let mut fired = 0;
        for observer in &mut observers {
            if let Some(item) = observer.debounce.poll(now) {
                (observer.callback)(self, item);
                fired += 1;
            }
        }
        // Callbacks may have registered further observers.
        observers.append(&mut self.observers);
        self.observers = observers;
        fired
    }

    /// Earliest pending activation deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.observers
            .iter()
            .filter_map(|observer| observer.debounce.deadline())
            .min()
    }

    /// Heading IDs under observation, in document order.
    pub fn observed_targets(&self) -> &[String] {
        self.tracker
            .as_ref()
            .map(IntersectionTracker::observed)
            .unwrap_or(&[])
    }
}
