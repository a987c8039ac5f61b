//! Event handling for tree items.

use docdom::{Event, Key, Modifiers};

use super::TreeIndex;

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Handled; the host must not run the default action or bubble it.
    Consumed,
    /// Not handled, or handled in a way that still allows the default
    /// action (e.g. following a leaf link).
    Ignored,
}

impl EventResult {
    pub fn is_consumed(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

impl TreeIndex {
    /// Route an event to the item it targets.
    ///
    /// Key events without a target go to the focused item. Clicks only
    /// count on an item element or its first element child.
    pub fn dispatch(&mut self, event: &Event) -> EventResult {
        let item = match event {
            Event::Key { target: None, .. } => self.focused_item,
            Event::Click { target, .. } => target.as_deref().and_then(|t| {
                self.item_by_element(t)
                    .or_else(|| {
                        self.items
                            .iter()
                            .find(|item| item.first_child_id.as_deref() == Some(t))
                            .map(|item| item.index)
                    })
            }),
            _ => event.target().and_then(|t| self.item_by_element(t)),
        };
        match item {
            Some(item) => self.handle_event(item, event),
            None => EventResult::Ignored,
        }
    }

    /// Handle an event delivered to item `index`.
    pub fn handle_event(&mut self, index: usize, event: &Event) -> EventResult {
        if index >= self.items.len() {
            return EventResult::Ignored;
        }
        match event {
            Event::Key { key, modifiers, .. } => self.handle_key(index, *key, *modifiers),
            Event::Click { target, .. } => self.handle_click(index, target.as_deref()),
            Event::Focus { .. } => {
                self.move_focus(index);
                EventResult::Ignored
            }
            Event::Blur { .. } => {
                self.state[index].focused = false;
                if self.focused_item == Some(index) {
                    self.focused_item = None;
                }
                EventResult::Ignored
            }
            Event::MouseOver { .. } => {
                if !self.items[index].is_expandable {
                    self.state[index].hovered = true;
                }
                EventResult::Ignored
            }
            Event::MouseOut { .. } => {
                if !self.items[index].is_expandable {
                    self.state[index].hovered = false;
                }
                EventResult::Ignored
            }
        }
    }

    /// Keyboard commands of the treeview pattern.
    pub fn handle_key(&mut self, index: usize, key: Key, modifiers: Modifiers) -> EventResult {
        if index >= self.items.len() || modifiers.has_command() {
            return EventResult::Ignored;
        }
        let expandable = self.items[index].is_expandable;

        match key {
            Key::Enter | Key::Char(' ') => {
                let result = self.activate(index);
                log::trace!("[tree] activate {} via {:?}: {:?}", index, key, result);
                result
            }
            Key::Up => {
                self.focus_previous(index);
                EventResult::Consumed
            }
            Key::Down => {
                self.focus_next(index);
                EventResult::Consumed
            }
            Key::Right => {
                if expandable {
                    if self.is_expanded(index) {
                        self.focus_next(index);
                    } else {
                        self.expand(index);
                    }
                }
                EventResult::Consumed
            }
            Key::Left => {
                if expandable && self.is_expanded(index) {
                    self.collapse(index);
                    EventResult::Consumed
                } else if self.items[index].in_group() {
                    self.focus_parent(index);
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            Key::Home => {
                self.focus_first();
                EventResult::Consumed
            }
            Key::End => {
                self.focus_last();
                EventResult::Consumed
            }
            Key::Char('*') => {
                self.expand_all_siblings(index);
                EventResult::Consumed
            }
            Key::Char(ch) if key.is_printable() => {
                self.focus_by_first_character(index, ch);
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    /// Mouse click, mirroring Enter for clicks on the item element or its
    /// first element child. Clicks on anything else inside are ignored.
    pub fn handle_click(&mut self, index: usize, target: Option<&str>) -> EventResult {
        let Some(item) = self.items.get(index) else {
            return EventResult::Ignored;
        };
        let on_item = target.is_some_and(|t| {
            t == item.element_id || item.first_child_id.as_deref() == Some(t)
        });
        if !on_item {
            return EventResult::Ignored;
        }
        self.activate(index)
    }

    /// Enter, Space and click: toggle an expandable item (collapse only once
    /// it is both expanded and selected), then select it. Leaves are only
    /// selected so the link's default action still runs.
    fn activate(&mut self, index: usize) -> EventResult {
        let result = if self.items[index].is_expandable {
            if self.is_expanded(index) && self.is_selected(index) {
                self.collapse(index);
            } else {
                self.expand(index);
            }
            EventResult::Consumed
        } else {
            EventResult::Ignored
        };
        self.select_item(index);
        result
    }
}
