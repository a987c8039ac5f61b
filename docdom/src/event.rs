use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEventKind, KeyModifiers};

/// Input events targeted at document elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press event, targeted at focused element
    Key {
        target: Option<String>,
        key: Key,
        modifiers: Modifiers,
    },
    /// Mouse click; target is the innermost element under the pointer
    Click {
        target: Option<String>,
        button: MouseButton,
    },
    /// Pointer entered an element
    MouseOver { target: String },
    /// Pointer left an element
    MouseOut { target: String },
    /// Element gained focus
    Focus { target: String },
    /// Element lost focus
    Blur {
        target: String,
        new_target: Option<String>,
    },
}

impl Event {
    /// Element the event is dispatched to, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            Event::Key { target, .. } | Event::Click { target, .. } => target.as_deref(),
            Event::MouseOver { target }
            | Event::MouseOut { target }
            | Event::Focus { target }
            | Event::Blur { target, .. } => Some(target),
        }
    }

    /// Convert a raw crossterm event into a key event aimed at `focused`.
    /// Only key presses are converted (not release/repeat on some terminals).
    pub fn from_crossterm(raw: &CrosstermEvent, focused: Option<&str>) -> Option<Event> {
        match raw {
            CrosstermEvent::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                Some(Event::Key {
                    target: focused.map(str::to_string),
                    key: key_event.code.into(),
                    modifiers: key_event.modifiers.into(),
                })
            }
            _ => None,
        }
    }
}

/// Keys the treeview pattern distinguishes. Everything else arrives as
/// `Unsupported` and is left to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Character key; the space bar arrives as `Char(' ')`.
    Char(char),
    Enter,
    Tab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Unsupported,
}

impl Key {
    /// Single non-whitespace character.
    pub fn is_printable(&self) -> bool {
        matches!(self, Key::Char(c) if !c.is_whitespace() && !c.is_control())
    }
}

/// Modifier keys held during a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    /// Meta, Super or Command.
    pub meta: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self { shift: true, ..Self::new() }
    }

    pub fn ctrl() -> Self {
        Self { ctrl: true, ..Self::new() }
    }

    pub fn alt() -> Self {
        Self { alt: true, ..Self::new() }
    }

    pub fn meta() -> Self {
        Self { meta: true, ..Self::new() }
    }

    pub fn none(&self) -> bool {
        *self == Self::new()
    }

    /// Ctrl, Alt or Meta held. Shift alone does not count.
    pub fn has_command(&self) -> bool {
        self.ctrl || self.alt || self.meta
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseButton {
    #[default]
    Left,
    Right,
    Middle,
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Tab => Key::Tab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            _ => Key::Unsupported,
        }
    }
}

impl From<KeyModifiers> for Modifiers {
    fn from(mods: KeyModifiers) -> Self {
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
            meta: mods.intersects(KeyModifiers::META | KeyModifiers::SUPER),
        }
    }
}
