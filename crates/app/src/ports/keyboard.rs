//! Keyboard port: key events and the escape-listener lifecycle.

/// Handle of an attached key listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    #[must_use]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// Attaches and detaches document-level Escape listeners.
///
/// When Escape is pressed, the host delivers the id of every attached
/// listener as [`UiEvent::Escape`](crate::dashboard::UiEvent::Escape).
pub trait KeyListeners {
    fn attach_escape(&self) -> ListenerId;

    /// Detach `id`. Detaching an unknown id is a no-op.
    fn detach(&self, id: ListenerId);
}

/// A keydown event as seen by the global shortcut handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    /// The `KeyboardEvent.key` value, e.g. `"l"` or `"Escape"`.
    pub key: String,
    pub ctrl: bool,
}

impl KeyPress {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ctrl: false,
        }
    }

    #[must_use]
    pub fn with_ctrl(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ctrl: true,
        }
    }

    #[must_use]
    pub fn is_escape(&self) -> bool {
        self.key == "Escape"
    }

    /// Ctrl+L, regardless of caps lock.
    #[must_use]
    pub fn is_console_shortcut(&self) -> bool {
        self.ctrl && self.key.eq_ignore_ascii_case("l")
    }
}
