//! Backend-independent input events.
//!
//! Terminal (or any other) backends translate their native events into these
//! and feed them to [`crate::Game::handle_event`].

/// Keys the arena cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    Up,
    Down,
    Left,
    Right,
    /// Either control key.
    Ctrl,
    /// Any other printable key, lowercased.
    Char(char),
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key {
        key: Key,
        pressed: bool,
        /// Auto-repeat from a held key.
        repeat: bool,
        /// Control modifier reported alongside the key.
        ctrl: bool,
    },
    Mouse {
        button: MouseButton,
        pressed: bool,
    },
    /// Window close or equivalent.
    Quit,
}

impl InputEvent {
    pub fn key_down(key: Key) -> Self {
        InputEvent::Key {
            key,
            pressed: true,
            repeat: false,
            ctrl: false,
        }
    }

    pub fn key_up(key: Key) -> Self {
        InputEvent::Key {
            key,
            pressed: false,
            repeat: false,
            ctrl: false,
        }
    }

    pub fn key_repeat(key: Key) -> Self {
        InputEvent::Key {
            key,
            pressed: true,
            repeat: true,
            ctrl: false,
        }
    }

    /// Mark a key event as carrying the control modifier.
    pub fn with_ctrl(self) -> Self {
        match self {
            InputEvent::Key {
                key,
                pressed,
                repeat,
                ..
            } => InputEvent::Key {
                key,
                pressed,
                repeat,
                ctrl: true,
            },
            other => other,
        }
    }

    pub fn mouse_down(button: MouseButton) -> Self {
        InputEvent::Mouse {
            button,
            pressed: true,
        }
    }

    pub fn mouse_up(button: MouseButton) -> Self {
        InputEvent::Mouse {
            button,
            pressed: false,
        }
    }
}
