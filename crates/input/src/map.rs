//! Mapping from terminal events to arena input events.

use crate::core::{InputEvent, Key, MouseButton};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, ModifierKeyCode, MouseEvent,
    MouseEventKind,
};

/// Map a crossterm event. Returns `None` for events the arena ignores.
pub fn map_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => map_key_event(*key),
        Event::Mouse(mouse) => map_mouse_event(*mouse),
        _ => None,
    }
}

fn map_key_event(key: KeyEvent) -> Option<InputEvent> {
    // Esc stands in for closing the window.
    if key.code == KeyCode::Esc {
        return match key.kind {
            KeyEventKind::Press => Some(InputEvent::Quit),
            _ => None,
        };
    }

    let mapped = map_key_code(key.code);
    let event = match key.kind {
        KeyEventKind::Press => InputEvent::key_down(mapped),
        KeyEventKind::Repeat => InputEvent::key_repeat(mapped),
        KeyEventKind::Release => InputEvent::key_up(mapped),
    };

    if mapped != Key::Ctrl && key.modifiers.contains(KeyModifiers::CONTROL) {
        Some(event.with_ctrl())
    } else {
        Some(event)
    }
}

fn map_key_code(code: KeyCode) -> Key {
    match code {
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Modifier(ModifierKeyCode::LeftControl | ModifierKeyCode::RightControl) => {
            Key::Ctrl
        }
        KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
            'w' => Key::W,
            'a' => Key::A,
            's' => Key::S,
            'd' => Key::D,
            other => Key::Char(other),
        },
        _ => Key::Other,
    }
}

fn map_mouse_event(mouse: MouseEvent) -> Option<InputEvent> {
    match mouse.kind {
        MouseEventKind::Down(button) => Some(InputEvent::mouse_down(map_button(button))),
        MouseEventKind::Up(button) => Some(InputEvent::mouse_up(map_button(button))),
        _ => None,
    }
}

fn map_button(button: crossterm::event::MouseButton) -> MouseButton {
    match button {
        crossterm::event::MouseButton::Left => MouseButton::Left,
        crossterm::event::MouseButton::Right => MouseButton::Right,
        crossterm::event::MouseButton::Middle => MouseButton::Middle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseButton as CtMouseButton};

    fn key(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    fn mouse(kind: MouseEventKind) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            map_event(&key(KeyCode::Char('w'), KeyEventKind::Press)),
            Some(InputEvent::key_down(Key::W))
        );
        assert_eq!(
            map_event(&key(KeyCode::Char('A'), KeyEventKind::Press)),
            Some(InputEvent::key_down(Key::A))
        );
        assert_eq!(
            map_event(&key(KeyCode::Char('s'), KeyEventKind::Release)),
            Some(InputEvent::key_up(Key::S))
        );
        assert_eq!(
            map_event(&key(KeyCode::Char('d'), KeyEventKind::Repeat)),
            Some(InputEvent::key_repeat(Key::D))
        );
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(
            map_event(&key(KeyCode::Up, KeyEventKind::Press)),
            Some(InputEvent::key_down(Key::Up))
        );
        assert_eq!(
            map_event(&key(KeyCode::Left, KeyEventKind::Release)),
            Some(InputEvent::key_up(Key::Left))
        );
    }

    #[test]
    fn test_ctrl_keys() {
        assert_eq!(
            map_event(&key(
                KeyCode::Modifier(ModifierKeyCode::RightControl),
                KeyEventKind::Press
            )),
            Some(InputEvent::key_down(Key::Ctrl))
        );

        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(
            map_event(&ctrl_c),
            Some(InputEvent::key_down(Key::Char('c')).with_ctrl())
        );
    }

    #[test]
    fn test_escape_quits_on_press_only() {
        assert_eq!(
            map_event(&key(KeyCode::Esc, KeyEventKind::Press)),
            Some(InputEvent::Quit)
        );
        assert_eq!(map_event(&key(KeyCode::Esc, KeyEventKind::Release)), None);
    }

    #[test]
    fn test_mouse_buttons() {
        assert_eq!(
            map_event(&mouse(MouseEventKind::Down(CtMouseButton::Left))),
            Some(InputEvent::mouse_down(MouseButton::Left))
        );
        assert_eq!(
            map_event(&mouse(MouseEventKind::Up(CtMouseButton::Right))),
            Some(InputEvent::mouse_up(MouseButton::Right))
        );
        assert_eq!(map_event(&mouse(MouseEventKind::Moved)), None);
    }

    #[test]
    fn test_other_events_ignored() {
        assert_eq!(map_event(&Event::Resize(80, 24)), None);
        assert_eq!(map_event(&Event::FocusGained), None);
    }
}
