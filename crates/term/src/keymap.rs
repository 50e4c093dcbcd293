//! Key mapping from terminal events to engine keys.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use pixelframe_types::{Key, MouseButton};

/// Map a crossterm key code to an engine key. Unmapped codes are dropped.
pub fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(c) => map_char(c),
        KeyCode::F(n @ 1..=12) => Some(Key::PHYSICAL[Key::F1.index() + (n as usize - 1)]),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Tab | KeyCode::BackTab => Some(Key::Tab),
        KeyCode::Insert => Some(Key::Insert),
        KeyCode::Delete => Some(Key::Delete),
        KeyCode::Home => Some(Key::Home),
        KeyCode::End => Some(Key::End),
        KeyCode::PageUp => Some(Key::PageUp),
        KeyCode::PageDown => Some(Key::PageDown),
        KeyCode::Backspace => Some(Key::Back),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Pause => Some(Key::Pause),
        KeyCode::ScrollLock => Some(Key::ScrollLock),
        _ => None,
    }
}

fn map_char(c: char) -> Option<Key> {
    match c {
        'a'..='z' => Some(Key::PHYSICAL[(c as u8 - b'a') as usize]),
        'A'..='Z' => Some(Key::PHYSICAL[(c as u8 - b'A') as usize]),
        '0'..='9' => Some(Key::PHYSICAL[Key::K0.index() + (c as u8 - b'0') as usize]),
        ' ' => Some(Key::Space),
        _ => None,
    }
}

/// Map a crossterm mouse button to an engine button.
pub fn map_mouse_button(button: crossterm::event::MouseButton) -> MouseButton {
    match button {
        crossterm::event::MouseButton::Left => MouseButton::Left,
        crossterm::event::MouseButton::Middle => MouseButton::Middle,
        crossterm::event::MouseButton::Right => MouseButton::Right,
    }
}

/// Whether this key event is the terminal's interrupt (Ctrl-C), which the
/// backend reports as a close request.
pub fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
