//! Key bindings for the menu

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::menu::MenuEvent;

/// Translate a key press into a menu event.
///
/// Returns `None` for key release/repeat reports so each physical press is
/// dispatched once.
pub fn menu_event(key: KeyEvent) -> Option<MenuEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let event = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => MenuEvent::Quit,
        KeyCode::Char('q') => MenuEvent::Quit,
        KeyCode::Up | KeyCode::Char('k') => MenuEvent::Up,
        KeyCode::Down | KeyCode::Char('j') => MenuEvent::Down,
        KeyCode::Enter | KeyCode::Char(' ') => MenuEvent::Select,
        _ => MenuEvent::Other,
    };
    Some(event)
}
