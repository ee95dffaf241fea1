//! Keyboard event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::Action;

/// Handle keyboard events and return the appropriate action.
pub fn handle_key_event(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Left | KeyCode::Char('h') => Action::Nudge(-1),
        KeyCode::Right | KeyCode::Char('l') => Action::Nudge(1),
        // Clamped by the picker, so any count past the list length works
        KeyCode::Home => Action::Nudge(i32::from(i16::MIN)),
        KeyCode::End => Action::Nudge(i32::from(i16::MAX)),
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys_nudge() {
        assert_eq!(handle_key_event(key(KeyCode::Left)), Action::Nudge(-1));
        assert_eq!(handle_key_event(key(KeyCode::Char('l'))), Action::Nudge(1));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(handle_key_event(key(KeyCode::Esc)), Action::Quit);
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
        assert_eq!(handle_key_event(key(KeyCode::Char('c'))), Action::None);
    }
}
