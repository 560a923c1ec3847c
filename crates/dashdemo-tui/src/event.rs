//! Terminal event polling

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use dashdemo_app::{InputKey, Message};
use dashdemo_core::prelude::*;

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        _ => None,
    }
}

/// Poll for a terminal event, producing a tick when `timeout` elapses
pub fn poll(timeout: Duration) -> Result<Option<Message>> {
    if !event::poll(timeout)? {
        return Ok(Some(Message::Tick));
    }

    match event::read()? {
        Event::Key(key) if key.kind == event::KeyEventKind::Press => {
            Ok(key_event_to_input(key).map(Message::Key))
        }
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn input(code: KeyCode, modifiers: KeyModifiers) -> Option<InputKey> {
        key_event_to_input(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_char_conversion() {
        assert_eq!(input(KeyCode::Char('a'), KeyModifiers::NONE), Some(InputKey::Char('a')));
        assert_eq!(
            input(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(InputKey::CharCtrl('c'))
        );
    }

    #[test]
    fn test_shifted_char_stays_plain() {
        assert_eq!(input(KeyCode::Char('A'), KeyModifiers::SHIFT), Some(InputKey::Char('A')));
    }

    #[test]
    fn test_backtab_variants() {
        assert_eq!(input(KeyCode::Tab, KeyModifiers::SHIFT), Some(InputKey::BackTab));
        assert_eq!(input(KeyCode::BackTab, KeyModifiers::SHIFT), Some(InputKey::BackTab));
        assert_eq!(input(KeyCode::Tab, KeyModifiers::NONE), Some(InputKey::Tab));
    }

    #[test]
    fn test_unsupported_keys_ignored() {
        assert_eq!(input(KeyCode::F(1), KeyModifiers::NONE), None);
        assert_eq!(input(KeyCode::Home, KeyModifiers::NONE), None);
    }
}
