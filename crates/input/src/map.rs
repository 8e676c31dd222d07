//! Key mapping from terminal events to thrust directions.

use crate::types::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key code to a thrust direction. Unmapped keys return `None`.
pub fn map_direction(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Direction::Right),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_arrow_keys() {
        assert_eq!(map_direction(KeyCode::Up), Some(Direction::Up));
        assert_eq!(map_direction(KeyCode::Down), Some(Direction::Down));
        assert_eq!(map_direction(KeyCode::Left), Some(Direction::Left));
        assert_eq!(map_direction(KeyCode::Right), Some(Direction::Right));
    }

    #[test]
    fn test_wasd_keys() {
        assert_eq!(map_direction(KeyCode::Char('W')), Some(Direction::Up));
        assert_eq!(map_direction(KeyCode::Char('a')), Some(Direction::Left));
        assert_eq!(map_direction(KeyCode::Char('s')), Some(Direction::Down));
        assert_eq!(map_direction(KeyCode::Char('D')), Some(Direction::Right));
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(map_direction(KeyCode::Char(' ')), None);
        assert_eq!(map_direction(KeyCode::Enter), None);
        assert_eq!(map_direction(KeyCode::F(1)), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Up)));
    }
}
