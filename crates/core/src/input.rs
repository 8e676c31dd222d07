//! Held-key state for the four thrust directions.

use crate::types::Direction;

/// Which directions are currently held.
///
/// Polling never consumes state: a direction stays held until `key_up`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputState {
    held: [bool; 4],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, direction: Direction) {
        self.held[direction.index()] = true;
    }

    pub fn key_up(&mut self, direction: Direction) {
        self.held[direction.index()] = false;
    }

    pub fn is_held(&self, direction: Direction) -> bool {
        self.held[direction.index()]
    }

    /// Release every direction (e.g. on focus loss).
    pub fn release_all(&mut self) {
        self.held = [false; 4];
    }

    pub fn any_held(&self) -> bool {
        self.held.iter().any(|&h| h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_stay_held_across_polls() {
        let mut input = InputState::new();
        input.key_down(Direction::Up);
        for _ in 0..10 {
            assert!(input.is_held(Direction::Up));
        }
        assert!(!input.is_held(Direction::Down));

        input.key_up(Direction::Up);
        assert!(!input.is_held(Direction::Up));
    }

    #[test]
    fn key_up_without_key_down_is_noop() {
        let mut input = InputState::new();
        input.key_up(Direction::Left);
        assert_eq!(input, InputState::default());
    }

    #[test]
    fn release_all_clears_everything() {
        let mut input = InputState::new();
        for d in Direction::ALL {
            input.key_down(d);
        }
        assert!(input.any_held());
        input.release_all();
        assert!(Direction::ALL.iter().all(|&d| !input.is_held(d)));
    }
}
