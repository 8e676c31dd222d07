//! Held-key tracker for terminal environments.
//!
//! Supports terminals that do not emit key release events by using a timeout.

use arrayvec::ArrayVec;
use crossterm::event::KeyCode;

use crate::map::map_direction;
use crate::types::Direction;

/// A change in held state for one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEdge {
    Down(Direction),
    Up(Direction),
}

// Without release events, a held key shows up as one press, a pause of the
// terminal's repeat delay, then a steady stream of repeats. The first timeout
// has to outlast the repeat delay; once repeats arrive a short one suffices.
const DEFAULT_INITIAL_RELEASE_TIMEOUT_MS: u32 = 550;
const DEFAULT_REPEAT_RELEASE_TIMEOUT_MS: u32 = 150;

#[derive(Debug, Clone, Copy, Default)]
struct KeySlot {
    held: bool,
    repeating: bool,
    since_press_ms: u32,
}

/// Tracks which directions are held.
#[derive(Debug, Clone)]
pub struct KeyTracker {
    slots: [KeySlot; 4],
    initial_timeout_ms: u32,
    repeat_timeout_ms: u32,
    release_events: bool,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::with_timeouts(
            DEFAULT_INITIAL_RELEASE_TIMEOUT_MS,
            DEFAULT_REPEAT_RELEASE_TIMEOUT_MS,
        )
    }

    pub fn with_timeouts(initial_timeout_ms: u32, repeat_timeout_ms: u32) -> Self {
        Self {
            slots: [KeySlot::default(); 4],
            initial_timeout_ms,
            repeat_timeout_ms,
            release_events: false,
        }
    }

    /// Set both release timeouts to the same value.
    pub fn with_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.initial_timeout_ms = timeout_ms;
        self.repeat_timeout_ms = timeout_ms;
        self
    }

    /// The terminal reports real key releases: never synthesize them.
    pub fn with_release_events(mut self, enabled: bool) -> Self {
        self.release_events = enabled;
        self
    }

    pub fn is_held(&self, direction: Direction) -> bool {
        self.slots[direction.index()].held
    }

    /// Press or auto-repeat. Returns `Down` only when the key was not held.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<KeyEdge> {
        let direction = map_direction(code)?;
        let slot = &mut self.slots[direction.index()];
        slot.since_press_ms = 0;
        if slot.held {
            slot.repeating = true;
            None
        } else {
            slot.held = true;
            slot.repeating = false;
            Some(KeyEdge::Down(direction))
        }
    }

    /// Real release event. Returns `Up` when the key was held.
    pub fn handle_key_release(&mut self, code: KeyCode) -> Option<KeyEdge> {
        let direction = map_direction(code)?;
        let slot = &mut self.slots[direction.index()];
        if !slot.held {
            return None;
        }
        *slot = KeySlot::default();
        Some(KeyEdge::Up(direction))
    }

    /// Release everything (e.g. on focus loss).
    pub fn release_all(&mut self) -> ArrayVec<KeyEdge, 4> {
        let mut edges = ArrayVec::new();
        for direction in Direction::ALL {
            let slot = &mut self.slots[direction.index()];
            if slot.held {
                *slot = KeySlot::default();
                edges.push(KeyEdge::Up(direction));
            }
        }
        edges
    }

    /// Advance timers; returns releases synthesized for keys that stopped
    /// repeating.
    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<KeyEdge, 4> {
        let mut edges = ArrayVec::new();
        if self.release_events {
            return edges;
        }

        for direction in Direction::ALL {
            let slot = &mut self.slots[direction.index()];
            if !slot.held {
                continue;
            }
            slot.since_press_ms = slot.since_press_ms.saturating_add(elapsed_ms);
            let timeout = if slot.repeating {
                self.repeat_timeout_ms
            } else {
                self.initial_timeout_ms
            };
            if slot.since_press_ms > timeout {
                *slot = KeySlot::default();
                edges.push(KeyEdge::Up(direction));
            }
        }
        edges
    }
}

impl Default for KeyTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_reports_down_once() {
        let mut t = KeyTracker::new();
        assert_eq!(
            t.handle_key_press(KeyCode::Left),
            Some(KeyEdge::Down(Direction::Left))
        );
        assert_eq!(t.handle_key_press(KeyCode::Left), None);
        assert!(t.is_held(Direction::Left));
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        let mut t = KeyTracker::new();
        assert_eq!(t.handle_key_press(KeyCode::Char('x')), None);
        assert_eq!(t.handle_key_release(KeyCode::Char('x')), None);
        assert!(Direction::ALL.iter().all(|&d| !t.is_held(d)));
    }

    #[test]
    fn release_event_reports_up() {
        let mut t = KeyTracker::new();
        t.handle_key_press(KeyCode::Up);
        assert_eq!(
            t.handle_key_release(KeyCode::Up),
            Some(KeyEdge::Up(Direction::Up))
        );
        assert_eq!(t.handle_key_release(KeyCode::Up), None);
    }

    #[test]
    fn single_tap_auto_releases_after_initial_timeout() {
        let mut t = KeyTracker::with_timeouts(500, 100);
        t.handle_key_press(KeyCode::Right);
        assert!(t.update(500).is_empty());
        let edges = t.update(1);
        assert_eq!(edges.as_slice(), &[KeyEdge::Up(Direction::Right)]);
        assert!(!t.is_held(Direction::Right));
    }

    #[test]
    fn repeats_keep_key_held_with_short_timeout() {
        let mut t = KeyTracker::with_timeouts(500, 100);
        t.handle_key_press(KeyCode::Down);
        assert!(t.update(400).is_empty());

        // Auto-repeat kicks in.
        for _ in 0..20 {
            assert_eq!(t.handle_key_press(KeyCode::Down), None);
            assert!(t.update(33).is_empty());
        }
        assert!(t.is_held(Direction::Down));

        // Repeats stop: released after the repeat timeout, not the initial one.
        assert!(t.update(67).is_empty());
        assert_eq!(t.update(10).as_slice(), &[KeyEdge::Up(Direction::Down)]);
    }

    #[test]
    fn release_events_disable_timeout() {
        let mut t = KeyTracker::new().with_release_events(true);
        t.handle_key_press(KeyCode::Up);
        assert!(t.update(60_000).is_empty());
        assert!(t.is_held(Direction::Up));
    }

    #[test]
    fn release_all_reports_every_held_key() {
        let mut t = KeyTracker::new();
        t.handle_key_press(KeyCode::Up);
        t.handle_key_press(KeyCode::Left);
        let edges = t.release_all();
        assert_eq!(
            edges.as_slice(),
            &[KeyEdge::Up(Direction::Up), KeyEdge::Up(Direction::Left)]
        );
        assert!(t.release_all().is_empty());
    }

    #[test]
    fn uniform_timeout_builder() {
        let mut t = KeyTracker::new().with_release_timeout_ms(50);
        t.handle_key_press(KeyCode::Left);
        assert!(t.update(50).is_empty());
        assert_eq!(t.update(1).len(), 1);
    }
}
