//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto [`crate::types::Direction`] and tracks
//! which directions are held. Terminals that report key releases keep keys
//! held until the release arrives; terminals that only report presses (and
//! auto-repeat) get synthesized releases after a short timeout.

pub mod handler;
pub mod map;

pub use tui_drift_types as types;

pub use handler::{KeyEdge, KeyTracker};
pub use map::{map_direction, should_quit};
