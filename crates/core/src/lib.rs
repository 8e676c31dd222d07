//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the whole simulation and the scene painter. It has
//! **no dependencies** on a terminal, a window, or wall-clock time:
//!
//! - **Deterministic**: same seed produces the same starfield and pickups
//! - **Testable**: every tick can be driven synchronously from a test
//! - **Portable**: rendering goes through the [`render::Canvas`] trait
//!
//! # Module Structure
//!
//! - [`input`]: held-key state for the four thrust directions
//! - [`movement`]: force, fuel throttle, velocity integration and friction
//! - [`camera`]: player-centered projection, parallax, visibility culling
//! - [`world`]: star and fuel can generation, paint-ordered object list
//! - [`render`]: `Canvas` trait and the per-variant draw dispatch
//! - [`game`]: the per-tick loop tying it all together
//!
//! # Example
//!
//! ```
//! use tui_drift_core::{GameState, InputState, MovementTuning, WorldConfig};
//! use tui_drift_core::types::Direction;
//!
//! let config = WorldConfig {
//!     seed: Some(1),
//!     star_count: 100,
//!     fuel_can_count: 10,
//!     ..WorldConfig::default()
//! };
//! let mut game = GameState::new(config, MovementTuning::default());
//!
//! let mut input = InputState::new();
//! input.key_down(Direction::Right);
//! game.step(&input);
//!
//! assert!(game.player().x > 0.0);
//! assert!(game.fuel() < 100.0);
//! ```

pub mod camera;
pub mod game;
pub mod input;
pub mod movement;
pub mod render;
pub mod world;

pub use tui_drift_types as types;

pub use camera::{parallax, Camera};
pub use game::{GameState, HudSnapshot, TickReport};
pub use input::InputState;
pub use movement::{MovementModel, MovementTuning};
pub use render::{Canvas, DrawCall, NullCanvas, RecordingCanvas, Renderer};
pub use world::{Drawable, FuelCan, FuelCanId, Star, World, WorldConfig};
