//! Engine module - fixed-tick scheduling around the core simulation.
//!
//! The core never asks for the time. This crate decides *when* a tick runs:
//! [`FixedTick`] turns elapsed wall-clock time into due ticks, and [`Driver`]
//! owns the game, the held-key state and a canvas and runs one tick at a
//! time. Tests call [`Driver::advance_one_tick`] directly; the binary feeds
//! real elapsed time through [`Driver::advance`].

pub mod driver;
pub mod scheduler;

pub use tui_drift_core as core;
pub use tui_drift_types as types;

pub use driver::Driver;
pub use scheduler::FixedTick;
