//! Terminal front end for the drift game.
//!
//! Rendering is split in three stages:
//! - [`PixelCanvas`] implements the core `Canvas` trait on a pixel grid
//! - [`GameView`] turns pixel pairs into half-block cells and adds the HUD
//! - [`TerminalRenderer`] diffs framebuffers and flushes changed cells
//!
//! Only the last stage does I/O; the first two are unit-tested directly.

pub mod canvas;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_drift_core as core;
pub use tui_drift_types as types;

pub use canvas::PixelCanvas;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb, HALF_BLOCK};
pub use game_view::{GameView, Layout, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
