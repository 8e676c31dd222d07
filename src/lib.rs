//! Drift (workspace facade crate).
//!
//! Re-exports the member crates as `tui_drift::{types,core,engine,input,term}`
//! and owns the runtime [`config`], [`logging`] setup and [`headless`] runs
//! shared by the binary and the tests.

pub mod config;
pub mod headless;
pub mod logging;

pub use tui_drift_core as core;
pub use tui_drift_engine as engine;
pub use tui_drift_input as input;
pub use tui_drift_term as term;
pub use tui_drift_types as types;
