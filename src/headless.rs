//! Headless runs: tick the simulation without a terminal and summarize.

use std::fmt;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::core::{GameState, HudSnapshot, NullCanvas};
use crate::engine::Driver;
use crate::types::{CANVAS_HEIGHT, CANVAS_WIDTH};

/// Outcome of [`run_headless`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadlessReport {
    pub snapshot: HudSnapshot,
    pub seed: Option<u64>,
    pub elapsed: Duration,
}

/// Generate the configured world and run `ticks` ticks with no keys held.
pub fn run_headless(config: &Config, ticks: u64) -> HeadlessReport {
    let game = GameState::new(config.world, config.tuning);
    let mut driver = Driver::new(game, NullCanvas::new(CANVAS_WIDTH, CANVAS_HEIGHT));

    let started = Instant::now();
    for _ in 0..ticks {
        driver.advance_one_tick();
    }
    let elapsed = started.elapsed();
    log::info!("headless run finished: {} ticks in {:?}", ticks, elapsed);

    HeadlessReport {
        snapshot: driver.game().snapshot(),
        seed: driver.game().world().seed(),
        elapsed,
    }
}

impl HeadlessReport {
    /// Mean wall-clock time per tick, `None` for an empty run.
    pub fn tick_micros(&self) -> Option<f64> {
        if self.snapshot.ticks == 0 {
            return None;
        }
        let total = self.elapsed.as_secs_f64() * 1e6;
        Some(total / self.snapshot.ticks as f64)
    }
}

impl fmt::Display for HeadlessReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snap = &self.snapshot;
        if let Some(seed) = self.seed {
            writeln!(f, "seed       {}", seed)?;
        }
        writeln!(f, "ticks      {}", snap.ticks)?;
        writeln!(f, "position   ({:.2}, {:.2})", snap.player.x, snap.player.y)?;
        writeln!(
            f,
            "velocity   ({:.3}, {:.3})",
            snap.velocity.x, snap.velocity.y
        )?;
        writeln!(f, "fuel       {:.1}/{:.1}", snap.fuel, snap.max_fuel)?;
        writeln!(
            f,
            "fuel cans  {} left, {} collected",
            snap.fuel_cans_left, snap.fuel_cans_collected
        )?;
        if let Some(us) = self.tick_micros() {
            writeln!(f, "tick time  {:.1} us avg", us)?;
        }
        Ok(())
    }
}
