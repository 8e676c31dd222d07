//! Fixed-period tick scheduler.
//!
//! A tick is due once at least one period has elapsed since the previous
//! tick. Late ticks are delayed, never replayed: however long the gap, at
//! most one tick is reported per `advance` call and the accumulator restarts
//! from zero.

use std::time::Duration;

use crate::types::TICK_MICROS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTick {
    period: Duration,
    since_last: Duration,
    ticks: u64,
}

impl FixedTick {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            since_last: Duration::ZERO,
            ticks: 0,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Ticks reported so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Account for `elapsed` time; returns true when a tick is due now.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        self.since_last = self.since_last.saturating_add(elapsed);
        if self.since_last < self.period {
            return false;
        }
        self.since_last = Duration::ZERO;
        self.ticks += 1;
        true
    }

    /// How long until the next tick is due (zero when already due).
    pub fn time_until_next(&self) -> Duration {
        self.period.saturating_sub(self.since_last)
    }
}

impl Default for FixedTick {
    fn default() -> Self {
        Self::new(Duration::from_micros(TICK_MICROS))
    }
}
