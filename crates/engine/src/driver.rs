//! Synchronous driver: owns the game, its input state, and a canvas.

use std::time::Duration;

use crate::core::{Canvas, GameState, InputState, TickReport};
use crate::scheduler::FixedTick;
use crate::types::Direction;

pub struct Driver<C: Canvas> {
    game: GameState,
    input: InputState,
    canvas: C,
    scheduler: FixedTick,
}

impl<C: Canvas> Driver<C> {
    pub fn new(game: GameState, canvas: C) -> Self {
        Self::with_scheduler(game, canvas, FixedTick::default())
    }

    pub fn with_scheduler(game: GameState, canvas: C, scheduler: FixedTick) -> Self {
        Self {
            game,
            input: InputState::new(),
            canvas,
            scheduler,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn key_down(&mut self, direction: Direction) {
        self.input.key_down(direction);
    }

    pub fn key_up(&mut self, direction: Direction) {
        self.input.key_up(direction);
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    /// Run exactly one tick now, regardless of the scheduler.
    pub fn advance_one_tick(&mut self) -> TickReport {
        self.game.tick(&self.input, &mut self.canvas)
    }

    /// Feed elapsed time; runs a tick when one is due.
    pub fn advance(&mut self, elapsed: Duration) -> Option<TickReport> {
        if self.scheduler.advance(elapsed) {
            Some(self.advance_one_tick())
        } else {
            None
        }
    }

    /// Poll timeout until the next tick is due.
    pub fn time_until_next(&self) -> Duration {
        self.scheduler.time_until_next()
    }
}
