//! Game state module - owns the player, movement model, and world
//!
//! One [`GameState::tick`] is one frame:
//!
//! 1. Update velocity from held keys (fuel-throttled, with friction)
//! 2. Move the player by the velocity
//! 3. Paint background and all objects
//! 4. Collect every fuel can within pickup range (+10 fuel each, capped)
//! 5. Paint the fuel gauge
//!
//! Nothing here knows about wall-clock time: the caller decides when a tick
//! happens.

use crate::input::InputState;
use crate::movement::{MovementModel, MovementTuning};
use crate::render::{Canvas, Renderer};
use crate::types::{Vec2, PICKUP_MARGIN, REFUEL_AMOUNT};
use crate::world::{Drawable, FuelCan, FuelCanId, World, WorldConfig};

/// What happened during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// Tick number (1 for the first tick).
    pub tick: u64,
    /// Fuel cans collected this tick.
    pub collected: usize,
}

/// Read-only summary for HUDs and logs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudSnapshot {
    pub player: Vec2,
    pub velocity: Vec2,
    pub force: Vec2,
    pub fuel: f64,
    pub max_fuel: f64,
    pub fuel_cans_left: usize,
    pub fuel_cans_collected: usize,
    pub ticks: u64,
}

impl HudSnapshot {
    /// Fuel percentage, rounded down, in `0..=100`.
    pub fn fuel_percent(&self) -> u32 {
        if self.max_fuel <= 0.0 {
            return 0;
        }
        ((self.fuel / self.max_fuel).clamp(0.0, 1.0) * 100.0).floor() as u32
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    player: Vec2,
    movement: MovementModel,
    world: World,
    renderer: Renderer,
    ticks: u64,
    collected: usize,
    // Reused between ticks so steady-state pickup checks do not allocate.
    pending_pickups: Vec<FuelCanId>,
}

impl GameState {
    /// Generate a world and place the player at the origin with a full tank.
    pub fn new(config: WorldConfig, tuning: MovementTuning) -> Self {
        let player = Vec2::ZERO;
        let world = World::generate(config, player);
        Self::with_world(world, tuning, player)
    }

    /// Start from a prebuilt world.
    pub fn with_world(world: World, tuning: MovementTuning, player: Vec2) -> Self {
        Self {
            player,
            movement: MovementModel::new(tuning),
            world,
            renderer: Renderer::new(),
            ticks: 0,
            collected: 0,
            pending_pickups: Vec::with_capacity(8),
        }
    }

    pub fn player(&self) -> Vec2 {
        self.player
    }

    pub fn velocity(&self) -> Vec2 {
        self.movement.velocity()
    }

    pub fn force(&self) -> Vec2 {
        self.movement.force()
    }

    pub fn fuel(&self) -> f64 {
        self.movement.fuel()
    }

    pub fn movement(&self) -> &MovementModel {
        &self.movement
    }

    pub fn movement_mut(&mut self) -> &mut MovementModel {
        &mut self.movement
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn fuel_cans(&self) -> &[FuelCan] {
        self.world.fuel_cans()
    }

    pub fn objects(&self) -> &[Drawable] {
        self.world.objects()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Total fuel cans collected this session.
    pub fn collected(&self) -> usize {
        self.collected
    }

    pub fn snapshot(&self) -> HudSnapshot {
        HudSnapshot {
            player: self.player,
            velocity: self.movement.velocity(),
            force: self.movement.force(),
            fuel: self.movement.fuel(),
            max_fuel: self.movement.max_fuel(),
            fuel_cans_left: self.world.fuel_cans().len(),
            fuel_cans_collected: self.collected,
            ticks: self.ticks,
        }
    }

    /// Run one full frame: simulate and paint into `canvas`.
    pub fn tick<C: Canvas + ?Sized>(&mut self, input: &InputState, canvas: &mut C) -> TickReport {
        self.advance(input);

        self.renderer.draw_scene(
            canvas,
            self.world.objects(),
            self.player,
            self.movement.force(),
        );

        let collected = self.collect_fuel();

        self.renderer
            .draw_fuel_gauge(canvas, self.movement.fuel_fraction());

        TickReport {
            tick: self.ticks,
            collected,
        }
    }

    /// Run one frame of simulation without painting.
    pub fn step(&mut self, input: &InputState) -> TickReport {
        self.advance(input);
        let collected = self.collect_fuel();
        TickReport {
            tick: self.ticks,
            collected,
        }
    }

    fn advance(&mut self, input: &InputState) {
        self.ticks += 1;
        self.movement.update_velocity(input);
        self.player += self.movement.velocity();
    }

    /// Pick up every can in range of the ship; returns how many.
    ///
    /// Matches are gathered first, then removed from both lists in one pass.
    fn collect_fuel(&mut self) -> usize {
        self.pending_pickups.clear();
        let player = self.player;
        self.pending_pickups.extend(
            self.world
                .fuel_cans()
                .iter()
                .filter(|can| can.is_near(player, PICKUP_MARGIN))
                .map(|can| can.id),
        );
        if self.pending_pickups.is_empty() {
            return 0;
        }

        for _ in 0..self.pending_pickups.len() {
            self.movement.refuel(REFUEL_AMOUNT);
        }
        let removed = self.world.remove_fuel_cans(&self.pending_pickups);
        self.collected += removed;

        log::debug!(
            "tick {}: collected {} fuel can(s) at ({:.1}, {:.1}), fuel {:.1}",
            self.ticks,
            removed,
            player.x,
            player.y,
            self.movement.fuel()
        );
        removed
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(WorldConfig::default(), MovementTuning::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCall, NullCanvas, RecordingCanvas};
    use crate::types::{Direction, Rgba, CANVAS_HEIGHT, CANVAS_WIDTH};
    use approx::assert_abs_diff_eq;

    fn empty_world() -> World {
        World::from_parts(WorldConfig::default(), Vec::new(), Vec::new())
    }

    fn world_with_cans(cans: &[(f64, f64)]) -> World {
        let cans = cans
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| FuelCan::new(i as FuelCanId, Vec2::new(x, y)))
            .collect();
        World::from_parts(WorldConfig::default(), Vec::new(), cans)
    }

    #[test]
    fn idle_ship_stays_at_rest() {
        let mut gs = GameState::with_world(empty_world(), MovementTuning::default(), Vec2::ZERO);
        let input = InputState::new();
        for _ in 0..100 {
            gs.step(&input);
        }
        assert_abs_diff_eq!(gs.velocity().x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(gs.velocity().y, 0.0, epsilon = 1e-12);
        assert_eq!(gs.player(), Vec2::ZERO);
        assert_eq!(gs.fuel(), 100.0);
        assert_eq!(gs.ticks(), 100);
    }

    #[test]
    fn coasting_decays_toward_rest() {
        let mut gs = GameState::with_world(empty_world(), MovementTuning::default(), Vec2::ZERO);
        let mut input = InputState::new();
        input.key_down(Direction::Right);
        for _ in 0..10 {
            gs.step(&input);
        }
        input.key_up(Direction::Right);
        for _ in 0..1000 {
            gs.step(&input);
        }
        assert!(gs.velocity().x.abs() < 1e-9);
        assert!(gs.player().x > 0.0);
    }

    #[test]
    fn pickup_refuels_and_caps_at_max() {
        let mut gs = GameState::with_world(
            world_with_cans(&[(0.0, 0.0)]),
            MovementTuning::default(),
            Vec2::ZERO,
        );
        gs.movement_mut().set_fuel(95.0);

        let report = gs.step(&InputState::new());
        assert_eq!(report.collected, 1);
        assert_eq!(gs.fuel(), 100.0);
        assert!(gs.fuel_cans().is_empty());
        assert_eq!(gs.objects(), &[Drawable::Ship]);
        assert_eq!(gs.collected(), 1);
    }

    #[test]
    fn pickup_adds_ten_when_room() {
        let mut gs = GameState::with_world(
            world_with_cans(&[(3.0, -4.0)]),
            MovementTuning::default(),
            Vec2::ZERO,
        );
        gs.movement_mut().set_fuel(50.0);
        gs.step(&InputState::new());
        assert_eq!(gs.fuel(), 60.0);
    }

    #[test]
    fn overlapping_cans_are_all_collected_in_one_tick() {
        let mut gs = GameState::with_world(
            world_with_cans(&[(0.0, 0.0), (2.0, 2.0), (500.0, 500.0)]),
            MovementTuning::default(),
            Vec2::ZERO,
        );
        gs.movement_mut().set_fuel(20.0);
        let report = gs.step(&InputState::new());
        assert_eq!(report.collected, 2);
        assert_eq!(gs.fuel(), 40.0);
        assert_eq!(gs.fuel_cans().len(), 1);
        assert_eq!(gs.fuel_cans()[0].id, 2);
    }

    #[test]
    fn collected_can_is_never_collected_again() {
        let mut gs = GameState::with_world(
            world_with_cans(&[(0.0, 0.0)]),
            MovementTuning::default(),
            Vec2::ZERO,
        );
        gs.movement_mut().set_fuel(10.0);
        let idle = InputState::new();
        assert_eq!(gs.step(&idle).collected, 1);
        for _ in 0..10 {
            assert_eq!(gs.step(&idle).collected, 0);
        }
        assert_eq!(gs.fuel(), 20.0);
    }

    #[test]
    fn out_of_range_can_is_left_alone() {
        let mut gs = GameState::with_world(
            world_with_cans(&[(10.0, 0.0), (0.0, 13.0)]),
            MovementTuning::default(),
            Vec2::ZERO,
        );
        assert_eq!(gs.step(&InputState::new()).collected, 0);
        assert_eq!(gs.fuel_cans().len(), 2);
    }

    #[test]
    fn tick_paints_scene_then_gauge() {
        let mut gs = GameState::with_world(empty_world(), MovementTuning::default(), Vec2::ZERO);
        let mut canvas = RecordingCanvas::new(CANVAS_WIDTH, CANVAS_HEIGHT);
        let report = gs.tick(&InputState::new(), &mut canvas);
        assert_eq!(report.tick, 1);

        let calls = canvas.calls();
        assert_eq!(calls.first(), Some(&DrawCall::Clear(Rgba::BLACK)));
        assert_eq!(
            calls.last(),
            Some(&DrawCall::Rect {
                top_left: Vec2::new(0.0, 0.0),
                width: 10.0,
                height: 512.0,
                color: Rgba::RED
            })
        );
    }

    #[test]
    fn gauge_reflects_fuel_after_pickup() {
        let mut gs = GameState::with_world(
            world_with_cans(&[(0.0, 0.0)]),
            MovementTuning::default(),
            Vec2::ZERO,
        );
        gs.movement_mut().set_fuel(40.0);
        let mut canvas = RecordingCanvas::new(CANVAS_WIDTH, CANVAS_HEIGHT);
        gs.tick(&InputState::new(), &mut canvas);
        match canvas.calls().last() {
            Some(DrawCall::Rect { height, .. }) => assert_abs_diff_eq!(*height, 0.5 * 512.0),
            other => panic!("expected gauge rect, got {other:?}"),
        }
    }

    #[test]
    fn tick_and_step_simulate_identically() {
        let config = WorldConfig {
            seed: Some(3),
            star_count: 200,
            fuel_can_count: 200,
            map_size: 600.0,
            ..WorldConfig::default()
        };
        let mut a = GameState::new(config, MovementTuning::default());
        let mut b = GameState::new(config, MovementTuning::default());
        let mut canvas = NullCanvas::new(CANVAS_WIDTH, CANVAS_HEIGHT);

        let mut input = InputState::new();
        input.key_down(Direction::Down);
        input.key_down(Direction::Left);
        for _ in 0..120 {
            let ra = a.tick(&input, &mut canvas);
            let rb = b.step(&input);
            assert_eq!(ra, rb);
        }
        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn fuel_stays_within_tank_bounds() {
        let config = WorldConfig {
            star_count: 0,
            fuel_can_count: 300,
            map_size: 400.0,
            ..WorldConfig::default()
        };
        let mut gs = GameState::new(config, MovementTuning::default());
        let mut input = InputState::new();
        input.key_down(Direction::Up);
        input.key_down(Direction::Right);
        for i in 0..2000 {
            if i % 300 == 0 {
                input.release_all();
                let turn = if i % 600 == 0 {
                    Direction::Left
                } else {
                    Direction::Down
                };
                input.key_down(turn);
            }
            gs.step(&input);
            assert!((0.0..=100.0).contains(&gs.fuel()));
        }
    }

    #[test]
    fn snapshot_reports_fuel_percent() {
        let mut gs = GameState::with_world(empty_world(), MovementTuning::default(), Vec2::ZERO);
        gs.movement_mut().set_fuel(42.9);
        let snap = gs.snapshot();
        assert_eq!(snap.fuel_percent(), 42);
        assert_eq!(snap.fuel_cans_left, 0);
    }
}
