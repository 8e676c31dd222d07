//! Movement model - held keys to force, force to velocity, fuel accounting
//!
//! One call to [`MovementModel::update_velocity`] per tick:
//!
//! 1. Build a force from held keys (opposite keys on an axis cancel).
//! 2. Throttle the force by remaining fuel: full thrust down to 10% of the
//!    tank, then linearly less, reaching zero when empty.
//! 3. Add the force to velocity and burn `|fx| + |fy|` fuel.
//! 4. Apply friction to velocity, whether or not anything was held.
//!
//! Burn is proportional to the *throttled* force, so a nearly empty tank
//! also burns almost nothing.

use crate::input::InputState;
use crate::types::{Direction, Vec2, ACCELERATION, FRICTION, MAX_FUEL};

/// Tunable movement constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementTuning {
    pub friction: f64,
    pub acceleration: f64,
    pub max_fuel: f64,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            friction: FRICTION,
            acceleration: ACCELERATION,
            max_fuel: MAX_FUEL,
        }
    }
}

/// Ship velocity, the force applied this tick, and the fuel tank.
#[derive(Debug, Clone, PartialEq)]
pub struct MovementModel {
    tuning: MovementTuning,
    velocity: Vec2,
    force: Vec2,
    fuel: f64,
}

impl MovementModel {
    /// Start at rest with a full tank.
    pub fn new(tuning: MovementTuning) -> Self {
        Self {
            tuning,
            velocity: Vec2::ZERO,
            force: Vec2::ZERO,
            fuel: tuning.max_fuel.max(0.0),
        }
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Force applied during the most recent tick (after throttling).
    pub fn force(&self) -> Vec2 {
        self.force
    }

    pub fn fuel(&self) -> f64 {
        self.fuel
    }

    pub fn max_fuel(&self) -> f64 {
        self.tuning.max_fuel
    }

    /// Overwrite the fuel level, clamped into `[0, max_fuel]`.
    pub fn set_fuel(&mut self, fuel: f64) {
        self.fuel = fuel.clamp(0.0, self.tuning.max_fuel.max(0.0));
    }

    /// Remaining fuel as a fraction of the tank (0 when the tank size is 0).
    pub fn fuel_fraction(&self) -> f64 {
        if self.tuning.max_fuel <= 0.0 {
            return 0.0;
        }
        self.fuel / self.tuning.max_fuel
    }

    /// Thrust multiplier in `[0, 1]`: `min(1, fuel / (max_fuel / 10))`.
    pub fn throttle(&self) -> f64 {
        let full_thrust_above = self.tuning.max_fuel / 10.0;
        if full_thrust_above <= 0.0 {
            return 0.0;
        }
        (self.fuel / full_thrust_above).clamp(0.0, 1.0)
    }

    /// Add fuel, capped at the tank capacity.
    pub fn refuel(&mut self, amount: f64) {
        self.set_fuel(self.fuel + amount);
    }

    /// Advance velocity by one tick given the held keys.
    pub fn update_velocity(&mut self, input: &InputState) {
        let a = self.tuning.acceleration;
        let mut force = Vec2::ZERO;

        let up = input.is_held(Direction::Up);
        let down = input.is_held(Direction::Down);
        if up && !down {
            force.y -= a;
        } else if down && !up {
            force.y += a;
        }

        let left = input.is_held(Direction::Left);
        let right = input.is_held(Direction::Right);
        if right && !left {
            force.x += a;
        } else if left && !right {
            force.x -= a;
        }

        self.force = force.scale(self.throttle());
        self.apply_force();

        self.velocity = self.velocity.scale(self.tuning.friction);
    }

    fn apply_force(&mut self) {
        self.velocity += self.force;
        self.fuel = (self.fuel - self.force.abs_sum()).max(0.0);
    }
}

impl Default for MovementModel {
    fn default() -> Self {
        Self::new(MovementTuning::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn held(dirs: &[Direction]) -> InputState {
        let mut input = InputState::new();
        for &d in dirs {
            input.key_down(d);
        }
        input
    }

    #[test]
    fn one_tick_of_right_thrust_from_full_tank() {
        let mut m = MovementModel::default();
        m.update_velocity(&held(&[Direction::Right]));

        assert_abs_diff_eq!(m.force().x, 0.3);
        assert_eq!(m.force().y, 0.0);
        // Friction is applied after the force.
        assert_abs_diff_eq!(m.velocity().x, 0.3 * 0.97, epsilon = 1e-12);
        assert_abs_diff_eq!(m.fuel(), 99.7, epsilon = 1e-12);
    }

    #[test]
    fn opposite_keys_cancel_per_axis() {
        let mut m = MovementModel::default();
        m.update_velocity(&held(&[Direction::Up, Direction::Down]));
        assert_eq!(m.force(), Vec2::ZERO);

        m.update_velocity(&held(&[Direction::Left, Direction::Right, Direction::Up]));
        assert_eq!(m.force().x, 0.0);
        assert_abs_diff_eq!(m.force().y, -0.3);
        assert_eq!(m.fuel(), 100.0 - 0.3);
    }

    #[test]
    fn diagonal_burns_both_axes() {
        let mut m = MovementModel::default();
        m.update_velocity(&held(&[Direction::Down, Direction::Left]));
        assert_abs_diff_eq!(m.force().x, -0.3);
        assert_abs_diff_eq!(m.force().y, 0.3);
        assert_abs_diff_eq!(m.fuel(), 99.4, epsilon = 1e-12);
    }

    #[test]
    fn empty_tank_produces_no_force() {
        let mut m = MovementModel::default();
        m.set_fuel(0.0);
        m.update_velocity(&held(&[Direction::Up, Direction::Right]));
        assert_eq!(m.force(), Vec2::ZERO);
        assert_eq!(m.fuel(), 0.0);
    }

    #[test]
    fn throttle_is_full_above_ten_percent_and_linear_below() {
        let mut m = MovementModel::default();
        assert_eq!(m.throttle(), 1.0);

        m.set_fuel(10.0);
        assert_eq!(m.throttle(), 1.0);

        m.set_fuel(5.0);
        assert_abs_diff_eq!(m.throttle(), 0.5);

        m.update_velocity(&held(&[Direction::Right]));
        assert_abs_diff_eq!(m.force().x, 0.15);
        assert_abs_diff_eq!(m.fuel(), 4.85, epsilon = 1e-12);
    }

    #[test]
    fn zero_sized_tank_never_thrusts() {
        let mut m = MovementModel::new(MovementTuning {
            max_fuel: 0.0,
            ..MovementTuning::default()
        });
        m.update_velocity(&held(&[Direction::Up]));
        assert_eq!(m.throttle(), 0.0);
        assert_eq!(m.force(), Vec2::ZERO);
        assert_eq!(m.fuel_fraction(), 0.0);
    }

    #[test]
    fn fuel_never_goes_negative() {
        let mut m = MovementModel::new(MovementTuning {
            acceleration: 50.0,
            ..MovementTuning::default()
        });
        m.set_fuel(1.0);
        m.update_velocity(&held(&[Direction::Up, Direction::Right]));
        assert_eq!(m.fuel(), 0.0);
    }

    #[test]
    fn friction_never_grows_velocity() {
        let mut m = MovementModel::default();
        let input = held(&[Direction::Right, Direction::Down]);
        for _ in 0..20 {
            m.update_velocity(&input);
        }

        let idle = InputState::new();
        for _ in 0..50 {
            let before = m.velocity();
            m.update_velocity(&idle);
            let after = m.velocity();
            assert!(after.x.abs() <= before.x.abs());
            assert!(after.y.abs() <= before.y.abs());
        }
    }

    #[test]
    fn refuel_caps_at_max() {
        let mut m = MovementModel::default();
        m.set_fuel(95.0);
        m.refuel(10.0);
        assert_eq!(m.fuel(), 100.0);
        assert_eq!(m.fuel_fraction(), 1.0);
    }
}
