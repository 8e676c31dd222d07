//! Core types module - shared data structures and constants
//!
//! Pure data used by every other crate (simulation, rendering, input).
//! Nothing here depends on a terminal, a clock, or an RNG.
//!
//! # Canvas
//!
//! The game draws into a fixed logical canvas of `CANVAS_WIDTH` x `CANVAS_HEIGHT`
//! units. The ship is always drawn at the canvas center.
//!
//! # Tuning Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MICROS` | 16600 | Nominal fixed tick period (~60 FPS) |
//! | `FRICTION` | 0.97 | Velocity multiplier applied every tick |
//! | `ACCELERATION` | 0.3 | Force per held axis before throttling |
//! | `MAX_FUEL` | 100 | Fuel tank capacity |
//! | `REFUEL_AMOUNT` | 10 | Fuel gained per pickup |
//! | `MAP_SIZE` | 16384 | Side of the square map the objects are scattered over |
//! | `STAR_COUNT` | 20000 | Stars generated at startup |
//! | `FUEL_CAN_COUNT` | 1000 | Fuel cans generated at startup |
//!
//! # Examples
//!
//! ```
//! use tui_drift_types::{Vec2, Direction};
//!
//! let a = Vec2::new(1.0, 2.0);
//! let b = Vec2::new(0.5, -1.0);
//! assert_eq!(a + b, Vec2::new(1.5, 1.0));
//! assert_eq!((a - b).scale(2.0), Vec2::new(1.0, 6.0));
//!
//! assert_eq!(Direction::ALL[Direction::Left.index()], Direction::Left);
//! ```

use std::ops::{Add, AddAssign, Neg, Sub};

/// Logical canvas width.
pub const CANVAS_WIDTH: f64 = 512.0;

/// Logical canvas height.
pub const CANVAS_HEIGHT: f64 = 512.0;

/// Nominal tick period in microseconds (16.6ms).
pub const TICK_MICROS: u64 = 16_600;

/// Velocity multiplier applied once per tick.
pub const FRICTION: f64 = 0.97;

/// Force magnitude per axis while a direction is held.
pub const ACCELERATION: f64 = 0.3;

/// Fuel tank capacity.
pub const MAX_FUEL: f64 = 100.0;

/// Fuel added by one pickup (capped at the tank capacity).
pub const REFUEL_AMOUNT: f64 = 10.0;

/// Side length of the square map, centered on the origin.
pub const MAP_SIZE: f64 = 1024.0 * 16.0;

/// Stars generated at startup.
pub const STAR_COUNT: usize = 20_000;

/// Fuel cans generated at startup.
pub const FUEL_CAN_COUNT: usize = 1_000;

/// Fuel cans are placed at `FUEL_CAN_ZOOM * (p - start)` relative to the
/// player's starting position, once, at generation time.
pub const FUEL_CAN_ZOOM: f64 = 0.5;

/// Fuel can width.
pub const FUEL_CAN_WIDTH: f64 = 10.0;

/// Fuel can height.
pub const FUEL_CAN_HEIGHT: f64 = 16.0;

/// Extra slack added to each half-extent of a fuel can for pickup checks.
pub const PICKUP_MARGIN: f64 = 5.0;

/// Ship circle radius.
pub const SHIP_RADIUS: f64 = 5.0;

/// Exhaust line length per unit of force.
pub const EXHAUST_SCALE: f64 = 50.0;

/// Exhaust line stroke width.
pub const EXHAUST_WIDTH: f64 = 3.0;

/// Fuel gauge bar width.
pub const FUEL_GAUGE_WIDTH: f64 = 10.0;

/// A 2D vector of `f64` components.
///
/// Used for positions, velocities and forces. Components are unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Componentwise multiplication by a scalar.
    pub fn scale(self, k: f64) -> Self {
        Self::new(self.x * k, self.y * k)
    }

    /// `|x| + |y|` (taxicab length).
    pub fn abs_sum(self) -> f64 {
        self.x.abs() + self.y.abs()
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

/// Fill/stroke color with straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in `[0, 1]`.
    pub a: f32,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);
    pub const RED: Rgba = Rgba::opaque(255, 0, 0);
    pub const GREEN: Rgba = Rgba::opaque(0, 128, 0);
    pub const BLUE: Rgba = Rgba::opaque(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

/// The four thrust directions.
///
/// `Up` is toward negative y (screen up), `Right` toward positive x.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Dense index in `0..4`, usable for fixed-size per-direction tables.
    pub fn index(&self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuning_defaults_match_reference_game() {
        assert_eq!(FRICTION, 0.97);
        assert_eq!(ACCELERATION, 0.3);
        assert_eq!(MAX_FUEL, 100.0);
        assert_eq!(REFUEL_AMOUNT, 10.0);
        assert_eq!(MAP_SIZE, 16384.0);
        assert_eq!(STAR_COUNT, 20_000);
        assert_eq!(FUEL_CAN_COUNT, 1_000);
        assert_eq!(FUEL_CAN_ZOOM, 0.5);
        assert_eq!((FUEL_CAN_WIDTH, FUEL_CAN_HEIGHT), (10.0, 16.0));
        assert_eq!((CANVAS_WIDTH, CANVAS_HEIGHT), (512.0, 512.0));
    }

    #[test]
    fn vec2_ops() {
        let mut v = Vec2::new(1.0, -2.0);
        v += Vec2::new(0.5, 0.5);
        assert_eq!(v, Vec2::new(1.5, -1.5));
        assert_eq!(-v, Vec2::new(-1.5, 1.5));
        assert_eq!(v.scale(2.0), Vec2::new(3.0, -3.0));
        assert_eq!(v.abs_sum(), 3.0);
        assert_eq!(Vec2::ZERO, Vec2::default());
    }

    #[test]
    fn direction_index_matches_all_order() {
        for (i, d) in Direction::ALL.iter().enumerate() {
            assert_eq!(d.index(), i);
        }
    }
}
