//! World / object registry - stars, fuel cans, and the paint-ordered object list
//!
//! Everything is generated once from a seed and never recreated. Without a
//! configured seed, a random one is drawn and logged so a map can be replayed. Fuel cans
//! live in two places: the dedicated `fuel_cans` list (pickup checks) and the
//! combined `objects` list (painting). Collection removes a can from both.
//!
//! Paint order is insertion order: stars, then fuel cans, then the ship, so the
//! ship is always drawn on top.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::camera::parallax;
use crate::types::{
    Rgba, Vec2, FUEL_CAN_COUNT, FUEL_CAN_HEIGHT, FUEL_CAN_WIDTH, FUEL_CAN_ZOOM, MAP_SIZE,
    STAR_COUNT,
};

/// World generation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldConfig {
    /// `None` draws a fresh seed per world.
    pub seed: Option<u64>,
    pub star_count: usize,
    pub fuel_can_count: usize,
    /// Side of the square map, centered on the origin.
    pub map_size: f64,
    /// Static zoom applied to fuel can positions around the player's start.
    pub fuel_can_zoom: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            seed: None,
            star_count: STAR_COUNT,
            fuel_can_count: FUEL_CAN_COUNT,
            map_size: MAP_SIZE,
            fuel_can_zoom: FUEL_CAN_ZOOM,
        }
    }
}

/// A background star.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    /// Parallax depth in `[-1, 1]`.
    pub depth: f64,
    /// Circle radius, `3 * (depth + 1)^2`.
    pub size: f64,
    pub color: Rgba,
}

impl Star {
    pub fn new(pos: Vec2, depth: f64, color: Rgba) -> Self {
        Self {
            pos,
            depth,
            size: star_size(depth),
            color,
        }
    }
}

/// Star radius for a given depth.
pub fn star_size(depth: f64) -> f64 {
    3.0 * (depth + 1.0).powi(2)
}

/// Stable identity of a fuel can across both lists.
pub type FuelCanId = u32;

/// A fuel pickup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelCan {
    pub id: FuelCanId,
    pub pos: Vec2,
    pub width: f64,
    pub height: f64,
}

impl FuelCan {
    pub fn new(id: FuelCanId, pos: Vec2) -> Self {
        Self {
            id,
            pos,
            width: FUEL_CAN_WIDTH,
            height: FUEL_CAN_HEIGHT,
        }
    }

    /// Axis-aligned proximity check against a point, each half-extent widened
    /// by `margin`.
    pub fn is_near(&self, point: Vec2, margin: f64) -> bool {
        (self.pos.x - point.x).abs() < self.width / 2.0 + margin
            && (self.pos.y - point.y).abs() < self.height / 2.0 + margin
    }
}

/// Something the renderer knows how to paint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Drawable {
    Star(Star),
    FuelCan(FuelCan),
    Ship,
}

impl Drawable {
    pub fn fuel_can_id(&self) -> Option<FuelCanId> {
        match self {
            Drawable::FuelCan(can) => Some(can.id),
            _ => None,
        }
    }
}

/// All generated objects.
#[derive(Debug, Clone)]
pub struct World {
    config: WorldConfig,
    fuel_cans: Vec<FuelCan>,
    objects: Vec<Drawable>,
}

impl World {
    /// Generate stars and fuel cans around a player starting at `player_start`.
    pub fn generate(config: WorldConfig, player_start: Vec2) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);

        let stars = make_stars(&mut rng, config.star_count, config.map_size);
        let fuel_cans = make_fuel_cans(
            &mut rng,
            config.fuel_can_count,
            config.map_size,
            player_start,
            config.fuel_can_zoom,
        );

        log::info!(
            "world generated: seed={} stars={} fuel_cans={} map_size={}",
            seed,
            config.star_count,
            config.fuel_can_count,
            config.map_size
        );

        let config = WorldConfig {
            seed: Some(seed),
            ..config
        };
        Self::from_parts(config, stars, fuel_cans)
    }

    /// Build a world from explicit objects (ship appended last).
    pub fn from_parts(config: WorldConfig, stars: Vec<Star>, fuel_cans: Vec<FuelCan>) -> Self {
        let mut objects = Vec::with_capacity(stars.len() + fuel_cans.len() + 1);
        objects.extend(stars.into_iter().map(Drawable::Star));
        objects.extend(fuel_cans.iter().copied().map(Drawable::FuelCan));
        objects.push(Drawable::Ship);
        Self {
            config,
            fuel_cans,
            objects,
        }
    }

    /// Seed the world was generated from; `None` for hand-built worlds.
    pub fn seed(&self) -> Option<u64> {
        self.config.seed
    }

    pub fn fuel_cans(&self) -> &[FuelCan] {
        &self.fuel_cans
    }

    /// Paint-ordered object list.
    pub fn objects(&self) -> &[Drawable] {
        &self.objects
    }

    pub fn star_count(&self) -> usize {
        self.objects
            .iter()
            .filter(|o| matches!(o, Drawable::Star(_)))
            .count()
    }

    /// Remove the given cans from both lists. Unknown ids are ignored.
    ///
    /// Returns how many cans were actually removed.
    pub fn remove_fuel_cans(&mut self, ids: &[FuelCanId]) -> usize {
        if ids.is_empty() {
            return 0;
        }
        let before = self.fuel_cans.len();
        self.fuel_cans.retain(|can| !ids.contains(&can.id));
        self.objects
            .retain(|o| o.fuel_can_id().map_or(true, |id| !ids.contains(&id)));
        before - self.fuel_cans.len()
    }
}

fn random_map_point(rng: &mut StdRng, map_size: f64) -> Vec2 {
    let x = rng.gen::<f64>() * map_size - map_size / 2.0;
    let y = rng.gen::<f64>() * map_size - map_size / 2.0;
    Vec2::new(x, y)
}

fn random_star_color(rng: &mut StdRng) -> Rgba {
    let g = 155 + (rng.gen::<f64>() * 100.0) as u8;
    let b = 155 + (rng.gen::<f64>() * 100.0) as u8;
    let a = (rng.gen::<f32>() * 0.25 * 100.0).round() / 100.0;
    Rgba::new(255, g, b, a)
}

fn make_stars(rng: &mut StdRng, count: usize, map_size: f64) -> Vec<Star> {
    (0..count)
        .map(|_| {
            let pos = random_map_point(rng, map_size);
            let depth = rng.gen::<f64>() * 2.0 - 1.0;
            let color = random_star_color(rng);
            Star::new(pos, depth, color)
        })
        .collect()
}

fn make_fuel_cans(
    rng: &mut StdRng,
    count: usize,
    map_size: f64,
    player_start: Vec2,
    zoom: f64,
) -> Vec<FuelCan> {
    (0..count)
        .map(|i| {
            let p = random_map_point(rng, map_size);
            FuelCan::new(i as FuelCanId, parallax(p, player_start, zoom))
        })
        .collect()
}
