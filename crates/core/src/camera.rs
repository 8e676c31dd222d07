//! Camera - world to canvas projection centered on the player.

use crate::types::{Vec2, CANVAS_HEIGHT, CANVAS_WIDTH};

/// Projects world coordinates onto a `width` x `height` canvas whose center
/// tracks the player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    width: f64,
    height: f64,
    player: Vec2,
}

impl Camera {
    pub fn new(width: f64, height: f64, player: Vec2) -> Self {
        Self {
            width,
            height,
            player,
        }
    }

    /// Camera over the standard canvas.
    pub fn for_canvas(player: Vec2) -> Self {
        Self::new(CANVAS_WIDTH, CANVAS_HEIGHT, player)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn player(&self) -> Vec2 {
        self.player
    }

    pub fn follow(&mut self, player: Vec2) {
        self.player = player;
    }

    /// `world + (w/2, h/2) - player`.
    pub fn to_screen(&self, world: Vec2) -> Vec2 {
        world + Vec2::new(self.width / 2.0, self.height / 2.0) - self.player
    }

    /// Strictly inside the canvas-sized box around the player.
    pub fn is_visible(&self, coords: Vec2) -> bool {
        let d = coords - self.player;
        let hw = self.width / 2.0;
        let hh = self.height / 2.0;
        d.x > -hw && d.x < hw && d.y > -hh && d.y < hh
    }
}

/// Depth-scaled offset of `coords` from `center`: `depth * (coords - center)`.
///
/// Depth near 0 keeps a point near `center`; negative depth mirrors it.
pub fn parallax(coords: Vec2, center: Vec2, depth: f64) -> Vec2 {
    (coords - center).scale(depth)
}
