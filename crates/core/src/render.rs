//! Renderer - paints the object list through an immediate-mode [`Canvas`]
//!
//! The renderer never touches a terminal or a window. Anything that can fill
//! circles and rectangles and stroke lines can host the game: the terminal
//! pixel canvas, a recording canvas in tests, or [`NullCanvas`] for headless
//! runs.
//!
//! # Frame Layout
//!
//! 1. Black background over the full canvas
//! 2. Every [`Drawable`] in list order (stars, fuel cans, ship)
//! 3. Fuel gauge: red bar on the left edge, height proportional to fuel
//!
//! Stars and fuel cans are culled with [`Camera::is_visible`]; the ship is
//! always drawn.

use crate::camera::{parallax, Camera};
use crate::types::{Rgba, Vec2, EXHAUST_SCALE, EXHAUST_WIDTH, FUEL_GAUGE_WIDTH, SHIP_RADIUS};
use crate::world::{Drawable, FuelCan, Star};

/// 2D immediate-mode drawing surface. All coordinates are canvas space.
pub trait Canvas {
    fn width(&self) -> f64;

    fn height(&self) -> f64;

    /// Fill the whole canvas.
    fn clear(&mut self, color: Rgba);

    fn fill_circle(&mut self, center: Vec2, radius: f64, color: Rgba);

    /// Filled axis-aligned rectangle with its top-left corner at `top_left`.
    fn fill_rect(&mut self, top_left: Vec2, width: f64, height: f64, color: Rgba);

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f64, color: Rgba);
}

/// Discards everything.
#[derive(Debug, Clone, Copy)]
pub struct NullCanvas {
    width: f64,
    height: f64,
}

impl NullCanvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Canvas for NullCanvas {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self, _color: Rgba) {}

    fn fill_circle(&mut self, _center: Vec2, _radius: f64, _color: Rgba) {}

    fn fill_rect(&mut self, _top_left: Vec2, _width: f64, _height: f64, _color: Rgba) {}

    fn stroke_line(&mut self, _from: Vec2, _to: Vec2, _width: f64, _color: Rgba) {}
}

/// One recorded draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCall {
    Clear(Rgba),
    Circle {
        center: Vec2,
        radius: f64,
        color: Rgba,
    },
    Rect {
        top_left: Vec2,
        width: f64,
        height: f64,
        color: Rgba,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f64,
        color: Rgba,
    },
}

/// Records draw calls in order. Handy for asserting on frames.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    width: f64,
    height: f64,
    calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
        }
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn reset(&mut self) {
        self.calls.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self, color: Rgba) {
        self.calls.push(DrawCall::Clear(color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f64, color: Rgba) {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_rect(&mut self, top_left: Vec2, width: f64, height: f64, color: Rgba) {
        self.calls.push(DrawCall::Rect {
            top_left,
            width,
            height,
            color,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f64, color: Rgba) {
        self.calls.push(DrawCall::Line {
            from,
            to,
            width,
            color,
        });
    }
}

/// Stateless scene painter.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Background plus every object, in list order.
    ///
    /// `force` is the ship's current thrust, used for the exhaust trail.
    pub fn draw_scene<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        objects: &[Drawable],
        player: Vec2,
        force: Vec2,
    ) {
        let camera = Camera::new(canvas.width(), canvas.height(), player);
        canvas.clear(Rgba::BLACK);
        for object in objects {
            self.draw_object(canvas, &camera, object, force);
        }
    }

    /// Single dispatch point for all drawable kinds.
    pub fn draw_object<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        camera: &Camera,
        object: &Drawable,
        force: Vec2,
    ) {
        match object {
            Drawable::Star(star) => draw_star(canvas, camera, star),
            Drawable::FuelCan(can) => draw_fuel_can(canvas, camera, can),
            Drawable::Ship => draw_ship(canvas, camera, force),
        }
    }

    /// Left-edge red bar anchored to the bottom, `fraction` of canvas height.
    pub fn draw_fuel_gauge<C: Canvas + ?Sized>(&self, canvas: &mut C, fraction: f64) {
        let h = canvas.height();
        let bar_h = fraction.clamp(0.0, 1.0) * h;
        if bar_h <= 0.0 {
            return;
        }
        let top_left = Vec2::new(0.0, h - bar_h);
        canvas.fill_rect(top_left, FUEL_GAUGE_WIDTH, bar_h, Rgba::RED);
    }
}

fn draw_star<C: Canvas + ?Sized>(canvas: &mut C, camera: &Camera, star: &Star) {
    let zoomed = parallax(star.pos, camera.player(), star.depth);
    if !camera.is_visible(zoomed) {
        return;
    }
    canvas.fill_circle(camera.to_screen(zoomed), star.size, star.color);
}

fn draw_fuel_can<C: Canvas + ?Sized>(canvas: &mut C, camera: &Camera, can: &FuelCan) {
    // Cans keep their generation-time position; no per-frame parallax.
    if !camera.is_visible(can.pos) {
        return;
    }
    let center = camera.to_screen(can.pos);
    let top_left = center - Vec2::new(can.width / 2.0, can.height / 2.0);
    canvas.fill_rect(top_left, can.width, can.height, Rgba::BLUE);
}

fn draw_ship<C: Canvas + ?Sized>(canvas: &mut C, camera: &Camera, force: Vec2) {
    let ship = camera.player();
    let exhaust_end = ship - force.scale(EXHAUST_SCALE);
    canvas.stroke_line(
        camera.to_screen(ship),
        camera.to_screen(exhaust_end),
        EXHAUST_WIDTH,
        Rgba::RED,
    );
    canvas.fill_circle(camera.to_screen(ship), SHIP_RADIUS, Rgba::GREEN);
}
