//! PixelCanvas: rasterizes canvas draw calls into a terminal pixel grid.
//!
//! The logical canvas (512x512 for the game) is scaled uniformly to fit the
//! pixel grid and centered in it. One terminal cell shows two pixels stacked
//! vertically, so a `cols x rows` area is a `cols x 2*rows` grid.
//!
//! Coverage is sampled at pixel centers. Shapes smaller than a pixel still
//! light the pixel that contains their center, otherwise most stars would
//! vanish at terminal resolution.

use crate::core::Canvas;
use crate::fb::Rgb;
use crate::types::{Rgba, Vec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PixelRect {
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
}

impl PixelRect {
    fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x0 && x < self.x1 && y >= self.y0 && y < self.y1
    }
}

#[derive(Debug, Clone)]
pub struct PixelCanvas {
    logical_width: f64,
    logical_height: f64,
    px_width: u16,
    px_height: u16,
    scale: f64,
    origin_x: f64,
    origin_y: f64,
    clip: PixelRect,
    pixels: Vec<Rgb>,
}

impl PixelCanvas {
    pub fn new(logical_width: f64, logical_height: f64, px_width: u16, px_height: u16) -> Self {
        let mut canvas = Self {
            logical_width,
            logical_height,
            px_width: 0,
            px_height: 0,
            scale: 0.0,
            origin_x: 0.0,
            origin_y: 0.0,
            clip: PixelRect {
                x0: 0,
                y0: 0,
                x1: 0,
                y1: 0,
            },
            pixels: Vec::new(),
        };
        canvas.reconfigure(px_width, px_height);
        canvas
    }

    /// Change the pixel grid size. Clears to black when the size changes.
    pub fn resize(&mut self, px_width: u16, px_height: u16) {
        if self.px_width == px_width && self.px_height == px_height {
            return;
        }
        self.reconfigure(px_width, px_height);
    }

    fn reconfigure(&mut self, px_width: u16, px_height: u16) {
        self.px_width = px_width;
        self.px_height = px_height;
        self.pixels.clear();
        self.pixels
            .resize((px_width as usize) * (px_height as usize), Rgb::BLACK);

        let sx = px_width as f64 / self.logical_width;
        let sy = px_height as f64 / self.logical_height;
        self.scale = sx.min(sy).max(0.0);

        let span_w = (self.logical_width * self.scale).round() as i32;
        let span_h = (self.logical_height * self.scale).round() as i32;
        let x0 = (px_width as i32 - span_w) / 2;
        let y0 = (px_height as i32 - span_h) / 2;
        self.origin_x = x0 as f64;
        self.origin_y = y0 as f64;
        self.clip = PixelRect {
            x0,
            y0,
            x1: (x0 + span_w).min(px_width as i32),
            y1: (y0 + span_h).min(px_height as i32),
        };
    }

    pub fn px_width(&self) -> u16 {
        self.px_width
    }

    pub fn px_height(&self) -> u16 {
        self.px_height
    }

    /// Pixels per logical unit.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    pub fn pixel(&self, x: u16, y: u16) -> Option<Rgb> {
        if x >= self.px_width || y >= self.px_height {
            return None;
        }
        let idx = (y as usize) * (self.px_width as usize) + (x as usize);
        Some(self.pixels[idx])
    }

    /// Pixel containing a logical point, if it lies on the canvas.
    pub fn pixel_at(&self, p: Vec2) -> Option<(u16, u16)> {
        let (x, y) = self.containing_pixel(p);
        if self.clip.contains(x, y) {
            Some((x as u16, y as u16))
        } else {
            None
        }
    }

    fn containing_pixel(&self, p: Vec2) -> (i32, i32) {
        (
            (p.x * self.scale + self.origin_x).floor() as i32,
            (p.y * self.scale + self.origin_y).floor() as i32,
        )
    }

    /// Logical coordinates of a pixel's center.
    fn sample_point(&self, x: i32, y: i32) -> Vec2 {
        Vec2::new(
            (x as f64 + 0.5 - self.origin_x) / self.scale,
            (y as f64 + 0.5 - self.origin_y) / self.scale,
        )
    }

    /// Clipped pixel bounds of a logical box.
    fn pixel_bounds(&self, min: Vec2, max: Vec2) -> PixelRect {
        PixelRect {
            x0: ((min.x * self.scale + self.origin_x).floor() as i32).max(self.clip.x0),
            y0: ((min.y * self.scale + self.origin_y).floor() as i32).max(self.clip.y0),
            x1: ((max.x * self.scale + self.origin_x).ceil() as i32).min(self.clip.x1),
            y1: ((max.y * self.scale + self.origin_y).ceil() as i32).min(self.clip.y1),
        }
    }

    #[inline]
    fn blend_at(&mut self, x: i32, y: i32, color: Rgba) {
        let i = (y as usize) * (self.px_width as usize) + (x as usize);
        self.pixels[i] = self.pixels[i].blend(color);
    }

    /// Paint every pixel in `bounds` whose center satisfies `covers`.
    /// Falls back to the pixel under `anchor` when nothing was covered.
    fn fill_where(
        &mut self,
        bounds: PixelRect,
        anchor: Vec2,
        color: Rgba,
        covers: impl Fn(Vec2) -> bool,
    ) {
        if self.scale <= 0.0 {
            return;
        }
        let mut painted = false;
        for y in bounds.y0..bounds.y1 {
            for x in bounds.x0..bounds.x1 {
                if covers(self.sample_point(x, y)) {
                    self.blend_at(x, y, color);
                    painted = true;
                }
            }
        }
        if !painted {
            let (x, y) = self.containing_pixel(anchor);
            if self.clip.contains(x, y) {
                self.blend_at(x, y, color);
            }
        }
    }
}

impl Canvas for PixelCanvas {
    fn width(&self) -> f64 {
        self.logical_width
    }

    fn height(&self) -> f64 {
        self.logical_height
    }

    fn clear(&mut self, color: Rgba) {
        let clip = self.clip;
        for y in clip.y0..clip.y1 {
            for x in clip.x0..clip.x1 {
                self.blend_at(x, y, color);
            }
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f64, color: Rgba) {
        if radius <= 0.0 {
            return;
        }
        let r = Vec2::new(radius, radius);
        let bounds = self.pixel_bounds(center - r, center + r);
        let r2 = radius * radius;
        self.fill_where(bounds, center, color, |p| {
            let d = p - center;
            d.x * d.x + d.y * d.y <= r2
        });
    }

    fn fill_rect(&mut self, top_left: Vec2, width: f64, height: f64, color: Rgba) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        let bottom_right = top_left + Vec2::new(width, height);
        let bounds = self.pixel_bounds(top_left, bottom_right);
        let center = top_left + Vec2::new(width / 2.0, height / 2.0);
        self.fill_where(bounds, center, color, |p| {
            p.x >= top_left.x && p.x < bottom_right.x && p.y >= top_left.y && p.y < bottom_right.y
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f64, color: Rgba) {
        let seg = to - from;
        let len2 = seg.x * seg.x + seg.y * seg.y;
        if len2 == 0.0 || width <= 0.0 || self.scale <= 0.0 {
            return;
        }
        if width * self.scale <= 1.0 {
            self.trace_line(from, to, color);
            return;
        }

        let half = width / 2.0;
        let pad = Vec2::new(half, half);
        let min = Vec2::new(from.x.min(to.x), from.y.min(to.y)) - pad;
        let max = Vec2::new(from.x.max(to.x), from.y.max(to.y)) + pad;
        let bounds = self.pixel_bounds(min, max);
        let half2 = half * half;
        self.fill_where(bounds, from, color, |p| {
            let rel = p - from;
            let t = ((rel.x * seg.x + rel.y * seg.y) / len2).clamp(0.0, 1.0);
            let d = rel - seg.scale(t);
            d.x * d.x + d.y * d.y <= half2
        });
    }
}

impl PixelCanvas {
    /// One-pixel-wide line: every pixel the segment passes through, once.
    fn trace_line(&mut self, from: Vec2, to: Vec2, color: Rgba) {
        let seg = to - from;
        let len_px = seg.x.abs().max(seg.y.abs()) * self.scale;
        let steps = ((len_px * 2.0).ceil() as i32).max(1);
        let mut last = None;
        for i in 0..=steps {
            let p = from + seg.scale(i as f64 / steps as f64);
            let px = self.containing_pixel(p);
            if last == Some(px) {
                continue;
            }
            last = Some(px);
            if self.clip.contains(px.0, px.1) {
                self.blend_at(px.0, px.1, color);
            }
        }
    }
}
