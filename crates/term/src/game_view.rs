//! GameView: maps the pixel canvas and HUD state into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::canvas::PixelCanvas;
use crate::core::HudSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the canvas and the side panel go for a given viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// First terminal column of the canvas area.
    pub canvas_x: u16,
    pub canvas_cols: u16,
    pub canvas_rows: u16,
    /// First column of the HUD panel, when there is room for one.
    pub panel_x: Option<u16>,
}

impl Layout {
    /// Pixel grid size the canvas should be rasterized at.
    pub fn pixel_size(&self) -> (u16, u16) {
        (self.canvas_cols, self.canvas_rows.saturating_mul(2))
    }
}

const PANEL_GAP: u16 = 2;
const MIN_CANVAS_COLS: u16 = 16;

/// A lightweight terminal view for the drift game.
pub struct GameView {
    panel_width: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self { panel_width: 16 }
    }
}

impl GameView {
    pub fn new(panel_width: u16) -> Self {
        Self { panel_width }
    }

    pub fn layout(&self, viewport: Viewport) -> Layout {
        let rows = viewport.height;
        // A square canvas is twice as many pixels tall as it has rows.
        let square = rows.saturating_mul(2);
        let panel_total = self.panel_width.saturating_add(PANEL_GAP);

        if self.panel_width > 0 && viewport.width >= panel_total.saturating_add(MIN_CANVAS_COLS) {
            let canvas_cols = (viewport.width - panel_total).min(square);
            let block = canvas_cols + panel_total;
            let canvas_x = viewport.width.saturating_sub(block) / 2;
            Layout {
                canvas_x,
                canvas_cols,
                canvas_rows: rows,
                panel_x: Some(canvas_x + canvas_cols + PANEL_GAP),
            }
        } else {
            let canvas_cols = viewport.width.min(square);
            Layout {
                canvas_x: viewport.width.saturating_sub(canvas_cols) / 2,
                canvas_cols,
                canvas_rows: rows,
                panel_x: None,
            }
        }
    }

    /// Render the canvas and HUD into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; this does not allocate
    /// unless the viewport size changed.
    pub fn render_into(
        &self,
        canvas: &PixelCanvas,
        hud: &HudSnapshot,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell {
            ch: ' ',
            style: CellStyle::default(),
        });

        let layout = self.layout(viewport);
        self.draw_canvas(fb, canvas, &layout);
        if let Some(panel_x) = layout.panel_x {
            self.draw_side_panel(fb, hud, viewport, panel_x);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        canvas: &PixelCanvas,
        hud: &HudSnapshot,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(canvas, hud, viewport, &mut fb);
        fb
    }

    fn draw_canvas(&self, fb: &mut FrameBuffer, canvas: &PixelCanvas, layout: &Layout) {
        let cols = layout.canvas_cols.min(canvas.px_width());
        let rows = layout.canvas_rows.min(canvas.px_height().div_ceil(2));
        for y in 0..rows {
            for x in 0..cols {
                let top = canvas.pixel(x, y * 2).unwrap_or(Rgb::BLACK);
                let bottom = canvas.pixel(x, y * 2 + 1).unwrap_or(Rgb::BLACK);
                fb.put_pixels(layout.canvas_x + x, y, top, bottom);
            }
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        hud: &HudSnapshot,
        viewport: Viewport,
        panel_x: u16,
    ) {
        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::BLACK);
        let hint = value.dim();

        let mut y = 0;
        fb.put_str(panel_x, y, "FUEL", label);
        y += 1;
        self.draw_fuel_bar(fb, hud, panel_x, y);
        y += 1;
        if hud.fuel <= 0.0 {
            let empty = CellStyle::new(Rgb::new(255, 80, 80), Rgb::BLACK).bold();
            fb.put_str(panel_x, y, "EMPTY", empty);
        } else {
            let x = fb.put_i64(panel_x, y, hud.fuel_percent() as i64, value);
            fb.put_char(x, y, '%', value);
        }
        y += 2;

        fb.put_str(panel_x, y, "CANS", label);
        y += 1;
        fb.put_i64(panel_x, y, hud.fuel_cans_left as i64, value);
        y += 1;
        let x = fb.put_str(panel_x, y, "got ", hint);
        fb.put_i64(x, y, hud.fuel_cans_collected as i64, value);
        y += 2;

        fb.put_str(panel_x, y, "POS", label);
        y += 1;
        let x = fb.put_i64(panel_x, y, hud.player.x.round() as i64, value);
        fb.put_i64(x + 1, y, hud.player.y.round() as i64, value);
        y += 2;

        fb.put_str(panel_x, y, "VEL", label);
        y += 1;
        let x = fb.put_tenths(panel_x, y, hud.velocity.x, value);
        fb.put_tenths(x + 1, y, hud.velocity.y, value);
        y += 2;

        // Key help along the bottom, if it doesn't collide with the stats.
        let help_y = viewport.height.saturating_sub(2);
        if help_y > y {
            fb.put_str(panel_x, help_y, "arrows/WASD", hint);
            fb.put_str(panel_x, help_y + 1, "q quit", hint);
        }
    }

    fn draw_fuel_bar(&self, fb: &mut FrameBuffer, hud: &HudSnapshot, x: u16, y: u16) {
        let full = CellStyle::new(Rgb::new(255, 0, 0), Rgb::BLACK);
        let empty = CellStyle::new(Rgb::new(70, 20, 20), Rgb::BLACK);
        let width = self.panel_width;
        let filled = ((hud.fuel_percent() as u32 * width as u32) / 100) as u16;
        for dx in 0..width {
            if dx < filled {
                fb.put_char(x + dx, y, '█', full);
            } else {
                fb.put_char(x + dx, y, '░', empty);
            }
        }
    }
}
