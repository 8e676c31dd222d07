//! Framebuffer and style types for terminal rendering.

use crate::types::Rgba;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Source-over composite of `src` onto `self`.
    pub fn blend(self, src: Rgba) -> Rgb {
        let a = src.a.clamp(0.0, 1.0);
        if a >= 1.0 {
            return Rgb::new(src.r, src.g, src.b);
        }
        let mix = |d: u8, s: u8| -> u8 { (s as f32 * a + d as f32 * (1.0 - a)).round() as u8 };
        Rgb::new(mix(self.r, src.r), mix(self.g, src.g), mix(self.b, src.b))
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(Rgb::new(220, 220, 220), Rgb::BLACK)
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// Upper half block: foreground paints the top pixel, background the bottom.
pub const HALF_BLOCK: char = '▀';

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize, keeping the allocation when it is large enough.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.cells
            .resize((width as usize) * (height as usize), Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    /// Two vertically stacked pixels in one cell.
    pub fn put_pixels(&mut self, x: u16, y: u16, top: Rgb, bottom: Rgb) {
        self.put_char(x, y, HALF_BLOCK, CellStyle::new(top, bottom));
    }

    /// Write a string, clipped at the right edge. Returns the next column.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) -> u16 {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
            cx += 1;
        }
        cx
    }

    /// Write a signed integer without allocating. Returns the next column.
    pub fn put_i64(&mut self, x: u16, y: u16, value: i64, style: CellStyle) -> u16 {
        let mut digits = [0u8; 20];
        let mut n = value.unsigned_abs();
        let mut len = 0;
        loop {
            digits[len] = b'0' + (n % 10) as u8;
            len += 1;
            n /= 10;
            if n == 0 {
                break;
            }
        }

        let mut cx = x;
        if value < 0 {
            self.put_char(cx, y, '-', style);
            cx = cx.saturating_add(1);
        }
        for &d in digits[..len].iter().rev() {
            self.put_char(cx, y, d as char, style);
            cx = cx.saturating_add(1);
        }
        cx
    }

    /// Write `value` with one decimal place, e.g. `-3.4`.
    pub fn put_tenths(&mut self, x: u16, y: u16, value: f64, style: CellStyle) -> u16 {
        let tenths = (value * 10.0).round() as i64;
        let mut cx = x;
        if tenths < 0 {
            self.put_char(cx, y, '-', style);
            cx = cx.saturating_add(1);
        }
        let tenths = tenths.unsigned_abs();
        cx = self.put_i64(cx, y, (tenths / 10) as i64, style);
        self.put_char(cx, y, '.', style);
        cx = cx.saturating_add(1);
        self.put_char(cx, y, (b'0' + (tenths % 10) as u8) as char, style);
        cx.saturating_add(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fb: &FrameBuffer, y: u16) -> String {
        (0..fb.width()).map(|x| fb.get(x, y).unwrap().ch).collect()
    }

    #[test]
    fn put_i64_writes_digits_and_sign() {
        let mut fb = FrameBuffer::new(12, 1);
        let style = CellStyle::default();
        let next = fb.put_i64(0, 0, -1204, style);
        assert_eq!(next, 5);
        fb.put_i64(6, 0, 0, style);
        assert_eq!(row(&fb, 0), "-1204 0     ");
    }

    #[test]
    fn put_tenths_rounds_to_one_decimal() {
        let mut fb = FrameBuffer::new(12, 1);
        let style = CellStyle::default();
        let next = fb.put_tenths(0, 0, 9.66, style);
        assert_eq!(next, 3);
        fb.put_tenths(4, 0, -0.34, style);
        assert_eq!(row(&fb, 0), "9.7 -0.3    ");
    }

    #[test]
    fn put_str_clips_at_edge() {
        let mut fb = FrameBuffer::new(4, 1);
        assert_eq!(fb.put_str(2, 0, "FUEL", CellStyle::default()), 4);
        assert_eq!(row(&fb, 0), "  FU");
    }

    #[test]
    fn blend_is_source_over() {
        let dst = Rgb::new(0, 0, 0);
        assert_eq!(dst.blend(Rgba::opaque(10, 20, 30)), Rgb::new(10, 20, 30));
        assert_eq!(dst.blend(Rgba::new(200, 100, 0, 0.5)), Rgb::new(100, 50, 0));
        assert_eq!(dst.blend(Rgba::new(200, 100, 0, 0.0)), dst);
    }

    #[test]
    fn resize_keeps_cells_addressable() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.resize(5, 3);
        assert_eq!(fb.cells().len(), 15);
        assert!(fb.get(4, 2).is_some());
        assert!(fb.get(5, 0).is_none());
    }
}
