//! Framebuffer and style types for terminal rendering.

use crate::types::Color;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Terminals have no alpha channel; it is dropped.
impl From<Color> for Rgb {
    fn from(c: Color) -> Self {
        Rgb::new(c.r, c.g, c.b)
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        }
    }
}

impl CellStyle {
    /// Solid block of one color.
    pub fn solid(color: Rgb) -> Self {
        Self {
            fg: color,
            bg: color,
            bold: false,
        }
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

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
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

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
            cx += 1;
        }
    }

    /// Write a signed decimal number without allocating. Returns the column
    /// after the last digit.
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

    /// Fill a rectangle given in signed coordinates, clipped to the buffer.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, ch: char, style: CellStyle) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = x.saturating_add(w).min(self.width as i32);
        let y1 = y.saturating_add(h).min(self.height as i32);
        for cy in y0..y1 {
            for cx in x0..x1 {
                self.put_char(cx as u16, cy as u16, ch, style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_rect_clips_negative_and_overflowing_edges() {
        let mut fb = FrameBuffer::new(4, 3);
        let style = CellStyle::solid(Rgb::new(1, 2, 3));
        fb.fill_rect(-2, -1, 4, 3, '#', style);

        assert_eq!(fb.get(0, 0).unwrap().ch, '#');
        assert_eq!(fb.get(1, 1).unwrap().ch, '#');
        assert_eq!(fb.get(2, 0).unwrap().ch, ' ');
        assert_eq!(fb.get(0, 2).unwrap().ch, ' ');

        fb.fill_rect(3, 2, 10, 10, '@', style);
        assert_eq!(fb.get(3, 2).unwrap().ch, '@');
    }

    #[test]
    fn fill_rect_ignores_empty_and_offscreen() {
        let mut fb = FrameBuffer::new(4, 3);
        let style = CellStyle::default();
        fb.fill_rect(1, 1, 0, 2, '#', style);
        fb.fill_rect(10, 10, 2, 2, '#', style);
        fb.fill_rect(-5, 0, 2, 2, '#', style);
        assert!(fb.cells().iter().all(|c| c.ch == ' '));
    }

    #[test]
    fn put_i64_writes_signed_digits() {
        let mut fb = FrameBuffer::new(8, 1);
        let style = CellStyle::default();
        let end = fb.put_i64(0, 0, -305, style);
        assert_eq!(end, 4);
        let s: String = fb.cells().iter().take(4).map(|c| c.ch).collect();
        assert_eq!(s, "-305");

        fb.put_i64(5, 0, 0, style);
        assert_eq!(fb.get(5, 0).unwrap().ch, '0');
    }

    #[test]
    fn color_converts_without_alpha() {
        let c = Color::rgba(10, 20, 30, 40);
        assert_eq!(Rgb::from(c), Rgb::new(10, 20, 30));
    }
}
