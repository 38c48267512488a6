//! Framebuffer and style types for terminal rendering.

use crate::canvas::Canvas;

/// Upper half block: foreground paints the top pixel, background the bottom one.
pub const HALF_BLOCK: char = '▀';

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
        }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(Rgb::new(220, 220, 220), Rgb::BLACK)
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Cell {
    pub const fn new(ch: char, style: CellStyle) -> Self {
        Self { ch, style }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new(' ', CellStyle::default())
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

    /// Resize, keeping the allocation when possible. Contents are unspecified
    /// afterwards; callers clear before drawing.
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

    /// Out-of-bounds writes are dropped.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell::new(ch, style));
    }

    /// Write `s` starting at column `x`, clipped at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        for (i, ch) in s.chars().enumerate() {
            let Some(cx) = x.checked_add(i as u16) else {
                break;
            };
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
        }
    }

    /// Write `s` centered on the span `[x, x + w)`.
    pub fn put_str_centered(&mut self, x: u16, w: u16, y: u16, s: &str, style: CellStyle) {
        let len = s.chars().count() as u16;
        let start = x.saturating_add(w.saturating_sub(len) / 2);
        self.put_str(start, y, s, style);
    }

    /// Text with the background of whatever is already under each cell.
    ///
    /// Keeps text readable on top of half-block pixels without punching a
    /// black box into the field.
    pub fn put_str_over(&mut self, x: u16, y: u16, s: &str, fg: Rgb, bold: bool) {
        for (i, ch) in s.chars().enumerate() {
            let Some(cx) = x.checked_add(i as u16) else {
                break;
            };
            let Some(under) = self.get(cx, y) else {
                break;
            };
            // A half-block cell shows its background in the lower half and
            // its foreground in the upper; text sits on the upper pixel.
            let bg = if under.ch == HALF_BLOCK {
                under.style.fg
            } else {
                under.style.bg
            };
            self.put_char(cx, y, ch, CellStyle { fg, bg, bold });
        }
    }

    pub fn draw_border(&mut self, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        self.put_char(x, y, '┌', style);
        self.put_char(x + w - 1, y, '┐', style);
        self.put_char(x, y + h - 1, '└', style);
        self.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            self.put_char(x + dx, y, '─', style);
            self.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            self.put_char(x, y + dy, '│', style);
            self.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    /// Copy a pixel canvas into the cell grid at `(x, y)`.
    ///
    /// Every cell covers two canvas rows. An odd last row is paired with the
    /// canvas background color.
    pub fn blit_canvas(&mut self, x: u16, y: u16, canvas: &Canvas) {
        let rows = canvas.height().div_ceil(2);
        for row in 0..rows {
            for col in 0..canvas.width() {
                let top = canvas.get(col, row * 2).unwrap_or(canvas.background());
                let bottom = canvas
                    .get(col, row * 2 + 1)
                    .unwrap_or(canvas.background());
                self.put_char(
                    x.saturating_add(col),
                    y.saturating_add(row),
                    HALF_BLOCK,
                    CellStyle::new(top, bottom),
                );
            }
        }
    }

    /// Row `y` as a plain string (styles dropped).
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|c| c.ch)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_str_clips_at_right_edge() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(2, 0, "abc", CellStyle::default());
        assert_eq!(fb.row_text(0), "  ab");
    }

    #[test]
    fn put_str_centered_splits_padding() {
        let mut fb = FrameBuffer::new(7, 1);
        fb.put_str_centered(0, 7, 0, "abc", CellStyle::default());
        assert_eq!(fb.row_text(0), "  abc  ");
    }

    #[test]
    fn blit_packs_two_pixel_rows_per_cell() {
        let mut canvas = Canvas::new(2, 3, Rgb::BLACK);
        canvas.set(0, 0, Rgb::WHITE);
        canvas.set(1, 1, Rgb::WHITE);
        canvas.set(0, 2, Rgb::WHITE);

        let mut fb = FrameBuffer::new(2, 2);
        fb.blit_canvas(0, 0, &canvas);

        let c = fb.get(0, 0).unwrap();
        assert_eq!(c.ch, HALF_BLOCK);
        assert_eq!((c.style.fg, c.style.bg), (Rgb::WHITE, Rgb::BLACK));
        let c = fb.get(1, 0).unwrap();
        assert_eq!((c.style.fg, c.style.bg), (Rgb::BLACK, Rgb::WHITE));
        // Odd last row pairs with background.
        let c = fb.get(0, 1).unwrap();
        assert_eq!((c.style.fg, c.style.bg), (Rgb::WHITE, Rgb::BLACK));
    }

    #[test]
    fn text_over_half_blocks_keeps_pixel_color() {
        let mut canvas = Canvas::new(1, 2, Rgb::new(10, 20, 30));
        canvas.set(0, 1, Rgb::WHITE);
        let mut fb = FrameBuffer::new(1, 1);
        fb.blit_canvas(0, 0, &canvas);

        fb.put_str_over(0, 0, "A", Rgb::WHITE, true);
        let c = fb.get(0, 0).unwrap();
        assert_eq!(c.ch, 'A');
        assert_eq!(c.style.bg, Rgb::new(10, 20, 30));
        assert!(c.style.bold);
    }

    #[test]
    fn border_corners() {
        let mut fb = FrameBuffer::new(3, 3);
        fb.draw_border(0, 0, 3, 3, CellStyle::default());
        assert_eq!(fb.row_text(0), "┌─┐");
        assert_eq!(fb.row_text(1), "│ │");
        assert_eq!(fb.row_text(2), "└─┘");
    }
}
