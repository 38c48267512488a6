//! Pixel canvas with the handful of 2D drawing operations the game needs.
//!
//! Coordinates are `f64` canvas pixels with the origin at the top-left corner.
//! Pixel `(px, py)` is covered by a shape when its center
//! `(px + 0.5, py + 0.5)` lies inside the shape. Shapes too small to cover any
//! pixel center still paint the pixel under their own center, so a paddle or
//! ball never vanishes on a small viewport.

use crate::fb::Rgb;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u16,
    height: u16,
    background: Rgb,
    pixels: Vec<Rgb>,
}

impl Canvas {
    pub fn new(width: u16, height: u16, background: Rgb) -> Self {
        Self {
            width,
            height,
            background,
            pixels: vec![background; (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    /// Resize and clear.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels
            .resize((width as usize) * (height as usize), self.background);
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y as usize) * (self.width as usize) + (x as usize)])
    }

    pub fn set(&mut self, x: u16, y: u16, color: Rgb) {
        if x < self.width && y < self.height {
            self.pixels[(y as usize) * (self.width as usize) + (x as usize)] = color;
        }
    }

    pub fn clear(&mut self) {
        self.pixels.fill(self.background);
    }

    pub fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        let bg = self.background;
        self.fill_rect(x, y, w, h, bg);
    }

    pub fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgb) {
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        let (x0, x1) = self.covered_span(x, x + w, self.width);
        let (y0, y1) = self.covered_span(y, y + h, self.height);
        if x0 >= x1 || y0 >= y1 {
            self.set_at(x + w / 2.0, y + h / 2.0, color);
            return;
        }
        for py in y0..y1 {
            for px in x0..x1 {
                self.set(px, py, color);
            }
        }
    }

    pub fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Rgb) {
        if radius <= 0.0 {
            return;
        }
        let (x0, x1) = self.covered_span(cx - radius, cx + radius, self.width);
        let (y0, y1) = self.covered_span(cy - radius, cy + radius, self.height);
        let r2 = radius * radius;
        let mut painted = false;
        for py in y0..y1 {
            for px in x0..x1 {
                let dx = px as f64 + 0.5 - cx;
                let dy = py as f64 + 0.5 - cy;
                if dx * dx + dy * dy <= r2 {
                    self.set(px, py, color);
                    painted = true;
                }
            }
        }
        if !painted {
            self.set_at(cx, cy, color);
        }
    }

    /// Count of pixels equal to `color`.
    pub fn count(&self, color: Rgb) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }

    /// Pixels whose centers fall in `[from, to)`, clamped to `[0, limit)`.
    fn covered_span(&self, from: f64, to: f64, limit: u16) -> (u16, u16) {
        let lo = (from - 0.5).ceil().max(0.0);
        let hi = (to - 0.5).ceil().max(0.0).min(limit as f64);
        (lo as u16, hi as u16)
    }

    fn set_at(&mut self, x: f64, y: f64, color: Rgb) {
        if x < 0.0 || y < 0.0 {
            return;
        }
        self.set(x.floor() as u16, y.floor() as u16, color);
    }
}
