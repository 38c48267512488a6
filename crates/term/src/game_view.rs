//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::canvas::Canvas;
use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{GamePhase, FIELD_HEIGHT, FIELD_WIDTH};

/// Smallest field (in cells) that is still playable.
pub const MIN_FIELD_COLS: u16 = 40;
pub const MIN_FIELD_ROWS: u16 = 10;

const FOREGROUND: Rgb = Rgb::WHITE;
const FIELD_BG: Rgb = Rgb::BLACK;

/// Score text positions in field pixels.
const SCORE_LEFT_X: f64 = 50.0;
const SCORE_RIGHT_X: f64 = FIELD_WIDTH - 150.0;
const SCORE_BASELINE_Y: f64 = 30.0;

const CONTROLS_HINT: &str = "W/S: left paddle   \u{2191}/\u{2193}: right paddle   Q: quit";

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

/// Where the field lands inside a viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldLayout {
    /// Top-left corner of the border, in cells.
    pub x: u16,
    pub y: u16,
    /// Field size inside the border, in cells.
    pub cols: u16,
    pub rows: u16,
    /// Field pixels to canvas pixels, per axis.
    pub scale_x: f64,
    pub scale_y: f64,
}

impl FieldLayout {
    /// Fit the field into `viewport`, keeping its aspect ratio.
    ///
    /// Each cell is one canvas pixel wide and two tall. One row under the
    /// border is reserved for the controls hint. Returns `None` when the
    /// result would be smaller than [`MIN_FIELD_COLS`] x [`MIN_FIELD_ROWS`].
    pub fn fit(viewport: Viewport) -> Option<Self> {
        let avail_cols = viewport.width.checked_sub(2)?;
        let avail_rows = viewport.height.checked_sub(3)?;

        let scale = (avail_cols as f64 / FIELD_WIDTH).min(2.0 * avail_rows as f64 / FIELD_HEIGHT);
        // Nudge before flooring so exact fits are not lost to rounding.
        let cols = (FIELD_WIDTH * scale + 1e-9).floor() as u16;
        let rows = (FIELD_HEIGHT * scale / 2.0 + 1e-9).floor() as u16;
        if cols < MIN_FIELD_COLS || rows < MIN_FIELD_ROWS {
            return None;
        }

        let frame_w = cols + 2;
        let frame_h = rows + 2;
        Some(Self {
            x: (viewport.width - frame_w) / 2,
            y: viewport.height.saturating_sub(frame_h + 1) / 2,
            cols,
            rows,
            scale_x: cols as f64 / FIELD_WIDTH,
            scale_y: (rows * 2) as f64 / FIELD_HEIGHT,
        })
    }

    /// First cell inside the border.
    pub fn inner_origin(&self) -> (u16, u16) {
        (self.x + 1, self.y + 1)
    }

    /// Cell column of a field x coordinate.
    pub fn col_of(&self, field_x: f64) -> u16 {
        let col = (field_x * self.scale_x).floor().max(0.0) as u16;
        self.x + 1 + col.min(self.cols.saturating_sub(1))
    }

    /// Cell row of a field y coordinate.
    pub fn row_of(&self, field_y: f64) -> u16 {
        let row = (field_y * self.scale_y / 2.0).floor().max(0.0) as u16;
        self.y + 1 + row.min(self.rows.saturating_sub(1))
    }
}

/// Terminal renderer for the Pong field.
pub struct GameView {
    canvas: Canvas,
    show_hint: bool,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            canvas: Canvas::new(0, 0, FIELD_BG),
            show_hint: true,
        }
    }
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hint(mut self, show_hint: bool) -> Self {
        self.show_hint = show_hint;
        self
    }

    /// Render into a fresh framebuffer.
    pub fn render(&mut self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport and fully redrawn every call.
    pub fn render_into(&mut self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::new(' ', CellStyle::default()));

        let Some(layout) = FieldLayout::fit(viewport) else {
            self.draw_too_small(fb, viewport);
            return;
        };

        self.draw_field(snap, &layout);
        let (ox, oy) = layout.inner_origin();
        fb.blit_canvas(ox, oy, &self.canvas);

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::BLACK);
        fb.draw_border(layout.x, layout.y, layout.cols + 2, layout.rows + 2, border);

        self.draw_scores(fb, snap, &layout);
        self.draw_overlay(fb, snap, &layout);

        if self.show_hint {
            let hint_y = layout.y + layout.rows + 2;
            if hint_y < viewport.height {
                let style = CellStyle::new(Rgb::new(130, 130, 140), Rgb::BLACK);
                fb.put_str_centered(0, viewport.width, hint_y, CONTROLS_HINT, style);
            }
        }
    }

    /// Clear the canvas and draw the ball and both paddles.
    fn draw_field(&mut self, snap: &GameSnapshot, layout: &FieldLayout) {
        self.canvas.resize(layout.cols, layout.rows * 2);
        self.canvas.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );

        let (sx, sy) = (layout.scale_x, layout.scale_y);
        // An ellipse would be more faithful when sx != sy, but the two
        // scales differ by less than one pixel over the whole field.
        let ball = snap.ball;
        self.canvas
            .fill_circle(ball.x * sx, ball.y * sy, ball.radius * sx.min(sy), FOREGROUND);

        for p in snap.paddles.iter() {
            self.canvas
                .fill_rect(p.x * sx, p.y * sy, p.width * sx, p.height * sy, FOREGROUND);
        }
    }

    fn draw_scores(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &FieldLayout) {
        let row = layout.row_of(SCORE_BASELINE_Y);
        let left = format!("Player 1: {}", snap.scores[0]);
        let right = format!("Player 2: {}", snap.scores[1]);

        fb.put_str_over(layout.col_of(SCORE_LEFT_X), row, &left, FOREGROUND, false);
        // Keep the right score inside the border on narrow fields.
        let inner_end = layout.x + 1 + layout.cols;
        let right_x = layout
            .col_of(SCORE_RIGHT_X)
            .min(inner_end.saturating_sub(right.chars().count() as u16));
        fb.put_str_over(right_x, row, &right, FOREGROUND, false);
    }

    /// Winner announcement and start prompt; hidden while playing.
    fn draw_overlay(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &FieldLayout) {
        let prompt = match snap.phase {
            GamePhase::Playing => return,
            GamePhase::Start => "Press ENTER to start",
            GamePhase::GameOver => "Press ENTER to restart",
        };

        let (ox, oy) = layout.inner_origin();
        let mid = oy + layout.rows / 2;
        let banner = CellStyle::new(Rgb::new(255, 220, 80), Rgb::BLACK).bold();
        let hint = CellStyle::new(FOREGROUND, Rgb::BLACK);

        if let Some(message) = snap.winner_message() {
            let text = format!("  {message}  ");
            fb.put_str_centered(ox, layout.cols, mid.saturating_sub(1), &text, banner);
        }
        let text = format!(" {prompt} ");
        fb.put_str_centered(ox, layout.cols, mid + 1, &text, hint);
    }

    fn draw_too_small(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        let style = CellStyle::new(FOREGROUND, Rgb::BLACK).bold();
        let mid = viewport.height / 2;
        fb.put_str_centered(0, viewport.width, mid, "Terminal too small", style);
        let need = format!("need at least {}x{}", MIN_FIELD_COLS + 2, MIN_FIELD_ROWS + 3);
        fb.put_str_centered(
            0,
            viewport.width,
            mid.saturating_add(1),
            &need,
            CellStyle::default(),
        );
    }
}
