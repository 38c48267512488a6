//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Frames are encoded into a byte buffer first (full redraw on the first
//! frame or after a resize, changed runs otherwise) and written with a single
//! `write_all`, so a frame never reaches the terminal half-drawn.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crossterm::{
    cursor,
    event::{
        DisableFocusChange, EnableFocusChange, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
    last: Option<FrameBuffer>,
    keyboard_enhanced: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(64 * 1024),
            last: None,
            keyboard_enhanced: false,
        }
    }

    /// Switch to raw mode and the alternate screen.
    ///
    /// Also asks the terminal to report key releases when it supports the
    /// keyboard enhancement protocol; returns whether it does.
    pub fn enter(&mut self) -> Result<bool> {
        terminal::enable_raw_mode().context("enable raw mode")?;

        self.keyboard_enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false);
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.buf.queue(EnableFocusChange)?;
        if self.keyboard_enhanced {
            self.buf.queue(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))?;
        }
        self.flush_buf()?;
        log::debug!(
            "terminal entered (key release events: {})",
            self.keyboard_enhanced
        );
        Ok(self.keyboard_enhanced)
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        if self.keyboard_enhanced {
            self.buf.queue(PopKeyboardEnhancementFlags)?;
            self.keyboard_enhanced = false;
        }
        self.buf.queue(DisableFocusChange)?;
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode().context("disable raw mode")?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, keeping a copy to diff the next frame against.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        match self.last.take() {
            Some(mut prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev.clone_from(fb);
                self.last = Some(prev);
            }
            _ => {
                encode_full_into(fb, &mut self.buf)?;
                self.last = Some(fb.clone());
            }
        }
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut pen = Pen::default();
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            pen.print(out, cell.ch, cell.style)?;
        }
    }
    pen.reset(out)
}

/// Encode only the cells that differ from `prev` into `out`.
///
/// Emits nothing at all when the frames are identical.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut pen = Pen::default();

    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let cell = next.get(x + dx, y).unwrap_or_default();
            pen.print(out, cell.ch, cell.style)?;
        }
        Ok(())
    })?;

    if pen.used() {
        pen.reset(out)?;
    }
    Ok(())
}

/// Tracks the style last sent to the terminal so it is only re-sent on change.
#[derive(Default)]
struct Pen {
    current: Option<CellStyle>,
}

impl Pen {
    fn print(&mut self, out: &mut Vec<u8>, ch: char, style: CellStyle) -> Result<()> {
        if self.current != Some(style) {
            out.queue(SetAttribute(Attribute::Reset))?;
            out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
            out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
            if style.bold {
                out.queue(SetAttribute(Attribute::Bold))?;
            }
            self.current = Some(style);
        }
        out.queue(Print(ch))?;
        Ok(())
    }

    fn used(&self) -> bool {
        self.current.is_some()
    }

    fn reset(&mut self, out: &mut Vec<u8>) -> Result<()> {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
        self.current = None;
        Ok(())
    }
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Call `f(x, y, len)` for every horizontal run of cells that differ.
fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    let w = next.width();
    for y in 0..next.height() {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }
            let start = x;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}
