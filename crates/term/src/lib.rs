//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout toolkits and instead draws the field into a pixel
//! canvas, packs the canvas into a framebuffer of half-block cells, and
//! flushes that framebuffer to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the 4:3 field proportions (one pixel per column, two per row)
//! - Only send changed cells to the terminal

pub mod canvas;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_pong_core as core;
pub use tui_pong_types as types;

pub use canvas::Canvas;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb, HALF_BLOCK};
pub use game_view::{FieldLayout, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
