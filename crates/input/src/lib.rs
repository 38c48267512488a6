//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::InputEvent`]s and keeps track of
//! held paddle keys, synthesizing releases on terminals that never report them.

pub mod handler;
pub mod map;

pub use tui_pong_types as types;

pub use handler::{KeyTracker, DEFAULT_FIRST_RELEASE_TIMEOUT_MS};
pub use map::{control_key, is_start_key, should_quit};
