//! Frame loop plumbing that does not touch the terminal.
//!
//! [`LoopController`] owns the game session and applies input events;
//! [`FrameClock`] paces its ticks. The binary wires both to crossterm.

pub mod clock;
pub mod controller;

pub use tui_pong_core as core;
pub use tui_pong_types as types;

pub use clock::{FrameClock, DEFAULT_FPS};
pub use controller::{Flow, LoopController};
