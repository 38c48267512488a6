//! TUI Pong (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_pong::{core,engine,input,term,types}`
//! and holds the command-line configuration used by the binary.

pub mod config;

pub use tui_pong_core as core;
pub use tui_pong_engine as engine;
pub use tui_pong_input as input;
pub use tui_pong_term as term;
pub use tui_pong_types as types;
