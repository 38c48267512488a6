//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **no dependencies** on UI, terminals, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical serves
//! - **Testable**: Unit tests for every rule below
//! - **Portable**: Can run in any environment (terminal, headless, benches)
//!
//! # Module Structure
//!
//! - [`field`]: the ball and paddle entities with their geometry
//! - [`keys`]: pressed/released state of the four control keys
//! - [`game_state`]: the game session, phase machine and per-frame step
//! - [`snapshot`]: plain-data view handed to renderers
//!
//! # Game Rules
//!
//! - **Paddles** move 5px per frame while their key is held, clamped to the field
//! - **Walls** reflect the ball vertically with no speed loss
//! - **Paddle returns** reverse the ball and multiply both velocity components by 1.2
//! - **Points** are scored when the ball fully leaves the left or right side;
//!   the ball is then re-served from the center at base speed
//! - **First to 3** ends the game
//!
//! # Example
//!
//! ```
//! use tui_pong_core::GameState;
//! use tui_pong_types::{GamePhase, Player};
//!
//! let mut game = GameState::new(12345);
//! assert_eq!(game.phase(), GamePhase::Start);
//!
//! game.start();
//! game.keys_mut().key_down("w");
//! game.tick();
//!
//! assert_eq!(game.paddle(Player::One).y, 245.0);
//! ```
//!
//! # Timing
//!
//! There is no time step: every call to [`GameState::tick`](game_state::GameState::tick)
//! is one frame, and all speeds are in pixels per frame.

pub mod field;
pub mod game_state;
pub mod keys;
pub mod snapshot;

pub use tui_pong_types as types;

// Re-export commonly used types for convenience
pub use field::{Ball, Paddle};
pub use game_state::{GameState, TickEvent};
pub use keys::KeyState;
pub use snapshot::{BallSnapshot, GameSnapshot, PaddleSnapshot};
