//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, terminal rendering, tests).
//!
//! # Field Geometry
//!
//! The playfield is a fixed logical canvas measured in pixels. The terminal
//! front-end scales it to whatever viewport it gets; the simulation never sees
//! terminal cells.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FIELD_WIDTH` | 800 | Logical canvas width |
//! | `FIELD_HEIGHT` | 600 | Logical canvas height |
//! | `BALL_RADIUS` | 10 | Ball radius |
//! | `BALL_BASE_SPEED` | 4 | Per-axis speed after every serve |
//! | `PADDLE_WIDTH` | 10 | Paddle width (both players) |
//! | `PADDLE_HEIGHT` | 100 | Paddle height (both players) |
//! | `PADDLE_MARGIN` | 10 | Gap between a paddle and its side wall |
//! | `PADDLE_STEP` | 5 | Paddle travel per frame while a key is held |
//! | `SPEEDUP_FACTOR` | 1.2 | Ball velocity multiplier on paddle contact |
//! | `WINNING_SCORE` | 3 | First player to reach this wins |
//!
//! # Examples
//!
//! ```
//! use tui_pong_types::{ControlKey, GamePhase, Player, FIELD_HEIGHT, FIELD_WIDTH};
//!
//! // Control keys are looked up by their canonical names.
//! assert_eq!(ControlKey::from_key_name("w"), Some(ControlKey::P1Up));
//! assert_eq!(ControlKey::from_key_name("ArrowDown"), Some(ControlKey::P2Down));
//! assert_eq!(ControlKey::from_key_name("x"), None);
//!
//! assert_eq!(ControlKey::P2Up.player(), Player::Two);
//! assert!(GamePhase::default().is_idle());
//!
//! assert_eq!((FIELD_WIDTH, FIELD_HEIGHT), (800.0, 600.0));
//! ```

/// Field width in logical pixels
pub const FIELD_WIDTH: f64 = 800.0;

/// Field height in logical pixels
pub const FIELD_HEIGHT: f64 = 600.0;

/// Ball radius
pub const BALL_RADIUS: f64 = 10.0;

/// Magnitude of each velocity component after a serve
pub const BALL_BASE_SPEED: f64 = 4.0;

/// Paddle width (shared by both players)
pub const PADDLE_WIDTH: f64 = 10.0;

/// Paddle height (shared by both players)
pub const PADDLE_HEIGHT: f64 = 100.0;

/// Horizontal gap between each paddle and its side of the field
pub const PADDLE_MARGIN: f64 = 10.0;

/// Vertical paddle travel per frame
pub const PADDLE_STEP: f64 = 5.0;

/// Multiplier applied to both velocity components on every paddle hit
pub const SPEEDUP_FACTOR: f64 = 1.2;

/// Score that ends the game
pub const WINNING_SCORE: u32 = 3;

/// One of the two players.
///
/// Player one owns the left paddle, player two the right one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Human-facing player number (1 or 2)
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Winner announcement text shown when this player wins.
    pub fn win_message(self) -> &'static str {
        match self {
            Player::One => "Player 1 Wins!",
            Player::Two => "Player 2 Wins!",
        }
    }
}

/// The four recognized control keys (two per player)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKey {
    /// Player 1 paddle up (`w`)
    P1Up,
    /// Player 1 paddle down (`s`)
    P1Down,
    /// Player 2 paddle up (`ArrowUp`)
    P2Up,
    /// Player 2 paddle down (`ArrowDown`)
    P2Down,
}

impl ControlKey {
    pub const ALL: [ControlKey; 4] = [
        ControlKey::P1Up,
        ControlKey::P1Down,
        ControlKey::P2Up,
        ControlKey::P2Down,
    ];

    /// Parse a key identifier.
    ///
    /// Identifiers are exact (case-sensitive) browser key names; anything
    /// else is not a control key.
    ///
    /// ```
    /// use tui_pong_types::ControlKey;
    ///
    /// assert_eq!(ControlKey::from_key_name("s"), Some(ControlKey::P1Down));
    /// assert_eq!(ControlKey::from_key_name("ArrowUp"), Some(ControlKey::P2Up));
    /// assert_eq!(ControlKey::from_key_name("W"), None);
    /// ```
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "w" => Some(ControlKey::P1Up),
            "s" => Some(ControlKey::P1Down),
            "ArrowUp" => Some(ControlKey::P2Up),
            "ArrowDown" => Some(ControlKey::P2Down),
            _ => None,
        }
    }

    pub fn as_key_name(self) -> &'static str {
        match self {
            ControlKey::P1Up => "w",
            ControlKey::P1Down => "s",
            ControlKey::P2Up => "ArrowUp",
            ControlKey::P2Down => "ArrowDown",
        }
    }

    pub fn player(self) -> Player {
        match self {
            ControlKey::P1Up | ControlKey::P1Down => Player::One,
            ControlKey::P2Up | ControlKey::P2Down => Player::Two,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            ControlKey::P1Up => 0,
            ControlKey::P1Down => 1,
            ControlKey::P2Up => 2,
            ControlKey::P2Down => 3,
        }
    }
}

/// Coarse game state machine
///
/// - **Start**: initial layout, nothing moves until the first start action
/// - **Playing**: simulation and rendering every frame
/// - **GameOver**: a player reached [`WINNING_SCORE`]; the final frame stays on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    #[default]
    Start,
    Playing,
    GameOver,
}

impl GamePhase {
    /// Whether the start/restart action is accepted in this phase.
    pub fn can_start(self) -> bool {
        matches!(self, GamePhase::Start | GamePhase::GameOver)
    }

    /// Idle phases do not advance the simulation.
    pub fn is_idle(self) -> bool {
        !matches!(self, GamePhase::Playing)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GamePhase::Start => "start",
            GamePhase::Playing => "playing",
            GamePhase::GameOver => "game_over",
        }
    }
}

/// Input events delivered to the loop controller
///
/// Key events carry a recognized control key; unrecognized keys never become
/// events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(ControlKey),
    KeyUp(ControlKey),
    /// The start/restart control was activated
    Start,
    Quit,
}

/// Fixed-size table indexed by [`ControlKey`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct KeyTable<T> {
    slots: [T; 4],
}

impl<T: Copy> KeyTable<T> {
    pub fn filled(value: T) -> Self {
        Self { slots: [value; 4] }
    }

    pub fn get(&self, key: ControlKey) -> T {
        self.slots[key.index()]
    }

    pub fn set(&mut self, key: ControlKey, value: T) {
        self.slots[key.index()] = value;
    }

    pub fn iter(&self) -> impl Iterator<Item = (ControlKey, T)> + '_ {
        ControlKey::ALL.iter().map(move |&k| (k, self.get(k)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_names_round_trip_for_every_control_key() {
        for key in ControlKey::ALL {
            assert_eq!(ControlKey::from_key_name(key.as_key_name()), Some(key));
        }
    }

    #[test]
    fn unknown_key_names_are_not_controls() {
        assert_eq!(ControlKey::from_key_name(""), None);
        assert_eq!(ControlKey::from_key_name("Enter"), None);
        assert_eq!(ControlKey::from_key_name("arrowup"), None);
    }

    #[test]
    fn start_is_accepted_only_when_idle() {
        assert!(GamePhase::Start.can_start());
        assert!(GamePhase::GameOver.can_start());
        assert!(!GamePhase::Playing.can_start());
    }

    #[test]
    fn paddle_fits_inside_field() {
        assert!(PADDLE_HEIGHT < FIELD_HEIGHT);
        assert!(PADDLE_MARGIN + PADDLE_WIDTH < FIELD_WIDTH / 2.0);
        assert_eq!(WINNING_SCORE, 3);
    }

    #[test]
    fn key_table_stores_per_key_values() {
        let mut t = KeyTable::filled(false);
        t.set(ControlKey::P2Down, true);
        assert!(t.get(ControlKey::P2Down));
        assert!(!t.get(ControlKey::P1Up));
        assert_eq!(t.iter().filter(|(_, v)| *v).count(), 1);
    }

    #[test]
    fn win_messages_name_the_player() {
        assert_eq!(Player::One.win_message(), "Player 1 Wins!");
        assert_eq!(Player::Two.win_message(), "Player 2 Wins!");
    }
}
