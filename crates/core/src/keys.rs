//! Pressed/released state of the four control keys.

use crate::types::{ControlKey, KeyTable, Player};

/// Current state of each control key
///
/// Written by key events, read once per frame by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyState {
    pressed: KeyTable<bool>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: ControlKey, pressed: bool) {
        self.pressed.set(key, pressed);
    }

    pub fn is_pressed(&self, key: ControlKey) -> bool {
        self.pressed.get(key)
    }

    /// Key-down by identifier. Unrecognized identifiers are ignored.
    pub fn key_down(&mut self, name: &str) {
        if let Some(key) = ControlKey::from_key_name(name) {
            self.set(key, true);
        }
    }

    /// Key-up by identifier. Unrecognized identifiers are ignored.
    pub fn key_up(&mut self, name: &str) {
        if let Some(key) = ControlKey::from_key_name(name) {
            self.set(key, false);
        }
    }

    pub fn release_all(&mut self) {
        self.pressed = KeyTable::filled(false);
    }

    /// (up, down) flags for a player's paddle.
    pub fn paddle_intent(&self, player: Player) -> (bool, bool) {
        match player {
            Player::One => (
                self.is_pressed(ControlKey::P1Up),
                self.is_pressed(ControlKey::P1Down),
            ),
            Player::Two => (
                self.is_pressed(ControlKey::P2Up),
                self.is_pressed(ControlKey::P2Down),
            ),
        }
    }

    pub fn any_pressed(&self) -> bool {
        self.pressed.iter().any(|(_, p)| p)
    }
}
