use crate::types::{
    GamePhase, Player, BALL_RADIUS, FIELD_HEIGHT, FIELD_WIDTH, PADDLE_HEIGHT, PADDLE_WIDTH,
};
use crate::{Ball, Paddle};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallSnapshot {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

impl From<Ball> for BallSnapshot {
    fn from(value: Ball) -> Self {
        Self {
            x: value.x,
            y: value.y,
            radius: value.radius,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleSnapshot {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl From<Paddle> for PaddleSnapshot {
    fn from(value: Paddle) -> Self {
        Self {
            x: value.x,
            y: value.y,
            width: value.width,
            height: value.height,
        }
    }
}

/// Read-only view of everything the renderer draws.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSnapshot {
    pub ball: BallSnapshot,
    pub paddles: [PaddleSnapshot; 2],
    pub scores: [u32; 2],
    pub phase: GamePhase,
    pub winner: Option<Player>,
    pub game_id: u32,
    pub frame: u64,
}

impl GameSnapshot {
    pub fn winner_message(&self) -> Option<&'static str> {
        self.winner.map(Player::win_message)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let paddle_y = FIELD_HEIGHT / 2.0 - PADDLE_HEIGHT / 2.0;
        Self {
            ball: BallSnapshot {
                x: FIELD_WIDTH / 2.0,
                y: FIELD_HEIGHT / 2.0,
                radius: BALL_RADIUS,
            },
            paddles: [
                PaddleSnapshot {
                    x: Paddle::new(Player::One).x,
                    y: paddle_y,
                    width: PADDLE_WIDTH,
                    height: PADDLE_HEIGHT,
                },
                PaddleSnapshot {
                    x: Paddle::new(Player::Two).x,
                    y: paddle_y,
                    width: PADDLE_WIDTH,
                    height: PADDLE_HEIGHT,
                },
            ],
            scores: [0, 0],
            phase: GamePhase::Start,
            winner: None,
            game_id: 0,
            frame: 0,
        }
    }
}
