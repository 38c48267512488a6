//! Field entities: the ball and the two paddles.
//!
//! Positions are in logical field pixels (see [`crate::types::FIELD_WIDTH`]).
//! The ball's position is its center; a paddle's position is its top-left
//! corner.

use crate::types::*;

/// The ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub dx: f64,
    pub dy: f64,
}

impl Ball {
    /// A ball at the field center moving with the given velocity.
    pub fn centered(dx: f64, dy: f64) -> Self {
        Self {
            x: FIELD_WIDTH / 2.0,
            y: FIELD_HEIGHT / 2.0,
            radius: BALL_RADIUS,
            dx,
            dy,
        }
    }

    pub fn left(&self) -> f64 {
        self.x - self.radius
    }

    pub fn right(&self) -> f64 {
        self.x + self.radius
    }

    pub fn top(&self) -> f64 {
        self.y - self.radius
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.radius
    }

    pub fn translate(&mut self) {
        self.x += self.dx;
        self.y += self.dy;
    }

    /// True when the top or bottom edge is outside the field.
    pub fn touches_wall(&self) -> bool {
        self.bottom() > FIELD_HEIGHT || self.top() < 0.0
    }

    /// Elastic wall bounce.
    pub fn reflect_vertical(&mut self) {
        self.dy = -self.dy;
    }

    /// Paddle return: reverse horizontally and speed up on both axes.
    pub fn return_from_paddle(&mut self) {
        self.dx = -self.dx * SPEEDUP_FACTOR;
        self.dy *= SPEEDUP_FACTOR;
    }

    /// The side the ball left the field through, if any.
    ///
    /// Returns the player who scores: a ball fully past the left wall is a
    /// point for player two, fully past the right wall a point for player one.
    pub fn exited(&self) -> Option<Player> {
        if self.right() < 0.0 {
            Some(Player::Two)
        } else if self.left() > FIELD_WIDTH {
            Some(Player::One)
        } else {
            None
        }
    }
}

/// A player's paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub owner: Player,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub step: f64,
}

impl Paddle {
    /// The paddle for `owner`, vertically centered on its side of the field.
    pub fn new(owner: Player) -> Self {
        let x = match owner {
            Player::One => PADDLE_MARGIN,
            Player::Two => FIELD_WIDTH - PADDLE_WIDTH - PADDLE_MARGIN,
        };
        Self {
            owner,
            x,
            y: FIELD_HEIGHT / 2.0 - PADDLE_HEIGHT / 2.0,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            step: PADDLE_STEP,
        }
    }

    /// Largest y the paddle may occupy.
    pub fn max_y(&self) -> f64 {
        FIELD_HEIGHT - self.height
    }

    /// Step up one frame's worth, unless already at the top.
    ///
    /// The guard is checked before the move, so the paddle stops on the
    /// first frame that reaches 0.
    pub fn step_up(&mut self) -> bool {
        if self.y > 0.0 {
            self.y -= self.step;
            true
        } else {
            false
        }
    }

    pub fn step_down(&mut self) -> bool {
        if self.y < self.max_y() {
            self.y += self.step;
            true
        } else {
            false
        }
    }

    /// Whether `y` lies strictly between the paddle's top and bottom.
    pub fn spans(&self, y: f64) -> bool {
        y > self.y && y < self.y + self.height
    }

    /// Edge-crossing contact test against the paddle's inner face.
    ///
    /// Only the face toward the field center is checked and the ball is not
    /// pushed back out, so a fast ball can pass through between two frames.
    pub fn contacts(&self, ball: &Ball) -> bool {
        let crossed = match self.owner {
            Player::One => ball.left() < self.x + self.width,
            Player::Two => ball.right() > self.x,
        };
        crossed && self.spans(ball.y)
    }
}
