//! Game state module - the complete game session
//!
//! Ties together the ball, both paddles, the control keys, the scores and the
//! phase machine. The loop controller owns exactly one [`GameState`] and is its
//! only writer.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::*;
use crate::{Ball, GameSnapshot, KeyState, Paddle};

/// What happened during one simulation tick.
///
/// Consumed by the loop controller for logging and by tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickEvent {
    pub wall_bounce: bool,
    /// Paddle(s) the ball bounced off this tick (index 0 = player one).
    pub paddle_hits: [bool; 2],
    /// Player awarded a point this tick.
    pub point: Option<Player>,
    /// Set on the tick that ends the game.
    pub winner: Option<Player>,
}

impl TickEvent {
    pub fn paddle_hit(&self) -> bool {
        self.paddle_hits.iter().any(|&h| h)
    }
}

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameState {
    ball: Ball,
    paddles: [Paddle; 2],
    scores: [u32; 2],
    keys: KeyState,
    phase: GamePhase,
    winner: Option<Player>,
    rng: StdRng,
    seed: u64,
    /// Monotonic game id (increments on every start).
    game_id: u32,
    /// Ticks simulated in the current game.
    frame: u64,
    /// Paddle hits since the last serve.
    rally: u32,
}

impl GameState {
    /// Create a new session with the given RNG seed.
    ///
    /// The ball starts centered with random direction signs and the phase is
    /// [`GamePhase::Start`]; nothing moves until [`GameState::start`].
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let ball = serve(&mut rng);
        Self {
            ball,
            paddles: [Paddle::new(Player::One), Paddle::new(Player::Two)],
            scores: [0, 0],
            keys: KeyState::new(),
            phase: GamePhase::Start,
            winner: None,
            rng,
            seed,
            game_id: 0,
            frame: 0,
            rally: 0,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Winner announcement, visible only after the game ended.
    pub fn winner_message(&self) -> Option<&'static str> {
        self.winner.map(Player::win_message)
    }

    pub fn score(&self, player: Player) -> u32 {
        self.scores[slot(player)]
    }

    pub fn scores(&self) -> [u32; 2] {
        self.scores
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    /// Direct ball access for tooling and scripted scenarios.
    pub fn ball_mut(&mut self) -> &mut Ball {
        &mut self.ball
    }

    pub fn paddle(&self, player: Player) -> &Paddle {
        &self.paddles[slot(player)]
    }

    pub fn paddle_mut(&mut self, player: Player) -> &mut Paddle {
        &mut self.paddles[slot(player)]
    }

    pub fn keys(&self) -> &KeyState {
        &self.keys
    }

    pub fn keys_mut(&mut self) -> &mut KeyState {
        &mut self.keys
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn game_id(&self) -> u32 {
        self.game_id
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn rally(&self) -> u32 {
        self.rally
    }

    /// Start (or restart) a game.
    ///
    /// Accepted from [`GamePhase::Start`] and [`GamePhase::GameOver`]: scores
    /// go back to 0, the ball is re-served and the winner announcement is
    /// cleared. Returns `false` (and changes nothing) while already playing.
    pub fn start(&mut self) -> bool {
        if !self.phase.can_start() {
            return false;
        }
        self.phase = GamePhase::Playing;
        self.reset_game();
        self.winner = None;
        self.game_id = self.game_id.wrapping_add(1);
        self.frame = 0;
        log::info!("game {} started (seed {})", self.game_id, self.seed);
        true
    }

    /// Reset scores and re-serve the ball. Paddles keep their positions.
    pub fn reset_game(&mut self) {
        self.scores = [0, 0];
        self.reset_ball();
    }

    /// Put the ball back at the center at base speed with random signs.
    pub fn reset_ball(&mut self) {
        self.ball = serve(&mut self.rng);
        self.rally = 0;
    }

    /// Advance the world by one frame: paddles first, then the ball.
    ///
    /// Idle phases do not simulate; the returned event is empty.
    pub fn tick(&mut self) -> TickEvent {
        if !self.is_playing() {
            return TickEvent::default();
        }
        self.frame = self.frame.wrapping_add(1);
        self.move_paddles();
        self.move_ball()
    }

    /// Apply held keys to both paddles.
    pub fn move_paddles(&mut self) {
        for paddle in self.paddles.iter_mut() {
            let (up, down) = self.keys.paddle_intent(paddle.owner);
            if up {
                paddle.step_up();
            }
            if down {
                paddle.step_down();
            }
        }
    }

    /// Translate the ball and resolve walls, paddles and scoring.
    pub fn move_ball(&mut self) -> TickEvent {
        let mut event = TickEvent::default();

        self.ball.translate();

        if self.ball.touches_wall() {
            self.ball.reflect_vertical();
            event.wall_bounce = true;
        }

        for (i, paddle) in self.paddles.iter().enumerate() {
            if paddle.contacts(&self.ball) {
                self.ball.return_from_paddle();
                self.rally += 1;
                event.paddle_hits[i] = true;
                log::debug!(
                    "player {} return, rally {}, velocity ({:.2}, {:.2})",
                    paddle.owner.number(),
                    self.rally,
                    self.ball.dx,
                    self.ball.dy
                );
            }
        }

        if let Some(scorer) = self.ball.exited() {
            self.scores[slot(scorer)] += 1;
            event.point = Some(scorer);
            log::info!(
                "point for player {}: {}-{}",
                scorer.number(),
                self.scores[0],
                self.scores[1]
            );
            event.winner = self.check_winner();
            self.reset_ball();
        }

        event
    }

    /// End the game if a player reached the winning score.
    ///
    /// Player one is checked first.
    fn check_winner(&mut self) -> Option<Player> {
        let winner = [Player::One, Player::Two]
            .into_iter()
            .find(|&p| self.scores[slot(p)] == WINNING_SCORE)?;
        self.phase = GamePhase::GameOver;
        self.winner = Some(winner);
        log::info!("game {} over: {}", self.game_id, winner.win_message());
        Some(winner)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        use crate::snapshot::{BallSnapshot, PaddleSnapshot};

        out.ball = BallSnapshot::from(self.ball);
        out.paddles = [
            PaddleSnapshot::from(self.paddles[0]),
            PaddleSnapshot::from(self.paddles[1]),
        ];
        out.scores = self.scores;
        out.phase = self.phase;
        out.winner = self.winner;
        out.game_id = self.game_id;
        out.frame = self.frame;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

fn slot(player: Player) -> usize {
    match player {
        Player::One => 0,
        Player::Two => 1,
    }
}

fn random_sign(rng: &mut StdRng) -> f64 {
    if rng.gen_bool(0.5) {
        1.0
    } else {
        -1.0
    }
}

fn serve(rng: &mut StdRng) -> Ball {
    let dx = BALL_BASE_SPEED * random_sign(rng);
    let dy = BALL_BASE_SPEED * random_sign(rng);
    Ball::centered(dx, dy)
}
