//! Loop controller: applies input, runs render-then-simulate ticks, and decides
//! whether another tick is scheduled.

use anyhow::Result;

use crate::core::{GameSnapshot, GameState, TickEvent};
use crate::types::InputEvent;

/// What the caller should do after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Owns the game session and the frame schedule.
///
/// The schedule is a single flag: a tick is pending exactly while the game is
/// playing. The start action arms it; a tick that leaves the playing phase
/// clears it, and nothing runs again until the next start action.
#[derive(Debug, Clone)]
pub struct LoopController {
    game: GameState,
    scheduled: bool,
    /// Last frame handed to the renderer.
    shown: Option<GameSnapshot>,
    last_event: TickEvent,
}

impl LoopController {
    pub fn new(game: GameState) -> Self {
        Self {
            game,
            scheduled: false,
            shown: None,
            last_event: TickEvent::default(),
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut GameState {
        &mut self.game
    }

    /// Whether a tick is pending.
    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    /// Events produced by the most recent tick.
    pub fn last_event(&self) -> TickEvent {
        self.last_event
    }

    /// Apply one input event.
    ///
    /// Key events update the key state in every phase; the start action is
    /// ignored while a game is running.
    pub fn handle(&mut self, event: InputEvent) -> Flow {
        match event {
            InputEvent::KeyDown(key) => self.game.keys_mut().set(key, true),
            InputEvent::KeyUp(key) => self.game.keys_mut().set(key, false),
            InputEvent::Start => {
                if self.game.start() {
                    self.scheduled = true;
                } else {
                    log::debug!("start ignored while {}", self.game.phase().as_str());
                }
            }
            InputEvent::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    /// Run one scheduled tick: render the current state, then simulate.
    ///
    /// The renderer sees the state from before this tick's simulation, so the
    /// screen is always one tick behind the model. Returns whether another
    /// tick is scheduled; when none is pending this does nothing.
    pub fn frame<R>(&mut self, render: R) -> Result<bool>
    where
        R: FnOnce(&GameSnapshot) -> Result<()>,
    {
        if !self.scheduled {
            return Ok(false);
        }

        let snap = self.shown.get_or_insert_with(GameSnapshot::default);
        self.game.snapshot_into(snap);
        render(snap)?;

        self.last_event = self.game.tick();
        self.scheduled = self.game.is_playing();
        if !self.scheduled {
            log::info!("loop halted in phase {}", self.game.phase().as_str());
        }
        Ok(self.scheduled)
    }

    /// What an idle screen should show.
    ///
    /// Ball and paddles stay where the last rendered frame had them; scores,
    /// phase and winner come from the live state so the announcement is
    /// visible. Before any frame was rendered this is the live state.
    pub fn idle_view(&self) -> GameSnapshot {
        let live = self.game.snapshot();
        match self.shown {
            Some(shown) => GameSnapshot {
                scores: live.scores,
                phase: live.phase,
                winner: live.winner,
                game_id: live.game_id,
                ..shown
            },
            None => live,
        }
    }
}
