//! Terminal Pong runner (default binary).
//!
//! Reads crossterm events, feeds them through the key tracker into the loop
//! controller, and renders with the framebuffer-based terminal renderer.

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event};

use tui_pong::config::{self, Args, Config};
use tui_pong::core::GameState;
use tui_pong::engine::{Flow, FrameClock, LoopController};
use tui_pong::input::KeyTracker;
use tui_pong::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = Config::from_args(Args::parse());
    config::init_logging(config.log_file.as_deref())?;
    log::info!("tui-pong starting: seed {}, {} fps", config.seed, config.fps);

    let mut term = TerminalRenderer::new();
    let release_events = term.enter()?;

    let result = run(&mut term, &config, release_events);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        log::error!("{err:#}");
    }
    result
}

struct Screen<'a> {
    term: &'a mut TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
}

impl Screen<'_> {
    fn viewport() -> Viewport {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        Viewport::new(w, h)
    }

    fn draw(&mut self, snap: &tui_pong::core::GameSnapshot) -> Result<()> {
        self.view.render_into(snap, Self::viewport(), &mut self.fb);
        self.term.draw(&self.fb)
    }
}

fn run(term: &mut TerminalRenderer, config: &Config, release_events: bool) -> Result<()> {
    let mut lc = LoopController::new(GameState::new(config.seed));
    let mut tracker = KeyTracker::new()
        .with_release_events(release_events)
        .with_first_release_timeout(config.key_repeat_delay);
    let mut clock = FrameClock::new(config.fps, Instant::now());
    let mut screen = Screen {
        term,
        view: GameView::new(),
        fb: FrameBuffer::new(0, 0),
    };

    screen.draw(&lc.idle_view())?;

    loop {
        // Nothing is scheduled while idle, so block until the next event.
        let ready = if lc.is_scheduled() {
            event::poll(clock.time_until_due(Instant::now()))?
        } else {
            true
        };

        if ready {
            let ev = event::read()?;
            let now = Instant::now();
            for release in tracker.update(now) {
                lc.handle(release);
            }

            match ev {
                Event::Key(key) => {
                    if let Some(input) = tracker.handle_key_event(key, now) {
                        let was_scheduled = lc.is_scheduled();
                        if lc.handle(input) == Flow::Quit {
                            log::info!("quit requested");
                            return Ok(());
                        }
                        if !was_scheduled && lc.is_scheduled() {
                            clock.reset(now);
                        }
                    }
                }
                Event::Resize(w, h) => {
                    log::debug!("resize to {w}x{h}");
                    screen.term.invalidate();
                    if !lc.is_scheduled() {
                        screen.draw(&lc.idle_view())?;
                    }
                }
                Event::FocusLost => {
                    for release in tracker.release_all() {
                        lc.handle(release);
                    }
                }
                _ => {}
            }
        }

        let now = Instant::now();
        for release in tracker.update(now) {
            lc.handle(release);
        }

        if lc.is_scheduled() && clock.is_due(now) {
            let still_running = lc.frame(|snap| screen.draw(snap))?;
            clock.advance(now);
            if !still_running {
                screen.draw(&lc.idle_view())?;
            }
        }
    }
}
