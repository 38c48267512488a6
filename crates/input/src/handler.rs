//! Held-key tracking for terminal environments.
//!
//! Supports terminals that do not emit key release events by using a timeout.

use std::time::{Duration, Instant};

use arrayvec::ArrayVec;
use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::{control_key, is_start_key, should_quit};
use crate::types::{ControlKey, InputEvent, KeyTable};

/// Release timeout after the initial press.
///
/// Without release events a held key looks like one press, a pause of the
/// OS repeat delay, then a stream of repeats. This has to span that delay,
/// which is about 500 ms on GNOME and Windows and 660 ms on X11.
pub const DEFAULT_FIRST_RELEASE_TIMEOUT_MS: u64 = 700;

/// Release timeout once repeats are flowing; only spans the repeat gap.
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Held {
    last_seen: Instant,
    repeated: bool,
}

/// Turns raw terminal key events into [`InputEvent`]s.
///
/// Tracks which control keys are down so that presses and releases come out
/// exactly once each, even when the terminal only reports presses.
#[derive(Debug, Clone)]
pub struct KeyTracker {
    held: KeyTable<Option<Held>>,
    first_release_timeout: Duration,
    release_timeout: Duration,
    /// Terminal reports real key releases; timeouts are not needed.
    release_events: bool,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self {
            held: KeyTable::filled(None),
            first_release_timeout: Duration::from_millis(DEFAULT_FIRST_RELEASE_TIMEOUT_MS),
            release_timeout: Duration::from_millis(DEFAULT_KEY_RELEASE_TIMEOUT_MS),
            release_events: false,
        }
    }

    pub fn with_release_events(mut self, enabled: bool) -> Self {
        self.release_events = enabled;
        self
    }

    pub fn with_release_timeouts(mut self, first: Duration, repeat: Duration) -> Self {
        self.first_release_timeout = first;
        self.release_timeout = repeat;
        self
    }

    /// Override only the timeout after the initial press.
    pub fn with_first_release_timeout(mut self, first: Duration) -> Self {
        self.first_release_timeout = first;
        self
    }

    pub fn is_held(&self, key: ControlKey) -> bool {
        self.held.get(key).is_some()
    }

    /// Translate one terminal key event.
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) -> Option<InputEvent> {
        match key.kind {
            KeyEventKind::Press => {
                if should_quit(key) {
                    return Some(InputEvent::Quit);
                }
                if is_start_key(key.code) {
                    return Some(InputEvent::Start);
                }
                let control = control_key(key.code)?;
                self.press(control, now)
            }
            KeyEventKind::Repeat => {
                let control = control_key(key.code)?;
                self.press(control, now)
            }
            KeyEventKind::Release => {
                let control = control_key(key.code)?;
                self.release(control)
            }
        }
    }

    fn press(&mut self, key: ControlKey, now: Instant) -> Option<InputEvent> {
        match self.held.get(key) {
            Some(held) => {
                // Auto-repeat of a key that is already down.
                self.held.set(
                    key,
                    Some(Held {
                        last_seen: now,
                        repeated: held.repeated || now > held.last_seen,
                    }),
                );
                None
            }
            None => {
                self.held.set(
                    key,
                    Some(Held {
                        last_seen: now,
                        repeated: false,
                    }),
                );
                Some(InputEvent::KeyDown(key))
            }
        }
    }

    fn release(&mut self, key: ControlKey) -> Option<InputEvent> {
        self.held.get(key)?;
        self.held.set(key, None);
        Some(InputEvent::KeyUp(key))
    }

    /// Synthesize releases for keys whose repeats stopped arriving.
    pub fn update(&mut self, now: Instant) -> ArrayVec<InputEvent, 4> {
        let mut events = ArrayVec::<InputEvent, 4>::new();
        if self.release_events {
            return events;
        }

        for key in ControlKey::ALL {
            let Some(held) = self.held.get(key) else {
                continue;
            };
            let timeout = if held.repeated {
                self.release_timeout
            } else {
                self.first_release_timeout
            };
            if now.saturating_duration_since(held.last_seen) > timeout {
                self.held.set(key, None);
                events.push(InputEvent::KeyUp(key));
            }
        }
        events
    }

    /// Release every held key (e.g. when the terminal loses focus).
    pub fn release_all(&mut self) -> ArrayVec<InputEvent, 4> {
        let mut events = ArrayVec::<InputEvent, 4>::new();
        for key in ControlKey::ALL {
            if self.held.get(key).is_some() {
                self.held.set(key, None);
                events.push(InputEvent::KeyUp(key));
            }
        }
        events
    }
}

impl Default for KeyTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Press)
    }

    fn repeat(code: KeyCode) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Repeat)
    }

    fn release(code: KeyCode) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Release)
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_press_then_release_emits_once_each() {
        let mut kt = KeyTracker::new().with_release_events(true);
        let t0 = Instant::now();

        assert_eq!(
            kt.handle_key_event(press(KeyCode::Char('w')), t0),
            Some(InputEvent::KeyDown(ControlKey::P1Up))
        );
        assert_eq!(kt.handle_key_event(repeat(KeyCode::Char('w')), t0 + ms(30)), None);
        assert_eq!(kt.handle_key_event(press(KeyCode::Char('w')), t0 + ms(60)), None);
        assert_eq!(
            kt.handle_key_event(release(KeyCode::Char('w')), t0 + ms(90)),
            Some(InputEvent::KeyUp(ControlKey::P1Up))
        );
        assert_eq!(kt.handle_key_event(release(KeyCode::Char('w')), t0 + ms(91)), None);
    }

    #[test]
    fn test_release_events_disable_timeouts() {
        let mut kt = KeyTracker::new().with_release_events(true);
        let t0 = Instant::now();
        kt.handle_key_event(press(KeyCode::Up), t0);

        assert!(kt.update(t0 + ms(10_000)).is_empty());
        assert!(kt.is_held(ControlKey::P2Up));
    }

    #[test]
    fn test_auto_release_after_first_timeout_without_release_events() {
        let mut kt = KeyTracker::new().with_release_timeouts(ms(300), ms(50));
        let t0 = Instant::now();
        kt.handle_key_event(press(KeyCode::Down), t0);

        // Still inside the OS repeat delay.
        assert!(kt.update(t0 + ms(200)).is_empty());
        assert_eq!(
            kt.update(t0 + ms(301)).as_slice(),
            &[InputEvent::KeyUp(ControlKey::P2Down)]
        );
        assert!(!kt.is_held(ControlKey::P2Down));
    }

    #[test]
    fn test_repeats_switch_to_short_timeout() {
        let mut kt = KeyTracker::new().with_release_timeouts(ms(300), ms(50));
        let t0 = Instant::now();
        kt.handle_key_event(press(KeyCode::Char('s')), t0);
        kt.handle_key_event(press(KeyCode::Char('s')), t0 + ms(250));

        assert!(kt.update(t0 + ms(290)).is_empty());
        assert_eq!(
            kt.update(t0 + ms(301)).as_slice(),
            &[InputEvent::KeyUp(ControlKey::P1Down)]
        );
    }

    #[test]
    fn test_non_control_key_does_not_extend_hold() {
        let mut kt = KeyTracker::new().with_release_timeouts(ms(50), ms(50));
        let t0 = Instant::now();
        kt.handle_key_event(press(KeyCode::Char('w')), t0);

        assert_eq!(kt.handle_key_event(press(KeyCode::Char('x')), t0 + ms(40)), None);
        assert_eq!(
            kt.update(t0 + ms(51)).as_slice(),
            &[InputEvent::KeyUp(ControlKey::P1Up)]
        );
    }

    #[test]
    fn test_start_and_quit_keys() {
        let mut kt = KeyTracker::new();
        let t0 = Instant::now();
        assert_eq!(
            kt.handle_key_event(press(KeyCode::Enter), t0),
            Some(InputEvent::Start)
        );
        assert_eq!(
            kt.handle_key_event(press(KeyCode::Char('q')), t0),
            Some(InputEvent::Quit)
        );
        // Only presses trigger actions.
        assert_eq!(kt.handle_key_event(release(KeyCode::Enter), t0), None);
    }

    #[test]
    fn test_release_all_reports_held_keys() {
        let mut kt = KeyTracker::new();
        let t0 = Instant::now();
        kt.handle_key_event(press(KeyCode::Char('w')), t0);
        kt.handle_key_event(press(KeyCode::Down), t0);

        let events = kt.release_all();
        assert_eq!(
            events.as_slice(),
            &[
                InputEvent::KeyUp(ControlKey::P1Up),
                InputEvent::KeyUp(ControlKey::P2Down)
            ]
        );
        assert!(kt.release_all().is_empty());
    }

    /// Hold `code` for `hold_ms`, with repeats starting after `delay_ms` and
    /// then every `gap_ms`, polling `update` every 16 ms like the frame loop.
    fn hold_key(
        kt: &mut KeyTracker,
        code: KeyCode,
        delay_ms: u64,
        gap_ms: u64,
        hold_ms: u64,
    ) -> Vec<(u64, InputEvent)> {
        let t0 = Instant::now();
        let mut out = Vec::new();
        let mut next_key = 0;
        for now_ms in (0..=hold_ms).step_by(16) {
            let now = t0 + ms(now_ms);
            while next_key <= now_ms {
                let ev = if next_key == 0 { press(code) } else { repeat(code) };
                if let Some(e) = kt.handle_key_event(ev, t0 + ms(next_key)) {
                    out.push((next_key, e));
                }
                next_key = if next_key == 0 { delay_ms } else { next_key + gap_ms };
            }
            out.extend(kt.update(now).into_iter().map(|e| (now_ms, e)));
        }
        out
    }

    #[test]
    fn test_default_timeouts_survive_a_500ms_repeat_delay() {
        let mut kt = KeyTracker::new();
        let events = hold_key(&mut kt, KeyCode::Char('w'), 512, 32, 1000);

        assert_eq!(events, vec![(0, InputEvent::KeyDown(ControlKey::P1Up))]);
        assert!(kt.is_held(ControlKey::P1Up));
    }

    #[test]
    fn test_default_timeouts_survive_an_x11_repeat_delay() {
        let mut kt = KeyTracker::new();
        let events = hold_key(&mut kt, KeyCode::Up, 660, 40, 1200);

        assert_eq!(events, vec![(0, InputEvent::KeyDown(ControlKey::P2Up))]);
    }

    #[test]
    fn test_short_first_timeout_releases_during_repeat_delay() {
        let mut kt = KeyTracker::new().with_first_release_timeout(ms(300));
        let events = hold_key(&mut kt, KeyCode::Char('w'), 512, 32, 1000);

        assert_eq!(events.len(), 3, "{events:?}");
        assert_eq!(events[1].1, InputEvent::KeyUp(ControlKey::P1Up));
        assert_eq!(events[2], (512, InputEvent::KeyDown(ControlKey::P1Up)));
    }
}
