//! Key auto-release for terminals that do not emit key release events.
//!
//! Without the keyboard enhancement protocol a terminal only reports presses,
//! and a held key shows up as a stream of fresh presses from auto-repeat. A
//! movement key that has not been pressed again within the timeout is treated
//! as released.

use std::time::{Duration, Instant};

use crate::core::{InputEvent, Key};
use crate::types::DEFAULT_KEY_RELEASE_TIMEOUT_MS;

const MOVEMENT_KEYS: [Key; 4] = [Key::W, Key::A, Key::S, Key::D];

fn slot(key: Key) -> Option<usize> {
    MOVEMENT_KEYS.iter().position(|&k| k == key)
}

/// Tracks the last press of each movement key.
#[derive(Debug, Clone)]
pub struct KeyReleaseTimer {
    timeout: Duration,
    last_press: [Option<Instant>; 4],
}

impl Default for KeyReleaseTimer {
    fn default() -> Self {
        Self::new(Duration::from_millis(u64::from(DEFAULT_KEY_RELEASE_TIMEOUT_MS)))
    }
}

impl KeyReleaseTimer {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            last_press: [None; 4],
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Record an event that is about to be applied.
    ///
    /// Presses and repeats of a movement key restart its timer; a real
    /// release stops it. Other events leave every timer alone.
    pub fn observe(&mut self, event: &InputEvent, now: Instant) {
        if let InputEvent::Key { key, pressed, .. } = *event {
            if let Some(i) = slot(key) {
                self.last_press[i] = if pressed { Some(now) } else { None };
            }
        }
    }

    /// Append a release for every movement key whose timer ran out by `now`.
    pub fn expire(&mut self, now: Instant, out: &mut Vec<InputEvent>) {
        for (i, last) in self.last_press.iter_mut().enumerate() {
            let Some(at) = *last else { continue };
            if now.saturating_duration_since(at) > self.timeout {
                *last = None;
                log::trace!("auto-releasing {:?}", MOVEMENT_KEYS[i]);
                out.push(InputEvent::key_up(MOVEMENT_KEYS[i]));
            }
        }
    }

    /// Movement keys currently considered held.
    pub fn held(&self) -> impl Iterator<Item = Key> + '_ {
        self.last_press
            .iter()
            .zip(MOVEMENT_KEYS)
            .filter_map(|(last, key)| last.map(|_| key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_auto_release_after_timeout() {
        let mut timer = KeyReleaseTimer::new(ms(50));
        let t0 = Instant::now();
        timer.observe(&InputEvent::key_down(Key::W), t0);

        let mut out = Vec::new();
        timer.expire(t0 + ms(50), &mut out);
        assert!(out.is_empty());

        timer.expire(t0 + ms(51), &mut out);
        assert_eq!(out, vec![InputEvent::key_up(Key::W)]);

        // Released once only.
        out.clear();
        timer.expire(t0 + ms(500), &mut out);
        assert!(out.is_empty());
        assert_eq!(timer.held().count(), 0);
    }

    #[test]
    fn test_repeated_presses_keep_key_held() {
        let mut timer = KeyReleaseTimer::new(ms(50));
        let t0 = Instant::now();
        let mut out = Vec::new();

        for step in 0..10 {
            let now = t0 + ms(40 * step);
            timer.observe(&InputEvent::key_down(Key::D), now);
            timer.expire(now, &mut out);
        }
        assert!(out.is_empty());
        assert_eq!(timer.held().collect::<Vec<_>>(), vec![Key::D]);
    }

    #[test]
    fn test_real_release_stops_timer() {
        let mut timer = KeyReleaseTimer::new(ms(50));
        let t0 = Instant::now();
        timer.observe(&InputEvent::key_down(Key::A), t0);
        timer.observe(&InputEvent::key_up(Key::A), t0 + ms(10));

        let mut out = Vec::new();
        timer.expire(t0 + ms(100), &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_non_movement_key_does_not_extend_timeout() {
        let mut timer = KeyReleaseTimer::new(ms(50));
        let t0 = Instant::now();
        timer.observe(&InputEvent::key_down(Key::S), t0);
        timer.observe(&InputEvent::key_down(Key::Up), t0 + ms(40));
        timer.observe(&InputEvent::key_down(Key::Char('c')), t0 + ms(45));

        let mut out = Vec::new();
        timer.expire(t0 + ms(60), &mut out);
        assert_eq!(out, vec![InputEvent::key_up(Key::S)]);
    }

    #[test]
    fn test_keys_expire_independently() {
        let mut timer = KeyReleaseTimer::new(ms(50));
        let t0 = Instant::now();
        timer.observe(&InputEvent::key_down(Key::W), t0);
        timer.observe(&InputEvent::key_down(Key::D), t0 + ms(30));

        let mut out = Vec::new();
        timer.expire(t0 + ms(60), &mut out);
        assert_eq!(out, vec![InputEvent::key_up(Key::W)]);

        out.clear();
        timer.expire(t0 + ms(90), &mut out);
        assert_eq!(out, vec![InputEvent::key_up(Key::D)]);
    }

    #[test]
    fn test_default_timeout_is_non_zero() {
        assert!(KeyReleaseTimer::default().timeout() > Duration::ZERO);
    }
}
