//! Event sources drained once per tick.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event;

use crate::core::InputEvent;
use crate::map::map_event;
use crate::release::KeyReleaseTimer;

/// Something that can hand over every input event that arrived since the
/// previous tick.
pub trait EventSource {
    /// Append all pending events to `out` without blocking.
    fn drain(&mut self, out: &mut Vec<InputEvent>) -> Result<()>;
}

/// Reads the crossterm event queue.
#[derive(Debug, Default)]
pub struct TerminalEvents {
    auto_release: Option<KeyReleaseTimer>,
}

impl TerminalEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Release movement keys that are not pressed again within `timeout`.
    ///
    /// Needed when the terminal never reports key releases.
    pub fn with_key_release_timeout(mut self, timeout: Duration) -> Self {
        self.auto_release = Some(KeyReleaseTimer::new(timeout));
        self
    }

    pub fn key_release_timeout(&self) -> Option<Duration> {
        self.auto_release.as_ref().map(KeyReleaseTimer::timeout)
    }
}

impl EventSource for TerminalEvents {
    fn drain(&mut self, out: &mut Vec<InputEvent>) -> Result<()> {
        let now = Instant::now();
        while event::poll(Duration::ZERO)? {
            let ev = event::read()?;
            match map_event(&ev) {
                Some(mapped) => {
                    if let Some(timer) = &mut self.auto_release {
                        timer.observe(&mapped, now);
                    }
                    out.push(mapped);
                }
                None => log::trace!("ignored terminal event {:?}", ev),
            }
        }
        if let Some(timer) = &mut self.auto_release {
            timer.expire(now, out);
        }
        Ok(())
    }
}

/// Pre-recorded batches of events, one batch per tick.
///
/// Useful for headless runs and tests. Once exhausted, every drain is empty.
#[derive(Debug, Default)]
pub struct ScriptedEvents {
    ticks: VecDeque<Vec<InputEvent>>,
}

impl ScriptedEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a batch to be delivered on a later tick.
    pub fn push_tick(&mut self, events: impl IntoIterator<Item = InputEvent>) -> &mut Self {
        self.ticks.push_back(events.into_iter().collect());
        self
    }

    pub fn remaining_ticks(&self) -> usize {
        self.ticks.len()
    }
}

impl EventSource for ScriptedEvents {
    fn drain(&mut self, out: &mut Vec<InputEvent>) -> Result<()> {
        if let Some(batch) = self.ticks.pop_front() {
            out.extend(batch);
        }
        Ok(())
    }
}
