//! Terminal-independent parts of the frame loop.
//!
//! A tick is: drain input → [`advance`] → paint → frame delay → bump the loop
//! counter. Painting and pacing live in [`crate::term::Display`]; everything
//! here runs headless.

use anyhow::Result;

use crate::core::{Game, InputEvent};
use crate::input::EventSource;

/// Upper bound on events expected per tick; sizes the scratch buffer.
pub const MAX_EVENTS: usize = 256;

/// Scratch buffer for [`consume_events`], reused across ticks.
pub fn event_buffer() -> Vec<InputEvent> {
    Vec::with_capacity(MAX_EVENTS)
}

/// Apply every pending event, in arrival order. Returns how many were applied.
pub fn consume_events(
    game: &mut Game,
    source: &mut impl EventSource,
    scratch: &mut Vec<InputEvent>,
) -> Result<usize> {
    scratch.clear();
    source.drain(scratch)?;
    for &event in scratch.iter() {
        game.handle_event(event);
    }
    Ok(scratch.len())
}

/// Consume input then advance motion by one tick.
pub fn advance(
    game: &mut Game,
    source: &mut impl EventSource,
    scratch: &mut Vec<InputEvent>,
) -> Result<()> {
    consume_events(game, source, scratch)?;
    game.update();
    Ok(())
}
