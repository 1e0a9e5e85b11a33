//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework beyond crossterm. It maps
//! crossterm events into [`crate::core::InputEvent`]s and drains the pending
//! event queue once per tick without blocking.
//!
//! Key releases and bare modifier keys are only reported by terminals that
//! support the keyboard enhancement protocol; the display enables it when
//! available. Elsewhere [`KeyReleaseTimer`] releases movement keys that stop
//! auto-repeating.

pub mod map;
pub mod release;
pub mod source;

pub use tui_arena_core as core;
pub use tui_arena_types as types;

pub use map::map_event;
pub use release::KeyReleaseTimer;
pub use source::{EventSource, ScriptedEvents, TerminalEvents};
