//! TUI Arena (workspace facade crate).
//!
//! This package exposes `tui_arena::{core, input, term, types}` while the
//! implementation lives in dedicated crates under `crates/`, plus the pieces of
//! the frame loop that do not touch the terminal.

pub mod game_loop;

pub use tui_arena_core as core;
pub use tui_arena_input as input;
pub use tui_arena_term as term;
pub use tui_arena_types as types;
