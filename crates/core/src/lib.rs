//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the arena's state and simulation rules.
//! It has **zero dependencies** on the terminal or any I/O, making it:
//!
//! - **Deterministic**: the same event sequence always yields the same world
//! - **Testable**: input handling and movement are plain method calls
//! - **Portable**: any backend that can produce [`InputEvent`]s can drive it
//!
//! # Module Structure
//!
//! - [`movement`]: per-axis accelerate/decelerate integrator bounded by a max speed
//! - [`entity`]: entity ids and the entity value type
//! - [`controller`]: latched key and mouse-button state
//! - [`event`]: backend-independent input events
//! - [`game`]: the entity store, input handlers and the per-tick update
//!
//! # Example
//!
//! ```
//! use tui_arena_core::{Game, InputEvent, Key};
//! use tui_arena_types::Loc;
//!
//! let mut game = Game::new();
//! game.setup_demo_scene();
//!
//! // Hold "d" for one tick.
//! game.handle_event(InputEvent::key_down(Key::D));
//! game.update();
//!
//! let player = game.player().unwrap();
//! assert_eq!(player.loc, Loc::new(3, 0));
//! ```

pub mod controller;
pub mod entity;
pub mod event;
pub mod game;
pub mod movement;

pub use tui_arena_types as types;

// Re-export commonly used types for convenience
pub use controller::Controller;
pub use entity::{Entity, EntityId};
pub use event::{InputEvent, Key, MouseButton};
pub use game::Game;
pub use movement::{update_vel, Movement};
