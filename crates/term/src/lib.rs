//! Terminal display module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! World rectangles are projected into a logical pixel screen, scaled onto
//! terminal cells, and written into a framebuffer that is flushed to the
//! terminal with diffing.
//!
//! Layers:
//! - [`scene`]: pure world-to-screen transform and rasterisation (no I/O)
//! - [`fb`]: the framebuffer
//! - [`renderer`]: terminal acquisition and framebuffer flushing
//! - [`clock`]: frame pacing
//! - [`display`]: ties the above together for the game loop

pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod fb;
pub mod renderer;
pub mod scene;

pub use tui_arena_core as core;
pub use tui_arena_types as types;

pub use clock::{FrameClock, SessionTimer};
pub use config::DisplayConfig;
pub use display::Display;
pub use error::{AssetError, DisplayError};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use scene::{display_loc, display_rect, triangle_vertices, Rect, SceneView, Viewport};
