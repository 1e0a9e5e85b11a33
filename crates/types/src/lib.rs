//! Core types module - shared value types and constants
//!
//! This module defines the fundamental types used throughout the arena.
//! All types are plain values with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, benchmarks).
//!
//! # Coordinate System
//!
//! World space is a 2D integer plane where **+y points up**. The display maps
//! it into screen space (where +y points down) around a viewport center; see
//! the `scene` module of the term crate.
//!
//! # Screen and Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SCREEN_WIDTH` | 640 | Logical screen width in pixels |
//! | `SCREEN_HEIGHT` | 480 | Logical screen height in pixels |
//! | `FRAME_MS` | 33 | Frame budget (~30 FPS) |
//! | `DEFAULT_ACCELERATION` | 3 | Velocity change per tick |
//! | `DEFAULT_MAX_VELOCITY` | 15 | Velocity magnitude cap per axis |
//! | `NUDGE_STEP` | 5 | Arrow-key positional nudge |
//! | `DEFAULT_KEY_RELEASE_TIMEOUT_MS` | 150 | Synthetic key release when the terminal sends none |
//!
//! # Examples
//!
//! ```
//! use tui_arena_types::{bound, sub_mag, Loc, Size};
//!
//! let half = Size::new(50, 100) / 2;
//! assert_eq!(half, Size::new(25, 50));
//!
//! let v = Loc::new(20, -4).bound(15);
//! assert_eq!(v, Loc::new(15, -4));
//!
//! assert_eq!(bound(10, -15), -10);
//! assert_eq!(sub_mag(-10, 3), -7);
//! ```

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Logical screen width in pixels.
pub const SCREEN_WIDTH: i32 = 640;

/// Logical screen height in pixels.
pub const SCREEN_HEIGHT: i32 = 480;

/// Frame budget in milliseconds (33ms ≈ 30 FPS).
pub const FRAME_MS: u32 = 33;

/// Velocity gained or shed per tick.
pub const DEFAULT_ACCELERATION: i32 = 3;

/// Maximum velocity magnitude on each axis.
pub const DEFAULT_MAX_VELOCITY: i32 = 15;

/// Distance an arrow key moves the player, bypassing velocity.
pub const NUDGE_STEP: i32 = 5;

/// Terminals without key-release events get a synthetic release once a
/// movement key has not been pressed again for this long.
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Clamp `value` into `[-limit, limit]`.
///
/// # Panics
///
/// Panics if `limit` is negative.
pub fn bound(limit: i32, value: i32) -> i32 {
    assert!(limit >= 0, "bound limit must be non-negative, got {limit}");
    if value > 0 {
        value.min(limit)
    } else {
        value.max(-limit)
    }
}

/// Reduce the magnitude of `value` by `amount`, never crossing zero.
///
/// Used to slow an entity down when no direction is held.
pub fn sub_mag(value: i32, amount: i32) -> i32 {
    if value > 0 {
        if amount > value {
            0
        } else {
            value - amount
        }
    } else if amount > -value {
        0
    } else {
        value + amount
    }
}

/// Width and height of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub w: i32,
    pub h: i32,
}

impl Size {
    pub const fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }
}

impl Div<i32> for Size {
    type Output = Size;

    fn div(self, rhs: i32) -> Size {
        Size::new(self.w / rhs, self.h / rhs)
    }
}

impl From<Size> for Loc {
    fn from(sz: Size) -> Loc {
        Loc::new(sz.w, sz.h)
    }
}

/// A point (or vector) in world space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Loc {
    pub x: i32,
    pub y: i32,
}

impl Loc {
    pub const ORIGIN: Loc = Loc::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Clamp each axis into `[-limit, limit]`.
    pub fn bound(self, limit: i32) -> Loc {
        Loc::new(bound(limit, self.x), bound(limit, self.y))
    }
}

impl Add for Loc {
    type Output = Loc;

    fn add(self, rhs: Loc) -> Loc {
        Loc::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Loc {
    type Output = Loc;

    fn sub(self, rhs: Loc) -> Loc {
        Loc::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Loc {
    type Output = Loc;

    fn neg(self) -> Loc {
        Loc::new(-self.x, -self.y)
    }
}

impl Mul<i32> for Loc {
    type Output = Loc;

    fn mul(self, rhs: i32) -> Loc {
        Loc::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<i32> for Loc {
    type Output = Loc;

    fn div(self, rhs: i32) -> Loc {
        Loc::new(self.x / rhs, self.y / rhs)
    }
}

/// 32-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const OPAQUE: u8 = 0xFF;

    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const RED: Color = Color::rgb(0xFF, 0x00, 0x00);
    pub const BLUE: Color = Color::rgb(0x00, 0x00, 0xFF);
    pub const GREY: Color = Color::rgb(0x99, 0x99, 0x99);

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r,
            g,
            b,
            a: Self::OPAQUE,
        }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}
