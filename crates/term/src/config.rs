//! Display configuration, read from the environment.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::types::{
    Size, DEFAULT_KEY_RELEASE_TIMEOUT_MS, FRAME_MS, SCREEN_HEIGHT, SCREEN_WIDTH,
};

/// Display configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Logical screen size in pixels.
    pub screen: Size,
    pub frame_ms: u32,
    /// Capture mouse buttons.
    pub mouse: bool,
    /// Draw a one-line status bar over the scene.
    pub status_line: bool,
    /// Media to check at startup.
    pub asset_paths: Vec<PathBuf>,
    /// How long a movement key stays held without a fresh press, on
    /// terminals that never report key releases.
    pub key_release_timeout_ms: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            screen: Size::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            frame_ms: FRAME_MS,
            mouse: true,
            status_line: true,
            asset_paths: Vec::new(),
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }
}

impl DisplayConfig {
    /// Create from environment variables.
    ///
    /// - `ARENA_SCREEN_WIDTH`, `ARENA_SCREEN_HEIGHT`: logical screen size
    /// - `ARENA_FRAME_MS`: frame budget
    /// - `ARENA_NO_MOUSE`: `1`/`true` disables mouse capture
    /// - `ARENA_NO_STATUS`: `1`/`true` hides the status bar
    /// - `ARENA_ASSETS`: comma-separated media paths
    /// - `ARENA_KEY_RELEASE_MS`: key auto-release timeout
    ///
    /// Missing or invalid values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`DisplayConfig::from_env`] with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let width = parse_positive(&lookup, "ARENA_SCREEN_WIDTH").unwrap_or(defaults.screen.w);
        let height = parse_positive(&lookup, "ARENA_SCREEN_HEIGHT").unwrap_or(defaults.screen.h);
        let frame_ms = parse_positive(&lookup, "ARENA_FRAME_MS")
            .map(|ms| ms as u32)
            .unwrap_or(defaults.frame_ms);
        let key_release_timeout_ms = parse_positive(&lookup, "ARENA_KEY_RELEASE_MS")
            .map(|ms| ms as u32)
            .unwrap_or(defaults.key_release_timeout_ms);

        let asset_paths = lookup("ARENA_ASSETS")
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(PathBuf::from)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            screen: Size::new(width, height),
            frame_ms,
            mouse: !is_set(&lookup, "ARENA_NO_MOUSE"),
            status_line: !is_set(&lookup, "ARENA_NO_STATUS"),
            asset_paths,
            key_release_timeout_ms,
        }
    }

    pub fn frame_budget(&self) -> Duration {
        Duration::from_millis(u64::from(self.frame_ms))
    }

    pub fn key_release_timeout(&self) -> Duration {
        Duration::from_millis(u64::from(self.key_release_timeout_ms))
    }
}

fn parse_positive(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<i32> {
    let raw = lookup(key)?;
    match raw.trim().parse::<i32>() {
        Ok(v) if v > 0 => Some(v),
        _ => {
            log::warn!("ignoring invalid {}={:?}", key, raw);
            None
        }
    }
}

fn is_set(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> bool {
    lookup(key)
        .map(|v| v == "1" || v.to_lowercase() == "true")
        .unwrap_or(false)
}
