//! Display and asset error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while acquiring or drawing to the terminal.
#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),

    #[error("stdout is not a terminal")]
    NotATerminal,
}

/// Failures while loading media.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("unable to load {}: file not found", .0.display())]
    NotFound(PathBuf),
}
