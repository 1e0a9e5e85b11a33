//! Latched input state read by the per-tick update.

use crate::types::Loc;

/// Six latches: the w/a/s/d movement keys and two mouse buttons.
///
/// Only the input handlers in [`crate::Game`] write these; the update step reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Controller {
    /// `w`
    pub up: bool,
    /// `a`
    pub left: bool,
    /// `s`
    pub down: bool,
    /// `d`
    pub right: bool,
    pub mouse_left: bool,
    pub mouse_right: bool,
}

impl Controller {
    /// Held direction, with world +y pointing up.
    ///
    /// Opposing keys cancel out.
    pub fn direction(&self) -> Loc {
        Loc::new(
            i32::from(self.right) - i32::from(self.left),
            i32::from(self.up) - i32::from(self.down),
        )
    }
}
