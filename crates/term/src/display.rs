//! Display: the game loop's view of the screen.
//!
//! Owns the terminal session, a reusable framebuffer, the scene view, and the
//! frame clock. The terminal is released when the `Display` is dropped.

use std::io::IsTerminal;
use std::time::{Duration, Instant};

use crate::clock::FrameClock;
use crate::config::DisplayConfig;
use crate::core::Game;
use crate::error::{AssetError, DisplayError};
use crate::fb::FrameBuffer;
use crate::renderer::TerminalRenderer;
use crate::scene::{SceneView, Viewport};
use crate::types::Size;

pub struct Display {
    config: DisplayConfig,
    renderer: TerminalRenderer,
    view: SceneView,
    fb: FrameBuffer,
    clock: FrameClock,
}

impl Display {
    /// Acquire the terminal.
    pub fn init(config: DisplayConfig) -> Result<Self, DisplayError> {
        if !std::io::stdout().is_terminal() {
            return Err(DisplayError::NotATerminal);
        }

        let mut renderer = TerminalRenderer::new();
        renderer.enter(config.mouse)?;

        let view = SceneView::new().with_status_line(config.status_line);
        let clock = FrameClock::new(config.frame_budget());
        log::info!(
            "display ready: screen {}x{}, frame budget {:?}",
            config.screen.w,
            config.screen.h,
            clock.budget()
        );

        Ok(Self {
            config,
            renderer,
            view,
            fb: FrameBuffer::new(0, 0),
            clock,
        })
    }

    /// Logical screen size in pixels.
    pub fn screen(&self) -> Size {
        self.config.screen
    }

    /// Check that every configured media file is present.
    ///
    /// Nothing is decoded yet; the arena draws only solid rectangles.
    pub fn load_media(&mut self) -> Result<(), AssetError> {
        for path in &self.config.asset_paths {
            if !path.exists() {
                return Err(AssetError::NotFound(path.clone()));
            }
            log::debug!("found media {}", path.display());
        }
        Ok(())
    }

    /// Key auto-release timeout input should use, or `None` when the
    /// terminal reports key releases itself.
    pub fn key_release_timeout(&self) -> Option<Duration> {
        if self.renderer.reports_key_releases() {
            None
        } else {
            Some(self.config.key_release_timeout())
        }
    }

    /// Start frame timing from now.
    pub fn start_frame(&mut self) {
        self.clock.start(Instant::now());
    }

    /// Clear and redraw the whole scene.
    pub fn paint(&mut self, game: &mut Game) -> Result<(), DisplayError> {
        game.fit_backdrop(self.config.screen);

        let (w, h) = crossterm::terminal::size()?;
        if (w, h) != (self.fb.width(), self.fb.height()) {
            self.renderer.invalidate();
        }
        self.view
            .render_into(game, self.config.screen, Viewport::new(w, h), &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }

    /// Block until the frame budget since the previous frame has elapsed.
    pub fn frame_delay(&mut self) {
        self.clock.delay();
    }

    /// Release the terminal now instead of on drop, reporting failures.
    pub fn close(mut self) -> Result<(), DisplayError> {
        self.renderer.exit()
    }
}
