//! SceneView: maps the game world into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Rendering happens in two steps:
//! 1. world → logical screen: [`display_rect`] (+y up becomes +y down,
//!    center-origin becomes top-left-origin)
//! 2. logical screen → terminal cells: each axis is scaled by
//!    `viewport / screen` and clipped

use crate::core::{Entity, Game};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Color, Loc, Size};

/// Terminal viewport dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle in logical screen pixels, `(x, y)` top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

/// Top-left screen position of a rectangle centered on `loc` in world space.
pub fn display_loc(loc: Loc, size: Size, center: Loc, screen: Size) -> Loc {
    let mut rel = loc - center;
    rel.y = -rel.y;
    rel = rel - Loc::from(size / 2);
    rel + Loc::from(screen / 2)
}

/// Screen rectangle covered by `entity` when `center` is at the screen's middle.
pub fn display_rect(entity: &Entity, center: Loc, screen: Size) -> Rect {
    let tl = display_loc(entity.loc, entity.size, center, screen);
    Rect {
        x: tl.x,
        y: tl.y,
        w: entity.size.w,
        h: entity.size.h,
    }
}

/// Upward-pointing triangle inscribed in `rect`: top-center, bottom-left,
/// bottom-right.
pub fn triangle_vertices(rect: Rect) -> [Loc; 3] {
    [
        Loc::new(rect.x + rect.w / 2, rect.y),
        Loc::new(rect.x, rect.y + rect.h),
        Loc::new(rect.x + rect.w, rect.y + rect.h),
    ]
}

/// Project a screen rectangle onto terminal cells as `(x, y, w, h)`.
///
/// A non-empty rectangle always covers at least one cell on each axis so small
/// entities stay visible.
pub fn cell_rect(rect: Rect, screen: Size, viewport: Viewport) -> Option<(i32, i32, i32, i32)> {
    if screen.w <= 0 || screen.h <= 0 || rect.w <= 0 || rect.h <= 0 {
        return None;
    }
    let (x0, x1) = scale_span(rect.x, rect.w, screen.w, viewport.width);
    let (y0, y1) = scale_span(rect.y, rect.h, screen.h, viewport.height);
    Some((x0, y0, x1 - x0, y1 - y0))
}

fn scale_span(start: i32, len: i32, screen: i32, cells: u16) -> (i32, i32) {
    let cells = i64::from(cells);
    let screen = i64::from(screen);
    let a = (i64::from(start) * cells).div_euclid(screen);
    let mut b = ((i64::from(start) + i64::from(len)) * cells).div_euclid(screen);
    if b == a {
        b = a + 1;
    }
    (clamp_i32(a), clamp_i32(b))
}

fn clamp_i32(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// A lightweight terminal renderer for the arena.
#[derive(Debug, Clone, Default)]
pub struct SceneView {
    status_line: bool,
}

impl SceneView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status_line(mut self, enabled: bool) -> Self {
        self.status_line = enabled;
        self
    }

    /// Render the game into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, game: &Game, screen: Size, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Default::default());

        self.draw_entity(fb, &game.backdrop, game.center, screen, viewport);
        for entity in game.entities() {
            self.draw_entity(fb, entity, game.center, screen, viewport);
        }

        if self.status_line {
            self.draw_status(fb, game);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, game: &Game, screen: Size, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, screen, viewport, &mut fb);
        fb
    }

    fn draw_entity(
        &self,
        fb: &mut FrameBuffer,
        entity: &Entity,
        center: Loc,
        screen: Size,
        viewport: Viewport,
    ) {
        log::trace!("rendering {} {}", entity.id(), entity.color);
        let rect = display_rect(entity, center, screen);
        if let Some((x, y, w, h)) = cell_rect(rect, screen, viewport) {
            fb.fill_rect(x, y, w, h, ' ', solid(entity.color));
        }
    }

    fn draw_status(&self, fb: &mut FrameBuffer, game: &Game) {
        let style = CellStyle {
            fg: Rgb::new(230, 230, 230),
            bg: Rgb::new(20, 20, 28),
            bold: false,
        };
        let label = CellStyle { bold: true, ..style };
        let width = fb.width() as i32;
        fb.fill_rect(0, 0, width, 1, ' ', style);

        let mut x = 0;
        fb.put_str(x, 0, "LOOP ", label);
        x = fb.put_i64(x + 5, 0, game.loop_count as i64, style) + 2;

        if let Some(p) = game.player() {
            fb.put_str(x, 0, "POS ", label);
            x = fb.put_i64(x + 4, 0, i64::from(p.loc.x), style);
            fb.put_char(x, 0, ',', style);
            x = fb.put_i64(x + 1, 0, i64::from(p.loc.y), style) + 2;

            fb.put_str(x, 0, "VEL ", label);
            x = fb.put_i64(x + 4, 0, i64::from(p.movement.velocity.x), style);
            fb.put_char(x, 0, ',', style);
            x = fb.put_i64(x + 1, 0, i64::from(p.movement.velocity.y), style) + 2;
        }

        let c = &game.controller;
        let latches = [
            (c.up, 'W'),
            (c.left, 'A'),
            (c.down, 'S'),
            (c.right, 'D'),
            (c.mouse_left, 'L'),
            (c.mouse_right, 'R'),
        ];
        for (held, ch) in latches {
            fb.put_char(x, 0, if held { ch } else { '.' }, style);
            x = x.saturating_add(1);
        }
    }
}

fn solid(color: Color) -> CellStyle {
    CellStyle::solid(Rgb::from(color))
}
