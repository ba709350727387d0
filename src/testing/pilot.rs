//! Pilot: drive a context frame by frame without a terminal.

use crate::command::Command;
use crate::config::Config;
use crate::context::Context;
use crate::error::FrameError;
use crate::input::{Key, MouseButton};
use crate::style::Style;
use crate::term::{Canvas, CellMetrics};

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless engine driver for tests.
///
/// Input calls only queue state on the context; nothing happens until the
/// next [`frame`](Self::frame). Remember that hover is resolved one frame
/// late, so a click on a freshly drawn control needs a frame with the mouse
/// already in place first.
///
/// # Examples
///
/// ```
/// use gilt_imui::testing::Pilot;
/// use gilt_imui::{Opt, Rect, Response};
///
/// let mut pilot = Pilot::new(30, 6);
/// let ui = |ctx: &mut gilt_imui::Context| {
///     ctx.window("w", Rect::new(0, 0, 30, 6), Opt::NO_TITLE, |ctx| ctx.button("Go"))
/// };
/// pilot.move_to(2, 0);
/// pilot.frame(ui).unwrap();
/// pilot.click(2, 0);
/// let res = pilot.frame(ui).unwrap();
/// assert_eq!(res, Some(Response::SUBMIT));
/// ```
pub struct Pilot {
    ctx: Context,
    canvas: Canvas,
}

impl Pilot {
    /// A `width` x `height` cell grid with [`Style::terminal`].
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_config(width, height, Config::default())
    }

    pub fn with_config(width: u16, height: u16, config: Config) -> Self {
        Self {
            ctx: Context::with_config(CellMetrics, config).with_style(Style::terminal()),
            canvas: Canvas::new(width, height),
        }
    }

    /// Replace the style (builder).
    pub fn with_style(mut self, style: Style) -> Self {
        self.ctx.style = style;
        self
    }

    pub fn ctx(&self) -> &Context {
        &self.ctx
    }

    pub fn ctx_mut(&mut self) -> &mut Context {
        &mut self.ctx
    }

    // ── Frames ───────────────────────────────────────────────────────

    /// Run one frame: `begin`, then `f`, then `end`.
    pub fn frame<R>(&mut self, f: impl FnOnce(&mut Context) -> R) -> Result<R, FrameError> {
        self.ctx.begin();
        let res = f(&mut self.ctx);
        self.ctx.end()?;
        Ok(res)
    }

    // ── Input simulation ─────────────────────────────────────────────

    pub fn move_to(&mut self, x: i32, y: i32) {
        self.ctx.input_mouse_move(x, y);
    }

    /// Press the left button at (x, y).
    pub fn press(&mut self, x: i32, y: i32) {
        self.ctx.input_mouse_down(x, y, MouseButton::LEFT);
    }

    pub fn release(&mut self, x: i32, y: i32) {
        self.ctx.input_mouse_up(x, y, MouseButton::LEFT);
    }

    /// Press and release within the same frame.
    pub fn click(&mut self, x: i32, y: i32) {
        self.press(x, y);
        self.release(x, y);
    }

    pub fn scroll(&mut self, dx: i32, dy: i32) {
        self.ctx.input_scroll(dx, dy);
    }

    pub fn type_text(&mut self, text: &str) {
        self.ctx.input_text(text);
    }

    pub fn key_down(&mut self, key: Key) {
        self.ctx.input_key_down(key);
    }

    pub fn key_up(&mut self, key: Key) {
        self.ctx.input_key_up(key);
    }

    /// Press and release `key` within the same frame.
    pub fn tap_key(&mut self, key: Key) {
        self.key_down(key);
        self.key_up(key);
    }

    // ── Output ───────────────────────────────────────────────────────

    /// The last frame's commands in z-order.
    pub fn commands(&self) -> Vec<Command<'_>> {
        self.ctx.commands().collect()
    }

    /// Rasterize the last frame onto a blank grid and return its text.
    pub fn render_to_string(&mut self) -> String {
        self.canvas.clear();
        self.canvas.replay(self.ctx.commands());
        self.canvas.to_text()
    }

    /// The grid as of the last [`render_to_string`](Self::render_to_string).
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }
}

// ===========================================================================
// Tests
// ===========================================================================
