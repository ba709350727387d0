//! Clip-aware draw helpers.
//!
//! Every primitive is tested against the current clip rect first. Rects are
//! intersected with the clip and emitted pre-clipped; text and icons that
//! straddle the clip edge are bracketed by a `Clip` command and a restoring
//! unclipped one.

use super::Context;
use crate::clip::Clip;
use crate::command::Icon;
use crate::geometry::{Color, Rect, Vec2};
use crate::id::Id;
use crate::options::Opt;
use crate::style::{ColorId, FontId};

/// The stock frame painter: a filled rect plus a one-pixel border.
///
/// Scrollbar and title-bar colours are drawn without a border, as is any
/// frame when the border colour is fully transparent.
pub fn default_draw_frame(ctx: &mut Context, rect: Rect, color: ColorId) {
    let fill = ctx.style.colors[color];
    ctx.draw_rect(rect, fill);
    if color.is_borderless() {
        return;
    }
    let border = ctx.style.colors[ColorId::Border];
    if !border.is_transparent() {
        ctx.draw_box(rect.expand(1), border);
    }
}

impl Context {
    // -- clip stack ---------------------------------------------------------

    /// Push `rect` intersected with the current clip.
    pub fn push_clip_rect(&mut self, rect: Rect) {
        self.clips.push(rect);
    }

    /// # Panics
    ///
    /// Panics if the clip stack is empty.
    pub fn pop_clip_rect(&mut self) {
        self.clips.pop();
    }

    /// The effective clip rectangle.
    pub fn clip_rect(&self) -> Rect {
        self.clips.top()
    }

    pub fn check_clip(&self, rect: Rect) -> Clip {
        self.clips.check(rect)
    }

    // -- primitives ---------------------------------------------------------

    /// Emit a raw clip command for the renderer.
    pub fn set_clip(&mut self, rect: Rect) {
        self.commands.push_clip(rect);
    }

    /// Fill `rect`, pre-clipped; nothing is emitted if it is clipped away.
    pub fn draw_rect(&mut self, rect: Rect, color: Color) {
        let rect = rect.intersect(self.clips.top());
        if !rect.is_empty() {
            self.commands.push_rect(rect, color);
        }
    }

    /// A one-pixel outline just inside `rect`.
    pub fn draw_box(&mut self, rect: Rect, color: Color) {
        self.draw_rect(Rect::new(rect.x + 1, rect.y, rect.w - 2, 1), color);
        self.draw_rect(Rect::new(rect.x + 1, rect.bottom() - 1, rect.w - 2, 1), color);
        self.draw_rect(Rect::new(rect.x, rect.y, 1, rect.h), color);
        self.draw_rect(Rect::new(rect.right() - 1, rect.y, 1, rect.h), color);
    }

    pub fn draw_text(&mut self, font: FontId, text: &str, pos: Vec2, color: Color) {
        let rect = Rect::new(pos.x, pos.y, self.text_width(font, text), self.text_height(font));
        self.clipped(rect, |ctx| {
            ctx.commands.push_text(font, text, pos, color);
        });
    }

    pub fn draw_icon(&mut self, icon: Icon, rect: Rect, color: Color) {
        self.clipped(rect, |ctx| {
            ctx.commands.push_icon(icon, rect, color);
        });
    }

    /// Run `emit` unless `rect` is fully clipped, bracketing it with clip
    /// commands when only part of it is visible.
    fn clipped(&mut self, rect: Rect, emit: impl FnOnce(&mut Self)) {
        match self.check_clip(rect) {
            Clip::All => {}
            Clip::None => emit(self),
            Clip::Part => {
                let clip = self.clip_rect();
                self.set_clip(clip);
                emit(self);
                self.set_clip(Rect::UNCLIPPED);
            }
        }
    }

    // -- control chrome -----------------------------------------------------

    /// Paint a frame through [`draw_frame_fn`](Context::draw_frame_fn).
    pub fn draw_frame(&mut self, rect: Rect, color: ColorId) {
        let paint = self.draw_frame_fn;
        paint(self, rect, color);
    }

    /// Paint a control's frame in its focus or hover variant.
    pub fn draw_control_frame(&mut self, id: Id, rect: Rect, color: ColorId, opt: Opt) {
        if opt.contains(Opt::NO_FRAME) {
            return;
        }
        let color = if self.focus == id {
            color.focused()
        } else if self.hover == id {
            color.hovered()
        } else {
            color
        };
        self.draw_frame(rect, color);
    }

    /// Draw `text` inside `rect`, vertically centred and aligned per `opt`.
    pub fn draw_control_text(&mut self, text: &str, rect: Rect, color: ColorId, opt: Opt) {
        let font = self.style.font;
        let tw = self.text_width(font, text);
        let th = self.text_height(font);
        let x = if opt.contains(Opt::ALIGN_CENTER) {
            rect.x + (rect.w - tw) / 2
        } else if opt.contains(Opt::ALIGN_RIGHT) {
            rect.right() - tw - self.style.padding
        } else {
            rect.x + self.style.padding
        };
        let pos = Vec2::new(x, rect.y + (rect.h - th) / 2);

        self.push_clip_rect(rect);
        let color = self.style.colors[color];
        self.draw_text(font, text, pos, color);
        self.pop_clip_rect();
    }
}

// ===========================================================================
// Tests
// ===========================================================================
