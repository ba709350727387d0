//! Windows, popups and panels.
//!
//! Windows and popups are root containers: each gets its own z-index and a
//! region of the command buffer bracketed by jumps, so it can be drawn above
//! or below other roots regardless of call order. Panels are nested
//! scrollable regions placed by the parent layout.

use crate::command::Icon;
use crate::context::Context;
use crate::geometry::{Rect, Vec2};
use crate::input::MouseButton;
use crate::options::Opt;
use crate::style::ColorId;

const POPUP: Opt = Opt::POPUP
    .union(Opt::AUTO_SIZE)
    .union(Opt::NO_RESIZE)
    .union(Opt::NO_SCROLL)
    .union(Opt::NO_TITLE)
    .union(Opt::CLOSED);

impl Context {
    // -- windows ------------------------------------------------------------

    /// Open a window named by `title`.
    ///
    /// `rect` is only used the first time the window is seen; afterwards the
    /// window keeps its own (dragged, resized) geometry. Returns `false` when
    /// the window is closed, in which case nothing was pushed and
    /// [`end_window`](Self::end_window) must not be called.
    pub fn begin_window(&mut self, title: &str, rect: Rect, opt: Opt) -> bool {
        let id = self.id(title);
        let Some(idx) = self.container_index(id, opt) else {
            return false;
        };
        if !self.containers[idx].open {
            return false;
        }
        self.ids.push_id(id);

        if self.containers[idx].rect.w == 0 {
            self.containers[idx].rect = rect;
        }
        self.begin_root_container(idx);
        let rect = self.containers[idx].rect;
        let mut body = rect;

        if !opt.contains(Opt::NO_FRAME) {
            self.draw_frame(rect, ColorId::WindowBg);
        }

        if !opt.contains(Opt::NO_TITLE) {
            let title_bar = Rect::new(rect.x, rect.y, rect.w, self.style.title_height);
            self.draw_frame(title_bar, ColorId::TitleBg);

            let title_id = self.id("!title");
            self.update_control(title_id, title_bar, opt);
            self.draw_control_text(title, title_bar, ColorId::TitleText, opt);
            if title_id == self.focus && self.input.mouse_down == MouseButton::LEFT {
                let delta = self.input.mouse_delta;
                let cnt = &mut self.containers[idx];
                cnt.rect = cnt.rect.translate(delta);
            }
            body.y += title_bar.h;
            body.h -= title_bar.h;

            if !opt.contains(Opt::NO_CLOSE) {
                let close_id = self.id("!close");
                let side = title_bar.h;
                let r = Rect::new(title_bar.right() - side, title_bar.y, side, side);
                let color = self.style.colors[ColorId::TitleText];
                self.draw_icon(Icon::Close, r, color);
                self.update_control(close_id, r, opt);
                if self.input.mouse_pressed == MouseButton::LEFT && close_id == self.focus {
                    self.containers[idx].open = false;
                }
            }
        }

        self.push_container_body(idx, body, opt);

        if !opt.contains(Opt::NO_RESIZE) {
            let side = self.style.title_height;
            let resize_id = self.id("!resize");
            let r = Rect::new(rect.right() - side, rect.bottom() - side, side, side);
            self.update_control(resize_id, r, opt);
            if resize_id == self.focus && self.input.mouse_down == MouseButton::LEFT {
                let min = Vec2::new(side * 4, side * 8 / 3);
                let delta = self.input.mouse_delta;
                let cnt = &mut self.containers[idx];
                cnt.rect.w = (cnt.rect.w + delta.x).max(min.x);
                cnt.rect.h = (cnt.rect.h + delta.y).max(min.y);
            }
        }

        if opt.contains(Opt::AUTO_SIZE) {
            let inner = self.layout_body();
            let cnt = &mut self.containers[idx];
            cnt.rect.w = (cnt.content_size.x + (cnt.rect.w - inner.w)).max(1);
            cnt.rect.h = (cnt.content_size.y + (cnt.rect.h - inner.h)).max(1);
        }

        // Popups close when the mouse is pressed anywhere outside them.
        if opt.contains(Opt::POPUP) && !self.input.mouse_pressed.is_empty() && self.hover_root != Some(idx) {
            self.containers[idx].open = false;
        }

        let body = self.containers[idx].body;
        self.push_clip_rect(body);
        true
    }

    /// Close the window opened by a successful
    /// [`begin_window`](Self::begin_window).
    pub fn end_window(&mut self) {
        self.pop_clip_rect();
        self.end_root_container();
    }

    /// Run `f` inside the window if it is open.
    pub fn window<R>(&mut self, title: &str, rect: Rect, opt: Opt, f: impl FnOnce(&mut Self) -> R) -> Option<R> {
        if !self.begin_window(title, rect, opt) {
            return None;
        }
        let res = f(self);
        self.end_window();
        Some(res)
    }

    // -- popups -------------------------------------------------------------

    /// Open the popup `name` at the mouse cursor, above everything else.
    pub fn open_popup(&mut self, name: &str) {
        let id = self.id(name);
        let idx = self.ensure_container(id);
        // Become the hover root right away so the opening click does not
        // close it again.
        self.hover_root = Some(idx);
        self.next_hover_root = Some(idx);
        let pos = self.mouse_pos();
        let cnt = &mut self.containers[idx];
        cnt.rect = Rect::new(pos.x, pos.y, 1, 1);
        cnt.open = true;
        self.bring_to_front(idx);
    }

    /// Open an auto-sized popup previously opened with
    /// [`open_popup`](Self::open_popup). Returns `false` while it is closed.
    pub fn begin_popup(&mut self, name: &str) -> bool {
        self.begin_window(name, Rect::ZERO, POPUP)
    }

    pub fn end_popup(&mut self) {
        self.end_window();
    }

    pub fn popup<R>(&mut self, name: &str, f: impl FnOnce(&mut Self) -> R) -> Option<R> {
        self.window(name, Rect::ZERO, POPUP, f)
    }

    // -- panels -------------------------------------------------------------

    /// Open a scrollable panel in the next layout cell.
    ///
    /// The panel's name also opens an ID scope, so controls inside it may
    /// reuse labels from outside. Always pair with
    /// [`end_panel`](Self::end_panel).
    pub fn begin_panel(&mut self, name: &str) {
        self.begin_panel_ex(name, Opt::empty());
    }

    pub fn begin_panel_ex(&mut self, name: &str, opt: Opt) {
        let id = self.push_id(name);
        let idx = self.ensure_container(id);
        let rect = self.layout_next();
        self.containers[idx].rect = rect;
        if !opt.contains(Opt::NO_FRAME) {
            self.draw_frame(rect, ColorId::PanelBg);
        }
        self.container_stack.push(idx);
        self.push_container_body(idx, rect, opt);
        let body = self.containers[idx].body;
        self.push_clip_rect(body);
    }

    pub fn end_panel(&mut self) {
        self.pop_clip_rect();
        self.pop_container();
    }

    /// Run `f` inside a panel.
    pub fn panel<R>(&mut self, name: &str, f: impl FnOnce(&mut Self) -> R) -> R {
        self.begin_panel(name);
        let res = f(self);
        self.end_panel();
        res
    }
}

// ===========================================================================
// Tests
// ===========================================================================
