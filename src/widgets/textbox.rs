//! Single-line text input.

use crate::context::Context;
use crate::geometry::Rect;
use crate::id::{Id, IdKey};
use crate::input::Key;
use crate::options::{Opt, Response};
use crate::style::ColorId;

impl Context {
    /// A text box editing `buf`, named by `key`.
    pub fn textbox<'a>(&mut self, key: impl Into<IdKey<'a>>, buf: &mut String) -> Response {
        self.textbox_ex(key, buf, Opt::empty())
    }

    /// A text box with options.
    ///
    /// While focused, typed text is appended and backspace removes the last
    /// character (both report [`Response::CHANGE`]); return drops focus and
    /// reports [`Response::SUBMIT`]. Focus survives mouse release.
    pub fn textbox_ex<'a>(&mut self, key: impl Into<IdKey<'a>>, buf: &mut String, opt: Opt) -> Response {
        let id = self.id(key);
        self.textbox_raw(buf, id, opt)
    }

    pub(crate) fn textbox_raw(&mut self, buf: &mut String, id: Id, opt: Opt) -> Response {
        let opt = opt | Opt::HOLD_FOCUS;
        let rect = self.control(id, opt);
        let mut res = Response::empty();

        if self.focus == id {
            if !self.input.text.is_empty() {
                buf.push_str(&self.input.text);
                res |= Response::CHANGE;
            }
            if self.input.key_pressed.contains(Key::BACKSPACE) && buf.pop().is_some() {
                res |= Response::CHANGE;
            }
            if self.input.key_pressed.contains(Key::RETURN) {
                self.set_focus(Id::NONE);
                res |= Response::SUBMIT;
            }
        }

        self.draw_control_frame(id, rect, ColorId::Base, opt);
        if self.focus == id {
            self.draw_caret_text(buf, rect);
        } else {
            self.draw_control_text(buf, rect, ColorId::Text, opt);
        }
        res
    }

    /// Focused rendering: text scrolled so the caret stays visible.
    fn draw_caret_text(&mut self, buf: &str, rect: Rect) {
        let font = self.style.font;
        let padding = self.style.padding;
        let color = self.style.colors[ColorId::Text];
        let textw = self.text_width(font, buf);
        let texth = self.text_height(font);
        let overflow = rect.w - padding - textw - 1;
        let x = rect.x + overflow.min(padding);
        let y = rect.y + (rect.h - texth) / 2;

        self.push_clip_rect(rect);
        self.draw_text(font, buf, crate::geometry::Vec2::new(x, y), color);
        self.draw_rect(Rect::new(x + textw, y, 1, texth), color);
        self.pop_clip_rect();
    }
}

#[cfg(test)]
mod tests {
    use crate::command::Command;
    use crate::geometry::Rect;
    use crate::id::Id;
    use crate::input::{Key, MouseButton};
    use crate::metrics::FixedMetrics;
    use crate::options::{Opt, Response};
    use crate::Context;

    fn frame(ctx: &mut Context, buf: &mut String) -> Response {
        ctx.begin();
        ctx.begin_window("w", Rect::new(0, 0, 300, 200), Opt::NO_TITLE);
        let res = ctx.textbox("name", buf);
        ctx.end_window();
        ctx.end().unwrap();
        res
    }

    fn focused(ctx: &mut Context, buf: &mut String) {
        ctx.input_mouse_move(10, 10);
        frame(ctx, buf);
        ctx.input_mouse_down(10, 10, MouseButton::LEFT);
        ctx.input_mouse_up(10, 10, MouseButton::LEFT);
        frame(ctx, buf);
        assert_ne!(ctx.focus(), Id::NONE);
    }

    #[test]
    fn typing_appends() {
        let mut ctx = Context::new(FixedMetrics::default());
        let mut buf = String::from("ab");
        focused(&mut ctx, &mut buf);

        ctx.input_text("cd");
        assert_eq!(frame(&mut ctx, &mut buf), Response::CHANGE);
        assert_eq!(buf, "abcd");
        // Focus is held after release.
        assert_ne!(ctx.focus(), Id::NONE);
    }

    #[test]
    fn backspace_removes_whole_char() {
        let mut ctx = Context::new(FixedMetrics::default());
        let mut buf = String::from("né");
        focused(&mut ctx, &mut buf);
        ctx.input_key_down(Key::BACKSPACE);
        ctx.input_key_up(Key::BACKSPACE);
        assert_eq!(frame(&mut ctx, &mut buf), Response::CHANGE);
        assert_eq!(buf, "n");
    }

    #[test]
    fn backspace_on_empty_is_quiet() {
        let mut ctx = Context::new(FixedMetrics::default());
        let mut buf = String::new();
        focused(&mut ctx, &mut buf);
        ctx.input_key_down(Key::BACKSPACE);
        assert_eq!(frame(&mut ctx, &mut buf), Response::empty());
    }

    #[test]
    fn return_submits_and_unfocuses() {
        let mut ctx = Context::new(FixedMetrics::default());
        let mut buf = String::from("x");
        focused(&mut ctx, &mut buf);
        ctx.input_key_down(Key::RETURN);
        assert_eq!(frame(&mut ctx, &mut buf), Response::SUBMIT);
        assert_eq!(ctx.focus(), Id::NONE);
    }

    #[test]
    fn unfocused_ignores_text() {
        let mut ctx = Context::new(FixedMetrics::default());
        let mut buf = String::from("x");
        ctx.input_text("zzz");
        assert_eq!(frame(&mut ctx, &mut buf), Response::empty());
        assert_eq!(buf, "x");
    }

    #[test]
    fn focused_box_draws_caret() {
        let mut ctx = Context::new(FixedMetrics::new(6, 10, 3));
        let mut buf = String::from("abc");
        focused(&mut ctx, &mut buf);
        let text_pos = ctx.commands().find_map(|c| match c {
            Command::Text { text: "abc", pos, .. } => Some(pos),
            _ => None,
        });
        let caret = ctx.commands().filter_map(|c| match c {
            Command::Rect { rect, .. } if rect.w == 1 && rect.h == 13 => Some(rect),
            _ => None,
        });
        let caret: Vec<Rect> = caret.collect();
        let pos = text_pos.expect("text drawn");
        assert_eq!(caret, vec![Rect::new(pos.x + 18, pos.y, 1, 13)]);
    }
}
