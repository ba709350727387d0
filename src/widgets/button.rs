//! Push buttons.

use crate::command::Icon;
use crate::context::Context;
use crate::input::MouseButton;
use crate::options::{Opt, Response};
use crate::style::ColorId;

impl Context {
    /// A centred text button. Reports [`Response::SUBMIT`] when clicked.
    pub fn button(&mut self, label: &str) -> Response {
        self.button_ex(label, None, Opt::ALIGN_CENTER)
    }

    /// A button with an optional icon.
    ///
    /// The label names the button; an icon-only button (empty label) is
    /// named by its icon, so two icon-only buttons with the same icon need
    /// separate ID scopes.
    pub fn button_ex(&mut self, label: &str, icon: Option<Icon>, opt: Opt) -> Response {
        let id = match icon {
            Some(icon) if label.is_empty() => self.id(icon.code()),
            _ => self.id(label),
        };
        let rect = self.control(id, opt);

        let mut res = Response::empty();
        if self.input.mouse_pressed == MouseButton::LEFT && self.focus == id {
            res |= Response::SUBMIT;
        }

        self.draw_control_frame(id, rect, ColorId::Button, opt);
        if !label.is_empty() {
            self.draw_control_text(label, rect, ColorId::Text, opt);
        }
        if let Some(icon) = icon {
            let color = self.style.colors[ColorId::Text];
            self.draw_icon(icon, rect, color);
        }
        res
    }
}

#[cfg(test)]
mod tests {
    use crate::command::{Command, Icon};
    use crate::geometry::Rect;
    use crate::input::MouseButton;
    use crate::metrics::FixedMetrics;
    use crate::options::{Opt, Response};
    use crate::Context;

    fn frame(ctx: &mut Context, build: impl FnOnce(&mut Context) -> Response) -> Response {
        ctx.begin();
        ctx.begin_window("w", Rect::new(0, 0, 300, 200), Opt::NO_TITLE);
        let res = build(ctx);
        ctx.end_window();
        ctx.end().unwrap();
        res
    }

    #[test]
    fn click_submits_once() {
        let mut ctx = Context::new(FixedMetrics::default());
        // Default padding puts the first cell at (5, 5).
        ctx.input_mouse_move(10, 10);
        // One frame to find the hover root, one to hover the button.
        frame(&mut ctx, |ctx| ctx.button("ok"));
        frame(&mut ctx, |ctx| ctx.button("ok"));

        ctx.input_mouse_down(10, 10, MouseButton::LEFT);
        assert_eq!(frame(&mut ctx, |ctx| ctx.button("ok")), Response::SUBMIT);

        // Holding the button does not submit again.
        assert_eq!(frame(&mut ctx, |ctx| ctx.button("ok")), Response::empty());
        ctx.input_mouse_up(10, 10, MouseButton::LEFT);
        assert_eq!(frame(&mut ctx, |ctx| ctx.button("ok")), Response::empty());
    }

    #[test]
    fn right_click_does_not_submit() {
        let mut ctx = Context::new(FixedMetrics::default());
        ctx.input_mouse_move(10, 10);
        frame(&mut ctx, |ctx| ctx.button("ok"));
        ctx.input_mouse_down(10, 10, MouseButton::RIGHT);
        assert_eq!(frame(&mut ctx, |ctx| ctx.button("ok")), Response::empty());
    }

    #[test]
    fn icon_button_draws_icon() {
        let mut ctx = Context::new(FixedMetrics::default());
        frame(&mut ctx, |ctx| ctx.button_ex("", Some(Icon::Check), Opt::empty()));
        assert!(ctx.commands().any(|cmd| matches!(cmd, Command::Icon { icon: Icon::Check, .. })));
        assert!(!ctx.commands().any(|cmd| matches!(cmd, Command::Text { .. })));
    }

    #[test]
    fn icon_buttons_are_named_by_icon() {
        let mut ctx = Context::new(FixedMetrics::default());
        let a = ctx.id(Icon::Close.code());
        let b = ctx.id(Icon::Check.code());
        assert_ne!(a, b);
    }
}
