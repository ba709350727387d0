//! Checkboxes.

use crate::command::Icon;
use crate::context::Context;
use crate::geometry::Rect;
use crate::input::MouseButton;
use crate::options::{Opt, Response};
use crate::style::ColorId;

impl Context {
    /// A labelled checkbox bound to `state`.
    ///
    /// Toggles `state` and reports [`Response::CHANGE`] on click. The label
    /// names the control.
    pub fn checkbox(&mut self, label: &str, state: &mut bool) -> Response {
        let id = self.id(label);
        let rect = self.control(id, Opt::empty());

        let mut res = Response::empty();
        if self.input.mouse_pressed == MouseButton::LEFT && self.focus == id {
            res |= Response::CHANGE;
            *state = !*state;
        }

        let square = Rect::new(rect.x, rect.y, rect.h, rect.h);
        self.draw_control_frame(id, square, ColorId::Base, Opt::empty());
        if *state {
            let color = self.style.colors[ColorId::Text];
            self.draw_icon(Icon::Check, square, color);
        }
        let text = Rect::new(rect.x + square.w, rect.y, rect.w - square.w, rect.h);
        self.draw_control_text(label, text, ColorId::Text, Opt::empty());
        res
    }
}
