//! Built-in controls: labels, buttons, checkboxes, text boxes, sliders,
//! number fields, headers, tree nodes, windows, popups and panels.
//!
//! Every control is a method on [`Context`](crate::Context). Controls that
//! open a scope come as a `begin_*`/`end_*` pair plus a closure helper that
//! always runs the matching `end_*`.

mod button;
mod checkbox;
mod header;
mod label;
mod number;
mod scrollbar;
mod textbox;
mod window;

use std::fmt::Write;

use crate::context::{Context, Real};
use crate::geometry::Rect;
use crate::options::Opt;
use crate::style::ColorId;

/// Format `value` with `precision` decimals, dropping trailing zeros.
///
/// Used to seed the text of a number field entering edit mode.
pub fn format_real(out: &mut String, value: Real, precision: usize) {
    out.clear();
    let _ = write!(out, "{value:.precision$}");
    if out.contains('.') {
        let trimmed = out.trim_end_matches('0').trim_end_matches('.').len();
        out.truncate(trimmed);
    }
    if out.as_str() == "-0" {
        out.replace_range(.., "0");
    }
}

impl Context {
    /// Draw `value` as control text without allocating.
    fn draw_real_text(&mut self, value: Real, precision: usize, rect: Rect, opt: Opt) {
        let mut text = std::mem::take(&mut self.fmt_buf);
        text.clear();
        let _ = write!(text, "{value:.precision$}");
        self.draw_control_text(&text, rect, ColorId::Text, opt);
        self.fmt_buf = text;
    }
}
