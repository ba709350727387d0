//! Sliders and draggable number fields.
//!
//! Shift-clicking either control switches it to a text box seeded with the
//! current value. The edit commits when confirmed with return or when focus
//! moves away; text that does not parse commits `0.0`. One edit buffer is
//! shared by all fields. If another field starts editing before the first
//! one committed, the unfinished edit is parked and committed the next time
//! its own field runs.

use std::mem;

use tracing::debug;

use super::format_real;
use crate::context::{Context, Real};
use crate::geometry::Rect;
use crate::id::{Id, IdKey};
use crate::input::{Key, MouseButton};
use crate::options::{Opt, Response};
use crate::style::ColorId;

const DEFAULT_PRECISION: usize = 2;

fn parse_real(text: &str) -> Real {
    text.trim().parse().unwrap_or(0.0)
}

fn clamp_real(v: Real, low: Real, high: Real) -> Real {
    v.max(low).min(high)
}

impl Context {
    /// A horizontal slider over `[low, high]`.
    pub fn slider<'a>(&mut self, key: impl Into<IdKey<'a>>, value: &mut Real, low: Real, high: Real) -> Response {
        self.slider_ex(key, value, low, high, 0.0, DEFAULT_PRECISION, Opt::ALIGN_CENTER)
    }

    /// A slider snapping to multiples of `step` (0 disables snapping),
    /// showing `precision` decimals.
    #[allow(clippy::too_many_arguments)]
    pub fn slider_ex<'a>(
        &mut self,
        key: impl Into<IdKey<'a>>,
        value: &mut Real,
        low: Real,
        high: Real,
        step: Real,
        precision: usize,
        opt: Opt,
    ) -> Response {
        let id = self.id(key);
        let last = *value;
        let mut v = last;

        let committed = self.commit_parked_number(id, &mut v);
        if let Some(res) = self.number_textbox(&mut v, id, precision) {
            *value = clamp_real(v, low, high);
            return res;
        }

        let rect = self.control(id, opt);
        if self.focus == id && (self.input.mouse_down | self.input.mouse_pressed) == MouseButton::LEFT {
            v = low + (self.input.mouse_pos.x - rect.x) as Real * (high - low) / rect.w as Real;
            if step != 0.0 {
                v = (v / step).round() * step;
            }
        }
        *value = clamp_real(v, low, high);
        let v = *value;

        let mut res = Response::empty();
        if last != v || committed {
            res |= Response::CHANGE;
        }

        self.draw_control_frame(id, rect, ColorId::Base, opt);
        let w = self.style.thumb_size;
        let x = ((v - low) * (rect.w - w) as Real / (high - low)) as i32;
        let thumb = Rect::new(rect.x + x, rect.y, w, rect.h);
        self.draw_control_frame(id, thumb, ColorId::Button, opt);
        self.draw_real_text(v, precision, rect, opt);
        res
    }

    /// A number field; dragging horizontally adds `mouse_delta.x * step`.
    pub fn number<'a>(&mut self, key: impl Into<IdKey<'a>>, value: &mut Real, step: Real) -> Response {
        self.number_ex(key, value, step, DEFAULT_PRECISION, Opt::ALIGN_CENTER)
    }

    pub fn number_ex<'a>(
        &mut self,
        key: impl Into<IdKey<'a>>,
        value: &mut Real,
        step: Real,
        precision: usize,
        opt: Opt,
    ) -> Response {
        let id = self.id(key);
        let last = *value;

        let committed = self.commit_parked_number(id, value);
        if let Some(res) = self.number_textbox(value, id, precision) {
            return res;
        }

        let rect = self.control(id, opt);
        if self.focus == id && self.input.mouse_down == MouseButton::LEFT {
            *value += self.input.mouse_delta.x as Real * step;
        }

        let mut res = Response::empty();
        if *value != last || committed {
            res |= Response::CHANGE;
        }

        self.draw_control_frame(id, rect, ColorId::Base, opt);
        self.draw_real_text(*value, precision, rect, opt);
        res
    }

    /// Run the text-edit mode of a number field.
    ///
    /// Returns `None` when the field is not being edited, so the caller
    /// draws its normal control.
    fn number_textbox(&mut self, value: &mut Real, id: Id, precision: usize) -> Option<Response> {
        if self.input.mouse_pressed == MouseButton::LEFT
            && self.input.key_down.contains(Key::SHIFT)
            && self.hover == id
        {
            self.begin_number_edit(id, *value, precision);
        }
        if self.number_edit != id {
            return None;
        }

        let mut buf = mem::take(&mut self.number_edit_buf);
        let res = self.textbox_raw(&mut buf, id, Opt::empty());
        self.number_edit_buf = buf;

        if res.contains(Response::SUBMIT) || self.focus != id {
            *value = parse_real(&self.number_edit_buf);
            self.number_edit = Id::NONE;
            debug!(id = id.0, value = *value, "number edit committed");
            return Some(Response::CHANGE);
        }
        Some(Response::empty())
    }

    fn begin_number_edit(&mut self, id: Id, value: Real, precision: usize) {
        if !self.number_edit.is_none() && self.number_edit != id {
            mem::swap(&mut self.number_edit_buf, &mut self.number_pending_buf);
            self.number_pending = self.number_edit;
            debug!(parked = self.number_pending.0, editing = id.0, "number edit parked");
        }
        self.number_edit = id;
        format_real(&mut self.number_edit_buf, value, precision);
    }

    fn commit_parked_number(&mut self, id: Id, value: &mut Real) -> bool {
        if self.number_pending.is_none() || self.number_pending != id {
            return false;
        }
        *value = parse_real(&self.number_pending_buf);
        self.number_pending = Id::NONE;
        debug!(id = id.0, value = *value, "parked number edit committed");
        true
    }
}

// ===========================================================================
// Tests
// ===========================================================================
