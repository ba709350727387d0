//! Container scrollbars.

use crate::context::Context;
use crate::geometry::{Rect, Vec2};
use crate::input::MouseButton;
use crate::options::Opt;
use crate::style::ColorId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Axis {
    Vertical,
    Horizontal,
}

impl Axis {
    fn key(self) -> &'static str {
        match self {
            Axis::Vertical => "!scrollbary",
            Axis::Horizontal => "!scrollbarx",
        }
    }

    /// Map a vector into (or out of) the vertical frame of reference.
    fn vec(self, v: Vec2) -> Vec2 {
        match self {
            Axis::Vertical => v,
            Axis::Horizontal => Vec2::new(v.y, v.x),
        }
    }

    fn rect(self, r: Rect) -> Rect {
        match self {
            Axis::Vertical => r,
            Axis::Horizontal => Rect::new(r.y, r.x, r.h, r.w),
        }
    }
}

impl Context {
    /// Lay out and run the scrollbars of container `idx`, returning the body
    /// shrunk to make room for them.
    pub(crate) fn scrollbars(&mut self, idx: usize, body: Rect) -> Rect {
        let sz = self.style.scrollbar_size;
        let pad = self.style.padding * 2;
        let cnt = &self.containers[idx];
        let content = cnt.content_size + Vec2::new(pad, pad);
        let old_body = cnt.body;

        self.push_clip_rect(body);
        let mut body = body;
        if content.y > old_body.h {
            body.w -= sz;
        }
        if content.x > old_body.w {
            body.h -= sz;
        }
        self.scrollbar(idx, Axis::Vertical, body, content);
        self.scrollbar(idx, Axis::Horizontal, body, content);
        self.pop_clip_rect();
        body
    }

    /// One scrollbar, computed as if vertical and mapped through `axis`.
    fn scrollbar(&mut self, idx: usize, axis: Axis, body: Rect, content: Vec2) {
        let b = axis.rect(body);
        let content = axis.vec(content);
        let max_scroll = content.y - b.h;

        if max_scroll <= 0 || b.h <= 0 {
            let scroll = axis.vec(self.containers[idx].scroll);
            self.containers[idx].scroll = axis.vec(Vec2::new(scroll.x, 0));
            return;
        }

        let id = self.id(axis.key());
        let base = Rect::new(b.right(), b.y, self.style.scrollbar_size, b.h);
        self.update_control(id, axis.rect(base), Opt::empty());

        let mut scroll = axis.vec(self.containers[idx].scroll);
        if self.focus == id && self.input.mouse_down == MouseButton::LEFT {
            scroll.y += axis.vec(self.input.mouse_delta).y * content.y / base.h;
        }
        scroll.y = scroll.y.clamp(0, max_scroll);
        self.containers[idx].scroll = axis.vec(scroll);

        self.draw_frame(axis.rect(base), ColorId::ScrollBase);
        let mut thumb = base;
        thumb.h = self.style.thumb_size.max(base.h * b.h / content.y);
        thumb.y += scroll.y * (base.h - thumb.h) / max_scroll;
        self.draw_frame(axis.rect(thumb), ColorId::ScrollThumb);

        // Wheel input goes to whichever scrollable body the mouse is over.
        if self.mouse_over(body) {
            self.scroll_target = Some(idx);
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use crate::geometry::{Rect, Vec2};
    use crate::input::MouseButton;
    use crate::metrics::FixedMetrics;
    use crate::options::Opt;
    use crate::Context;

    const WIN: Opt = Opt::NO_TITLE.union(Opt::NO_RESIZE);

    /// A 100x100 window holding ten 30px rows.
    fn tall(ctx: &mut Context) -> Rect {
        ctx.begin();
        let body = ctx
            .window("list", Rect::new(0, 0, 100, 100), WIN, |ctx| {
                ctx.layout_row(&[-1], 30);
                for _ in 0..10 {
                    ctx.layout_next();
                }
                ctx.current_container().body
            })
            .unwrap();
        ctx.end().unwrap();
        body
    }

    #[test]
    fn overflow_reserves_room_for_bar() {
        let mut ctx = Context::new(FixedMetrics::default());
        // Nothing is measured yet, so room is reserved on both axes.
        assert_eq!(tall(&mut ctx), Rect::new(0, 0, 88, 88));
        assert_eq!(tall(&mut ctx), Rect::new(0, 0, 88, 100));
        assert_eq!(tall(&mut ctx), Rect::new(0, 0, 88, 100));
    }

    #[test]
    fn wheel_scrolls_and_clamps() {
        let mut ctx = Context::new(FixedMetrics::default());
        ctx.input_mouse_move(50, 50);
        tall(&mut ctx);
        tall(&mut ctx);
        tall(&mut ctx);

        ctx.input_scroll(0, 40);
        tall(&mut ctx);
        assert_eq!(ctx.container_mut("list").scroll, Vec2::new(0, 40));

        ctx.input_scroll(0, 10_000);
        tall(&mut ctx);
        tall(&mut ctx);
        // Ten rows of 30 plus nine gaps of 4, padded both sides, less the body.
        let max = 10 * 30 + 9 * 4 + 10 - 100;
        assert_eq!(ctx.container_mut("list").scroll, Vec2::new(0, max));
    }

    #[test]
    fn fitting_content_resets_scroll() {
        let mut ctx = Context::new(FixedMetrics::default());
        ctx.container_mut("list").scroll = Vec2::new(7, 9);
        ctx.begin();
        ctx.window("list", Rect::new(0, 0, 100, 100), WIN, |ctx| ctx.label("x"));
        ctx.end().unwrap();
        assert_eq!(ctx.container_mut("list").scroll, Vec2::ZERO);
    }

    #[test]
    fn thumb_drag_scrolls_proportionally() {
        let mut ctx = Context::new(FixedMetrics::default());
        ctx.input_mouse_move(94, 5);
        tall(&mut ctx);
        tall(&mut ctx);
        tall(&mut ctx);
        ctx.input_mouse_down(94, 5, MouseButton::LEFT);
        tall(&mut ctx);
        ctx.input_mouse_move(94, 15);
        tall(&mut ctx);
        // 10px of drag over a 100px track covering 346px of content.
        assert_eq!(ctx.container_mut("list").scroll.y, 10 * 346 / 100);
    }
}
