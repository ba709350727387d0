//! Identity scopes and the hover/focus state machine.

use super::Context;
use crate::geometry::Rect;
use crate::id::{Id, IdKey};
use crate::options::Opt;

impl Context {
    /// Hash `key` under the current ID scope.
    pub fn id<'a>(&mut self, key: impl Into<IdKey<'a>>) -> Id {
        self.ids.get(key)
    }

    /// Open an ID scope named by `key`.
    pub fn push_id<'a>(&mut self, key: impl Into<IdKey<'a>>) -> Id {
        self.ids.push(key)
    }

    /// Close the innermost ID scope.
    ///
    /// # Panics
    ///
    /// Panics if no scope is open.
    pub fn pop_id(&mut self) {
        self.ids.pop();
    }

    /// The most recently computed ID.
    pub fn last_id(&self) -> Id {
        self.ids.last()
    }

    /// Give `id` focus and mark focus as affirmed for this frame.
    pub fn set_focus(&mut self, id: Id) {
        self.focus = id;
        self.updated_focus = true;
    }

    /// Whether the mouse is over `rect`, inside the current clip, and in the
    /// topmost root container under the cursor.
    pub fn mouse_over(&self, rect: Rect) -> bool {
        let pos = self.input.mouse_pos;
        rect.contains(pos) && self.clips.top().contains(pos) && self.in_hover_root()
    }

    /// Run the hover/focus state machine for one control.
    ///
    /// Call once per interactive control per frame, before drawing it. A
    /// press over the control focuses it in the same frame; focus is
    /// dropped by a press elsewhere, or on release unless the control holds
    /// focus with [`Opt::HOLD_FOCUS`].
    pub fn update_control(&mut self, id: Id, rect: Rect, opt: Opt) {
        let mouseover = self.mouse_over(rect);

        if self.focus == id {
            self.updated_focus = true;
        }
        if opt.contains(Opt::NO_INTERACT) {
            return;
        }

        let down = !self.input.mouse_down.is_empty();
        let pressed = !self.input.mouse_pressed.is_empty();

        if mouseover && !down {
            self.hover = id;
        }

        if self.focus == id {
            if pressed && !mouseover {
                self.set_focus(Id::NONE);
            }
            if !down && !opt.contains(Opt::HOLD_FOCUS) {
                self.set_focus(Id::NONE);
            }
        }

        // A hover left over from an earlier frame never turns into focus.
        if self.hover == id {
            if !mouseover {
                self.hover = Id::NONE;
            } else if pressed {
                self.set_focus(id);
            }
        }
    }

    /// Place the next control and run [`update_control`](Self::update_control)
    /// on its rectangle.
    pub(crate) fn control(&mut self, id: Id, opt: Opt) -> Rect {
        let rect = self.layout_next();
        self.update_control(id, rect, opt);
        rect
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use crate::geometry::Rect;
    use crate::id::Id;
    use crate::input::MouseButton;
    use crate::metrics::FixedMetrics;
    use crate::options::Opt;
    use crate::Context;

    const BARE: Opt = Opt::NO_TITLE.union(Opt::NO_FRAME).union(Opt::NO_SCROLL).union(Opt::NO_RESIZE);

    /// Run one frame with a single control at `rect` inside a bare window.
    fn frame(ctx: &mut Context, rect: Rect, opt: Opt) -> Id {
        ctx.begin();
        ctx.begin_window("root", Rect::new(0, 0, 400, 400), BARE);
        let id = ctx.id("ctl");
        ctx.layout_set_next(rect, false);
        let r = ctx.layout_next();
        ctx.update_control(id, r, opt);
        ctx.end_window();
        ctx.end().unwrap();
        id
    }

    #[test]
    fn ids_scope_by_stack() {
        let mut ctx = Context::new(FixedMetrics::default());
        let plain = ctx.id("x");
        ctx.push_id("scope");
        let scoped = ctx.id("x");
        ctx.pop_id();
        assert_ne!(plain, scoped);
        assert_eq!(ctx.id("x"), plain);
        assert_eq!(ctx.last_id(), plain);
    }

    #[test]
    fn hover_requires_hover_root() {
        let mut ctx = Context::new(FixedMetrics::default());
        ctx.input_mouse_move(10, 10);
        // The first frame only discovers the hover root.
        frame(&mut ctx, Rect::new(0, 0, 50, 20), Opt::empty());
        assert_eq!(ctx.hover(), Id::NONE);
        let id = frame(&mut ctx, Rect::new(0, 0, 50, 20), Opt::empty());
        assert_eq!(ctx.hover(), id);
    }

    #[test]
    fn press_focuses_and_release_drops() {
        let mut ctx = Context::new(FixedMetrics::default());
        ctx.input_mouse_move(10, 10);
        frame(&mut ctx, Rect::new(0, 0, 50, 20), Opt::empty());
        frame(&mut ctx, Rect::new(0, 0, 50, 20), Opt::empty());

        ctx.input_mouse_down(10, 10, MouseButton::LEFT);
        let id = frame(&mut ctx, Rect::new(0, 0, 50, 20), Opt::empty());
        assert_eq!(ctx.focus(), id);

        // Dragging off the control keeps focus while the button is held.
        ctx.input_mouse_move(200, 200);
        frame(&mut ctx, Rect::new(0, 0, 50, 20), Opt::empty());
        assert_eq!(ctx.focus(), id);

        ctx.input_mouse_up(200, 200, MouseButton::LEFT);
        frame(&mut ctx, Rect::new(0, 0, 50, 20), Opt::empty());
        assert_eq!(ctx.focus(), Id::NONE);
    }

    #[test]
    fn hold_focus_survives_release() {
        let mut ctx = Context::new(FixedMetrics::default());
        ctx.input_mouse_move(10, 10);
        frame(&mut ctx, Rect::new(0, 0, 50, 20), Opt::HOLD_FOCUS);

        ctx.input_mouse_down(10, 10, MouseButton::LEFT);
        ctx.input_mouse_up(10, 10, MouseButton::LEFT);
        let id = frame(&mut ctx, Rect::new(0, 0, 50, 20), Opt::HOLD_FOCUS);
        assert_eq!(ctx.focus(), id);

        frame(&mut ctx, Rect::new(0, 0, 50, 20), Opt::HOLD_FOCUS);
        assert_eq!(ctx.focus(), id);

        // A press elsewhere still takes it away.
        ctx.input_mouse_down(300, 300, MouseButton::LEFT);
        frame(&mut ctx, Rect::new(0, 0, 50, 20), Opt::HOLD_FOCUS);
        assert_eq!(ctx.focus(), Id::NONE);
    }

    #[test]
    fn stale_hover_does_not_refocus() {
        let mut ctx = Context::new(FixedMetrics::default());
        ctx.input_mouse_move(10, 10);
        frame(&mut ctx, Rect::new(0, 0, 50, 20), Opt::empty());
        ctx.input_mouse_down(10, 10, MouseButton::LEFT);
        ctx.input_mouse_up(10, 10, MouseButton::LEFT);
        let id = frame(&mut ctx, Rect::new(0, 0, 50, 20), Opt::empty());
        assert_eq!(ctx.focus(), id);
        assert_eq!(ctx.hover(), id);

        // Jump away and press in the same frame.
        ctx.input_mouse_down(100, 100, MouseButton::LEFT);
        frame(&mut ctx, Rect::new(0, 0, 50, 20), Opt::empty());
        assert_eq!(ctx.focus(), Id::NONE);
        assert_eq!(ctx.hover(), Id::NONE);
    }

    #[test]
    fn focus_not_reaffirmed_is_dropped() {
        let mut ctx = Context::new(FixedMetrics::default());
        ctx.begin();
        ctx.set_focus(Id(42));
        ctx.end().unwrap();
        assert_eq!(ctx.focus(), Id(42));

        ctx.begin();
        ctx.end().unwrap();
        assert_eq!(ctx.focus(), Id::NONE);
    }

    #[test]
    fn no_interact_still_affirms_focus() {
        let mut ctx = Context::new(FixedMetrics::default());
        ctx.input_mouse_move(10, 10);
        let id = frame(&mut ctx, Rect::new(0, 0, 50, 20), Opt::NO_INTERACT);
        ctx.begin();
        ctx.set_focus(id);
        ctx.end().unwrap();
        frame(&mut ctx, Rect::new(0, 0, 50, 20), Opt::NO_INTERACT);
        assert_eq!(ctx.focus(), id);
        assert_eq!(ctx.hover(), Id::NONE);
    }
}
