//! Per-frame input state fed by the host.
//!
//! The host reports edges (button down/up, key down/up), the absolute mouse
//! position, wheel deltas and typed text between frames. [`InputState`]
//! keeps both the level ("held") and edge ("pressed this frame") views that
//! controls consult; the edge views are cleared when the frame ends.

use bitflags::bitflags;

use crate::geometry::Vec2;

bitflags! {
    /// Mouse buttons.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MouseButton: u8 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
        const MIDDLE = 1 << 2;
    }
}

bitflags! {
    /// The keys the engine cares about.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Key: u8 {
        const SHIFT = 1 << 0;
        const CTRL = 1 << 1;
        const ALT = 1 << 2;
        const BACKSPACE = 1 << 3;
        const RETURN = 1 << 4;
    }
}

// ---------------------------------------------------------------------------
// InputState
// ---------------------------------------------------------------------------

/// Mouse, keyboard and text input for the frame being built.
#[derive(Debug, Default, Clone)]
pub struct InputState {
    pub mouse_pos: Vec2,
    last_mouse_pos: Vec2,
    /// Movement since the previous frame, computed at frame begin.
    pub mouse_delta: Vec2,
    /// Accumulated wheel movement for this frame.
    pub scroll_delta: Vec2,
    pub mouse_down: MouseButton,
    pub mouse_pressed: MouseButton,
    pub key_down: Key,
    pub key_pressed: Key,
    /// Text typed since the previous frame.
    pub text: String,
}

impl InputState {
    pub fn with_text_capacity(capacity: usize) -> Self {
        Self { text: String::with_capacity(capacity), ..Self::default() }
    }

    pub fn mouse_move(&mut self, x: i32, y: i32) {
        self.mouse_pos = Vec2::new(x, y);
    }

    pub fn mouse_down(&mut self, x: i32, y: i32, button: MouseButton) {
        self.mouse_move(x, y);
        self.mouse_down |= button;
        self.mouse_pressed |= button;
    }

    pub fn mouse_up(&mut self, x: i32, y: i32, button: MouseButton) {
        self.mouse_move(x, y);
        self.mouse_down.remove(button);
    }

    pub fn scroll(&mut self, dx: i32, dy: i32) {
        self.scroll_delta.x += dx;
        self.scroll_delta.y += dy;
    }

    pub fn key_down(&mut self, key: Key) {
        self.key_pressed |= key;
        self.key_down |= key;
    }

    pub fn key_up(&mut self, key: Key) {
        self.key_down.remove(key);
    }

    /// Append typed text.
    pub fn text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Compute the per-frame mouse delta.
    pub fn begin_frame(&mut self) {
        self.mouse_delta = self.mouse_pos - self.last_mouse_pos;
    }

    /// Clear edge state once the frame has consumed it.
    pub fn end_frame(&mut self) {
        self.key_pressed = Key::empty();
        self.mouse_pressed = MouseButton::empty();
        self.scroll_delta = Vec2::ZERO;
        self.text.clear();
        self.last_mouse_pos = self.mouse_pos;
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mouse_down_sets_level_and_edge() {
        let mut input = InputState::default();
        input.mouse_down(3, 4, MouseButton::LEFT);
        assert_eq!(input.mouse_pos, Vec2::new(3, 4));
        assert_eq!(input.mouse_down, MouseButton::LEFT);
        assert_eq!(input.mouse_pressed, MouseButton::LEFT);

        input.end_frame();
        assert_eq!(input.mouse_down, MouseButton::LEFT);
        assert!(input.mouse_pressed.is_empty());
    }

    #[test]
    fn mouse_up_clears_level_only() {
        let mut input = InputState::default();
        input.mouse_down(0, 0, MouseButton::LEFT | MouseButton::RIGHT);
        input.mouse_up(1, 1, MouseButton::LEFT);
        assert_eq!(input.mouse_down, MouseButton::RIGHT);
        assert_eq!(input.mouse_pressed, MouseButton::LEFT | MouseButton::RIGHT);
    }

    #[test]
    fn delta_is_relative_to_last_frame() {
        let mut input = InputState::default();
        input.mouse_move(10, 10);
        input.begin_frame();
        assert_eq!(input.mouse_delta, Vec2::new(10, 10));
        input.end_frame();

        input.mouse_move(15, 8);
        input.begin_frame();
        assert_eq!(input.mouse_delta, Vec2::new(5, -2));
    }

    #[test]
    fn scroll_accumulates_until_end() {
        let mut input = InputState::default();
        input.scroll(0, 3);
        input.scroll(1, 3);
        assert_eq!(input.scroll_delta, Vec2::new(1, 6));
        input.end_frame();
        assert_eq!(input.scroll_delta, Vec2::ZERO);
    }

    #[test]
    fn keys_and_text() {
        let mut input = InputState::default();
        input.key_down(Key::SHIFT);
        input.text("ab");
        input.text("c");
        assert!(input.key_down.contains(Key::SHIFT));
        assert!(input.key_pressed.contains(Key::SHIFT));
        assert_eq!(input.text, "abc");

        input.end_frame();
        assert!(input.key_down.contains(Key::SHIFT));
        assert!(input.key_pressed.is_empty());
        assert!(input.text.is_empty());

        input.key_up(Key::SHIFT);
        assert!(input.key_down.is_empty());
    }
}
