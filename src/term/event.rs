//! Crossterm input translation.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton as TermButton, MouseEvent, MouseEventKind,
};

use crate::context::Context;
use crate::input::{Key, MouseButton};

fn button(b: TermButton) -> MouseButton {
    match b {
        TermButton::Left => MouseButton::LEFT,
        TermButton::Right => MouseButton::RIGHT,
        TermButton::Middle => MouseButton::MIDDLE,
    }
}

/// Press or release the modifier keys so the engine matches `mods`.
fn sync_modifiers(ctx: &mut Context, mods: KeyModifiers) {
    for (flag, key) in [(KeyModifiers::SHIFT, Key::SHIFT), (KeyModifiers::CONTROL, Key::CTRL), (KeyModifiers::ALT, Key::ALT)]
    {
        let held = ctx.input().key_down.contains(key);
        if mods.contains(flag) && !held {
            ctx.input_key_down(key);
        } else if !mods.contains(flag) && held {
            ctx.input_key_up(key);
        }
    }
}

fn feed_mouse(ctx: &mut Context, ev: &MouseEvent) {
    sync_modifiers(ctx, ev.modifiers);
    let (x, y) = (ev.column as i32, ev.row as i32);
    match ev.kind {
        MouseEventKind::Down(b) => ctx.input_mouse_down(x, y, button(b)),
        MouseEventKind::Up(b) => ctx.input_mouse_up(x, y, button(b)),
        MouseEventKind::Drag(_) | MouseEventKind::Moved => ctx.input_mouse_move(x, y),
        MouseEventKind::ScrollDown => ctx.input_scroll(0, 1),
        MouseEventKind::ScrollUp => ctx.input_scroll(0, -1),
        MouseEventKind::ScrollRight => ctx.input_scroll(1, 0),
        MouseEventKind::ScrollLeft => ctx.input_scroll(-1, 0),
    }
}

fn feed_key(ctx: &mut Context, ev: &KeyEvent) -> bool {
    sync_modifiers(ctx, ev.modifiers);
    let key = match ev.code {
        KeyCode::Backspace => Key::BACKSPACE,
        KeyCode::Enter => Key::RETURN,
        KeyCode::Char(c) => {
            // Control chords are left to the host.
            let typed = ev.kind != KeyEventKind::Release && !ev.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
            if typed {
                let mut buf = [0u8; 4];
                ctx.input_text(c.encode_utf8(&mut buf));
            }
            return typed;
        }
        _ => return false,
    };
    // Most terminals never report releases, so a press is a full tap.
    if ev.kind != KeyEventKind::Release {
        ctx.input_key_down(key);
    }
    ctx.input_key_up(key);
    true
}

/// Forward a terminal event to the engine's input calls.
///
/// Returns `false` for events the engine has no use for (resize, focus,
/// unmapped keys, control chords), which the host may handle itself.
pub fn feed_event(ctx: &mut Context, event: &Event) -> bool {
    match event {
        Event::Mouse(ev) => {
            feed_mouse(ctx, ev);
            true
        }
        Event::Key(ev) => feed_key(ctx, ev),
        Event::Paste(text) => {
            ctx.input_text(text);
            true
        }
        _ => false,
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Vec2;
    use crate::metrics::FixedMetrics;

    fn ctx() -> Context {
        Context::new(FixedMetrics::cells())
    }

    fn mouse(kind: MouseEventKind, x: u16, y: u16, modifiers: KeyModifiers) -> Event {
        Event::Mouse(MouseEvent { kind, column: x, row: y, modifiers })
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    // -----------------------------------------------------------------------
    // Mouse
    // -----------------------------------------------------------------------

    #[test]
    fn press_and_release() {
        let mut ctx = ctx();
        feed_event(&mut ctx, &mouse(MouseEventKind::Down(TermButton::Left), 3, 4, KeyModifiers::NONE));
        assert_eq!(ctx.input().mouse_pos, Vec2::new(3, 4));
        assert_eq!(ctx.input().mouse_down, MouseButton::LEFT);
        assert_eq!(ctx.input().mouse_pressed, MouseButton::LEFT);

        feed_event(&mut ctx, &mouse(MouseEventKind::Drag(TermButton::Left), 5, 4, KeyModifiers::NONE));
        assert_eq!(ctx.input().mouse_pos, Vec2::new(5, 4));

        feed_event(&mut ctx, &mouse(MouseEventKind::Up(TermButton::Left), 5, 4, KeyModifiers::NONE));
        assert!(ctx.input().mouse_down.is_empty());
    }

    #[test]
    fn wheel_scrolls_one_cell() {
        let mut ctx = ctx();
        feed_event(&mut ctx, &mouse(MouseEventKind::ScrollDown, 0, 0, KeyModifiers::NONE));
        feed_event(&mut ctx, &mouse(MouseEventKind::ScrollDown, 0, 0, KeyModifiers::NONE));
        feed_event(&mut ctx, &mouse(MouseEventKind::ScrollLeft, 0, 0, KeyModifiers::NONE));
        assert_eq!(ctx.input().scroll_delta, Vec2::new(-1, 2));
    }

    #[test]
    fn shift_click_holds_shift() {
        let mut ctx = ctx();
        feed_event(&mut ctx, &mouse(MouseEventKind::Down(TermButton::Left), 0, 0, KeyModifiers::SHIFT));
        assert!(ctx.input().key_down.contains(Key::SHIFT));
        feed_event(&mut ctx, &mouse(MouseEventKind::Moved, 0, 0, KeyModifiers::NONE));
        assert!(!ctx.input().key_down.contains(Key::SHIFT));
    }

    // -----------------------------------------------------------------------
    // Keyboard
    // -----------------------------------------------------------------------

    #[test]
    fn chars_become_text() {
        let mut ctx = ctx();
        assert!(feed_event(&mut ctx, &key(KeyCode::Char('h'), KeyModifiers::NONE)));
        assert!(feed_event(&mut ctx, &key(KeyCode::Char('é'), KeyModifiers::SHIFT)));
        assert!(feed_event(&mut ctx, &Event::Paste("!!".into())));
        assert_eq!(ctx.input().text, "hé!!");
    }

    #[test]
    fn control_chords_are_not_text() {
        let mut ctx = ctx();
        assert!(!feed_event(&mut ctx, &key(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert_eq!(ctx.input().text, "");
    }

    #[test]
    fn enter_is_a_tap() {
        let mut ctx = ctx();
        assert!(feed_event(&mut ctx, &key(KeyCode::Enter, KeyModifiers::NONE)));
        assert!(ctx.input().key_pressed.contains(Key::RETURN));
        assert!(!ctx.input().key_down.contains(Key::RETURN));
    }

    #[test]
    fn resize_is_left_to_host() {
        let mut ctx = ctx();
        assert!(!feed_event(&mut ctx, &Event::Resize(80, 24)));
        assert!(!feed_event(&mut ctx, &key(KeyCode::Esc, KeyModifiers::NONE)));
    }
}
