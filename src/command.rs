//! The per-frame draw command buffer.
//!
//! Commands are appended in call order and never moved. Root containers are
//! bracketed by a head and a tail [`RawCommand::Jump`]; at frame end the jump
//! targets are rewritten so that traversal visits containers in z-order.
//! [`Commands`] follows jumps transparently, so renderers only ever see
//! [`Command`]s.
//!
//! Text is stored in one shared string arena and referenced by byte range,
//! so a steady-state frame performs no heap allocation.

use std::ops::Range;

use crate::geometry::{Color, Rect, Vec2};
use crate::style::FontId;

// ---------------------------------------------------------------------------
// Icon
// ---------------------------------------------------------------------------

/// Built-in icon glyphs. The renderer decides how each one looks.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    Close,
    Check,
    Collapsed,
    Expanded,
}

impl Icon {
    /// Stable numeric code, usable as an identity key.
    pub fn code(self) -> u32 {
        match self {
            Icon::Close => 1,
            Icon::Check => 2,
            Icon::Collapsed => 3,
            Icon::Expanded => 4,
        }
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// A stored command, including jumps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RawCommand {
    /// Redirect traversal to `target`; `None` until patched.
    Jump { target: Option<usize> },
    Clip { rect: Rect },
    Rect { rect: Rect, color: Color },
    Text { font: FontId, text: Range<usize>, pos: Vec2, color: Color },
    Icon { icon: Icon, rect: Rect, color: Color },
}

/// A command as seen by a renderer.
///
/// A `Clip` applies to every following draw until the next `Clip`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command<'a> {
    Clip { rect: Rect },
    Rect { rect: Rect, color: Color },
    Text { font: FontId, text: &'a str, pos: Vec2, color: Color },
    Icon { icon: Icon, rect: Rect, color: Color },
}

// ---------------------------------------------------------------------------
// CommandList
// ---------------------------------------------------------------------------

/// An append-only command buffer with a shared text arena.
#[derive(Debug, Default)]
pub struct CommandList {
    commands: Vec<RawCommand>,
    text: String,
}

impl CommandList {
    pub fn with_capacity(commands: usize, text: usize) -> Self {
        Self { commands: Vec::with_capacity(commands), text: String::with_capacity(text) }
    }

    /// Drop every command, keeping the allocations.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.text.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Read a stored command by index.
    pub fn get(&self, idx: usize) -> Option<&RawCommand> {
        self.commands.get(idx)
    }

    /// Append a command and return its index.
    pub fn push(&mut self, cmd: RawCommand) -> usize {
        self.commands.push(cmd);
        self.commands.len() - 1
    }

    /// Append a jump and return its index.
    pub fn push_jump(&mut self, target: Option<usize>) -> usize {
        self.push(RawCommand::Jump { target })
    }

    /// Retarget the jump at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not a jump or `target` lies past the end of the
    /// buffer (a target equal to the length ends traversal).
    pub fn patch_jump(&mut self, idx: usize, target: usize) {
        let len = self.commands.len();
        assert!(target <= len, "jump target {target} past end of command buffer ({len})");
        match self.commands.get_mut(idx) {
            Some(RawCommand::Jump { target: slot }) => *slot = Some(target),
            other => panic!("command {idx} is not a jump: {other:?}"),
        }
    }

    /// The target of the jump at `idx`, if it is a patched jump.
    pub fn jump_target(&self, idx: usize) -> Option<usize> {
        match self.commands.get(idx) {
            Some(RawCommand::Jump { target }) => *target,
            _ => None,
        }
    }

    pub fn push_clip(&mut self, rect: Rect) -> usize {
        self.push(RawCommand::Clip { rect })
    }

    pub fn push_rect(&mut self, rect: Rect, color: Color) -> usize {
        self.push(RawCommand::Rect { rect, color })
    }

    pub fn push_text(&mut self, font: FontId, text: &str, pos: Vec2, color: Color) -> usize {
        let start = self.text.len();
        self.text.push_str(text);
        let range = start..self.text.len();
        self.push(RawCommand::Text { font, text: range, pos, color })
    }

    pub fn push_icon(&mut self, icon: Icon, rect: Rect, color: Color) -> usize {
        self.push(RawCommand::Icon { icon, rect, color })
    }

    /// Resolve a stored command into its renderer view.
    ///
    /// Returns `None` for jumps.
    pub fn resolve(&self, raw: &RawCommand) -> Option<Command<'_>> {
        Some(match raw {
            RawCommand::Jump { .. } => return None,
            RawCommand::Clip { rect } => Command::Clip { rect: *rect },
            RawCommand::Rect { rect, color } => Command::Rect { rect: *rect, color: *color },
            RawCommand::Text { font, text, pos, color } => Command::Text {
                font: *font,
                text: &self.text[text.clone()],
                pos: *pos,
                color: *color,
            },
            RawCommand::Icon { icon, rect, color } => Command::Icon { icon: *icon, rect: *rect, color: *color },
        })
    }

    /// Traverse the buffer, following jumps.
    pub fn iter(&self) -> Commands<'_> {
        Commands { list: self, idx: 0 }
    }
}

impl<'a> IntoIterator for &'a CommandList {
    type Item = Command<'a>;
    type IntoIter = Commands<'a>;

    fn into_iter(self) -> Commands<'a> {
        self.iter()
    }
}

// ---------------------------------------------------------------------------
// Commands (cursor)
// ---------------------------------------------------------------------------

/// A cursor over a [`CommandList`] that follows jumps.
///
/// Traversal ends at the end of the buffer, on an unpatched jump, or if a
/// chain of jumps revisits more entries than the buffer holds.
#[derive(Clone, Debug)]
pub struct Commands<'a> {
    list: &'a CommandList,
    idx: usize,
}

impl<'a> Iterator for Commands<'a> {
    type Item = Command<'a>;

    fn next(&mut self) -> Option<Command<'a>> {
        let list = self.list;
        let len = list.len();
        let mut hops = 0;
        while let Some(raw) = list.commands.get(self.idx) {
            match raw {
                RawCommand::Jump { target: Some(target) } if hops <= len => {
                    self.idx = *target;
                    hops += 1;
                }
                RawCommand::Jump { .. } => {
                    self.idx = len;
                    return None;
                }
                other => {
                    self.idx += 1;
                    return list.resolve(other);
                }
            }
        }
        None
    }
}

// ===========================================================================
// Tests
// ===========================================================================
