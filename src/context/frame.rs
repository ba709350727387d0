//! Frame boundaries and the z-order compositor.

use tracing::{debug, trace, warn};

use super::Context;
use crate::error::{FrameError, StackKind};
use crate::id::Id;

impl Context {
    /// Start a frame.
    ///
    /// Clears the command buffer and root list, promotes the hover root
    /// found during the previous frame and computes the mouse delta.
    pub fn begin(&mut self) {
        if self.in_frame {
            warn!(frame = self.frame, "begin() called twice without end(); discarding the open frame");
            self.reset_stacks();
        }
        self.input.begin_frame();
        self.commands.clear();
        self.root_list.clear();
        self.scroll_target = None;
        self.hover_root = self.next_hover_root.take();
        self.frame += 1;
        self.in_frame = true;

        // Permanent leading jump; retargeted to the lowest root at frame end.
        self.commands.push_jump(Some(1));
        trace!(frame = self.frame, "frame begin");
    }

    /// Finish a frame.
    ///
    /// Applies wheel scrolling, drops focus that no control re-affirmed,
    /// raises the clicked window and links root containers in z-order.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::UnbalancedStack`] if a begin/end pair was left
    /// open. The frame is abandoned: its commands are discarded and every
    /// stack is cleared so the next [`begin`](Self::begin) starts clean.
    pub fn end(&mut self) -> Result<(), FrameError> {
        if !self.in_frame {
            return Err(FrameError::NotInFrame);
        }
        self.in_frame = false;

        if let Err(err) = self.check_stacks() {
            warn!(frame = self.frame, %err, "frame abandoned");
            self.reset_stacks();
            self.commands.clear();
            self.root_list.clear();
            self.input.end_frame();
            return Err(err);
        }

        if let Some(idx) = self.scroll_target {
            let delta = self.input.scroll_delta;
            let cnt = &mut self.containers[idx];
            cnt.scroll = cnt.scroll + delta;
        }

        if !self.updated_focus {
            self.focus = Id::NONE;
        }
        self.updated_focus = false;

        if !self.input.mouse_pressed.is_empty() {
            if let Some(idx) = self.next_hover_root {
                let z = self.containers[idx].zindex;
                if z < self.last_zindex && z >= 0 {
                    self.bring_to_front(idx);
                    debug!(slot = idx, zindex = self.last_zindex, "container raised");
                }
            }
        }

        self.input.end_frame();
        self.link_root_containers();

        trace!(frame = self.frame, commands = self.commands.len(), roots = self.root_list.len(), "frame end");
        Ok(())
    }

    fn check_stacks(&self) -> Result<(), FrameError> {
        let depths = [
            (StackKind::Container, self.container_stack.len()),
            (StackKind::Clip, self.clips.len()),
            (StackKind::Id, self.ids.len()),
            (StackKind::Layout, self.layouts.len()),
        ];
        match depths.into_iter().find(|&(_, depth)| depth > 0) {
            Some((stack, depth)) => Err(FrameError::UnbalancedStack { stack, depth }),
            None => Ok(()),
        }
    }

    fn reset_stacks(&mut self) {
        self.container_stack.clear();
        self.clips.clear();
        self.ids.clear();
        self.layouts.clear();
    }

    /// Sort the root list by z-index and chain the tail of each root to the
    /// body of the next one.
    ///
    /// With no roots the leading jump keeps falling through to command 1.
    fn link_root_containers(&mut self) {
        let containers = &self.containers;
        self.root_list.sort_unstable_by_key(|&idx| (containers[idx].zindex, idx));
        // A window opened twice in one frame must be linked once.
        self.root_list.dedup();

        let mut prev_tail = None;
        for &idx in &self.root_list {
            let cnt = &self.containers[idx];
            let (Some(head), Some(tail)) = (cnt.head, cnt.tail) else {
                continue;
            };
            self.commands.patch_jump(prev_tail.unwrap_or(0), head + 1);
            prev_tail = Some(tail);
        }
        if let Some(tail) = prev_tail {
            let len = self.commands.len();
            self.commands.patch_jump(tail, len);
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
