//! Nested clip rectangles.
//!
//! Every push intersects with the current top, so the top of the stack is
//! always the effective clip region for the next draw.

use crate::geometry::Rect;

/// How much of a candidate rectangle survives the current clip.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Clip {
    /// Fully inside; draw without clipping.
    None,
    /// Straddles the clip edge; draw bracketed by clip commands.
    Part,
    /// Fully outside; skip the draw.
    All,
}

/// A stack of intersected clip rectangles.
#[derive(Debug, Default)]
pub struct ClipStack {
    stack: Vec<Rect>,
}

impl ClipStack {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { stack: Vec::with_capacity(capacity) }
    }

    /// Push `rect` intersected with the current top.
    ///
    /// With an empty stack the rect is intersected with [`Rect::UNCLIPPED`].
    pub fn push(&mut self, rect: Rect) {
        let last = self.stack.last().copied().unwrap_or(Rect::UNCLIPPED);
        self.stack.push(rect.intersect(last));
    }

    /// Push `rect` as-is, discarding any enclosing clip.
    ///
    /// Root containers start from an unclipped region so that one opened
    /// inside another is not clipped to its parent.
    pub fn push_unclipped(&mut self, rect: Rect) {
        self.stack.push(rect);
    }

    /// # Panics
    ///
    /// Panics if the stack is empty.
    pub fn pop(&mut self) {
        assert!(self.stack.pop().is_some(), "pop_clip_rect called on an empty clip stack");
    }

    /// The effective clip rectangle.
    ///
    /// # Panics
    ///
    /// Panics if nothing has been pushed; drawing happens inside containers.
    pub fn top(&self) -> Rect {
        match self.stack.last() {
            Some(rect) => *rect,
            None => panic!("clip rect requested with an empty clip stack"),
        }
    }

    /// Classify `rect` against the effective clip.
    pub fn check(&self, rect: Rect) -> Clip {
        let cr = self.top();
        if !rect.overlaps(cr) {
            Clip::All
        } else if cr.contains_rect(rect) {
            Clip::None
        } else {
            Clip::Part
        }
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn clear(&mut self) {
        self.stack.clear();
    }
}

// ===========================================================================
// Tests
// ===========================================================================
