//! Core geometry types: Vec2, Rect, Color.
//!
//! These are the pixel-space primitives every other module speaks. They are
//! plain `Copy` data; the only behaviour of note is rectangle intersection,
//! which the clip stack and the draw helpers lean on heavily.

use std::ops::{Add, Neg, Sub};

// ---------------------------------------------------------------------------
// Vec2
// ---------------------------------------------------------------------------

/// A 2D point or displacement in pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

impl Vec2 {
    /// The origin.
    pub const ZERO: Vec2 = Vec2 { x: 0, y: 0 };

    /// Create a new vector.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2 { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2 { x: -self.x, y: -self.y }
    }
}

// ---------------------------------------------------------------------------
// Rect
// ---------------------------------------------------------------------------

/// An axis-aligned rectangle defined by its top-left corner and size.
///
/// Right and bottom edges are exclusive. A rectangle with a non-positive
/// width or height is empty.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    /// An empty rectangle at the origin.
    pub const ZERO: Rect = Rect { x: 0, y: 0, w: 0, h: 0 };

    /// A rectangle large enough to never clip anything on a real display.
    pub const UNCLIPPED: Rect = Rect { x: 0, y: 0, w: 0x1000000, h: 0x1000000 };

    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// The right edge (exclusive).
    #[inline]
    pub const fn right(self) -> i32 {
        self.x + self.w
    }

    /// The bottom edge (exclusive).
    #[inline]
    pub const fn bottom(self) -> i32 {
        self.y + self.h
    }

    /// The top-left corner.
    #[inline]
    pub const fn origin(self) -> Vec2 {
        Vec2 { x: self.x, y: self.y }
    }

    /// Whether the rectangle has no area.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Whether the point lies inside this rectangle.
    #[inline]
    pub const fn contains(self, p: Vec2) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Whether `other` lies entirely within this rectangle.
    #[inline]
    pub const fn contains_rect(self, other: Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Whether the two rectangles share any area.
    #[inline]
    pub const fn overlaps(self, other: Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// The overlapping area of two rectangles.
    ///
    /// Disjoint inputs yield a zero-sized rectangle positioned at the clamped
    /// corner, so callers only need to test [`is_empty`](Self::is_empty).
    #[inline]
    pub fn intersect(self, other: Rect) -> Rect {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right()).max(x1);
        let y2 = self.bottom().min(other.bottom()).max(y1);
        Rect { x: x1, y: y1, w: x2 - x1, h: y2 - y1 }
    }

    /// Grow outward by `n` pixels on every side.
    #[inline]
    pub const fn expand(self, n: i32) -> Rect {
        Rect { x: self.x - n, y: self.y - n, w: self.w + n * 2, h: self.h + n * 2 }
    }

    /// Shrink inward by `n` pixels on every side.
    #[inline]
    pub const fn inset(self, n: i32) -> Rect {
        self.expand(-n)
    }

    /// Translate by a displacement.
    #[inline]
    pub const fn translate(self, d: Vec2) -> Rect {
        Rect { x: self.x + d.x, y: self.y + d.y, w: self.w, h: self.h }
    }
}

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// An 8-bit-per-channel RGBA colour.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a colour from its four channels.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Whether the colour is fully transparent.
    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }
}

// ===========================================================================
// Tests
// ===========================================================================
