//! Text measurement, supplied by the host.
//!
//! The engine never touches glyphs. Whenever layout or a control needs the
//! size of a string it asks the [`TextMetrics`] collaborator, which must be a
//! pure function of the font handle and the text.

use crate::style::FontId;

/// Vertical font metrics in pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LineMetrics {
    pub ascent: i32,
    pub descent: i32,
}

impl LineMetrics {
    /// Total line height.
    pub fn height(self) -> i32 {
        self.ascent + self.descent
    }
}

/// Measures text for layout and alignment.
pub trait TextMetrics {
    /// Advance width of `text` in pixels.
    fn measure(&self, font: FontId, text: &str) -> i32;

    /// Ascent and descent of `font`.
    fn line_metrics(&self, font: FontId) -> LineMetrics;
}

// ---------------------------------------------------------------------------
// FixedMetrics
// ---------------------------------------------------------------------------

/// Monospace metrics: every character has the same advance.
///
/// Suitable for bitmap fonts, terminal cell grids and tests.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FixedMetrics {
    pub char_width: i32,
    pub line: LineMetrics,
}

impl FixedMetrics {
    pub const fn new(char_width: i32, ascent: i32, descent: i32) -> Self {
        Self { char_width, line: LineMetrics { ascent, descent } }
    }

    /// One unit per character, one unit per line: a terminal cell grid.
    pub const fn cells() -> Self {
        Self::new(1, 1, 0)
    }
}

impl Default for FixedMetrics {
    /// A 6x13 bitmap font (10 ascent, 3 descent).
    fn default() -> Self {
        Self::new(6, 10, 3)
    }
}

impl TextMetrics for FixedMetrics {
    fn measure(&self, _font: FontId, text: &str) -> i32 {
        text.chars().count() as i32 * self.char_width
    }

    fn line_metrics(&self, _font: FontId) -> LineMetrics {
        self.line
    }
}
