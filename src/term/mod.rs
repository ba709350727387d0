//! Crossterm backend: rasterize commands into a cell grid, push the changed
//! cells to a terminal, and translate terminal events into engine input.
//!
//! Nothing in the core depends on this module. It is one renderer among
//! many, with [`Style::terminal`](crate::Style::terminal) as its companion
//! preset: one layout unit is one character cell.

mod canvas;
mod driver;
mod event;

pub use canvas::{Canvas, Cell, CellUpdate};
pub use driver::Driver;
pub use event::feed_event;

use crate::metrics::{LineMetrics, TextMetrics};
use crate::style::FontId;

/// Text metrics for a monospace cell grid: one cell per character, one
/// cell per line.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CellMetrics;

impl TextMetrics for CellMetrics {
    fn measure(&self, _font: FontId, text: &str) -> i32 {
        text.chars().count() as i32
    }

    fn line_metrics(&self, _font: FontId) -> LineMetrics {
        LineMetrics { ascent: 1, descent: 0 }
    }
}
