//! A character-cell raster target for the command stream.

use crate::command::{Command, Icon};
use crate::geometry::{Color, Rect, Vec2};

const BLACK: Color = Color::rgba(0, 0, 0, 255);
const WHITE: Color = Color::rgba(255, 255, 255, 255);

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// One terminal cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self { ch: ' ', fg: WHITE, bg: BLACK }
    }
}

/// A cell that changed between two frames.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CellUpdate {
    pub x: u16,
    pub y: u16,
    pub cell: Cell,
}

fn glyph(icon: Icon) -> char {
    match icon {
        Icon::Close => 'x',
        Icon::Check => '*',
        Icon::Collapsed => '+',
        Icon::Expanded => '-',
    }
}

// ---------------------------------------------------------------------------
// Canvas
// ---------------------------------------------------------------------------

/// A `width` x `height` grid of cells, row-major.
///
/// [`replay`](Self::replay) paints a frame's commands in order: rects fill
/// cell backgrounds, text overwrites characters and icons place a single
/// glyph at the centre of their rect. `Clip` commands restrict text and
/// icons until the next one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height, cells: vec![Cell::default(); width as usize * height as usize] }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize and blank the grid.
    pub fn resize(&mut self, width: u16, height: u16) {
        *self = Self::new(width, height);
    }

    /// Reset every cell to a blank on black.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// The cell at (x, y), or `None` outside the grid.
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y as usize * self.width as usize + x as usize)
    }

    fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width as i32, self.height as i32)
    }

    fn cell_mut(&mut self, x: i32, y: i32) -> &mut Cell {
        let idx = y as usize * self.width as usize + x as usize;
        &mut self.cells[idx]
    }

    /// Paint `commands` over the current contents.
    pub fn replay<'a>(&mut self, commands: impl IntoIterator<Item = Command<'a>>) {
        let screen = self.bounds();
        let mut clip = screen;
        for cmd in commands {
            match cmd {
                Command::Clip { rect } => clip = rect.intersect(screen),
                Command::Rect { rect, color } => {
                    if color.is_transparent() {
                        continue;
                    }
                    let r = rect.intersect(clip);
                    for y in r.y..r.bottom() {
                        for x in r.x..r.right() {
                            let cell = self.cell_mut(x, y);
                            cell.ch = ' ';
                            cell.bg = color;
                        }
                    }
                }
                Command::Text { text, pos, color, .. } => {
                    for (i, ch) in text.chars().enumerate() {
                        let p = Vec2::new(pos.x + i as i32, pos.y);
                        if clip.contains(p) {
                            let cell = self.cell_mut(p.x, p.y);
                            cell.ch = ch;
                            cell.fg = color;
                        }
                    }
                }
                Command::Icon { icon, rect, color } => {
                    let p = Vec2::new(rect.x + (rect.w - 1) / 2, rect.y + (rect.h - 1) / 2);
                    if clip.contains(p) {
                        let cell = self.cell_mut(p.x, p.y);
                        cell.ch = glyph(icon);
                        cell.fg = color;
                    }
                }
            }
        }
    }

    /// Cells of `self` that differ from `previous`. Cells outside
    /// `previous`'s bounds are always reported.
    pub fn diff(&self, previous: &Canvas) -> Vec<CellUpdate> {
        let mut updates = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = y as usize * self.width as usize + x as usize;
                let cell = self.cells[idx];
                if previous.get(x, y) != Some(&cell) {
                    updates.push(CellUpdate { x, y, cell });
                }
            }
        }
        updates
    }

    /// The characters of the grid, one line per row, with trailing spaces
    /// and trailing blank rows removed.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height as usize);
        for row in self.cells.chunks(self.width.max(1) as usize) {
            let line: String = row.iter().map(|c| c.ch).collect();
            out.push_str(line.trim_end());
            out.push('\n');
        }
        let kept = out.trim_end_matches('\n').len();
        out.truncate(kept);
        out
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::FontId;

    const RED: Color = Color::rgba(255, 0, 0, 255);

    fn text(s: &str, x: i32, y: i32) -> Command<'_> {
        Command::Text { font: FontId(0), text: s, pos: Vec2::new(x, y), color: WHITE }
    }

    // -----------------------------------------------------------------------
    // Replay
    // -----------------------------------------------------------------------

    #[test]
    fn rect_fills_background() {
        let mut canvas = Canvas::new(4, 3);
        canvas.replay([Command::Rect { rect: Rect::new(1, 1, 2, 5), color: RED }]);
        assert_eq!(canvas.get(1, 1).map(|c| c.bg), Some(RED));
        assert_eq!(canvas.get(2, 2).map(|c| c.bg), Some(RED));
        assert_eq!(canvas.get(0, 0).map(|c| c.bg), Some(BLACK));
    }

    #[test]
    fn text_respects_clip() {
        let mut canvas = Canvas::new(10, 2);
        canvas.replay([
            Command::Clip { rect: Rect::new(0, 0, 3, 1) },
            text("hello", 0, 0),
            Command::Clip { rect: Rect::UNCLIPPED },
            text("ok", 0, 1),
        ]);
        assert_eq!(canvas.to_text(), "hel\nok");
    }

    #[test]
    fn text_keeps_background() {
        let mut canvas = Canvas::new(5, 1);
        canvas.replay([Command::Rect { rect: Rect::new(0, 0, 5, 1), color: RED }, text("a", 0, 0)]);
        assert_eq!(canvas.get(0, 0), Some(&Cell { ch: 'a', fg: WHITE, bg: RED }));
    }

    #[test]
    fn icon_is_centred_glyph() {
        let mut canvas = Canvas::new(5, 5);
        canvas.replay([Command::Icon { icon: Icon::Close, rect: Rect::new(1, 1, 3, 3), color: RED }]);
        assert_eq!(canvas.get(2, 2).map(|c| c.ch), Some('x'));
    }

    #[test]
    fn transparent_rect_is_ignored() {
        let mut canvas = Canvas::new(2, 1);
        canvas.replay([text("ab", 0, 0), Command::Rect { rect: Rect::new(0, 0, 2, 1), color: Color::rgba(0, 0, 0, 0) }]);
        assert_eq!(canvas.to_text(), "ab");
    }

    // -----------------------------------------------------------------------
    // Diff and text
    // -----------------------------------------------------------------------

    #[test]
    fn diff_reports_changed_cells() {
        let before = Canvas::new(3, 1);
        let mut after = before.clone();
        after.replay([text("x", 1, 0)]);
        let updates = after.diff(&before);
        assert_eq!(updates, vec![CellUpdate { x: 1, y: 0, cell: Cell { ch: 'x', ..Cell::default() } }]);
        assert!(after.diff(&after).is_empty());
    }

    #[test]
    fn diff_against_smaller_canvas_reports_new_area() {
        let before = Canvas::new(1, 1);
        let after = Canvas::new(2, 1);
        assert_eq!(after.diff(&before).len(), 1);
    }

    #[test]
    fn to_text_trims_trailing_blank_rows() {
        let mut canvas = Canvas::new(4, 4);
        canvas.replay([text("a", 0, 1)]);
        assert_eq!(canvas.to_text(), "\na");
    }
}
