//! Cursor-based row/column layout.
//!
//! Each container or column pushes a [`Layout`] frame. Controls ask for
//! their rectangle with [`LayoutStack::next`], which walks a cursor across
//! the current row's declared column widths and wraps to a new row with the
//! same spec when the row is full. No constraint solving happens; every
//! rectangle is decided the moment it is requested.
//!
//! Width and height resolve as follows: a positive value is used as-is, zero
//! falls back to the style's default control size, and a negative value `-n`
//! means "stop `n - 1` pixels short of the body's far edge" (`-1` fills).

use crate::geometry::{Rect, Vec2};
use crate::style::Style;

/// Maximum number of columns in one row.
pub const MAX_WIDTHS: usize = 16;

const MIN_EXTENT: i32 = -0x1000000;

/// A one-shot override for the next rectangle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Placement {
    /// Offset by the body origin and advance the cursor as usual.
    Relative(Rect),
    /// Use the rectangle verbatim; the cursor is untouched.
    Absolute(Rect),
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Cursor state for one container or column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    /// Content area, already translated by the negated scroll offset.
    pub body: Rect,
    /// Cursor, relative to `body`.
    pub position: Vec2,
    /// Fallback item width (used when a row declares no columns) and the
    /// row height.
    pub size: Vec2,
    /// Furthest absolute extent reached by any item.
    pub max: Vec2,
    pub widths: [i32; MAX_WIDTHS],
    pub items: usize,
    pub item_index: usize,
    /// Y (relative to `body`) where the next row starts.
    pub next_row: i32,
    pub next: Option<Placement>,
    pub indent: i32,
}

impl Layout {
    fn new(body: Rect) -> Self {
        Self {
            body,
            position: Vec2::ZERO,
            size: Vec2::ZERO,
            max: Vec2::new(MIN_EXTENT, MIN_EXTENT),
            widths: [0; MAX_WIDTHS],
            items: 0,
            item_index: 0,
            next_row: 0,
            next: None,
            indent: 0,
        }
    }

    fn row(&mut self, items: usize, widths: Option<&[i32]>, height: i32) {
        if let Some(widths) = widths {
            assert!(
                widths.len() <= MAX_WIDTHS,
                "layout row declares {} columns; at most {MAX_WIDTHS} are supported",
                widths.len()
            );
            self.widths[..widths.len()].copy_from_slice(widths);
        }
        self.items = items;
        self.position = Vec2::new(self.indent, self.next_row);
        self.size.y = height;
        self.item_index = 0;
    }

    /// Content extent relative to the body origin.
    pub fn content_size(&self) -> Vec2 {
        Vec2::new(self.max.x - self.body.x, self.max.y - self.body.y)
    }
}

// ---------------------------------------------------------------------------
// LayoutStack
// ---------------------------------------------------------------------------

/// The stack of active layouts; the top one places the next control.
#[derive(Debug, Default)]
pub struct LayoutStack {
    stack: Vec<Layout>,
}

impl LayoutStack {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { stack: Vec::with_capacity(capacity) }
    }

    /// Start a layout over `body` scrolled by `scroll`, with an implicit
    /// one-column, default-height row.
    pub fn push(&mut self, body: Rect, scroll: Vec2) {
        let mut layout = Layout::new(body.translate(-scroll));
        layout.row(1, Some(&[0]), 0);
        self.stack.push(layout);
    }

    /// # Panics
    ///
    /// Panics if the stack is empty.
    pub fn pop(&mut self) -> Layout {
        match self.stack.pop() {
            Some(layout) => layout,
            None => panic!("layout pop with an empty layout stack"),
        }
    }

    /// # Panics
    ///
    /// Panics if the stack is empty.
    pub fn top(&self) -> &Layout {
        match self.stack.last() {
            Some(layout) => layout,
            None => panic!("layout requested with an empty layout stack"),
        }
    }

    /// # Panics
    ///
    /// Panics if the stack is empty.
    pub fn top_mut(&mut self) -> &mut Layout {
        match self.stack.last_mut() {
            Some(layout) => layout,
            None => panic!("layout requested with an empty layout stack"),
        }
    }

    /// Declare a new row: one item per entry in `widths`, each `height` tall.
    pub fn row(&mut self, widths: &[i32], height: i32) {
        self.top_mut().row(widths.len(), Some(widths), height);
    }

    /// Set the item width used by rows that declare no columns.
    pub fn set_width(&mut self, width: i32) {
        self.top_mut().size.x = width;
    }

    /// Set the row height for the current and following rows.
    pub fn set_height(&mut self, height: i32) {
        self.top_mut().size.y = height;
    }

    /// Override the rectangle returned by the next [`next`](Self::next).
    pub fn set_next(&mut self, placement: Placement) {
        self.top_mut().next = Some(placement);
    }

    /// Place the next control.
    pub fn next(&mut self, style: &Style) -> Rect {
        let layout = self.top_mut();

        let mut res = match layout.next.take() {
            Some(Placement::Absolute(rect)) => return rect,
            Some(Placement::Relative(rect)) => rect,
            None => {
                if layout.item_index == layout.items {
                    let (items, height) = (layout.items, layout.size.y);
                    layout.row(items, None, height);
                }

                let mut res = Rect::new(layout.position.x, layout.position.y, 0, layout.size.y);
                res.w = if layout.items > 0 { layout.widths[layout.item_index] } else { layout.size.x };
                if res.w == 0 {
                    res.w = style.size.x + style.padding * 2;
                }
                if res.h == 0 {
                    res.h = style.size.y + style.padding * 2;
                }
                if res.w < 0 {
                    res.w += layout.body.w - res.x + 1;
                }
                if res.h < 0 {
                    res.h += layout.body.h - res.y + 1;
                }

                layout.item_index += 1;
                res
            }
        };

        layout.position.x += res.w + style.spacing;
        layout.next_row = layout.next_row.max(res.y + res.h + style.spacing);

        res.x += layout.body.x;
        res.y += layout.body.y;

        layout.max.x = layout.max.x.max(res.right());
        layout.max.y = layout.max.y.max(res.bottom());

        res
    }

    /// Pop a column layout and fold its cursor and extent into the parent.
    pub fn end_column(&mut self) {
        let b = self.pop();
        let a = self.top_mut();
        a.position.x = a.position.x.max(b.position.x + b.body.x - a.body.x);
        a.next_row = a.next_row.max(b.next_row + b.body.y - a.body.y);
        a.max.x = a.max.x.max(b.max.x);
        a.max.y = a.max.y.max(b.max.y);
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

#[cfg(test)]
mod tests {
    use super::*;

    fn tight_style() -> Style {
        Style::default().with_spacing(0)
    }

    // -----------------------------------------------------------------------
    // Width resolution
    // -----------------------------------------------------------------------

    #[test]
    fn fill_remaining_width() {
        let style = tight_style();
        let mut ls = LayoutStack::default();
        ls.push(Rect::new(0, 0, 200, 100), Vec2::ZERO);
        ls.row(&[50, -1], 20);
        let a = ls.next(&style);
        let b = ls.next(&style);
        assert_eq!(a, Rect::new(0, 0, 50, 20));
        assert_eq!(b, Rect::new(50, 0, 150, 20));
    }

    #[test]
    fn stop_short_of_edge() {
        let style = tight_style();
        let mut ls = LayoutStack::default();
        ls.push(Rect::new(0, 0, 200, 100), Vec2::ZERO);
        ls.row(&[-70, -1], 20);
        let a = ls.next(&style);
        let b = ls.next(&style);
        assert_eq!(a.w, 131);
        assert_eq!(b.x, 131);
        assert_eq!(b.right(), 200);
    }

    #[test]
    fn zero_width_uses_style_default() {
        let style = Style::default();
        let mut ls = LayoutStack::default();
        ls.push(Rect::new(0, 0, 500, 500), Vec2::ZERO);
        let r = ls.next(&style);
        assert_eq!(r.w, 68 + 10);
        assert_eq!(r.h, 10 + 10);
    }

    #[test]
    fn negative_height_fills_body() {
        let style = tight_style();
        let mut ls = LayoutStack::default();
        ls.push(Rect::new(0, 0, 100, 80), Vec2::ZERO);
        ls.row(&[-1], -1);
        let r = ls.next(&style);
        assert_eq!(r, Rect::new(0, 0, 100, 80));
    }

    // -----------------------------------------------------------------------
    // Cursor movement
    // -----------------------------------------------------------------------

    #[test]
    fn wraps_to_new_row_with_same_spec() {
        let style = Style::default();
        let mut ls = LayoutStack::default();
        ls.push(Rect::new(10, 10, 300, 300), Vec2::ZERO);
        ls.row(&[40, 60], 20);
        let a = ls.next(&style);
        let b = ls.next(&style);
        let c = ls.next(&style);
        assert_eq!(a, Rect::new(10, 10, 40, 20));
        assert_eq!(b, Rect::new(10 + 40 + 4, 10, 60, 20));
        assert_eq!(c, Rect::new(10, 10 + 20 + 4, 40, 20));
    }

    #[test]
    fn scroll_offsets_body() {
        let style = tight_style();
        let mut ls = LayoutStack::default();
        ls.push(Rect::new(0, 0, 100, 100), Vec2::new(0, 30));
        ls.row(&[10], 10);
        assert_eq!(ls.next(&style), Rect::new(0, -30, 10, 10));
    }

    #[test]
    fn rows_without_columns_use_layout_width() {
        let style = tight_style();
        let mut ls = LayoutStack::default();
        ls.push(Rect::new(0, 0, 100, 100), Vec2::ZERO);
        ls.row(&[], 12);
        ls.set_width(33);
        let a = ls.next(&style);
        let b = ls.next(&style);
        // Without declared columns items keep flowing along the same row.
        assert_eq!(a, Rect::new(0, 0, 33, 12));
        assert_eq!(b, Rect::new(33, 0, 33, 12));
    }

    #[test]
    fn indent_shifts_rows() {
        let style = tight_style();
        let mut ls = LayoutStack::default();
        ls.push(Rect::new(0, 0, 100, 100), Vec2::ZERO);
        ls.top_mut().indent = 24;
        ls.row(&[-1], 10);
        let r = ls.next(&style);
        assert_eq!(r, Rect::new(24, 0, 76, 10));
    }

    // -----------------------------------------------------------------------
    // Placement overrides
    // -----------------------------------------------------------------------

    #[test]
    fn absolute_placement_bypasses_cursor() {
        let style = tight_style();
        let mut ls = LayoutStack::default();
        ls.push(Rect::new(100, 100, 100, 100), Vec2::ZERO);
        ls.set_next(Placement::Absolute(Rect::new(1, 2, 3, 4)));
        assert_eq!(ls.next(&style), Rect::new(1, 2, 3, 4));
        assert_eq!(ls.top().max, Vec2::new(MIN_EXTENT, MIN_EXTENT));
    }

    #[test]
    fn relative_placement_offsets_by_body() {
        let style = tight_style();
        let mut ls = LayoutStack::default();
        ls.push(Rect::new(100, 100, 100, 100), Vec2::ZERO);
        ls.set_next(Placement::Relative(Rect::new(5, 5, 10, 10)));
        assert_eq!(ls.next(&style), Rect::new(105, 105, 10, 10));
        assert_eq!(ls.top().max, Vec2::new(115, 115));
    }

    // -----------------------------------------------------------------------
    // Columns and extents
    // -----------------------------------------------------------------------

    #[test]
    fn content_size_tracks_extent() {
        let style = tight_style();
        let mut ls = LayoutStack::default();
        ls.push(Rect::new(10, 10, 100, 100), Vec2::ZERO);
        ls.row(&[30, 40], 15);
        ls.next(&style);
        ls.next(&style);
        assert_eq!(ls.top().content_size(), Vec2::new(70, 15));
    }

    #[test]
    fn column_folds_into_parent() {
        let style = tight_style();
        let mut ls = LayoutStack::default();
        ls.push(Rect::new(0, 0, 200, 200), Vec2::ZERO);
        ls.row(&[100, -1], 0);

        let col = ls.next(&style);
        ls.push(col, Vec2::ZERO);
        ls.row(&[-1], 30);
        ls.next(&style);
        ls.next(&style);
        ls.next(&style);
        ls.end_column();

        // The column stacked three 30px rows; the parent's next row starts below them.
        assert_eq!(ls.top().next_row, 90);
        assert_eq!(ls.top().max.y, 90);

        let sibling = ls.next(&style);
        assert_eq!(sibling.x, 100);
        assert_eq!(ls.len(), 1);
    }

    #[test]
    #[should_panic(expected = "at most 16")]
    fn too_many_columns_panics() {
        let mut ls = LayoutStack::default();
        ls.push(Rect::new(0, 0, 10, 10), Vec2::ZERO);
        ls.row(&[1; 17], 0);
    }

    #[test]
    #[should_panic(expected = "empty layout stack")]
    fn next_without_layout_panics() {
        LayoutStack::default().next(&Style::default());
    }
}
