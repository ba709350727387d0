//! Layout entry points on the context.

use super::Context;
use crate::geometry::{Rect, Vec2};
use crate::layout::Placement;

impl Context {
    /// Declare a row: one item per entry of `widths`, each `height` tall.
    ///
    /// Zero means the style's default size; `-n` stops `n - 1` pixels short
    /// of the body's far edge.
    pub fn layout_row(&mut self, widths: &[i32], height: i32) {
        self.layouts.row(widths, height);
    }

    /// Item width for rows declared without columns.
    pub fn layout_width(&mut self, width: i32) {
        self.layouts.set_width(width);
    }

    pub fn layout_height(&mut self, height: i32) {
        self.layouts.set_height(height);
    }

    /// Override the next rectangle.
    ///
    /// A relative rect is offset by the body origin and advances the cursor;
    /// an absolute one is returned verbatim.
    pub fn layout_set_next(&mut self, rect: Rect, relative: bool) {
        let placement = if relative { Placement::Relative(rect) } else { Placement::Absolute(rect) };
        self.layouts.set_next(placement);
    }

    /// Place the next control and remember its rectangle.
    pub fn layout_next(&mut self) -> Rect {
        let rect = self.layouts.next(&self.style);
        self.last_rect = rect;
        rect
    }

    /// Open a nested layout in the next cell.
    pub fn layout_begin_column(&mut self) {
        let rect = self.layout_next();
        self.layouts.push(rect, Vec2::ZERO);
    }

    /// Close the innermost column, folding its extent into the parent.
    pub fn layout_end_column(&mut self) {
        self.layouts.end_column();
    }

    /// Run `f` inside a column.
    pub fn layout_column<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.layout_begin_column();
        let res = f(self);
        self.layout_end_column();
        res
    }

    /// Adjust the current layout's indent.
    pub(crate) fn layout_indent(&mut self, delta: i32) {
        self.layouts.top_mut().indent += delta;
    }

    /// Body of the current layout.
    pub(crate) fn layout_body(&self) -> Rect {
        self.layouts.top().body
    }
}

#[cfg(test)]
mod tests {
    use crate::geometry::Rect;
    use crate::metrics::FixedMetrics;
    use crate::options::Opt;
    use crate::style::Style;
    use crate::Context;

    const BARE: Opt = Opt::NO_TITLE.union(Opt::NO_FRAME).union(Opt::NO_SCROLL).union(Opt::NO_RESIZE);

    fn ctx() -> Context {
        Context::new(FixedMetrics::default()).with_style(Style::default().with_spacing(0).with_padding(0))
    }

    #[test]
    fn fill_row_in_window() {
        let mut ctx = ctx();
        ctx.begin();
        ctx.begin_window("w", Rect::new(0, 0, 200, 100), BARE);
        ctx.layout_row(&[50, -1], 20);
        assert_eq!(ctx.layout_next().w, 50);
        assert_eq!(ctx.layout_next().w, 150);
        assert_eq!(ctx.last_rect(), Rect::new(50, 0, 150, 20));
        ctx.end_window();
        ctx.end().unwrap();
    }

    #[test]
    fn column_helper_balances() {
        let mut ctx = ctx();
        ctx.begin();
        ctx.begin_window("w", Rect::new(0, 0, 200, 100), BARE);
        ctx.layout_row(&[100, -1], 0);
        let inner = ctx.layout_column(|ctx| {
            ctx.layout_row(&[-1], 10);
            ctx.layout_next();
            ctx.layout_next()
        });
        assert_eq!(inner, Rect::new(0, 10, 100, 10));
        assert_eq!(ctx.layout_next().x, 100);
        ctx.end_window();
        assert_eq!(ctx.end(), Ok(()));
    }
}
