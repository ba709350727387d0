//! Static text.

use crate::context::Context;
use crate::options::Opt;
use crate::style::ColorId;

impl Context {
    /// A single line of text in the next layout cell.
    pub fn label(&mut self, text: &str) {
        let rect = self.layout_next();
        self.draw_control_text(text, rect, ColorId::Text, Opt::empty());
    }

    /// Word-wrapped text filling the row width.
    ///
    /// Lines break at spaces when the next word would overflow, and always
    /// at `'\n'`. A word wider than the row is kept whole on its own line.
    pub fn text(&mut self, text: &str) {
        let font = self.style.font;
        let color = self.style.colors[ColorId::Text];
        let line_height = self.text_height(font);
        let bytes = text.as_bytes();
        let len = bytes.len();

        self.layout_column(|ctx| {
            ctx.layout_row(&[-1], line_height);
            let mut p = 0;
            let mut end = 0;
            while end < len {
                let r = ctx.layout_next();
                let start = p;
                end = p;
                let mut w = 0;
                while end < len && bytes[end] != b'\n' {
                    let word = p;
                    while p < len && bytes[p] != b' ' && bytes[p] != b'\n' {
                        p += 1;
                    }
                    w += ctx.text_width(font, &text[word..p]);
                    if w > r.w && end != start {
                        break;
                    }
                    if p < len {
                        w += ctx.text_width(font, &text[p..p + 1]);
                    }
                    end = p;
                    p += 1;
                }
                ctx.draw_text(font, &text[start..end], r.origin(), color);
                p = end + 1;
            }
        });
    }
}
