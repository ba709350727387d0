//! Crossterm output.
//!
//! The `Driver` wraps a writer and turns [`CellUpdate`]s into queued cursor
//! moves, colour changes and prints. Nothing reaches the terminal until
//! [`flush`](Driver::flush).

use std::io::{self, BufWriter, Stdout, Write};

use crossterm::{
    cursor,
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute, queue,
    style::{self, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

use super::canvas::CellUpdate;
use crate::geometry::Color;

fn rgb(color: Color) -> style::Color {
    style::Color::Rgb { r: color.r, g: color.g, b: color.b }
}

// ---------------------------------------------------------------------------
// Driver
// ---------------------------------------------------------------------------

/// Terminal output backend.
///
/// Creating a driver does not touch the terminal; call
/// [`enter`](Self::enter) to switch to the alternate screen and
/// [`leave`](Self::leave) before exiting.
pub struct Driver<W: Write> {
    writer: W,
}

impl Driver<BufWriter<Stdout>> {
    /// A driver writing to buffered stdout.
    pub fn stdout() -> Self {
        Self::new(BufWriter::new(io::stdout()))
    }
}

impl<W: Write> Driver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Enter the alternate screen with raw mode, mouse capture and
    /// bracketed paste, and hide the cursor.
    pub fn enter(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(self.writer, EnterAlternateScreen, EnableMouseCapture, EnableBracketedPaste, cursor::Hide)
    }

    /// Undo [`enter`](Self::enter).
    pub fn leave(&mut self) -> io::Result<()> {
        execute!(self.writer, cursor::Show, DisableBracketedPaste, DisableMouseCapture, LeaveAlternateScreen)?;
        terminal::disable_raw_mode()
    }

    /// Queue the escape sequences for `updates`.
    ///
    /// Colour changes are only emitted when they differ from the previous
    /// cell's.
    pub fn apply(&mut self, updates: &[CellUpdate]) -> io::Result<()> {
        let mut pen: Option<(Color, Color)> = None;
        let mut next_pos: Option<(u16, u16)> = None;
        for update in updates {
            if next_pos != Some((update.x, update.y)) {
                queue!(self.writer, cursor::MoveTo(update.x, update.y))?;
            }
            let cell = update.cell;
            if pen != Some((cell.fg, cell.bg)) {
                queue!(self.writer, SetForegroundColor(rgb(cell.fg)), SetBackgroundColor(rgb(cell.bg)))?;
                pen = Some((cell.fg, cell.bg));
            }
            queue!(self.writer, Print(cell.ch))?;
            next_pos = Some((update.x.saturating_add(1), update.y));
        }
        if pen.is_some() {
            queue!(self.writer, ResetColor)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Terminal size as (columns, rows).
    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Give back the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

// ===========================================================================
// Tests
// ===========================================================================
