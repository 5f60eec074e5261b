//! TerminalRenderer: draws a `RenderedView` to a real terminal.
//!
//! The view is edited in place: after the first full draw only lines that
//! changed since the previous frame are rewritten.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

use crate::view::RenderedView;

/// Lines printed under the grid
const CONTROLS_HINT: &str = "←/→ move  ↑ rotate  ↓ drop  x/Esc quit";

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<RenderedView>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw a view, rewriting only what changed since the last one.
    pub fn draw(&mut self, view: &RenderedView) -> Result<()> {
        self.buf.clear();
        match self.last.as_ref() {
            Some(prev) => encode_diff_into(prev, view, &mut self.buf)?,
            None => encode_full_into(view, &mut self.buf)?,
        }
        self.flush_buf()?;
        self.last = Some(view.clone());
        Ok(())
    }

    /// Print a one-line notice under the grid (e.g. game over).
    pub fn notice(&mut self, text: &str) -> Result<()> {
        let row = self
            .last
            .as_ref()
            .map(|v| v.lines().count() as u16 + 3)
            .unwrap_or(0);
        self.buf.clear();
        self.buf.queue(cursor::MoveTo(0, row))?;
        self.buf.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
        self.buf.queue(Print(text))?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full redraw of `view` into `out`.
///
/// Layout: title on row 0, grid from row 1, controls hint under the grid.
pub fn encode_full_into(view: &RenderedView, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(Print(&view.title))?;

    let mut row = 1u16;
    for line in view.lines() {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print(line))?;
        row += 1;
    }
    out.queue(cursor::MoveTo(0, row + 1))?;
    out.queue(Print(CONTROLS_HINT))?;
    Ok(())
}

/// Encode only the lines of `next` that differ from `prev`.
pub fn encode_diff_into(prev: &RenderedView, next: &RenderedView, out: &mut Vec<u8>) -> Result<()> {
    if prev.lines().count() != next.lines().count() {
        return encode_full_into(next, out);
    }

    if prev.title != next.title {
        out.queue(cursor::MoveTo(0, 0))?;
        out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
        out.queue(Print(&next.title))?;
    }

    for (i, (old, new)) in prev.lines().zip(next.lines()).enumerate() {
        if old != new {
            out.queue(cursor::MoveTo(0, i as u16 + 1))?;
            out.queue(Print(new))?;
        }
    }
    Ok(())
}
