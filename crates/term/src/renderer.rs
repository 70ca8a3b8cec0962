//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Every frame goes through [`encode_frame_into`]. Without a previous frame of
//! the same size the screen is cleared and every cell is dirty; otherwise only
//! cells that differ are written. Dirty cells are grouped into row spans, and
//! a [`Pen`] remembers the cursor and style the terminal already has so a span
//! costs one `MoveTo` at most, plus a style change only where the style does.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }
    }
}

/// Owns stdout while the game runs in raw mode on the alternate screen.
pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// The frame currently on screen. `None` forces a full redraw.
    shown: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    /// Switch to raw mode, the alternate screen and mouse reporting.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf
            .queue(terminal::EnterAlternateScreen)?
            .queue(cursor::Hide)?
            .queue(terminal::DisableLineWrap)?
            .queue(EnableMouseCapture)?;
        self.flush_buf()
    }

    /// Undo [`enter`](Self::enter). Safe to call after a failed frame.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf
            .queue(DisableMouseCapture)?
            .queue(SetAttribute(Attribute::Reset))?
            .queue(ResetColor)?
            .queue(terminal::EnableLineWrap)?
            .queue(cursor::Show)?
            .queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Forget what is on screen; the next draw repaints everything.
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Draw `fb`, then hand the caller the previously shown buffer to render
    /// the next frame into. No frame is cloned.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_frame_into(self.shown.as_ref(), fb, &mut self.buf)?;
        if !self.buf.is_empty() {
            self.flush_buf()?;
        }

        match self.shown.as_mut() {
            Some(shown) => std::mem::swap(shown, fb),
            None => {
                let (w, h) = (fb.width(), fb.height());
                self.shown = Some(std::mem::replace(fb, FrameBuffer::new(w, h)));
            }
        }
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode the commands that turn `shown` into `next` on screen.
///
/// `shown` of a different size counts as nothing shown. Writes nothing at all
/// when the frames are equal.
pub fn encode_frame_into(
    shown: Option<&FrameBuffer>,
    next: &FrameBuffer,
    out: &mut Vec<u8>,
) -> Result<()> {
    let shown = shown.filter(|s| s.width() == next.width() && s.height() == next.height());
    if shown.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    let width = next.width() as usize;
    if width == 0 {
        return Ok(());
    }

    let mut pen = Pen::default();
    for (y, row) in next.cells().chunks(width).enumerate() {
        let old = shown.map(|s| &s.cells()[y * width..(y + 1) * width]);
        let dirty = |x: usize| old.map_or(true, |o| o[x] != row[x]);

        let mut x = 0;
        while x < width {
            if !dirty(x) {
                x += 1;
                continue;
            }
            let start = x;
            while x < width && dirty(x) {
                x += 1;
            }
            pen.span(out, start as u16, y as u16, &row[start..x])?;
        }
    }
    pen.finish(out)
}

/// Terminal cursor and style state while a frame is encoded.
///
/// Glyphs are batched into `text` and printed in one command per style run.
#[derive(Default)]
struct Pen {
    cursor: Option<(u16, u16)>,
    style: Option<CellStyle>,
    text: String,
}

impl Pen {
    fn span(&mut self, out: &mut Vec<u8>, x: u16, y: u16, cells: &[Cell]) -> Result<()> {
        if self.cursor != Some((x, y)) {
            self.flush_text(out)?;
            out.queue(cursor::MoveTo(x, y))?;
        }
        for cell in cells {
            if self.style != Some(cell.style) {
                self.flush_text(out)?;
                change_style(out, self.style, cell.style)?;
                self.style = Some(cell.style);
            }
            self.text.push(cell.ch);
        }
        self.cursor = Some((x + cells.len() as u16, y));
        Ok(())
    }

    fn flush_text(&mut self, out: &mut Vec<u8>) -> Result<()> {
        if !self.text.is_empty() {
            out.queue(Print(&self.text))?;
            self.text.clear();
        }
        Ok(())
    }

    fn finish(mut self, out: &mut Vec<u8>) -> Result<()> {
        self.flush_text(out)?;
        if self.style.is_some() {
            out.queue(SetAttribute(Attribute::Reset))?.queue(ResetColor)?;
        }
        Ok(())
    }
}

/// Emit only the parts of `to` that differ from `from`.
///
/// An attribute change goes through SGR reset, which also drops both colors.
fn change_style(out: &mut Vec<u8>, from: Option<CellStyle>, to: CellStyle) -> Result<()> {
    let reset = from.map_or(true, |f| f.bold != to.bold || f.dim != to.dim);
    if reset {
        out.queue(SetAttribute(Attribute::Reset))?;
        if to.bold {
            out.queue(SetAttribute(Attribute::Bold))?;
        }
        if to.dim {
            out.queue(SetAttribute(Attribute::Dim))?;
        }
    }
    if reset || from.map(|f| f.fg) != Some(to.fg) {
        out.queue(SetForegroundColor(to.fg.into()))?;
    }
    if reset || from.map(|f| f.bg) != Some(to.bg) {
        out.queue(SetBackgroundColor(to.bg.into()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLEAR_ALL: &str = "\x1b[2J";

    fn encode(shown: Option<&FrameBuffer>, next: &FrameBuffer) -> String {
        let mut out = Vec::new();
        encode_frame_into(shown, next, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn row(fb: &mut FrameBuffer, y: u16, text: &str) {
        fb.put_str(0, y, text, CellStyle::default());
    }

    #[test]
    fn rgb_converts_to_true_color() {
        assert_eq!(
            Color::from(Rgb::from_hex(0xa000f0)),
            Color::Rgb { r: 160, g: 0, b: 240 }
        );
    }

    #[test]
    fn first_frame_clears_and_writes_rows() {
        let mut fb = FrameBuffer::new(2, 2);
        row(&mut fb, 0, "AB");
        row(&mut fb, 1, "CD");

        let text = encode(None, &fb);
        assert!(text.starts_with(CLEAR_ALL));
        assert!(text.contains("AB"));
        assert!(text.contains("\x1b[2;1HCD"));
    }

    #[test]
    fn unchanged_frame_writes_nothing() {
        let fb = FrameBuffer::new(4, 2);
        assert!(encode(Some(&fb.clone()), &fb).is_empty());
    }

    #[test]
    fn only_changed_span_is_written() {
        let shown = FrameBuffer::new(5, 1);
        let mut next = shown.clone();
        next.put_str(1, 0, "XXX", CellStyle::default());

        let text = encode(Some(&shown), &next);
        assert!(!text.contains(CLEAR_ALL));
        // One move to column 1, the style once, then the whole run.
        assert_eq!(text.matches("\x1b[1;2H").count(), 1);
        assert_eq!(text.matches("38;2;").count(), 1);
        assert!(text.contains("XXX"));
        assert!(!text.contains(' '));
    }

    #[test]
    fn style_change_splits_run() {
        let shown = FrameBuffer::new(3, 1);
        let mut next = shown.clone();
        let red = CellStyle::new(Rgb::new(255, 0, 0), Rgb::new(0, 0, 0));
        next.put_str(0, 0, "ab", red);
        next.put_char(2, 0, 'c', red.bold());

        let text = encode(Some(&shown), &next);
        assert!(text.contains("ab"));
        assert!(text.contains("c"));
        assert_eq!(text.matches("38;2;255;0;0").count(), 2);
        // Background stays the same but is re-sent after the attribute reset.
        assert_eq!(text.matches("48;2;0;0;0").count(), 2);
    }

    #[test]
    fn resized_frame_is_a_full_redraw() {
        let shown = FrameBuffer::new(2, 1);
        let next = FrameBuffer::new(3, 1);
        let text = encode(Some(&shown), &next);
        assert!(text.starts_with(CLEAR_ALL));
        assert!(text.contains("   "));
    }
}
