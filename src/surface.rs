//! Drawing surfaces the pager renders onto.
//!
//! A [`Surface`] is a small 2D canvas: text is placed at a column and a line
//! relative to a translatable origin, and `save`/`restore` bracket a change
//! of origin. The pager issues, per redraw:
//!
//! `clear → save → translate(x, y) → fill_text per line → restore`
//!
//! Two implementations are provided: [`TerminalSurface`] writes crossterm
//! commands to any `io::Write`, and [`BufferSurface`] keeps an in-memory grid
//! plus a log of every call.

use std::io::{self, Write};

use crossterm::{cursor, queue, style::Print, terminal};
use unicode_width::UnicodeWidthChar;

/// The drawing operations the pager needs from a backend.
pub trait Surface {
    /// Blanks the whole surface.
    fn clear(&mut self) -> io::Result<()>;
    /// Pushes the current origin.
    fn save(&mut self) -> io::Result<()>;
    /// Pops the origin pushed by the matching `save`.
    fn restore(&mut self) -> io::Result<()>;
    /// Moves the origin by `(dx, dy)`.
    fn translate(&mut self, dx: u16, dy: u16) -> io::Result<()>;
    /// Writes `text` at column `x` of line `line`, both relative to the origin.
    fn fill_text(&mut self, text: &str, x: u16, line: u16) -> io::Result<()>;
    /// Hides the terminal cursor.
    fn hide_cursor(&mut self) -> io::Result<()>;
    /// Shows the terminal cursor.
    fn show_cursor(&mut self) -> io::Result<()>;
    /// Returns the surface to its pristine state: blank, cursor visible,
    /// origin at `(0, 0)`.
    fn reset(&mut self) -> io::Result<()>;
}

/// Origin bookkeeping shared by both surfaces.
#[derive(Debug, Clone, Default)]
struct Origin {
    x: u16,
    y: u16,
    saved: Vec<(u16, u16)>,
}

impl Origin {
    fn save(&mut self) {
        self.saved.push((self.x, self.y));
    }

    fn restore(&mut self) {
        if let Some((x, y)) = self.saved.pop() {
            self.x = x;
            self.y = y;
        }
    }

    fn translate(&mut self, dx: u16, dy: u16) {
        self.x = self.x.saturating_add(dx);
        self.y = self.y.saturating_add(dy);
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Returns the longest prefix of `text` that fits in `max` display columns.
pub fn clip_to_width(text: &str, max: usize) -> &str {
    let mut used = 0;
    for (idx, ch) in text.char_indices() {
        let w = ch.width().unwrap_or(0);
        if used + w > max {
            return &text[..idx];
        }
        used += w;
    }
    text
}

/// A surface backed by a real terminal, driven through crossterm.
///
/// Output is queued and flushed at the end of each redraw (`restore`) and on
/// cursor and reset commands. Text falling outside `width × height` is
/// clipped.
#[derive(Debug)]
pub struct TerminalSurface<W: Write> {
    out: W,
    width: u16,
    height: u16,
    origin: Origin,
}

impl TerminalSurface<io::Stdout> {
    /// A surface writing to standard output.
    pub fn stdout(width: u16, height: u16) -> Self {
        Self::new(io::stdout(), width, height)
    }
}

impl<W: Write> TerminalSurface<W> {
    /// Wraps a writer as a `width × height` surface.
    pub fn new(out: W, width: u16, height: u16) -> Self {
        Self {
            out,
            width,
            height,
            origin: Origin::default(),
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn clear(&mut self) -> io::Result<()> {
        queue!(self.out, terminal::Clear(terminal::ClearType::All))
    }

    fn save(&mut self) -> io::Result<()> {
        self.origin.save();
        Ok(())
    }

    fn restore(&mut self) -> io::Result<()> {
        self.origin.restore();
        self.out.flush()
    }

    fn translate(&mut self, dx: u16, dy: u16) -> io::Result<()> {
        self.origin.translate(dx, dy);
        Ok(())
    }

    fn fill_text(&mut self, text: &str, x: u16, line: u16) -> io::Result<()> {
        let col = self.origin.x.saturating_add(x);
        let row = self.origin.y.saturating_add(line);
        if col >= self.width || row >= self.height {
            return Ok(());
        }
        let visible = clip_to_width(text, usize::from(self.width - col));
        queue!(self.out, cursor::MoveTo(col, row), Print(visible))
    }

    fn hide_cursor(&mut self) -> io::Result<()> {
        queue!(self.out, cursor::Hide)?;
        self.out.flush()
    }

    fn show_cursor(&mut self) -> io::Result<()> {
        queue!(self.out, cursor::Show)?;
        self.out.flush()
    }

    fn reset(&mut self) -> io::Result<()> {
        self.origin.reset();
        queue!(
            self.out,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0),
            cursor::Show
        )?;
        self.out.flush()
    }
}

/// One recorded call on a [`BufferSurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceOp {
    /// `clear()`
    Clear,
    /// `save()`
    Save,
    /// `restore()`
    Restore,
    /// `translate(dx, dy)`
    Translate(u16, u16),
    /// `fill_text(text, x, line)`
    FillText {
        /// Text as passed in, before clipping.
        text: String,
        /// Column relative to the origin.
        x: u16,
        /// Line relative to the origin.
        line: u16,
    },
    /// `hide_cursor()`
    HideCursor,
    /// `show_cursor()`
    ShowCursor,
    /// `reset()`
    Reset,
}

/// An in-memory surface: a grid of characters plus a log of every call.
///
/// Useful for tests and for rendering a pager to a plain string.
#[derive(Debug, Clone)]
pub struct BufferSurface {
    width: u16,
    height: u16,
    grid: Vec<Vec<char>>,
    origin: Origin,
    cursor_visible: bool,
    ops: Vec<SurfaceOp>,
}

impl BufferSurface {
    /// A blank `width × height` surface with a visible cursor.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            grid: vec![vec![' '; usize::from(width)]; usize::from(height)],
            origin: Origin::default(),
            cursor_visible: true,
            ops: Vec::new(),
        }
    }

    /// Every row of the grid with trailing blanks removed.
    pub fn lines(&self) -> Vec<String> {
        self.grid
            .iter()
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .collect()
    }

    /// The non-blank rows of the grid, top to bottom.
    pub fn text_lines(&self) -> Vec<String> {
        self.lines().into_iter().filter(|l| !l.is_empty()).collect()
    }

    /// The row at `row`, trailing blanks removed.
    pub fn line(&self, row: u16) -> Option<String> {
        self.grid
            .get(usize::from(row))
            .map(|r| r.iter().collect::<String>().trim_end().to_string())
    }

    /// Returns true while the cursor is shown.
    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// The calls recorded so far.
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Forgets the recorded calls, keeping the grid.
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    fn blank(&mut self) {
        for row in &mut self.grid {
            row.fill(' ');
        }
    }
}

impl Surface for BufferSurface {
    fn clear(&mut self) -> io::Result<()> {
        self.ops.push(SurfaceOp::Clear);
        self.blank();
        Ok(())
    }

    fn save(&mut self) -> io::Result<()> {
        self.ops.push(SurfaceOp::Save);
        self.origin.save();
        Ok(())
    }

    fn restore(&mut self) -> io::Result<()> {
        self.ops.push(SurfaceOp::Restore);
        self.origin.restore();
        Ok(())
    }

    fn translate(&mut self, dx: u16, dy: u16) -> io::Result<()> {
        self.ops.push(SurfaceOp::Translate(dx, dy));
        self.origin.translate(dx, dy);
        Ok(())
    }

    fn fill_text(&mut self, text: &str, x: u16, line: u16) -> io::Result<()> {
        self.ops.push(SurfaceOp::FillText {
            text: text.to_string(),
            x,
            line,
        });
        let col = usize::from(self.origin.x.saturating_add(x));
        let row = usize::from(self.origin.y.saturating_add(line));
        if let Some(cells) = self.grid.get_mut(row) {
            // one char per cell; wide glyphs are not expanded
            for (cell, ch) in cells.iter_mut().skip(col).zip(text.chars()) {
                *cell = ch;
            }
        }
        Ok(())
    }

    fn hide_cursor(&mut self) -> io::Result<()> {
        self.ops.push(SurfaceOp::HideCursor);
        self.cursor_visible = false;
        Ok(())
    }

    fn show_cursor(&mut self) -> io::Result<()> {
        self.ops.push(SurfaceOp::ShowCursor);
        self.cursor_visible = true;
        Ok(())
    }

    fn reset(&mut self) -> io::Result<()> {
        self.ops.push(SurfaceOp::Reset);
        self.origin.reset();
        self.blank();
        self.cursor_visible = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_buffer_translate_and_restore() {
        let mut s = BufferSurface::new(10, 4);
        s.save().unwrap();
        s.translate(2, 1).unwrap();
        s.fill_text("hi", 0, 0).unwrap();
        s.restore().unwrap();
        s.fill_text("x", 0, 0).unwrap();
        assert_eq!(s.lines(), vec!["x", "  hi", "", ""]);
    }

    #[test]
    fn test_buffer_clips_to_grid() {
        let mut s = BufferSurface::new(4, 1);
        s.fill_text("abcdef", 1, 0).unwrap();
        s.fill_text("zz", 0, 5).unwrap();
        assert_eq!(s.lines(), vec![" abc"]);
    }

    #[test]
    fn test_buffer_cursor_and_reset() {
        let mut s = BufferSurface::new(4, 2);
        s.hide_cursor().unwrap();
        assert!(!s.cursor_visible());
        s.fill_text("ab", 0, 1).unwrap();
        s.reset().unwrap();
        assert!(s.cursor_visible());
        assert!(s.text_lines().is_empty());
        assert_eq!(s.ops().last(), Some(&SurfaceOp::Reset));
    }

    #[test]
    fn test_clip_to_width_respects_wide_chars() {
        assert_eq!(clip_to_width("hello", 3), "hel");
        assert_eq!(clip_to_width("日本語", 4), "日本");
        assert_eq!(clip_to_width("ok", 10), "ok");
    }

    #[test]
    fn test_terminal_surface_emits_move_and_text() {
        let mut s = TerminalSurface::new(Vec::new(), 20, 5);
        s.translate(3, 2).unwrap();
        s.fill_text("row", 1, 0).unwrap();
        s.fill_text("offscreen", 0, 10).unwrap();
        let out = String::from_utf8(s.into_inner()).unwrap();
        // MoveTo is 1-based in the escape sequence: row 3, column 5
        assert!(out.contains("\x1b[3;5Hrow"));
        assert!(!out.contains("offscreen"));
    }
}
