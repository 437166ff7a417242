//! Terminal control for the render loop.

use crossterm::{cursor, queue, style, terminal};
use std::io::{self, Write};

/// Owns the output sink and restores the cursor when dropped.
pub struct Terminal<W: Write> {
    output: W,
    cursor_hidden: bool,
}

impl<W: Write> Terminal<W> {
    pub fn new(output: W) -> Self {
        Self {
            output,
            cursor_hidden: false,
        }
    }

    /// Hides the cursor and erases the whole screen.
    pub fn init(&mut self) -> io::Result<()> {
        queue!(self.output, cursor::Hide)?;
        self.cursor_hidden = true;
        self.erase_screen()
    }

    pub fn erase_screen(&mut self) -> io::Result<()> {
        queue!(
            self.output,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        self.output.flush()
    }

    /// Writes one frame from the top-left corner. Leftovers of a longer
    /// previous frame are cleared line by line.
    pub fn draw<I>(&mut self, rows: I) -> io::Result<()>
    where
        I: IntoIterator<Item = String>,
    {
        queue!(self.output, cursor::MoveTo(0, 0))?;
        for row in rows {
            queue!(
                self.output,
                style::Print(row),
                terminal::Clear(terminal::ClearType::UntilNewLine),
                style::Print("\r\n")
            )?;
        }
        self.output.flush()
    }

    /// Shows the cursor again.
    pub fn exit(&mut self) -> io::Result<()> {
        queue!(self.output, cursor::Show)?;
        self.cursor_hidden = false;
        self.output.flush()
    }

    pub fn output(&self) -> &W {
        &self.output
    }
}

impl<W: Write> Drop for Terminal<W> {
    fn drop(&mut self) {
        if self.cursor_hidden {
            let _ = queue!(self.output, cursor::Show);
            let _ = self.output.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_writes_every_row() {
        let mut term = Terminal::new(Vec::new());
        term.draw(vec!["alpha".to_string(), "beta".to_string()]).unwrap();
        let text = String::from_utf8(term.output().clone()).unwrap();
        assert!(text.contains("alpha"));
        assert!(text.contains("beta"));
        assert_eq!(text.matches("\r\n").count(), 2);
    }

    #[test]
    fn test_init_then_exit_balances_cursor() {
        let mut term = Terminal::new(Vec::new());
        term.init().unwrap();
        assert!(term.cursor_hidden);
        term.exit().unwrap();
        assert!(!term.cursor_hidden);
    }
}
