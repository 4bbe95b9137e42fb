//! Screen service: a character frame plus the crossterm-backed terminal
//! it gets flushed to.

use std::io::{stdout, Stdout, Write};

use anyhow::Result;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, style};

/// A width x height grid of characters, rebuilt by the render adapter
/// every frame and flushed to the terminal in one pass.
pub struct Frame {
    width: i32,
    height: i32,
    cells: Vec<char>,
}

impl Frame {
    pub fn new(width: u16, height: u16) -> Self {
        let (width, height) = (width as i32, height as i32);
        let cells = vec![' '; (width * height) as usize];
        Frame { width, height, cells }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn reset(&mut self) {
        self.cells.fill(' ');
    }

    /// Writes a glyph, silently clipping anything out of range. A head
    /// that just crashed through a wall draws off-frame and must not
    /// panic here.
    pub fn set(&mut self, x: i32, y: i32, ch: char) {
        if x >= 0 && x < self.width && y >= 0 && y < self.height {
            self.cells[(y * self.width + x) as usize] = ch;
        }
    }

    pub fn get(&self, x: i32, y: i32) -> char {
        if x >= 0 && x < self.width && y >= 0 && y < self.height {
            self.cells[(y * self.width + x) as usize]
        } else {
            ' '
        }
    }

    fn row(&self, y: i32) -> String {
        let start = (y * self.width) as usize;
        self.cells[start..start + self.width as usize].iter().collect()
    }
}

/// Owns the real terminal: raw mode, the alternate screen and the cursor.
/// `restore` undoes everything `enter` did and is always attempted on the
/// way out, even when the game loop returns an error.
pub struct Screen {
    stdout: Stdout,
}

impl Screen {
    pub fn new() -> Self {
        Screen { stdout: stdout() }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        execute!(self.stdout, EnterAlternateScreen, cursor::Hide)?;
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        execute!(self.stdout, cursor::Show, LeaveAlternateScreen)?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    pub fn size(&self) -> Result<(u16, u16)> {
        Ok(terminal::size()?)
    }

    /// Full-frame redraw. Every cell is overwritten, so no clear is
    /// needed and the screen never flickers.
    pub fn draw(&mut self, frame: &Frame) -> Result<()> {
        for y in 0..frame.height() {
            queue!(
                self.stdout,
                cursor::MoveTo(0, y as u16),
                style::Print(frame.row(y))
            )?;
        }
        self.stdout.flush()?;
        Ok(())
    }
}
