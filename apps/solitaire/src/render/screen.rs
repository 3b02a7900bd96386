//! Fixed-size character grid that text is written into at coordinates.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScreenError {
    #[error("position ({x}, {y}) lies outside the {width}x{height} screen")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

/// A `width` x `height` grid of characters, blank when created.
#[derive(Debug, Clone)]
pub struct Screen {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Screen {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![' '; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Write `text` starting at column `x`, row `y`. Each line of `text`
    /// starts at column `x` on the next row. Characters past the right edge
    /// are clipped and lines past the bottom are dropped.
    pub fn write_at(&mut self, text: &str, x: usize, y: usize) -> Result<(), ScreenError> {
        if x >= self.width || y >= self.height {
            return Err(ScreenError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        for (row, line) in (y..self.height).zip(text.lines()) {
            let start = row * self.width;
            for (col, ch) in (x..self.width).zip(line.chars()) {
                self.cells[start + col] = ch;
            }
        }
        Ok(())
    }

    /// Blank every cell.
    pub fn clear(&mut self) {
        self.cells.fill(' ');
    }

    /// The grid as `height` lines of `width` characters joined by `\n`.
    pub fn render(&self) -> String {
        self.cells
            .chunks(self.width.max(1))
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
