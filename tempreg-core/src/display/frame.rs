//! Text frame buffer
//!
//! The panel is 84x48 pixels; with 6x8 pixel cells that gives 14
//! columns and 6 rows of text.

use heapless::String;

/// Text columns on the panel
pub const COLS: usize = 14;

/// Text rows on the panel
pub const ROWS: usize = 6;

/// One screenful of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    lines: [String<COLS>; ROWS],
}

impl Frame {
    /// Create an empty frame
    pub const fn new() -> Self {
        Self {
            lines: [
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
            ],
        }
    }

    /// Blank every row
    pub fn clear(&mut self) {
        for line in &mut self.lines {
            line.clear();
        }
    }

    /// Replace a row, clipping text that does not fit
    ///
    /// Rows past the bottom of the panel are ignored.
    pub fn set_line(&mut self, row: usize, text: &str) {
        let Some(line) = self.lines.get_mut(row) else {
            return;
        };
        line.clear();
        for c in text.chars() {
            if line.push(c).is_err() {
                break;
            }
        }
    }

    /// Get a row of text
    pub fn line(&self, row: usize) -> &str {
        self.lines.get(row).map_or("", |l| l.as_str())
    }

    /// Rows in top-to-bottom order
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|l| l.as_str())
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}
