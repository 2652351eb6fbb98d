//! Character LCD adapter.
//!
//! Models a 20×4 HD44780-style display as a frame buffer.  The cursor
//! advances with each character and text past the end of a row is clipped,
//! as on the real glass (no wrap to the next line).

use log::debug;

use crate::app::ports::DisplayPort;

pub const DISPLAY_COLS: usize = 20;
pub const DISPLAY_ROWS: usize = 4;

pub struct CharacterDisplay {
    cells: [[u8; DISPLAY_COLS]; DISPLAY_ROWS],
    row: usize,
    col: usize,
}

impl Default for CharacterDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterDisplay {
    pub fn new() -> Self {
        Self {
            cells: [[b' '; DISPLAY_COLS]; DISPLAY_ROWS],
            row: 0,
            col: 0,
        }
    }

    /// Contents of `row` with trailing blanks removed.
    pub fn row_text(&self, row: usize) -> &str {
        self.cells
            .get(row)
            .and_then(|r| core::str::from_utf8(r).ok())
            .map_or("", str::trim_end)
    }
}

impl DisplayPort for CharacterDisplay {
    fn set_cursor(&mut self, row: u8, col: u8) {
        self.row = (row as usize).min(DISPLAY_ROWS - 1);
        self.col = (col as usize).min(DISPLAY_COLS);
    }

    fn write_str(&mut self, text: &str) {
        for b in text.bytes() {
            if self.col >= DISPLAY_COLS {
                break;
            }
            // Non-ASCII has no glyph in the character ROM.
            self.cells[self.row][self.col] = if b.is_ascii() { b } else { b'?' };
            self.col += 1;
        }
        debug!("LCD[{}] |{}|", self.row, self.row_text(self.row));
    }
}
