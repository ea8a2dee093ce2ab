//! Fundamental grid and clock types.

use serde::{Deserialize, Serialize};

use crate::constants::{GRID_COLS, GRID_ROWS, MINUTES_PER_DAY};

/// A cell on the 8x8 tactical map. Column 0 = "A", row 0 = "1".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub col: i32,
    pub row: i32,
}

impl GridPos {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// True if the cell lies on the board.
    pub fn in_bounds(&self) -> bool {
        (0..GRID_COLS).contains(&self.col) && (0..GRID_ROWS).contains(&self.row)
    }

    /// Map label for this cell, "A1" through "H8".
    pub fn label(&self) -> String {
        let letter = (b'A' + self.col as u8) as char;
        format!("{}{}", letter, self.row + 1)
    }

    /// Parse a map label. Case-insensitive; `None` for anything outside
    /// A1..H8, including "A0" and empty input.
    pub fn parse(label: &str) -> Option<GridPos> {
        let mut chars = label.trim().chars();
        let letter = chars.next()?.to_ascii_uppercase();
        if !letter.is_ascii_uppercase() || letter > 'H' {
            return None;
        }
        let number: i32 = chars.as_str().parse().ok()?;
        if !(1..=GRID_ROWS).contains(&number) {
            return None;
        }
        Some(GridPos::new((letter as u8 - b'A') as i32, number - 1))
    }

    /// Manhattan distance to another cell.
    pub fn distance_to(&self, other: &GridPos) -> i32 {
        (self.col - other.col).abs() + (self.row - other.row).abs()
    }
}

/// Mission clock, in minutes since midnight. One tick = one minute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameClock {
    pub minutes: u32,
}

impl GameClock {
    pub fn new(minutes: u32) -> Self {
        Self { minutes }
    }

    /// Advance by one minute.
    pub fn advance(&mut self) {
        self.minutes += 1;
    }

    /// "HH:MM" display for the clock widget.
    pub fn display(&self) -> String {
        format_minutes(self.minutes)
    }
}

/// Format minutes-since-midnight as zero-padded "HH:MM", wrapping at
/// midnight.
pub fn format_minutes(minutes: u32) -> String {
    let m = minutes % MINUTES_PER_DAY;
    format!("{:02}:{:02}", m / 60, m % 60)
}
