// cell.rs - Cell state and board coordinates

use std::fmt;
use std::str::FromStr;

use crate::error::GridError;

/// State of a single cell. Every cell always holds one of these two values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        matches!(self, CellState::Alive)
    }

    /// The opposite state.
    pub fn toggled(self) -> Self {
        match self {
            CellState::Dead => CellState::Alive,
            CellState::Alive => CellState::Dead,
        }
    }
}

/// A `(row, col)` position on the board, `0 <= row, col < size`.
///
/// Formats as the stable `"row-col"` identifier hosts use to address their
/// visual elements, and parses back from the same form. Leading zeros are
/// accepted on parse and never produced on format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

impl FromStr for Coord {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || GridError::BadCellId(s.to_string());
        let (row, col) = s.split_once('-').ok_or_else(|| bad())?;
        let row = row.trim().parse().map_err(|_| bad())?;
        let col = col.trim().parse().map_err(|_| bad())?;
        Ok(Self { row, col })
    }
}
