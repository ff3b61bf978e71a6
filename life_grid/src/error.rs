// error.rs - Error taxonomy for board construction and seeding

use thiserror::Error;

/// Errors raised by board construction, seeding, and cell-id parsing.
///
/// All of these reject the failing call up front; the board is never left
/// in a partially mutated state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Board size must be a positive number of cells per side.
    #[error("board size must be at least 1")]
    InvalidSize,

    /// Coordinate outside the `[0, size)` range on both axes.
    #[error("coordinate {row}-{col} is outside a {size}x{size} board")]
    OutOfRange {
        row: usize,
        col: usize,
        size: usize,
    },

    /// Cell identifier that does not parse as `"row-col"`.
    #[error("malformed cell id {0:?}, expected \"row-col\"")]
    BadCellId(String),
}
