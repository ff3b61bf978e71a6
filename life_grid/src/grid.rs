// grid.rs - Double-buffered toroidal board state and the B3/S23 rule

use crate::cell::CellState;
use crate::error::GridError;

/// Toroidal board with two generation buffers.
///
/// `current` is the generation being displayed and read; `next` is the
/// scratch buffer one generation is computed into before
/// [`Grid::commit_generation`] promotes it. Within one generation every
/// [`Grid::step_cell`] reads the frozen `current`; nothing observes a
/// partially updated board.
pub struct Grid {
    size: usize,
    current: Vec<Vec<CellState>>,
    next: Vec<Vec<CellState>>,
}

impl Grid {
    /// Create an all-dead `size x size` board.
    pub fn new(size: usize) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::InvalidSize);
        }
        Ok(Self {
            size,
            current: vec![vec![CellState::Dead; size]; size],
            next: vec![vec![CellState::Dead; size]; size],
        })
    }

    /// Cells per side.
    pub fn size(&self) -> usize {
        self.size
    }

    fn check(&self, row: usize, col: usize) -> Result<(), GridError> {
        if row >= self.size || col >= self.size {
            return Err(GridError::OutOfRange {
                row,
                col,
                size: self.size,
            });
        }
        Ok(())
    }

    /// Displayed state of a cell.
    pub fn state(&self, row: usize, col: usize) -> Result<CellState, GridError> {
        self.check(row, col)?;
        Ok(self.current[row][col])
    }

    /// Seed a cell alive in the current generation.
    ///
    /// Valid while the loop is idle or between ticks of a running loop; a
    /// seed placed during a run is picked up by the next full scan.
    pub fn set_alive(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        self.check(row, col)?;
        self.current[row][col] = CellState::Alive;
        Ok(())
    }

    /// Flip a cell in the current generation and return its new state.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<CellState, GridError> {
        self.check(row, col)?;
        let state = self.current[row][col].toggled();
        self.current[row][col] = state;
        Ok(state)
    }

    /// Count live cells among the 8 toroidally wrapped neighbors of
    /// `(row, col)` in the current generation.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> Result<u8, GridError> {
        self.check(row, col)?;
        Ok(self.live_neighbors(row, col))
    }

    fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        // Row 0's previous row is the last row, and the last row's next row
        // is row 0; identical for columns.
        let up = (row + self.size - 1) % self.size;
        let down = (row + 1) % self.size;
        let left = (col + self.size - 1) % self.size;
        let right = (col + 1) % self.size;

        let neighbors = [
            (up, left),
            (up, col),
            (up, right),
            (row, left),
            (row, right),
            (down, left),
            (down, col),
            (down, right),
        ];

        neighbors
            .iter()
            .filter(|&&(r, c)| self.current[r][c].is_alive())
            .count() as u8
    }

    /// Apply the rule to one cell, writing the outcome into the next buffer.
    /// Returns whether the cell will change state at commit.
    pub fn step_cell(&mut self, row: usize, col: usize) -> Result<bool, GridError> {
        self.check(row, col)?;
        Ok(self.advance_cell(row, col).is_some())
    }

    /// Rule application for the scan loop: `Some(new_state)` when the cell
    /// flips, `None` when it keeps its displayed state. Coordinates must be
    /// in range.
    pub(crate) fn advance_cell(&mut self, row: usize, col: usize) -> Option<CellState> {
        let alive = self.current[row][col].is_alive();
        let count = self.live_neighbors(row, col);

        let next = match (alive, count) {
            (true, 2) | (true, 3) => CellState::Alive, // Survival
            (false, 3) => CellState::Alive,            // Birth
            _ => CellState::Dead,                      // Death or stays dead
        };

        self.next[row][col] = next;
        (next != self.current[row][col]).then_some(next)
    }

    /// Promote the computed generation: `next` becomes `current` and the
    /// scratch buffer is cleared back to all-dead.
    pub fn commit_generation(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
        for row in self.next.iter_mut() {
            row.fill(CellState::Dead);
        }
    }

    /// Clear both buffers to all-dead.
    pub fn reset(&mut self) {
        for row in self.current.iter_mut() {
            row.fill(CellState::Dead);
        }
        for row in self.next.iter_mut() {
            row.fill(CellState::Dead);
        }
    }

    /// Number of live cells in the current generation.
    pub fn live_count(&self) -> usize {
        self.current
            .iter()
            .map(|row| row.iter().filter(|c| c.is_alive()).count())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_size_is_rejected() {
        assert!(matches!(Grid::new(0), Err(GridError::InvalidSize)));
    }

    #[test]
    fn new_board_is_all_dead() {
        let grid = Grid::new(4).unwrap();
        assert_eq!(grid.live_count(), 0);
        assert_eq!(grid.state(3, 3).unwrap(), CellState::Dead);
    }

    #[test]
    fn out_of_range_is_rejected_without_corruption() {
        let mut grid = Grid::new(3).unwrap();
        let err = GridError::OutOfRange {
            row: 3,
            col: 0,
            size: 3,
        };
        assert_eq!(grid.set_alive(3, 0), Err(err.clone()));
        assert_eq!(grid.toggle(3, 0), Err(err.clone()));
        assert_eq!(grid.count_live_neighbors(3, 0), Err(err.clone()));
        assert_eq!(grid.step_cell(3, 0), Err(err));
        assert!(grid.count_live_neighbors(0, 3).is_err());
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn corner_neighbors_wrap_on_a_3x3_board() {
        // On a 3x3 torus, every other cell is a neighbor of (0,0) exactly
        // once: all 8 live neighbors, never 9.
        let mut grid = Grid::new(3).unwrap();
        for row in 0..3 {
            for col in 0..3 {
                grid.set_alive(row, col).unwrap();
            }
        }
        assert_eq!(grid.count_live_neighbors(0, 0).unwrap(), 8);
        assert_eq!(grid.count_live_neighbors(2, 2).unwrap(), 8);
        assert_eq!(grid.count_live_neighbors(1, 1).unwrap(), 8);
    }

    #[test]
    fn opposite_corner_is_a_wrapped_neighbor() {
        let mut grid = Grid::new(5).unwrap();
        grid.set_alive(4, 4).unwrap();
        assert_eq!(grid.count_live_neighbors(0, 0).unwrap(), 1);
        assert_eq!(grid.count_live_neighbors(2, 2).unwrap(), 0);
    }

    /// Surround the center of a 5x5 board with `count` live neighbors.
    fn with_neighbors(center_alive: bool, count: usize) -> Grid {
        let ring = [
            (1, 1),
            (1, 2),
            (1, 3),
            (2, 1),
            (2, 3),
            (3, 1),
            (3, 2),
            (3, 3),
        ];
        let mut grid = Grid::new(5).unwrap();
        if center_alive {
            grid.set_alive(2, 2).unwrap();
        }
        for &(row, col) in ring.iter().take(count) {
            grid.set_alive(row, col).unwrap();
        }
        grid
    }

    #[test]
    fn rule_table_for_live_cells() {
        for count in 0..=8 {
            let mut grid = with_neighbors(true, count);
            let changed = grid.step_cell(2, 2).unwrap();
            grid.commit_generation();
            let survives = count == 2 || count == 3;
            assert_eq!(
                grid.state(2, 2).unwrap().is_alive(),
                survives,
                "live cell with {} neighbors",
                count
            );
            assert_eq!(changed, !survives);
        }
    }

    #[test]
    fn rule_table_for_dead_cells() {
        for count in 0..=8 {
            let mut grid = with_neighbors(false, count);
            let changed = grid.step_cell(2, 2).unwrap();
            grid.commit_generation();
            let born = count == 3;
            assert_eq!(
                grid.state(2, 2).unwrap().is_alive(),
                born,
                "dead cell with {} neighbors",
                count
            );
            assert_eq!(changed, born);
        }
    }

    #[test]
    fn stepping_leaves_current_untouched_until_commit() {
        let mut grid = Grid::new(5).unwrap();
        for col in 1..4 {
            grid.set_alive(2, col).unwrap();
        }

        for row in 0..5 {
            for col in 0..5 {
                grid.step_cell(row, col).unwrap();
            }
        }
        // Mid-scan the displayed generation is still the horizontal blinker.
        assert_eq!(grid.state(2, 1).unwrap(), CellState::Alive);
        assert_eq!(grid.state(2, 2).unwrap(), CellState::Alive);
        assert_eq!(grid.state(2, 3).unwrap(), CellState::Alive);
        assert_eq!(grid.state(1, 2).unwrap(), CellState::Dead);

        grid.commit_generation();
        assert_eq!(grid.state(1, 2).unwrap(), CellState::Alive);
        assert_eq!(grid.state(2, 2).unwrap(), CellState::Alive);
        assert_eq!(grid.state(3, 2).unwrap(), CellState::Alive);
        assert_eq!(grid.state(2, 1).unwrap(), CellState::Dead);
        assert_eq!(grid.state(2, 3).unwrap(), CellState::Dead);
    }

    #[test]
    fn commit_resets_the_scratch_buffer() {
        let mut grid = Grid::new(4).unwrap();
        grid.set_alive(0, 0).unwrap();
        grid.set_alive(0, 1).unwrap();
        grid.set_alive(1, 0).unwrap();
        grid.set_alive(1, 1).unwrap();

        for row in 0..4 {
            for col in 0..4 {
                grid.step_cell(row, col).unwrap();
            }
        }
        grid.commit_generation();
        assert_eq!(grid.live_count(), 4);

        // A commit without a preceding scan promotes the cleared scratch
        // buffer: everything dead.
        grid.commit_generation();
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn toggle_reports_the_new_state() {
        let mut grid = Grid::new(3).unwrap();
        assert_eq!(grid.toggle(1, 1).unwrap(), CellState::Alive);
        assert_eq!(grid.toggle(1, 1).unwrap(), CellState::Dead);
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn reset_kills_both_buffers() {
        let mut grid = Grid::new(4).unwrap();
        grid.set_alive(1, 1).unwrap();
        grid.step_cell(1, 1).unwrap();
        grid.reset();
        assert_eq!(grid.live_count(), 0);
        grid.commit_generation();
        assert_eq!(grid.live_count(), 0);
    }
}
