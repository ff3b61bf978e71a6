// sim.rs - Simulation session: run state, cadence, and the generation scan

use std::time::{Duration, Instant};

use log::{debug, trace};

use crate::cell::{CellState, Coord};
use crate::error::GridError;
use crate::grid::Grid;

/// Default stepping cadence, generations per second.
pub const DEFAULT_GENS_PER_SECOND: u32 = 12;

/// Receiver for the core's incremental visual updates.
///
/// `cell_changed` fires once per cell that actually flips per tick; hosts
/// update only the addressed element instead of repainting the whole board.
/// `cleared` fires when the board is wiped and the view should be rebuilt.
pub trait Renderer {
    fn cell_changed(&mut self, coord: Coord, state: CellState);
    fn cleared(&mut self);
}

/// Discard-everything renderer for headless stepping.
impl Renderer for () {
    fn cell_changed(&mut self, _coord: Coord, _state: CellState) {}
    fn cleared(&mut self) {}
}

/// Whether the stepping loop is armed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
}

/// One simulation session: the board plus the loop that drives it.
///
/// The session is an explicit object passed to whatever hosts the
/// start/stop/reset commands; there is no ambient global state. All
/// mutation happens on the host's single thread of control: ticks are
/// synchronous and run to completion, and seeding interleaves only between
/// ticks.
pub struct Simulation {
    grid: Grid,
    state: RunState,
    interval: Duration,
    next_due: Option<Instant>,
    generation: u64,
}

impl Simulation {
    /// Create an idle session over an all-dead board at the default cadence.
    pub fn new(size: usize) -> Result<Self, GridError> {
        Self::with_cadence(size, DEFAULT_GENS_PER_SECOND)
    }

    /// Create an idle session stepping at `gens_per_second`.
    pub fn with_cadence(size: usize, gens_per_second: u32) -> Result<Self, GridError> {
        Ok(Self {
            grid: Grid::new(size)?,
            state: RunState::Idle,
            interval: Duration::from_secs(1) / gens_per_second.max(1),
            next_due: None,
            generation: 0,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of committed generations since creation or the last reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Fixed delay between ticks.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Seed a cell alive. Valid while idle or between ticks of a run; a
    /// seed placed during a run is picked up by the next full scan.
    pub fn set_alive(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        self.grid.set_alive(row, col)
    }

    /// Flip a cell and return its new state so the host can mirror it.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<CellState, GridError> {
        self.grid.toggle(row, col)
    }

    /// Arm the loop. Starting while already running cancels the pending
    /// tick and schedules a fresh one; it never stacks a second schedule.
    pub fn start(&mut self) {
        self.state = RunState::Running;
        self.next_due = None;
        debug!("[Simulation] started, {:?} per generation", self.interval);
    }

    /// Disarm the loop, cancelling the pending tick. A tick already
    /// executing is synchronous and has run to completion by the time any
    /// caller can get here.
    pub fn stop(&mut self) {
        self.state = RunState::Idle;
        self.next_due = None;
        debug!("[Simulation] stopped at generation {}", self.generation);
    }

    /// Stop the loop, clear the board, and tell the renderer to rebuild
    /// its view. Resetting an idle, dead session is a no-op apart from the
    /// `cleared` signal.
    pub fn reset<R: Renderer>(&mut self, renderer: &mut R) {
        self.stop();
        self.grid.reset();
        self.generation = 0;
        renderer.cleared();
        debug!("[Simulation] reset");
    }

    /// Compute and commit exactly one generation, reporting every flipped
    /// cell to `renderer` as `(coordinate, new_state)`.
    ///
    /// The whole row-major scan reads the frozen current generation; the
    /// displayed board only changes at the commit after the scan.
    pub fn step<R: Renderer>(&mut self, renderer: &mut R) {
        let size = self.grid.size();
        let mut changed = 0usize;
        for row in 0..size {
            for col in 0..size {
                if let Some(state) = self.grid.advance_cell(row, col) {
                    renderer.cell_changed(Coord::new(row, col), state);
                    changed += 1;
                }
            }
        }
        self.grid.commit_generation();
        self.generation += 1;
        trace!(
            "[Simulation] generation {}: {} cells changed",
            self.generation, changed
        );
    }

    /// Cooperative pump for frame-driven hosts: runs one tick when the
    /// armed deadline has passed and schedules the next one `interval`
    /// later. Returns whether a generation ran.
    ///
    /// The deadline is armed lazily on the first poll after `start`, so a
    /// restart always begins a full interval away from `now`.
    pub fn poll<R: Renderer>(&mut self, now: Instant, renderer: &mut R) -> bool {
        if self.state != RunState::Running {
            return false;
        }
        match self.next_due {
            None => {
                self.next_due = Some(now + self.interval);
                false
            }
            Some(due) if now >= due => {
                self.step(renderer);
                self.next_due = Some(now + self.interval);
                true
            }
            Some(_) => false,
        }
    }
}
