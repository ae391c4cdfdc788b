//! Whole-board sweeps over candidate starting squares
//!
//! The greedy search stalls from some starting squares, so the practical way
//! to find a workable start is to try them all. Attempts are independent and
//! own their boards, so the sweep is a plain sequential loop.

use std::collections::BTreeSet;

use crate::algorithm::solver::solve;
use crate::board::cell::Cell;
use crate::board::state::Board;
use crate::io::error::{Result, TourError};

/// Outcome tally for tour attempts from every open starting square
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepReport {
    /// Board dimension the sweep ran on
    pub size: usize,
    /// Number of squares a complete tour must visit
    pub target: usize,
    /// Starting squares that produced a complete tour, in row-major order
    pub completed: Vec<Cell>,
    /// Starting squares that stalled, with the visit count each reached
    pub stalled: Vec<(Cell, usize)>,
}

impl SweepReport {
    /// Number of starting squares attempted
    pub const fn attempts(&self) -> usize {
        self.completed.len() + self.stalled.len()
    }
}

/// Attempt a tour from every open square of the configuration
///
/// Starts are tried in row-major order, so the report is deterministic.
/// `on_attempt` is invoked before each attempt with the starting square and
/// the number of attempts already finished; the CLI hangs progress reporting
/// off it.
///
/// # Errors
///
/// Returns an error when the configuration itself is invalid (zero or
/// oversized dimension, off-board exclusions). Stalled starts are recorded
/// in the report, not surfaced as errors.
pub fn sweep_all_starts(
    size: usize,
    excluded: &BTreeSet<Cell>,
    mut on_attempt: impl FnMut(Cell, usize),
) -> Result<SweepReport> {
    Board::validate_configuration(size, excluded)?;

    let target = size * size - excluded.len();
    let mut completed = Vec::new();
    let mut stalled = Vec::new();

    for row in 0..size {
        for col in 0..size {
            let start = Cell::new(row, col);
            if excluded.contains(&start) {
                continue;
            }

            on_attempt(start, completed.len() + stalled.len());

            match solve(size, excluded, start) {
                Ok(_) => completed.push(start),
                Err(TourError::StuckNoTour { visited, .. }) => stalled.push((start, visited)),
                Err(other) => return Err(other),
            }
        }
    }

    Ok(SweepReport {
        size,
        target,
        completed,
        stalled,
    })
}
