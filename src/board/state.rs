//! Board state with removed squares and per-square visit records
//!
//! The board holds one explicit state per square instead of sentinel
//! numbers, so a square can never be visited twice and visit orders stay
//! a contiguous range by construction.

use ndarray::Array2;
use std::collections::BTreeSet;

use crate::board::cell::Cell;
use crate::io::configuration::MAX_BOARD_DIMENSION;
use crate::io::error::{Result, TourError, invalid_parameter};

/// Occupancy of a single square
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// Permanently removed from play
    Excluded,
    /// Open and not yet visited
    Unvisited,
    /// Visited at the contained zero-based step index
    Visited(usize),
}

/// A square board with a fixed removed-square set and visit records
///
/// A board is built fresh for each solve attempt, mutated in place while the
/// search advances, and discarded with the attempt.
#[derive(Debug, Clone)]
pub struct Board {
    cells: Array2<CellState>,
    size: usize,
    open_target: usize,
}

impl Board {
    /// Build a board with `excluded` squares removed and `start` visited first
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `size` is zero or exceeds [`MAX_BOARD_DIMENSION`]
    /// - any excluded square lies outside the board
    /// - `start` lies outside the board or on an excluded square
    pub fn new(size: usize, excluded: &BTreeSet<Cell>, start: Cell) -> Result<Self> {
        Self::validate_configuration(size, excluded)?;

        if !start.on_board(size) {
            return Err(TourError::InvalidStart {
                start,
                reason: format!("outside the {size}x{size} board"),
            });
        }
        if excluded.contains(&start) {
            return Err(TourError::InvalidStart {
                start,
                reason: "the square has been removed from the board".to_owned(),
            });
        }

        let mut cells = Array2::from_elem((size, size), CellState::Unvisited);
        for &cell in excluded {
            if let Some(state) = cells.get_mut([cell.row, cell.col]) {
                *state = CellState::Excluded;
            }
        }
        if let Some(state) = cells.get_mut([start.row, start.col]) {
            *state = CellState::Visited(0);
        }

        Ok(Self {
            cells,
            size,
            open_target: size * size - excluded.len(),
        })
    }

    /// Check a dimension and removed-square set without building a board
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is zero or exceeds [`MAX_BOARD_DIMENSION`],
    /// or if any excluded square lies outside the board.
    pub fn validate_configuration(size: usize, excluded: &BTreeSet<Cell>) -> Result<()> {
        if size == 0 || size > MAX_BOARD_DIMENSION {
            return Err(invalid_parameter(
                "size",
                &size,
                &format!("board dimension must be between 1 and {MAX_BOARD_DIMENSION}"),
            ));
        }

        for &cell in excluded {
            if !cell.on_board(size) {
                return Err(TourError::InvalidExclusion { cell, size });
            }
        }

        Ok(())
    }

    /// Board dimension
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of squares a complete tour must visit
    pub const fn open_target(&self) -> usize {
        self.open_target
    }

    /// State of a square; off-board squares read as excluded
    pub fn state(&self, cell: Cell) -> CellState {
        self.cells
            .get([cell.row, cell.col])
            .copied()
            .unwrap_or(CellState::Excluded)
    }

    /// Whether a square is on the board, not removed, and not yet visited
    pub fn is_open(&self, cell: Cell) -> bool {
        self.state(cell) == CellState::Unvisited
    }

    /// Record a visit to `cell` at the given step index
    ///
    /// Only transitions an unvisited square; the solver obtains `cell` from
    /// the candidate enumeration, which guarantees that precondition.
    pub fn mark(&mut self, cell: Cell, order: usize) {
        if let Some(state) = self.cells.get_mut([cell.row, cell.col]) {
            if *state == CellState::Unvisited {
                *state = CellState::Visited(order);
            }
        }
    }

    /// Count of open squares one knight move away from `cell`
    pub fn degree_of_freedom(&self, cell: Cell) -> usize {
        cell.knight_destinations(self.size)
            .filter(|&destination| self.is_open(destination))
            .count()
    }
}
