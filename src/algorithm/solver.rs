//! Greedy tour search driven by Warnsdorff's rule
//!
//! Each step moves to the open candidate with the fewest onward moves,
//! breaking ties toward the earliest entry in the fixed offset order. The
//! search never backtracks: a step with no candidates is a terminal stall,
//! reported as an expected outcome rather than a crash.

use std::collections::BTreeSet;

use crate::algorithm::moves::candidates;
use crate::board::cell::Cell;
use crate::board::state::Board;
use crate::io::error::{Result, TourError};

/// Progress of a single solve attempt
///
/// `Stepping` is transient; the terminal states admit no further board
/// mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// The search is still placing squares
    Stepping,
    /// Every open square has been visited
    Completed,
    /// Candidates ran out before the board was covered
    Stuck,
}

/// A complete tour: the visit order over every open square of a board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour {
    size: usize,
    path: Vec<Cell>,
}

impl Tour {
    /// Dimension of the board the tour was found on
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Squares in visit order
    pub fn path(&self) -> &[Cell] {
        &self.path
    }

    /// Number of squares visited
    pub const fn len(&self) -> usize {
        self.path.len()
    }

    /// Whether the tour holds no squares; never true for a solver-built tour
    pub const fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Consume the tour and return the visit order
    pub fn into_path(self) -> Vec<Cell> {
        self.path
    }
}

/// Step-wise Warnsdorff search over a single board
///
/// Owns its board for the duration of one attempt. Drive it one step at a
/// time with [`advance`](Self::advance) when the host wants to interleave
/// work between steps, or hand the whole attempt to [`run`](Self::run).
#[derive(Debug, Clone)]
pub struct TourSolver {
    board: Board,
    path: Vec<Cell>,
    start: Cell,
    target: usize,
    status: SolveStatus,
}

impl TourSolver {
    /// Initialize a solve attempt from `start`
    ///
    /// # Errors
    ///
    /// Returns [`TourError::InvalidStart`], [`TourError::InvalidExclusion`],
    /// or [`TourError::InvalidParameter`] when the configuration is rejected;
    /// no search is attempted in that case.
    pub fn new(size: usize, excluded: &BTreeSet<Cell>, start: Cell) -> Result<Self> {
        let board = Board::new(size, excluded, start)?;
        let target = board.open_target();
        let status = if target == 1 {
            SolveStatus::Completed
        } else {
            SolveStatus::Stepping
        };

        Ok(Self {
            board,
            path: vec![start],
            start,
            target,
            status,
        })
    }

    /// Current status of the attempt
    pub const fn status(&self) -> SolveStatus {
        self.status
    }

    /// Board with the visit records accumulated so far
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Squares visited so far, in order
    pub fn path(&self) -> &[Cell] {
        &self.path
    }

    /// Number of squares a complete tour must visit
    pub const fn target(&self) -> usize {
        self.target
    }

    /// Perform one candidates, select, mark step
    ///
    /// Returns `Ok(true)` while further steps remain and `Ok(false)` once
    /// the tour is complete. Terminal solvers are never mutated again: a
    /// completed solver keeps returning `Ok(false)` and a stuck one keeps
    /// returning the stall error.
    ///
    /// # Errors
    ///
    /// Returns [`TourError::StuckNoTour`] when no candidate remains before
    /// every open square has been visited.
    pub fn advance(&mut self) -> Result<bool> {
        match self.status {
            SolveStatus::Completed => return Ok(false),
            SolveStatus::Stuck => return Err(self.stall_error()),
            SolveStatus::Stepping => {}
        }

        let Some(&current) = self.path.last() else {
            // Construction always seeds the path with the start square
            self.status = SolveStatus::Stuck;
            return Err(self.stall_error());
        };

        let open = candidates(&self.board, current);
        let Some(next) = select_next(&self.board, &open) else {
            self.status = SolveStatus::Stuck;
            return Err(self.stall_error());
        };

        self.board.mark(next, self.path.len());
        self.path.push(next);

        if self.path.len() == self.target {
            self.status = SolveStatus::Completed;
            return Ok(false);
        }

        Ok(true)
    }

    /// Drive the search to a terminal state
    ///
    /// # Errors
    ///
    /// Returns [`TourError::StuckNoTour`] when the greedy search stalls
    /// before covering the board.
    pub fn run(mut self) -> Result<Tour> {
        while self.advance()? {}

        Ok(Tour {
            size: self.board.size(),
            path: self.path,
        })
    }

    const fn stall_error(&self) -> TourError {
        TourError::StuckNoTour {
            start: self.start,
            visited: self.path.len(),
            target: self.target,
        }
    }
}

/// Pick the candidate with the fewest onward moves
///
/// Onward degrees are read from the current board state, with the candidate
/// itself still unmarked. `min_by_key` keeps the earliest of tied candidates,
/// which pins every input to a single reproducible tour.
fn select_next(board: &Board, open: &[Cell]) -> Option<Cell> {
    open.iter()
        .copied()
        .min_by_key(|&candidate| board.degree_of_freedom(candidate))
}

/// Find a complete tour of the configuration from `start`
///
/// # Errors
///
/// Returns [`TourError::InvalidStart`], [`TourError::InvalidExclusion`], or
/// [`TourError::InvalidParameter`] for rejected configurations, and
/// [`TourError::StuckNoTour`] when the greedy search stalls. A stall is an
/// expected outcome for some starting squares; callers typically retry from
/// another square.
pub fn solve(size: usize, excluded: &BTreeSet<Cell>, start: Cell) -> Result<Tour> {
    TourSolver::new(size, excluded, start)?.run()
}
