//! Knight's tour search over boards with removed squares
//!
//! Finds a Hamiltonian knight path across an N-by-N board from which a fixed
//! set of squares has been removed, using Warnsdorff's rule with a
//! deterministic tie-break. The search is greedy and never backtracks: every
//! attempt either covers the board or reports where it stalled, and the
//! outcome is a pure function of the inputs.

#![forbid(unsafe_code)]

/// Core search: candidate enumeration and the Warnsdorff tour solver
pub mod algorithm;
/// Aggregate analysis across starting squares
pub mod analysis;
/// Board geometry, square states, and visit records
pub mod board;
/// Input/output operations and error handling
pub mod io;

pub use io::error::{Result, TourError};
