//! Board geometry and square-state management
//!
//! This module contains the board-related functionality:
//! - Square coordinates and knight move offsets
//! - Per-square states and visit records

/// Board coordinates and knight move geometry
pub mod cell;
/// Square states, board construction, and visit records
pub mod state;

pub use cell::Cell;
pub use state::{Board, CellState};
