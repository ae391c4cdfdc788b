//! Error types for tour search operations

use std::fmt;
use std::path::PathBuf;

use crate::board::cell::Cell;

/// Main error type for all tour search operations
#[derive(Debug)]
pub enum TourError {
    /// The requested starting square cannot begin a tour
    InvalidStart {
        /// The rejected starting square
        start: Cell,
        /// Why the square cannot be used
        reason: String,
    },

    /// A removed square lies outside the board
    InvalidExclusion {
        /// The offending square
        cell: Cell,
        /// Board dimension it was checked against
        size: usize,
    },

    /// The greedy search ran out of moves before covering the board
    ///
    /// An expected terminal outcome for some starting squares: the heuristic
    /// commits to every step and never backtracks.
    StuckNoTour {
        /// Starting square of the attempt
        start: Cell,
        /// Squares visited before the stall
        visited: usize,
        /// Squares a complete tour must visit
        target: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for TourError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStart { start, reason } => {
                write!(f, "Invalid starting square {start}: {reason}")
            }
            Self::InvalidExclusion { cell, size } => {
                write!(
                    f,
                    "Excluded square {cell} lies outside the {size}x{size} board"
                )
            }
            Self::StuckNoTour {
                start,
                visited,
                target,
            } => {
                write!(
                    f,
                    "No tour found from {start}: stalled after visiting {visited} of {target} squares; try another starting square"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for TourError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for tour search results
pub type Result<T> = std::result::Result<T, TourError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TourError {
    TourError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

impl From<std::io::Error> for TourError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}
