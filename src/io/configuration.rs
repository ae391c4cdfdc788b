//! Solver constants and runtime configuration defaults

/// Default board dimension
pub const DEFAULT_BOARD_SIZE: usize = 8;

/// Default starting row
pub const DEFAULT_START_ROW: usize = 2;

/// Default starting column
pub const DEFAULT_START_COL: usize = 2;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed board dimension
pub const MAX_BOARD_DIMENSION: usize = 10_000;

// Progress bar display settings
/// Width of the sweep progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Board rendering markers
/// Marker rendered for removed squares
pub const EXCLUDED_MARKER: char = '×';
/// Marker rendered for open squares that were never visited
pub const UNVISITED_MARKER: char = '·';
