//! Board coordinates and knight move geometry

use std::collections::BTreeSet;
use std::fmt;

/// The eight knight offsets as `(row, col)` deltas
///
/// The order is load-bearing: candidate enumeration walks this table front to
/// back and ties resolve to the earliest entry, so reordering it changes
/// which tour is produced.
pub const KNIGHT_OFFSETS: [(i64, i64); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// A square identified by zero-based row and column indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Zero-based row index
    pub row: usize,
    /// Zero-based column index
    pub col: usize,
}

impl Cell {
    /// Create a cell from row and column indices
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check whether the cell lies on a `size`-by-`size` board
    pub const fn on_board(self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Knight destinations from this cell that land on the board
    ///
    /// Destinations are yielded in the fixed [`KNIGHT_OFFSETS`] order;
    /// occupancy is not consulted.
    pub fn knight_destinations(self, size: usize) -> impl Iterator<Item = Self> {
        let row = self.row as i64;
        let col = self.col as i64;
        let bound = size as i64;

        KNIGHT_OFFSETS
            .iter()
            .filter_map(move |&(row_delta, col_delta)| {
                let r = row + row_delta;
                let c = col + col_delta;
                (r >= 0 && r < bound && c >= 0 && c < bound)
                    .then(|| Self::new(r as usize, c as usize))
            })
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four corner squares of a `size`-by-`size` board
///
/// This is the reference removed-square set. Corners coincide on boards
/// smaller than 2x2, so the set can hold fewer than four squares.
pub fn corners(size: usize) -> BTreeSet<Cell> {
    let mut squares = BTreeSet::new();
    if size == 0 {
        return squares;
    }

    let last = size - 1;
    squares.insert(Cell::new(0, 0));
    squares.insert(Cell::new(0, last));
    squares.insert(Cell::new(last, 0));
    squares.insert(Cell::new(last, last));
    squares
}
