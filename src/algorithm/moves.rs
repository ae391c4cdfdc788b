//! Legal knight destination enumeration

use crate::board::cell::Cell;
use crate::board::state::Board;

/// Open knight destinations from `cell`, in the fixed offset order
///
/// Pure query: the board is never mutated. The returned order is the order
/// the solver's tie-break resolves against, so it must stay deterministic.
pub fn candidates(board: &Board, cell: Cell) -> Vec<Cell> {
    cell.knight_destinations(board.size())
        .filter(|&destination| board.is_open(destination))
        .collect()
}
