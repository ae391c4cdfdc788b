//! Text rendering of solved boards
//!
//! Produces the numbered-board view: every square shows the step at which
//! the knight occupied it, removed squares show a cross, and squares the
//! search never reached stay dotted. Rendering is presentation only and
//! reads the board without mutating it.

use std::fs;
use std::path::Path;

use crate::board::cell::Cell;
use crate::board::state::{Board, CellState};
use crate::io::configuration::{EXCLUDED_MARKER, UNVISITED_MARKER};
use crate::io::error::{Result, TourError};

/// Render the board as a numbered text grid with row and column headers
///
/// Headers use the same zero-based indices as [`Cell`], so a rendered square
/// can be mapped straight back to a coordinate argument.
pub fn render_board(board: &Board) -> String {
    let size = board.size();
    let label_width = digit_count(size.saturating_sub(1));
    let cell_width = label_width.max(digit_count(board.open_target().saturating_sub(1)));

    let mut out = String::new();

    // Column header
    out.push_str(&" ".repeat(label_width));
    for col in 0..size {
        out.push(' ');
        out.push_str(&format!("{col:>cell_width$}"));
    }
    out.push('\n');

    for row in 0..size {
        out.push_str(&format!("{row:>label_width$}"));
        for col in 0..size {
            let state = board.state(Cell::new(row, col));
            out.push(' ');
            match state {
                CellState::Excluded => out.push_str(&format!("{EXCLUDED_MARKER:>cell_width$}")),
                CellState::Unvisited => out.push_str(&format!("{UNVISITED_MARKER:>cell_width$}")),
                CellState::Visited(order) => out.push_str(&format!("{order:>cell_width$}")),
            }
        }
        out.push('\n');
    }

    out
}

/// Write a rendered board to `path`
///
/// # Errors
///
/// Returns [`TourError::FileSystem`] if the file cannot be written.
pub fn export_board_as_text(board: &Board, path: &Path) -> Result<()> {
    fs::write(path, render_board(board)).map_err(|source| TourError::FileSystem {
        path: path.to_path_buf(),
        operation: "write",
        source,
    })
}

const fn digit_count(mut value: usize) -> usize {
    let mut count = 1;
    while value >= 10 {
        value /= 10;
        count += 1;
    }
    count
}
