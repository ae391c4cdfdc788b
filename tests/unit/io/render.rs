//! Tests for board rendering and text export

#[cfg(test)]
mod tests {
    use knightpath::TourError;
    use knightpath::board::cell::Cell;
    use knightpath::board::state::Board;
    use knightpath::io::render::{export_board_as_text, render_board};
    use std::collections::BTreeSet;

    fn ring_board() -> Board {
        let mut removed = BTreeSet::new();
        removed.insert(Cell::new(1, 1));
        match Board::new(3, &removed, Cell::new(0, 0)) {
            Ok(board) => board,
            Err(_) => unreachable!("the ring configuration is valid"),
        }
    }

    // Tests the unsolved board renders start, removed, and open squares
    // Verified by swapping the removed and unvisited markers
    #[test]
    fn test_fresh_board_rendering() {
        let rendering = render_board(&ring_board());
        assert_eq!(rendering, "  0 1 2\n0 0 · ·\n1 · × ·\n2 · · ·\n");
    }

    // Tests visit orders land on their squares as marks accumulate
    // Verified by writing orders into transposed coordinates
    #[test]
    fn test_visit_orders_are_rendered_in_place() {
        let mut board = ring_board();
        board.mark(Cell::new(2, 1), 1);
        board.mark(Cell::new(0, 2), 2);

        let rendering = render_board(&board);
        assert_eq!(rendering, "  0 1 2\n0 0 · 2\n1 · × ·\n2 · 1 ·\n");
    }

    // Tests column widths grow with multi-digit visit orders
    // Verified by fixing the cell width at one character
    #[test]
    fn test_cell_width_follows_the_target_length() {
        let board = match Board::new(4, &BTreeSet::new(), Cell::new(0, 0)) {
            Ok(board) => board,
            Err(_) => unreachable!("the open 4x4 configuration is valid"),
        };

        let rendering = render_board(&board);
        // 16 open squares put the highest order at two digits
        assert!(rendering.starts_with("   0  1  2  3\n"));
        assert!(rendering.contains("\n0  0  ·  ·  ·\n"));
    }

    // Tests exports write exactly the rendered text
    // Verified by writing the rendering without the final newline
    #[test]
    fn test_export_writes_the_rendering() {
        let board = ring_board();
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("failed to create a temporary directory")
        };
        let path = dir.path().join("board.txt");

        assert!(export_board_as_text(&board, &path).is_ok());
        match std::fs::read_to_string(&path) {
            Ok(written) => assert_eq!(written, render_board(&board)),
            Err(_) => unreachable!("exported file was not readable"),
        }
    }

    // Tests write failures surface as file system errors
    // Verified by mapping write failures to invalid parameters
    #[test]
    fn test_export_failure_reports_the_path() {
        let board = ring_board();
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("failed to create a temporary directory")
        };
        let path = dir.path().join("missing").join("board.txt");

        match export_board_as_text(&board, &path) {
            Err(TourError::FileSystem {
                operation, path: reported, ..
            }) => {
                assert_eq!(operation, "write");
                assert!(reported.ends_with("board.txt"));
            }
            _ => unreachable!("writing into a missing directory must fail"),
        }
    }
}
