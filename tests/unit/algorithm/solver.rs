//! Tests for the Warnsdorff tour solver and its status machine

#[cfg(test)]
mod tests {
    use knightpath::TourError;
    use knightpath::algorithm::solver::{SolveStatus, TourSolver, solve};
    use knightpath::board::cell::Cell;
    use std::collections::BTreeSet;

    fn ring() -> BTreeSet<Cell> {
        let mut removed = BTreeSet::new();
        removed.insert(Cell::new(1, 1));
        removed
    }

    // Tests a fresh solver starts in the stepping state
    // Verified by initializing the status as completed
    #[test]
    fn test_new_solver_is_stepping() {
        let Ok(solver) = TourSolver::new(3, &ring(), Cell::new(0, 0)) else {
            unreachable!("valid configuration was rejected")
        };

        assert_eq!(solver.status(), SolveStatus::Stepping);
        assert_eq!(solver.target(), 8);
        assert_eq!(solver.path(), &[Cell::new(0, 0)]);
    }

    // Tests a board with a single open square completes without stepping
    // Verified by requiring one advance before completion
    #[test]
    fn test_single_open_square_completes_immediately() {
        let Ok(solver) = TourSolver::new(1, &BTreeSet::new(), Cell::new(0, 0)) else {
            unreachable!("valid configuration was rejected")
        };

        assert_eq!(solver.status(), SolveStatus::Completed);
    }

    // Tests the forced walk around the ring board, square by square
    // Verified by breaking the tie toward the last offset
    #[test]
    fn test_ring_board_literal_path() {
        let expected: Vec<Cell> = [
            (0, 0),
            (2, 1),
            (0, 2),
            (1, 0),
            (2, 2),
            (0, 1),
            (2, 0),
            (1, 2),
        ]
        .iter()
        .map(|&(row, col)| Cell::new(row, col))
        .collect();

        match solve(3, &ring(), Cell::new(0, 0)) {
            Ok(tour) => assert_eq!(tour.into_path(), expected),
            Err(_) => unreachable!("the ring board is walkable from any square"),
        }
    }

    // Tests the stall error carries the diagnostic counters
    // Verified by reporting the target in place of the visit count
    #[test]
    fn test_stall_error_carries_progress() {
        match solve(3, &BTreeSet::new(), Cell::new(0, 0)) {
            Err(TourError::StuckNoTour {
                start,
                visited,
                target,
            }) => {
                assert_eq!(start, Cell::new(0, 0));
                assert_eq!(visited, 8);
                assert_eq!(target, 9);
            }
            _ => unreachable!("the full 3x3 board always stalls"),
        }
    }

    // Tests terminal solvers refuse further mutation
    // Verified by letting advance keep stepping after completion
    #[test]
    fn test_terminal_states_are_stable() {
        let Ok(mut solver) = TourSolver::new(3, &ring(), Cell::new(0, 0)) else {
            unreachable!("valid configuration was rejected")
        };
        while let Ok(true) = solver.advance() {}

        assert_eq!(solver.status(), SolveStatus::Completed);
        let settled = solver.path().to_vec();
        assert!(matches!(solver.advance(), Ok(false)));
        assert_eq!(solver.path(), settled.as_slice());
    }

    // Tests rejected configurations surface before any stepping
    // Verified by validating the start square during the first advance
    #[test]
    fn test_rejected_configurations_never_step() {
        assert!(matches!(
            TourSolver::new(3, &ring(), Cell::new(1, 1)),
            Err(TourError::InvalidStart { .. })
        ));
        assert!(matches!(
            TourSolver::new(0, &BTreeSet::new(), Cell::new(0, 0)),
            Err(TourError::InvalidParameter { .. })
        ));
    }

    // Tests repeated solves are reproducible
    // Verified by seeding the selection with ambient state
    #[test]
    fn test_solve_is_deterministic() {
        let first = solve(3, &ring(), Cell::new(0, 0));
        let second = solve(3, &ring(), Cell::new(0, 0));

        match (first, second) {
            (Ok(a), Ok(b)) => assert_eq!(a, b),
            _ => unreachable!("the ring board is walkable from any square"),
        }
    }
}
