//! Command-line interface for tour searches and whole-board sweeps

use crate::algorithm::solver::TourSolver;
use crate::analysis::sweep::{SweepReport, sweep_all_starts};
use crate::board::cell::{Cell, corners};
use crate::io::configuration::{DEFAULT_BOARD_SIZE, DEFAULT_START_COL, DEFAULT_START_ROW};
use crate::io::error::Result;
use crate::io::progress::SweepProgress;
use crate::io::render::{export_board_as_text, render_board};
use clap::Parser;
use std::collections::BTreeSet;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "knightpath")]
#[command(
    version,
    about = "Find a knight's tour over a board with removed squares"
)]
/// Command-line arguments for the tour search tool
pub struct Cli {
    /// Board dimension
    #[arg(short = 'n', long, default_value_t = DEFAULT_BOARD_SIZE)]
    pub size: usize,

    /// Starting row
    #[arg(short, long, default_value_t = DEFAULT_START_ROW)]
    pub row: usize,

    /// Starting column
    #[arg(short, long, default_value_t = DEFAULT_START_COL)]
    pub col: usize,

    /// Keep the four corner squares instead of removing them
    #[arg(short, long)]
    pub keep_corners: bool,

    /// Remove an additional square, given as "row,col" (repeatable)
    #[arg(short, long, value_name = "ROW,COL", value_parser = parse_cell)]
    pub exclude: Vec<Cell>,

    /// Attempt a tour from every open square and report a summary
    #[arg(short, long)]
    pub all_starts: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Write the rendered board to a file as well as stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Starting square assembled from the row and column arguments
    pub const fn start(&self) -> Cell {
        Cell::new(self.row, self.col)
    }

    /// Removed-square set: the corner default plus any explicit squares
    pub fn excluded_set(&self) -> BTreeSet<Cell> {
        let mut excluded = if self.keep_corners {
            BTreeSet::new()
        } else {
            corners(self.size)
        };
        excluded.extend(self.exclude.iter().copied());
        excluded
    }
}

/// Parse a "row,col" square argument
fn parse_cell(raw: &str) -> std::result::Result<Cell, String> {
    let (row_text, col_text) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL but got '{raw}'"))?;

    let row = row_text
        .trim()
        .parse::<usize>()
        .map_err(|parse_err| format!("invalid row '{}': {parse_err}", row_text.trim()))?;
    let col = col_text
        .trim()
        .parse::<usize>()
        .map_err(|parse_err| format!("invalid column '{}': {parse_err}", col_text.trim()))?;

    Ok(Cell::new(row, col))
}

/// Orchestrates solve and sweep runs with progress and output handling
pub struct TourRunner {
    cli: Cli,
}

impl TourRunner {
    /// Create a runner from parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the requested search
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid configuration or starting square, for
    /// a stalled single solve, or if writing the output file fails.
    pub fn run(&self) -> Result<()> {
        let excluded = self.cli.excluded_set();

        if self.cli.all_starts {
            self.run_sweep(&excluded)
        } else {
            self.run_single(&excluded)
        }
    }

    // Allow print for user-facing results
    #[allow(clippy::print_stdout)]
    fn run_single(&self, excluded: &BTreeSet<Cell>) -> Result<()> {
        let mut solver = TourSolver::new(self.cli.size, excluded, self.cli.start())?;
        while solver.advance()? {}

        if let Some(path) = &self.cli.output {
            export_board_as_text(solver.board(), path)?;
        }

        println!("{}", render_board(solver.board()));
        println!(
            "Tour complete: {} squares from {}",
            solver.path().len(),
            self.cli.start()
        );

        Ok(())
    }

    fn run_sweep(&self, excluded: &BTreeSet<Cell>) -> Result<()> {
        let open_starts = self
            .cli
            .size
            .saturating_mul(self.cli.size)
            .saturating_sub(excluded.len());
        let progress = self
            .cli
            .should_show_progress()
            .then(|| SweepProgress::new(open_starts));

        let report = sweep_all_starts(self.cli.size, excluded, |start, finished| {
            if let Some(bar) = &progress {
                bar.start_attempt(start, finished);
            }
        })?;

        if let Some(bar) = &progress {
            bar.finish(report.completed.len(), report.attempts());
        }

        print_sweep_report(&report);
        Ok(())
    }
}

// Allow print for user-facing results
#[allow(clippy::print_stdout)]
fn print_sweep_report(report: &SweepReport) {
    println!(
        "Tours found from {} of {} starting squares on the {}x{} board (target length {})",
        report.completed.len(),
        report.attempts(),
        report.size,
        report.size,
        report.target
    );

    if !report.stalled.is_empty() {
        println!("Stalled starts:");
        for (start, visited) in &report.stalled {
            println!("  {start} reached {visited} of {} squares", report.target);
        }
    }
}
