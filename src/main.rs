//! CLI entry point for the knight's tour search tool

use clap::Parser;
use knightpath::io::cli::{Cli, TourRunner};

fn main() -> knightpath::Result<()> {
    let cli = Cli::parse();
    let runner = TourRunner::new(cli);
    runner.run()
}
