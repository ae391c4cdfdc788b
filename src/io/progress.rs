//! Progress reporting for whole-board sweeps

use crate::board::cell::Cell;
use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static SWEEP_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!("{{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}");
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Terminal progress display for a sweep over starting squares
///
/// One bar spanning every open start; the message tracks the square
/// currently being attempted. Quiet mode skips construction entirely, so
/// nothing here needs to consult the CLI flags.
pub struct SweepProgress {
    bar: ProgressBar,
}

impl SweepProgress {
    /// Create a bar sized to the number of open starting squares
    pub fn new(total_starts: usize) -> Self {
        let bar = ProgressBar::new(total_starts as u64);
        bar.set_style(SWEEP_STYLE.clone());

        Self { bar }
    }

    /// Report the square about to be attempted and the finished count
    pub fn start_attempt(&self, start: Cell, finished: usize) {
        self.bar.set_position(finished as u64);
        self.bar.set_message(format!("attempting {start}"));
    }

    /// Complete the bar with a final tally message
    pub fn finish(&self, completed: usize, attempts: usize) {
        self.bar
            .finish_with_message(format!("{completed}/{attempts} starts produced a tour"));
    }
}
