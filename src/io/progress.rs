//! Turn-by-turn progress display for the simulation loop

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static TURN_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar tracking simulated turns
pub struct SimulationProgress {
    bar: ProgressBar,
}

impl SimulationProgress {
    /// Create a bar spanning the planned number of turns
    pub fn new(turns: usize) -> Self {
        let bar = ProgressBar::new(turns as u64);
        bar.set_style(TURN_STYLE.clone());
        Self { bar }
    }

    /// Advance to a turn and refresh the board summary
    pub fn update(&self, turn: usize, active_units: usize, removed_total: usize) {
        self.bar.set_position(turn as u64);
        self.bar
            .set_message(format!("{active_units} units on board, {removed_total} removed"));
    }

    /// Complete the bar with a final summary
    pub fn finish(&self, removed_total: usize) {
        self.bar
            .finish_with_message(format!("done, {removed_total} units removed"));
    }
}
