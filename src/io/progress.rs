//! Placement progress display for generation runs

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PLACEMENT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("Placing blocks [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar tracking accepted placements against the budget
///
/// Draws on stderr, so map output on stdout stays clean. The bar is removed
/// when the run finishes; frontier exhaustion can leave it short of the
/// budget, which is expected.
pub struct PlacementProgress {
    bar: ProgressBar,
}

impl PlacementProgress {
    /// Create a bar sized by the placement budget
    pub fn new(max_blocks: usize) -> Self {
        let bar = ProgressBar::new(max_blocks as u64);
        bar.set_style(PLACEMENT_STYLE.clone());
        Self { bar }
    }

    /// Report the current placement count
    pub fn update(&self, placed: usize) {
        self.bar.set_position(placed as u64);
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
