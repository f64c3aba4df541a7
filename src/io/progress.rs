//! Progress display for the day's commits

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static COMMIT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "{{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.green/black}}] {{pos}}/{{len}} commits"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░ ")
});

/// Single bar tracking commits made during one invocation
pub struct CommitProgress {
    bar: ProgressBar,
}

impl Default for CommitProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl CommitProgress {
    /// Create a hidden bar, shown once a budget is known
    pub fn new() -> Self {
        let bar = ProgressBar::hidden();
        bar.set_style(COMMIT_STYLE.clone());
        Self { bar }
    }

    /// Show the bar for `planned` commits, nothing is drawn for zero
    pub fn start(&self, planned: u32) {
        if planned == 0 {
            return;
        }
        self.bar.set_draw_target(indicatif::ProgressDrawTarget::stderr());
        self.bar.set_length(u64::from(planned));
        self.bar.set_position(0);
        self.bar.set_message("Painting");
    }

    /// Record one successful commit
    pub fn record(&self, remaining: Option<u32>) {
        self.bar.inc(1);
        if let Some(left) = remaining {
            self.bar.set_message(format!("{left} left"));
        }
    }

    /// Commits recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the bar
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
