//! Progress tracking for export operations
//!
//! Displays a progress bar while documents are converted for export. The
//! total is always known (the collection is counted first), so there is no
//! indeterminate spinner variant.

use indicatif::{ProgressBar, ProgressStyle};

/// Progress tracker for an export run
pub struct ProgressTracker {
    /// Progress bar (optional, disabled in quiet mode)
    bar: Option<ProgressBar>,
}

impl ProgressTracker {
    /// Create a new progress tracker
    ///
    /// # Arguments
    /// * `total` - Total number of documents
    /// * `enable_bar` - Whether to display a progress bar
    ///
    /// # Returns
    /// * `Self` - New progress tracker instance
    pub fn new(total: u64, enable_bar: bool) -> Self {
        let bar = if enable_bar {
            let bar = ProgressBar::new(total);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                    .unwrap()
                    .progress_chars("#>-"),
            );
            Some(bar)
        } else {
            None
        };

        Self { bar }
    }

    /// Update progress with new count
    ///
    /// # Arguments
    /// * `count` - Total number of documents processed so far
    pub fn update(&self, count: u64) {
        if let Some(ref bar) = self.bar {
            bar.set_position(count);
        }
    }

    /// Finish and clear the progress bar
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_disabled() {
        let tracker = ProgressTracker::new(100, false);
        tracker.update(50);
        tracker.finish();
        // No bar, no panic
    }

    #[test]
    fn test_tracker_enabled() {
        let tracker = ProgressTracker::new(10, true);
        tracker.update(10);
        tracker.finish();
    }
}
