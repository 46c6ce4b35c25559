//! Batch progress for multi-file runs

use indicatif::{ProgressBar, ProgressStyle};

const BATCH_TEMPLATE: &str = "{spinner} [{elapsed_precise}] {wide_bar} {pos}/{len} files, {msg}";

/// Tracks normalized batches (one per input file) and the texts they held.
///
/// The bar is hidden for quiet runs and single-file runs; counting still
/// happens so the summary is always available.
pub struct BatchProgress {
    bar: ProgressBar,
    texts: u64,
}

impl BatchProgress {
    pub fn new(total_batches: usize, quiet: bool) -> Self {
        let bar = if quiet || total_batches < 2 {
            ProgressBar::hidden()
        } else {
            let bar = ProgressBar::new(total_batches as u64);
            match ProgressStyle::with_template(BATCH_TEMPLATE) {
                Ok(style) => bar.with_style(style),
                Err(e) => {
                    log::debug!("Falling back to the default progress style: {e}");
                    bar
                }
            }
        };

        Self { bar, texts: 0 }
    }

    /// Record one normalized batch
    pub fn batch_done(&mut self, source: &str, texts: usize) {
        self.texts += texts as u64;
        log::debug!("Normalized {texts} text(s) from {source}");
        self.bar.set_message(format!("{} texts", self.texts));
        self.bar.inc(1);
    }

    /// Clear the bar and return the number of texts normalized
    pub fn finish(self) -> u64 {
        self.bar.finish_and_clear();
        log::info!(
            "Normalized {} text(s) in {} file(s)",
            self.texts,
            self.bar.position()
        );
        self.texts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_run_is_hidden_but_counts() {
        let mut progress = BatchProgress::new(5, true);
        assert!(progress.bar.is_hidden());

        progress.batch_done("a.txt", 3);
        progress.batch_done("b.txt", 0);
        assert_eq!(progress.finish(), 3);
    }

    #[test]
    fn test_single_batch_is_hidden() {
        let progress = BatchProgress::new(1, false);
        assert!(progress.bar.is_hidden());
    }

    #[test]
    fn test_batches_advance_bar() {
        let mut progress = BatchProgress::new(3, false);
        progress.batch_done("a.txt", 2);
        progress.batch_done("b.txt", 4);
        assert_eq!(progress.bar.position(), 2);
        assert_eq!(progress.bar.length(), Some(3));
        assert_eq!(progress.finish(), 6);
    }
}
