use indicatif::{ProgressBar, ProgressStyle};
use project_knowledge::ProgressReporter;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

/// CLI progress reporter: a spinner while the tree is walked, then a one-line
/// summary per phase.
pub struct CliReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl CliReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn bar(&self) -> MutexGuard<'_, Option<ProgressBar>> {
        self.bar.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn finish_bar(&self) {
        if let Some(pb) = self.bar().take() {
            pb.finish_and_clear();
        }
    }
}

impl ProgressReporter for CliReporter {
    fn on_scan_start(&self, root: &Path) {
        let pb = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
        pb.set_style(style);
        pb.set_message(format!("Scanning {}...", root.display()));
        pb.enable_steady_tick(Duration::from_millis(80));

        let mut guard = self.bar();
        if let Some(old) = guard.take() {
            old.finish_and_clear();
        }
        *guard = Some(pb);
    }

    fn on_file_processed(&self, index: usize, relative_path: &str) {
        if let Some(pb) = self.bar().as_ref() {
            pb.set_message(format!("Processed ({}): {}", index, relative_path));
        }
    }

    fn on_scan_complete(&self, records: usize, duration_secs: f64) {
        self.finish_bar();
        eprintln!(
            "  \x1b[32m✓\x1b[0m Scan complete: {} files in {:.2}s",
            records, duration_secs
        );
    }

    fn on_write_complete(&self, output_path: &Path, records: usize) {
        eprintln!(
            "  \x1b[32m✓\x1b[0m Wrote {} documents to {}",
            records,
            output_path.display()
        );
    }
}
