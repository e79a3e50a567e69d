use std::path::Path;

/// Trait for reporting snapshot progress.
///
/// The CLI implements it with an indicatif spinner. All methods have default
/// no-op implementations.
pub trait ProgressReporter: Send + Sync {
    fn on_scan_start(&self, _root: &Path) {}
    fn on_file_skipped(&self, _relative_path: &str, _reason: &str) {}
    fn on_file_processed(&self, _index: usize, _relative_path: &str) {}
    fn on_scan_complete(&self, _records: usize, _duration_secs: f64) {}
    fn on_write_complete(&self, _output_path: &Path, _records: usize) {}
}

/// No-op progress reporter for silent operation.
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {}
