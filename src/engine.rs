use crate::config::AppConfig;
use crate::error::Error;
use crate::loader::{sanitize, LoadOutcome, Loader};
use crate::progress::ProgressReporter;
use crate::record::{Record, RecordBody};
use crate::rules::RuleSet;
use crate::scanner::{self, Candidate, Selector};
use crate::writer::{DocumentWriter, WriteOutcome};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

pub struct SnapshotEngine {
    config: AppConfig,
    rules: RuleSet,
}

#[derive(Debug)]
pub struct ScanResult {
    pub root: PathBuf,
    pub records: Vec<Record>,
    pub stats: ScanStats,
    pub scan_duration: Duration,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanStats {
    pub files_visited: usize,
    pub files_excluded: usize,
    pub files_skipped: usize,
    pub files_processed: usize,
}

#[derive(Debug)]
pub struct SnapshotResult {
    pub scan: ScanResult,
    pub outcome: WriteOutcome,
}

impl SnapshotEngine {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            rules: RuleSet::default(),
        }
    }

    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    pub fn output_path(&self, root: &Path) -> PathBuf {
        root.join(&self.config.output_file_name)
    }

    /// Scan `root` and write the snapshot document inside it.
    pub fn snapshot(&self, root: &Path, reporter: &dyn ProgressReporter) -> Result<SnapshotResult, Error> {
        let scan = self.scan(root, reporter)?;
        let output_path = self.output_path(&scan.root);
        let outcome = DocumentWriter::new(&self.rules, self.config.indent).write(
            &scan.root,
            &output_path,
            &scan.records,
        )?;
        if let WriteOutcome::Written { ref path, records } = outcome {
            reporter.on_write_complete(path, records);
        }
        Ok(SnapshotResult { scan, outcome })
    }

    /// Walk `root` and collect the records in traversal order.
    ///
    /// Only a missing root is an error; every per-file problem degrades to
    /// skipping that file.
    pub fn scan(&self, root: &Path, reporter: &dyn ProgressReporter) -> Result<ScanResult, Error> {
        if !root.exists() {
            error!("Path does not exist: {}", root.display());
            return Err(Error::RootNotFound(root.to_path_buf()));
        }

        info!("Scanning directory: {}", root.display());
        reporter.on_scan_start(root);
        let scan_start = Instant::now();

        let selector = Selector::new(&self.rules);
        let loader = Loader::new(&self.rules);
        let output_path = self.output_path(root);

        let mut records: Vec<Record> = Vec::new();
        let mut stats = ScanStats::default();

        for path in scanner::walk_files(root) {
            stats.files_visited += 1;

            if path == output_path {
                debug!("Ignoring previous snapshot: {}", path.display());
                stats.files_excluded += 1;
                continue;
            }

            let candidate = match Candidate::from_path(root, &path) {
                Ok(candidate) => candidate,
                Err(err) => {
                    error!("Error reading metadata for {}: {}", path.display(), err);
                    stats.files_skipped += 1;
                    continue;
                }
            };

            if let Some(exclusion) = selector.check(&candidate) {
                stats.files_excluded += 1;
                reporter.on_file_skipped(&candidate.display_path(), &exclusion.to_string());
                continue;
            }
            debug!("Found file: {}", candidate.display_path());

            let body = match loader.read_content(&candidate) {
                LoadOutcome::Content(payload) => RecordBody::Payload(payload),
                LoadOutcome::TooLarge(placeholder) => RecordBody::Placeholder(placeholder),
                LoadOutcome::Skipped(reason) => {
                    stats.files_skipped += 1;
                    reporter.on_file_skipped(&candidate.display_path(), &reason.to_string());
                    continue;
                }
            };

            let record = Record {
                index: records.len() + 1,
                source: sanitize::strip_control_chars(&candidate.display_path()),
                body,
            };
            info!("Processed ({}): {}", record.index, record.source);
            reporter.on_file_processed(record.index, &record.source);
            records.push(record);
        }

        stats.files_processed = records.len();
        let scan_duration = scan_start.elapsed();
        debug!(
            "Scan completed in {:.2}s: {} visited, {} excluded, {} skipped, {} processed",
            scan_duration.as_secs_f64(),
            stats.files_visited,
            stats.files_excluded,
            stats.files_skipped,
            stats.files_processed,
        );
        reporter.on_scan_complete(records.len(), scan_duration.as_secs_f64());

        Ok(ScanResult {
            root: root.to_path_buf(),
            records,
            stats,
            scan_duration,
        })
    }
}
