pub mod decode;
pub mod sanitize;

use crate::rules::RuleSet;
use crate::scanner::Candidate;
use std::fmt;
use std::fs;
use tracing::{debug, error, info, warn};

/// Why a candidate produced no content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    UnsupportedExtension,
    ReadFailed(String),
    Undecodable,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::UnsupportedExtension => f.write_str("unsupported extension"),
            SkipReason::ReadFailed(err) => write!(f, "read failed: {}", err),
            SkipReason::Undecodable => f.write_str("no encoding could decode the file"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Sanitized text wrapped in its CDATA envelope.
    Content(String),
    /// Diagnostic text standing in for a file over the size limit.
    TooLarge(String),
    Skipped(SkipReason),
}

/// Reads and normalizes the content of candidates that passed the selector.
pub struct Loader<'a> {
    rules: &'a RuleSet,
}

impl<'a> Loader<'a> {
    pub fn new(rules: &'a RuleSet) -> Self {
        Self { rules }
    }

    /// Never fails: read and decode problems turn into `Skipped`.
    pub fn read_content(&self, candidate: &Candidate) -> LoadOutcome {
        if !self
            .rules
            .is_allowed(&candidate.file_name, candidate.extension.as_deref())
        {
            debug!(
                "Skipping file with unsupported extension: {}",
                candidate.display_path()
            );
            return LoadOutcome::Skipped(SkipReason::UnsupportedExtension);
        }

        if candidate.size > self.rules.max_file_size {
            warn!(
                "Skipping large file: {} ({} bytes)",
                candidate.display_path(),
                candidate.size
            );
            return LoadOutcome::TooLarge(format!(
                "File too large to include: {}",
                sanitize::strip_control_chars(&candidate.path.to_string_lossy())
            ));
        }

        let bytes = match fs::read(&candidate.path) {
            Ok(bytes) => bytes,
            Err(err) => {
                error!("Error reading {}: {}", candidate.path.display(), err);
                return LoadOutcome::Skipped(SkipReason::ReadFailed(err.to_string()));
            }
        };

        match decode::decode_with_fallback(&bytes, &self.rules.encodings) {
            Some((text, encoding)) => {
                info!(
                    "Successfully read file: {} ({})",
                    candidate.display_path(),
                    encoding
                );
                LoadOutcome::Content(sanitize::sanitize(&text))
            }
            None => {
                warn!(
                    "Failed to read file with any encoding: {}",
                    candidate.display_path()
                );
                LoadOutcome::Skipped(SkipReason::Undecodable)
            }
        }
    }
}
