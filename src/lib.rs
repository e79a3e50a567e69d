pub mod config;
pub mod engine;
pub mod error;
pub mod loader;
pub mod progress;
pub mod record;
pub mod rules;
pub mod scanner;
pub mod writer;

pub use config::AppConfig;
pub use engine::{ScanResult, ScanStats, SnapshotEngine, SnapshotResult};
pub use error::Error;
pub use progress::{ProgressReporter, SilentReporter};
pub use record::{Record, RecordBody};
pub use rules::RuleSet;
pub use writer::WriteOutcome;
