mod cli;
mod logging;
mod reporter;
mod utils;

use std::path::{self, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use colored::*;
use dotenv::dotenv;
use project_knowledge::{AppConfig, SnapshotEngine, WriteOutcome};
use reporter::CliReporter;
use tracing::{error, info};

fn main() {
    dotenv().ok();

    let _guard = logging::init_logger();

    let args = Cli::parse();

    let mut config = match project_knowledge::config::load_configuration() {
        Ok(config) => config,
        Err(err) => {
            error!("Error loading configuration: {}", err);
            process::exit(1);
        }
    };
    if let Some(output) = args.output.clone() {
        config.output_file_name = output;
    }

    if args.print_config {
        println!("Configuration: {:?}", config);
        return;
    }

    if let Err(err) = run_snapshot(args.root, config) {
        error!("Error: {:#}", err);
        process::exit(1);
    }
}

fn run_snapshot(root: Option<PathBuf>, config: AppConfig) -> Result<()> {
    let root = match root {
        Some(root) => root,
        None => match utils::prompt_line("Enter the path to your project root: ")? {
            Some(answer) => PathBuf::from(answer),
            None => anyhow::bail!("No project root given"),
        },
    };
    let root = path::absolute(&root)
        .with_context(|| format!("Could not resolve {}", root.display()))?;

    let engine = SnapshotEngine::new(config);
    let reporter = CliReporter::new();
    let result = engine
        .snapshot(&root, &reporter)
        .with_context(|| format!("Snapshot of {} failed", root.display()))?;

    let stats = &result.scan.stats;
    println!();
    info!(
        "Scan: {}, {} visited, {} excluded, {} skipped",
        format!("{:.2}s", result.scan.scan_duration.as_secs_f64()).green(),
        stats.files_visited,
        stats.files_excluded,
        stats.files_skipped,
    );

    match result.outcome {
        WriteOutcome::Written { path, records } => {
            info!("XML file created at: {}", format!("{}", path.display()).cyan());
            info!("Total files processed: {}", format!("{}", records).green());
        }
        WriteOutcome::NothingToWrite => {
            info!("{}", "No output written".yellow());
        }
    }

    Ok(())
}
