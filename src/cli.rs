use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)] // requires `derive` feature
#[command(name = "project-knowledge")]
#[command(about = "Snapshot a project's text files into a single XML document", long_about = None)]
pub struct Cli {
    /// Project root to scan (prompted for when omitted)
    pub root: Option<PathBuf>,

    /// File name of the snapshot written inside the project root
    #[arg(short, long, value_name = "NAME")]
    pub output: Option<String>,

    /// Print configuration values and exit
    #[arg(long)]
    pub print_config: bool,
}
