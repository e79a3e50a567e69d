use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Path does not exist: {}", .0.display())]
    RootNotFound(PathBuf),
}
