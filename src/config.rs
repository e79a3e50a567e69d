use crate::error::Error;
use config::{Config, Environment, File as ConfigFile};
use serde::Deserialize;

pub const DEFAULT_OUTPUT_FILE_NAME: &str = "project_knowledge.xml";
const DEFAULT_INDENT: i64 = 2;

/// Application settings. The selection rules are not configurable; see
/// [`crate::rules::RuleSet`].
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// File name of the snapshot written inside the scan root.
    pub output_file_name: String,
    /// Spaces per nesting level in the written document.
    pub indent: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_file_name: DEFAULT_OUTPUT_FILE_NAME.to_string(),
            indent: DEFAULT_INDENT as usize,
        }
    }
}

/// Defaults, then an optional `Config.*` file in the working directory, then
/// `PROJECT_KNOWLEDGE_*` environment variables.
pub fn load_configuration() -> Result<AppConfig, Error> {
    let builder = Config::builder()
        .set_default("output_file_name", DEFAULT_OUTPUT_FILE_NAME)?
        .set_default("indent", DEFAULT_INDENT)?
        .add_source(ConfigFile::with_name("Config").required(false))
        .add_source(Environment::with_prefix("PROJECT_KNOWLEDGE"))
        .build()?;
    Ok(builder.try_deserialize::<AppConfig>()?)
}
