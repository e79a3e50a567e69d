use crate::loader::decode::TextEncoding;
use std::collections::BTreeSet;

/// Files larger than this are replaced by a placeholder instead of being read.
pub const MAX_FILE_SIZE: u64 = 1_000_000;

const EXCLUDED_DIRECTORIES: &[&str] = &[
    "node_modules",
    "venv",
    "env",
    "__pycache__",
    ".git",
    ".idea",
    ".vscode",
    "dist",
    "build",
    ".next",
];

const EXCLUDED_EXTENSIONS: &[&str] = &[
    ".pyc", ".pyo", ".pyd", ".so", // compiled
    ".log", ".lock", // logs and lock files
    ".db", ".sqlite", ".sqlite3", // databases
    ".png", ".jpg", ".jpeg", ".gif", ".ico", // images
    ".mp3", ".mp4", ".wav", ".avi", // media
    ".zip", ".tar", ".gz", ".rar", // archives
];

const EXCLUDED_FILE_NAMES: &[&str] = &[
    ".env",
    ".gitignore",
    "package-lock.json",
    "yarn.lock",
    "poetry.lock",
    ".DS_Store",
    "thumbs.db",
];

const ALLOWED_EXTENSIONS: &[&str] = &[
    ".py", ".js", ".jsx", ".ts", ".tsx", // source
    ".html", ".css", ".scss", ".sass", // markup and styles
    ".md", ".txt", ".json", ".yaml", ".yml", // docs and config
    ".xml", ".csv", // data
    ".sh", ".bash", ".zsh", // shell
    ".sql",
];

/// Dotted names that path-suffix extraction cannot express as an extension.
const ALLOWED_DOTTED_NAMES: &[&str] = &[".env.example", ".gitignore"];

/// Exclusion and allow-list rules shared by the selector and the loader.
///
/// Built once at startup and passed by reference. Tests build their own
/// through the public fields when they need a different rule set.
#[derive(Debug, Clone)]
pub struct RuleSet {
    pub excluded_directories: BTreeSet<String>,
    pub excluded_extensions: BTreeSet<String>,
    pub excluded_file_names: BTreeSet<String>,
    pub allowed_extensions: BTreeSet<String>,
    pub allowed_dotted_names: BTreeSet<String>,
    pub max_file_size: u64,
    pub encodings: Vec<TextEncoding>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            excluded_directories: to_set(EXCLUDED_DIRECTORIES),
            excluded_extensions: to_set(EXCLUDED_EXTENSIONS),
            excluded_file_names: to_set(EXCLUDED_FILE_NAMES),
            allowed_extensions: to_set(ALLOWED_EXTENSIONS),
            allowed_dotted_names: to_set(ALLOWED_DOTTED_NAMES),
            max_file_size: MAX_FILE_SIZE,
            encodings: vec![
                TextEncoding::Utf8,
                TextEncoding::Latin1,
                TextEncoding::Windows1252,
                TextEncoding::Ascii,
            ],
        }
    }
}

impl RuleSet {
    /// True when the loader may read a file with this name and extension.
    pub fn is_allowed(&self, file_name: &str, extension: Option<&str>) -> bool {
        if extension.is_some_and(|ext| self.allowed_extensions.contains(ext)) {
            return true;
        }
        self.allowed_dotted_names.contains(file_name)
    }

    /// Every allow-listed extension and dotted name, sorted, for hint output.
    pub fn supported_extensions(&self) -> Vec<&str> {
        let mut all: Vec<&str> = self
            .allowed_extensions
            .iter()
            .chain(self.allowed_dotted_names.iter())
            .map(String::as_str)
            .collect();
        all.sort_unstable();
        all
    }
}

fn to_set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclusion_categories_are_disjoint_from_allow_list() {
        let rules = RuleSet::default();
        assert!(rules
            .excluded_extensions
            .is_disjoint(&rules.allowed_extensions));
    }

    #[test]
    fn test_is_allowed_by_extension() {
        let rules = RuleSet::default();
        assert!(rules.is_allowed("main.py", Some(".py")));
        assert!(rules.is_allowed("page.tsx", Some(".tsx")));
        assert!(!rules.is_allowed("notes.xyz", Some(".xyz")));
        assert!(!rules.is_allowed("Makefile", None));
    }

    #[test]
    fn test_is_allowed_is_case_sensitive() {
        let rules = RuleSet::default();
        assert!(!rules.is_allowed("README.MD", Some(".MD")));
    }

    #[test]
    fn test_is_allowed_by_dotted_name() {
        let rules = RuleSet::default();
        // Path suffix extraction gives ".example" here, which is not allow-listed.
        assert!(rules.is_allowed(".env.example", Some(".example")));
        assert!(rules.is_allowed(".gitignore", None));
    }

    #[test]
    fn test_dotted_name_must_match_whole_file_name() {
        let rules = RuleSet::default();
        assert!(!rules.is_allowed("web.env.example", Some(".example")));
        assert!(!rules.is_allowed("backup.gitignore", Some(".gitignore")));
        assert!(!rules.is_allowed("config.env.example.bak", Some(".bak")));
    }

    #[test]
    fn test_supported_extensions_sorted() {
        let rules = RuleSet::default();
        let supported = rules.supported_extensions();
        let mut sorted = supported.clone();
        sorted.sort_unstable();
        assert_eq!(supported, sorted);
        assert!(supported.contains(&".env.example"));
        assert_eq!(supported.len(), ALLOWED_EXTENSIONS.len() + 2);
    }
}
