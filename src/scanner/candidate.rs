use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// A file discovered during traversal, described only by metadata that is
/// available without opening it.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub path: PathBuf,
    pub relative_path: PathBuf,
    pub file_name: String,
    /// Final suffix including the leading dot, e.g. `.py`. Dot-files such as
    /// `.gitignore` have none.
    pub extension: Option<String>,
    pub size: u64,
}

impl Candidate {
    pub fn new(root: &Path, path: &Path, size: u64) -> Self {
        let relative_path = path.strip_prefix(root).unwrap_or(path).to_path_buf();

        let file_name = path
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_default();

        let extension = path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()));

        Self {
            path: path.to_path_buf(),
            relative_path,
            file_name,
            extension,
            size,
        }
    }

    /// Stat `path` (following symlinks) and build a candidate from it.
    pub fn from_path(root: &Path, path: &Path) -> io::Result<Self> {
        let metadata = fs::metadata(path)?;
        Ok(Self::new(root, path, metadata.len()))
    }

    /// Names of the directories between the scan root and the file, nearest
    /// to the root first. The root itself is not included.
    pub fn ancestor_names(&self) -> impl Iterator<Item = String> + '_ {
        self.relative_path
            .parent()
            .into_iter()
            .flat_map(|parent| parent.components())
            .filter_map(|component| match component {
                Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
                _ => None,
            })
    }

    pub fn display_path(&self) -> String {
        self.relative_path.to_string_lossy().into_owned()
    }
}
