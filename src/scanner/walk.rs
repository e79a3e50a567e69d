use std::path::{Path, PathBuf};
use tracing::{error, trace};
use walkdir::WalkDir;

/// Sequential traversal yielding every regular file under `root`, in the
/// order the directory iteration produces them. Symlinked directories are
/// not followed; symlinks to files are yielded like regular files.
///
/// Unreadable directories and entries are logged and skipped, the walk
/// carries on with the remaining entries.
pub fn walk_files(root: &Path) -> impl Iterator<Item = PathBuf> {
    WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry_result| match entry_result {
            Ok(entry) => Some(entry),
            Err(err) => {
                match err.path() {
                    Some(path) => error!("Error scanning {}: {}", path.display(), err),
                    None => error!("Error scanning directory: {}", err),
                }
                None
            }
        })
        .filter_map(|entry| {
            let path = entry.into_path();
            trace!("Visiting {}", path.display());
            if path.is_file() {
                Some(path)
            } else {
                None
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_walk_yields_nested_files_only() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("a/b")).unwrap();
        fs::write(root.join("top.txt"), "x").unwrap();
        fs::write(root.join("a/b/deep.py"), "y").unwrap();

        let mut files: Vec<PathBuf> = walk_files(root)
            .map(|p| p.strip_prefix(root).unwrap().to_path_buf())
            .collect();
        files.sort();

        assert_eq!(
            files,
            vec![PathBuf::from("a/b/deep.py"), PathBuf::from("top.txt")]
        );
    }

    #[test]
    fn test_walk_missing_root_yields_nothing() {
        let tmp = tempdir().unwrap();
        let missing = tmp.path().join("nope");
        assert_eq!(walk_files(&missing).count(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_skips_unreadable_directory() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempdir().unwrap();
        let root = tmp.path();
        let locked = root.join("locked");
        fs::create_dir(&locked).unwrap();
        fs::write(locked.join("hidden.txt"), "x").unwrap();
        fs::write(root.join("ok.txt"), "y").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Permission bits do not apply to root, nothing to assert there.
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let files: Vec<PathBuf> = walk_files(root).collect();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        assert_eq!(files, vec![root.join("ok.txt")]);
    }
}
