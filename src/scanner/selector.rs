use super::candidate::Candidate;
use crate::rules::RuleSet;
use std::fmt;
use tracing::debug;

/// The exclusion rule that rejected a candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exclusion {
    Directory(String),
    Extension(String),
    FileName(String),
}

impl fmt::Display for Exclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exclusion::Directory(name) => write!(f, "excluded directory '{}'", name),
            Exclusion::Extension(ext) => write!(f, "excluded extension '{}'", ext),
            Exclusion::FileName(name) => write!(f, "excluded file '{}'", name),
        }
    }
}

/// Decides whether a candidate is excluded before any content is read.
pub struct Selector<'a> {
    rules: &'a RuleSet,
}

impl<'a> Selector<'a> {
    pub fn new(rules: &'a RuleSet) -> Self {
        Self { rules }
    }

    pub fn should_ignore(&self, candidate: &Candidate) -> bool {
        self.check(candidate).is_some()
    }

    /// Directory rules are checked against the whole ancestor chain, then the
    /// extension, then the exact file name.
    pub fn check(&self, candidate: &Candidate) -> Option<Exclusion> {
        let exclusion = self.check_inner(candidate);
        if let Some(ref rule) = exclusion {
            debug!("Ignoring {} ({})", candidate.display_path(), rule);
        }
        exclusion
    }

    fn check_inner(&self, candidate: &Candidate) -> Option<Exclusion> {
        if let Some(dir) = candidate
            .ancestor_names()
            .find(|name| self.rules.excluded_directories.contains(name))
        {
            return Some(Exclusion::Directory(dir));
        }

        if let Some(ext) = candidate
            .extension
            .as_ref()
            .filter(|ext| self.rules.excluded_extensions.contains(*ext))
        {
            return Some(Exclusion::Extension(ext.clone()));
        }

        if self.rules.excluded_file_names.contains(&candidate.file_name) {
            return Some(Exclusion::FileName(candidate.file_name.clone()));
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn candidate(relative: &str) -> Candidate {
        let root = Path::new("/project");
        Candidate::new(root, &root.join(relative), 1)
    }

    #[test]
    fn test_nested_excluded_directory() {
        let rules = RuleSet::default();
        let selector = Selector::new(&rules);
        assert_eq!(
            selector.check(&candidate("node_modules/a/b/c.js")),
            Some(Exclusion::Directory("node_modules".to_string()))
        );
        assert!(selector.should_ignore(&candidate("src/.git/hooks/pre-commit.sh")));
        assert!(selector.should_ignore(&candidate("pkg/dist/index.js")));
    }

    #[test]
    fn test_directory_match_is_exact() {
        let rules = RuleSet::default();
        let selector = Selector::new(&rules);
        assert!(!selector.should_ignore(&candidate("builder/main.py")));
        assert!(!selector.should_ignore(&candidate("my_node_modules/index.js")));
        assert!(!selector.should_ignore(&candidate("public/index.html")));
    }

    #[test]
    fn test_file_named_like_excluded_directory_is_kept() {
        let rules = RuleSet::default();
        let selector = Selector::new(&rules);
        // Only directories are matched against the directory set.
        assert!(!selector.should_ignore(&candidate("src/build")));
    }

    #[test]
    fn test_root_named_like_excluded_directory() {
        let rules = RuleSet::default();
        let selector = Selector::new(&rules);
        let root = Path::new("/home/me/build");
        let c = Candidate::new(root, &root.join("src/main.py"), 1);
        assert!(!selector.should_ignore(&c));
    }

    #[test]
    fn test_excluded_extension() {
        let rules = RuleSet::default();
        let selector = Selector::new(&rules);
        assert_eq!(
            selector.check(&candidate("logs/server.log")),
            Some(Exclusion::Extension(".log".to_string()))
        );
        assert!(selector.should_ignore(&candidate("assets/logo.png")));
        assert!(!selector.should_ignore(&candidate("assets/logo.PNG")));
    }

    #[test]
    fn test_excluded_file_name() {
        let rules = RuleSet::default();
        let selector = Selector::new(&rules);
        assert_eq!(
            selector.check(&candidate("package-lock.json")),
            Some(Exclusion::FileName("package-lock.json".to_string()))
        );
        assert!(selector.should_ignore(&candidate("sub/.DS_Store")));
        assert!(selector.should_ignore(&candidate(".gitignore")));
        assert!(selector.should_ignore(&candidate(".env")));
        assert!(!selector.should_ignore(&candidate(".env.example")));
    }

    #[test]
    fn test_unknown_extension_not_excluded() {
        let rules = RuleSet::default();
        let selector = Selector::new(&rules);
        assert!(!selector.should_ignore(&candidate("notes.xyz")));
    }

    #[test]
    fn test_custom_rule_set() {
        let mut rules = RuleSet::default();
        rules.excluded_directories.insert("vendor".to_string());
        let selector = Selector::new(&rules);
        assert!(selector.should_ignore(&candidate("vendor/lib/x.js")));
    }
}
