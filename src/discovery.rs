use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::IgnorePatterns;
use crate::constants::discovery::SOURCE_EXTENSION;
use crate::core::DiscoveryError;
use crate::error::CircularImportError;
use crate::progress::ProgressReporter;

/// Canonicalise and check the project root
///
/// This is the only discovery failure that aborts a run; everything below
/// the root is reported and skipped instead.
pub fn resolve_root(root: &Path) -> Result<PathBuf, CircularImportError> {
    if !root.exists() {
        return Err(CircularImportError::RootNotFound {
            path: root.to_path_buf(),
        });
    }

    if !root.is_dir() {
        return Err(CircularImportError::RootNotDirectory {
            path: root.to_path_buf(),
        });
    }

    let canonical =
        root.canonicalize()
            .map_err(|source| CircularImportError::RootUnreadable {
                path: root.to_path_buf(),
                source,
            })?;

    std::fs::read_dir(&canonical).map_err(|source| CircularImportError::RootUnreadable {
        path: root.to_path_buf(),
        source,
    })?;

    Ok(canonical)
}

/// Source files found under a root, plus whatever could not be walked
#[derive(Debug, Default)]
pub struct DiscoveredFiles {
    pub files: Vec<PathBuf>,
    pub errors: Vec<DiscoveryError>,
}

/// Walks a project tree yielding candidate module files
///
/// Traversal is depth-first with directory entries in file name order, so
/// two walks over the same tree yield the same sequence. Every call to
/// [`FileDiscoverer::iter`] starts a fresh walk.
pub struct FileDiscoverer<'a> {
    root: PathBuf,
    ignore: &'a IgnorePatterns,
}

impl<'a> FileDiscoverer<'a> {
    pub fn new(root: impl Into<PathBuf>, ignore: &'a IgnorePatterns) -> Self {
        Self {
            root: root.into(),
            ignore,
        }
    }

    /// Lazily walk the tree
    ///
    /// Unreadable directories and symlink loops come out as `Err` items and
    /// the walk carries on with their siblings.
    pub fn iter(&self) -> impl Iterator<Item = Result<PathBuf, DiscoveryError>> + '_ {
        WalkDir::new(&self.root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                entry.depth() == 0 || !self.ignore.is_ignored(&entry.file_name().to_string_lossy())
            })
            .filter_map(|entry| match entry {
                Ok(entry) => {
                    let is_source = entry.file_type().is_file()
                        && entry.path().extension() == Some(OsStr::new(SOURCE_EXTENSION));
                    is_source.then(|| Ok(entry.into_path()))
                }
                Err(err) => Some(Err(discovery_error(&err))),
            })
    }

    /// Collect the whole walk
    pub fn discover(&self, progress: Option<&ProgressReporter>) -> DiscoveredFiles {
        let mut discovered = DiscoveredFiles::default();

        for item in self.iter() {
            match item {
                Ok(path) => {
                    if let Some(p) = progress {
                        p.found_file(&path);
                    }
                    discovered.files.push(path);
                }
                Err(error) => {
                    eprintln!(
                        "{} Skipping {}: {}",
                        console::style("⚠").yellow(),
                        error
                            .path
                            .as_deref()
                            .map(|p| p.display().to_string())
                            .unwrap_or_else(|| "<unknown>".to_string()),
                        error.message
                    );
                    discovered.errors.push(error);
                }
            }
        }

        discovered
    }
}

fn discovery_error(err: &walkdir::Error) -> DiscoveryError {
    let message = match err.loop_ancestor() {
        Some(ancestor) => format!("symlink loop back to '{}'", ancestor.display()),
        None => match err.io_error() {
            Some(io) => io.to_string(),
            None => err.to_string(),
        },
    };

    DiscoveryError {
        path: err.path().map(Path::to_path_buf),
        message,
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    fn relative_files(root: &Path, discovered: &DiscoveredFiles) -> Vec<String> {
        discovered
            .files
            .iter()
            .map(|p| {
                p.strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn test_discovers_python_files_in_sorted_order() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "zeta.py");
        touch(temp.path(), "alpha.py");
        touch(temp.path(), "pkg/__init__.py");
        touch(temp.path(), "pkg/core.py");
        touch(temp.path(), "README.md");
        touch(temp.path(), "setup.cfg");

        let ignore = IgnorePatterns::defaults();
        let discovered = FileDiscoverer::new(temp.path(), &ignore).discover(None);

        assert!(discovered.errors.is_empty());
        assert_eq!(
            relative_files(temp.path(), &discovered),
            vec!["alpha.py", "pkg/__init__.py", "pkg/core.py", "zeta.py"]
        );
    }

    #[test]
    fn test_ignored_directories_are_pruned() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "app.py");
        touch(temp.path(), "venv/lib/site.py");
        touch(temp.path(), "__pycache__/app.py");
        touch(temp.path(), "thing.egg-info/meta.py");
        touch(temp.path(), "tests/test_app.py");

        let ignore = IgnorePatterns::with_additional(["tests"]).unwrap();
        let discovered = FileDiscoverer::new(temp.path(), &ignore).discover(None);

        assert_eq!(relative_files(temp.path(), &discovered), vec!["app.py"]);
    }

    #[test]
    fn test_root_is_never_ignored() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("build");
        touch(&root, "main.py");

        let ignore = IgnorePatterns::defaults();
        let discovered = FileDiscoverer::new(&root, &ignore).discover(None);

        assert_eq!(discovered.files.len(), 1);
    }

    #[test]
    fn test_walk_is_restartable() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "a.py");
        touch(temp.path(), "b/c.py");

        let ignore = IgnorePatterns::defaults();
        let discoverer = FileDiscoverer::new(temp.path(), &ignore);
        let first: Vec<_> = discoverer.iter().filter_map(Result::ok).collect();
        let second: Vec<_> = discoverer.iter().filter_map(Result::ok).collect();

        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_loop_is_reported_and_skipped() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "pkg/mod.py");
        std::os::unix::fs::symlink(temp.path().join("pkg"), temp.path().join("pkg/again"))
            .unwrap();

        let ignore = IgnorePatterns::defaults();
        let discovered = FileDiscoverer::new(temp.path(), &ignore).discover(None);

        assert_eq!(relative_files(temp.path(), &discovered), vec!["pkg/mod.py"]);
        assert_eq!(discovered.errors.len(), 1);
        assert!(discovered.errors[0].message.contains("symlink loop"));
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_directory_is_reported_and_skipped() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        touch(temp.path(), "app.py");
        touch(temp.path(), "locked/hidden.py");
        touch(temp.path(), "open/visible.py");

        let locked = temp.path().join("locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
        let restore = || fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        // Permission bits do not bind root
        if fs::read_dir(&locked).is_ok() {
            restore();
            return;
        }

        let ignore = IgnorePatterns::defaults();
        let discovered = FileDiscoverer::new(temp.path(), &ignore).discover(None);
        restore();

        assert_eq!(
            relative_files(temp.path(), &discovered),
            vec!["app.py", "open/visible.py"]
        );
        assert_eq!(discovered.errors.len(), 1);
        assert_eq!(discovered.errors[0].path.as_deref(), Some(locked.as_path()));
    }

    #[test]
    fn test_resolve_root_rejects_missing_and_files() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "file.py");

        assert!(matches!(
            resolve_root(&temp.path().join("missing")),
            Err(CircularImportError::RootNotFound { .. })
        ));
        assert!(matches!(
            resolve_root(&temp.path().join("file.py")),
            Err(CircularImportError::RootNotDirectory { .. })
        ));
        assert!(resolve_root(temp.path()).is_ok());
    }
}
