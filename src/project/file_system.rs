//! File access used by the loader: reads, existence checks, glob expansion.

use std::io;
use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use super::LoadError;
use super::glob::GlobPattern;

/// Synchronous file access the loader needs from its host.
pub trait FileSystem {
    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Expand a root-relative glob to absolute file paths (directories excluded).
    fn expand_glob(&self, root: &Path, pattern: &str) -> Result<Vec<PathBuf>, LoadError>;
}

/// [`FileSystem`] backed by `std::fs` and a `walkdir` traversal.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn expand_glob(&self, root: &Path, pattern: &str) -> Result<Vec<PathBuf>, LoadError> {
        let glob = GlobPattern::new(pattern)?;
        let base = glob
            .literal_prefix()
            .iter()
            .fold(root.to_path_buf(), |dir, component| dir.join(component));
        if !base.is_dir() {
            tracing::debug!(
                "Nothing to expand for '{}': {} is not a directory",
                pattern,
                base.display()
            );
            return Ok(Vec::new());
        }

        let mut matches = Vec::new();
        for entry in WalkDir::new(&base).follow_links(true).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                // Only an unreadable base directory is fatal
                Err(e) if e.depth() == 0 => {
                    return Err(LoadError::Expand {
                        pattern: pattern.to_string(),
                        source: e.into(),
                    });
                }
                Err(e) => {
                    tracing::warn!("Skipping entry while expanding '{}': {}", pattern, e);
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(relative) = entry.path().strip_prefix(root) else {
                continue;
            };
            let components: Option<Vec<&str>> = relative
                .components()
                .map(|component| component.as_os_str().to_str())
                .collect();
            // Non UTF-8 names can't match a UTF-8 pattern
            let Some(components) = components else {
                continue;
            };
            if glob.matches_components(&components) {
                matches.push(entry.into_path());
            }
        }

        Ok(matches)
    }
}

/// Lexically resolve `.` and `..` so equal files compare equal.
pub(crate) fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}
