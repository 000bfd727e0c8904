use std::path::{Path, PathBuf};

use indexmap::IndexSet;

use crate::base::constants::{CONFIG_FILE_NAME, GLOB_META_CHARS};

use super::config::{MatchRule, ProjectConfig};
use super::file_system::{FileSystem, StdFileSystem, normalize_path};
use super::flatten::{Dictionary, flatten_into};
use super::glob::GlobPattern;
use super::LoadError;

/// Result of one dictionary load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedDictionary {
    /// Flattened entries, later files overwriting earlier ones.
    pub entries: Dictionary,
    /// File filter from the configuration.
    pub match_rule: MatchRule,
    /// Config file plus every resolved dictionary file, whether or not it
    /// loaded. A change to any of these warrants a reload.
    pub sources: Vec<PathBuf>,
    /// Glob entries of `paths`. A new file matching one of these also
    /// warrants a reload.
    pub patterns: Vec<GlobPattern>,
}

impl LoadedDictionary {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a change to `path` can alter this dictionary.
    ///
    /// `path` must be absolute and normalized; `root` is the project root it
    /// was loaded from.
    pub fn is_watched(&self, root: &Path, path: &Path) -> bool {
        if self.sources.iter().any(|source| source == path) {
            return true;
        }
        let Ok(relative) = path.strip_prefix(root) else {
            return false;
        };
        let components: Option<Vec<&str>> = relative
            .components()
            .map(|component| component.as_os_str().to_str())
            .collect();
        components.is_some_and(|components| {
            self.patterns
                .iter()
                .any(|pattern| pattern.matches_components(&components))
        })
    }
}

/// Builds the dictionary from `keylens.config.json` and the files it names.
#[derive(Debug, Clone, Default)]
pub struct DictionaryLoader<F: FileSystem = StdFileSystem> {
    fs: F,
}

impl DictionaryLoader<StdFileSystem> {
    pub fn new() -> Self {
        Self { fs: StdFileSystem }
    }
}

impl<F: FileSystem> DictionaryLoader<F> {
    pub fn with_file_system(fs: F) -> Self {
        Self { fs }
    }

    pub fn file_system(&self) -> &F {
        &self.fs
    }

    /// Load without ever failing: any fatal error is logged and yields an
    /// empty dictionary.
    pub fn load(&self, project_root: &Path) -> LoadedDictionary {
        match self.try_load(project_root) {
            Ok(loaded) => loaded,
            Err(e) => {
                tracing::warn!("Dictionary load failed: {}", e);
                LoadedDictionary::default()
            }
        }
    }

    /// Load the dictionary for `project_root`.
    ///
    /// A missing or malformed config yields an empty dictionary, and a
    /// dictionary file that cannot be read or parsed is skipped. Only an
    /// unusable project root or a failing glob expansion is an error.
    pub fn try_load(&self, project_root: &Path) -> Result<LoadedDictionary, LoadError> {
        if !self.fs.is_dir(project_root) {
            return Err(LoadError::ProjectRootNotFound(project_root.to_path_buf()));
        }
        let root = normalize_path(&std::path::absolute(project_root)?);
        let config_path = root.join(CONFIG_FILE_NAME);

        let mut loaded = LoadedDictionary {
            sources: vec![config_path.clone()],
            ..LoadedDictionary::default()
        };

        let Some(config) = self.read_config(&config_path) else {
            return Ok(loaded);
        };
        loaded.match_rule = config.match_rule();

        let files = self.resolve_paths(&root, &config.paths)?;
        loaded.patterns = config
            .paths
            .iter()
            .filter(|entry| is_glob(entry))
            .map(|entry| GlobPattern::new(entry))
            .collect::<Result<_, _>>()?;
        let mut skipped = 0usize;
        for file in &files {
            if !self.load_file(file, &mut loaded.entries) {
                skipped += 1;
            }
        }
        tracing::debug!(
            "Loaded {} key(s) from {} file(s), {} skipped",
            loaded.entries.len(),
            files.len() - skipped,
            skipped
        );
        loaded.sources.extend(files);
        Ok(loaded)
    }

    fn read_config(&self, config_path: &Path) -> Option<ProjectConfig> {
        if !self.fs.exists(config_path) {
            tracing::debug!("No {} at {}", CONFIG_FILE_NAME, config_path.display());
            return None;
        }
        let bytes = match self.fs.read(config_path) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", config_path.display(), e);
                return None;
            }
        };
        match ProjectConfig::from_slice(&bytes) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!("Failed to parse {}: {}", config_path.display(), e);
                None
            }
        }
    }

    /// Turn `paths` entries into absolute file paths, deduplicated in order.
    ///
    /// Entries containing glob meta characters are expanded; anything else is
    /// joined to the root as is, whether or not the file exists.
    fn resolve_paths(&self, root: &Path, paths: &[String]) -> Result<Vec<PathBuf>, LoadError> {
        let mut resolved = IndexSet::new();
        for entry in paths {
            if is_glob(entry) {
                let matches = self.fs.expand_glob(root, entry)?;
                if matches.is_empty() {
                    tracing::debug!("Pattern '{}' matched no files", entry);
                }
                resolved.extend(matches.iter().map(|path| normalize_path(path)));
            } else {
                resolved.insert(normalize_path(&root.join(entry)));
            }
        }
        Ok(resolved.into_iter().collect())
    }

    /// Flatten one dictionary file into `entries`. Returns `false` when the
    /// file was skipped.
    fn load_file(&self, path: &Path, entries: &mut Dictionary) -> bool {
        if !self.fs.exists(path) {
            tracing::debug!("Dictionary file {} does not exist", path.display());
            return false;
        }
        let bytes = match self.fs.read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
                return false;
            }
        };
        match serde_json::from_slice::<serde_json::Value>(&bytes) {
            Ok(value) => {
                flatten_into(&value, entries);
                true
            }
            Err(e) => {
                tracing::warn!("Skipping {}: {}", path.display(), e);
                false
            }
        }
    }
}

fn is_glob(entry: &str) -> bool {
    entry.contains(&GLOB_META_CHARS[..])
}
