//! In-memory editor and file system for engine tests.


use std::cell::Cell;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use crate::base::constants::CONFIG_FILE_NAME;
use crate::ide::{ActiveDocument, DecorationStyle, Editor, NotificationLevel, Placement, StyleId};
use crate::project::{DictionaryLoader, FileSystem, GlobPattern, LoadError};

use super::{DecorationEngine, EngineOptions};

pub(super) const ROOT: &str = "/project";

#[derive(Debug, Default)]
pub(super) struct RecordingEditor {
    pub document: Option<(String, String)>,
    pub registered: Vec<StyleId>,
    pub released: Vec<StyleId>,
    /// Every `apply_decorations` call, clears included
    pub applied: Vec<(StyleId, Vec<Placement>)>,
    pub notifications: Vec<(NotificationLevel, String)>,
}

impl RecordingEditor {
    pub fn with_document(file_name: &str, text: &str) -> Self {
        Self {
            document: Some((file_name.to_string(), text.to_string())),
            ..Self::default()
        }
    }

    /// Labels of the most recent render.
    pub fn labels(&self) -> Vec<String> {
        self.applied
            .last()
            .map(|(_, placements)| placements.iter().map(|p| p.label.clone()).collect())
            .unwrap_or_default()
    }

    pub fn last_notification(&self) -> Option<&(NotificationLevel, String)> {
        self.notifications.last()
    }
}

impl Editor for RecordingEditor {
    fn active_document(&self) -> Option<ActiveDocument<'_>> {
        self.document
            .as_ref()
            .map(|(file_name, text)| ActiveDocument { file_name, text })
    }

    fn register_style(&mut self, _style: &DecorationStyle) -> StyleId {
        let id = StyleId(self.registered.len() as u32 + 1);
        self.registered.push(id);
        id
    }

    fn apply_decorations(&mut self, style: StyleId, placements: &[Placement]) {
        self.applied.push((style, placements.to_vec()));
    }

    fn release_style(&mut self, style: StyleId) {
        self.released.push(style);
    }

    fn notify(&mut self, level: NotificationLevel, message: &str) {
        self.notifications.push((level, message.to_string()));
    }
}

#[derive(Debug, Default)]
pub(super) struct MemoryFs {
    files: FxHashMap<PathBuf, Vec<u8>>,
    /// Simulates the project directory disappearing
    pub root_gone: Cell<bool>,
}

impl MemoryFs {
    pub fn insert(&mut self, relative: &str, content: &str) {
        self.files
            .insert(Path::new(ROOT).join(relative), content.as_bytes().to_vec());
    }
}

impl FileSystem for MemoryFs {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        if self.root_gone.get() {
            return false;
        }
        path == Path::new(ROOT)
            || self
                .files
                .keys()
                .any(|file| file != path && file.starts_with(path))
    }

    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| std::io::Error::from(std::io::ErrorKind::NotFound))
    }

    fn expand_glob(&self, root: &Path, pattern: &str) -> Result<Vec<PathBuf>, LoadError> {
        let glob = GlobPattern::new(pattern)?;
        let mut matches: Vec<PathBuf> = self
            .files
            .keys()
            .filter(|file| {
                file.strip_prefix(root).is_ok_and(|relative| {
                    let components: Vec<&str> = relative
                        .components()
                        .filter_map(|c| c.as_os_str().to_str())
                        .collect();
                    glob.matches_components(&components)
                })
            })
            .cloned()
            .collect();
        matches.sort();
        Ok(matches)
    }
}

/// Project with a config listing `paths` and the given dictionary files.
pub(super) fn project(paths: &[&str], files: &[(&str, &str)]) -> MemoryFs {
    let mut fs = MemoryFs::default();
    let paths: Vec<String> = paths.iter().map(|p| format!("\"{p}\"")).collect();
    fs.insert(
        CONFIG_FILE_NAME,
        &format!("{{\"paths\": [{}]}}", paths.join(", ")),
    );
    for (name, content) in files {
        fs.insert(name, content);
    }
    fs
}

pub(super) fn engine(
    fs: MemoryFs,
    options: EngineOptions,
    editor: &mut RecordingEditor,
) -> DecorationEngine<MemoryFs> {
    let loader = DictionaryLoader::with_file_system(fs);
    let mut engine = DecorationEngine::with_loader(ROOT, loader, options, editor);
    engine.load(editor);
    engine
}

/// Engine over one dictionary file `en.json`.
pub(super) fn loaded_engine(
    dictionary: &str,
    editor: &mut RecordingEditor,
) -> DecorationEngine<MemoryFs> {
    engine(
        project(&["en.json"], &[("en.json", dictionary)]),
        EngineOptions::default(),
        editor,
    )
}
