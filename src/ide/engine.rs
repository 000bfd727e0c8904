//! DecorationEngine: owns the dictionary, the enabled flag and hidden lines.
//!
//! Every host event funnels through one engine instance:
//!
//! ```ignore
//! let mut engine = DecorationEngine::new(project_root, &mut editor);
//! engine.load(&mut editor);
//!
//! // document opened / edited / focused
//! engine.on_document_changed(&mut editor);
//!
//! // caret moved
//! engine.handle_selection_change(caret, &mut editor);
//! ```
//!
//! Each render rescans the whole active document, so hidden line numbers only
//! need to stay valid until the next edit.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::base::LineCol;
use crate::base::constants::{DEFAULT_AUTO_SHOW_DELAY, HINT_PREFIX};
use crate::project::file_system::normalize_path;
use crate::project::{
    Dictionary, DictionaryLoader, FileSystem, LoadError, LoadedDictionary, MatchRule,
    StdFileSystem,
};

use super::{
    Command, DecorationStyle, Editor, NotificationLevel, Placement, StyleId, SuppressionSet,
    find_placements, should_apply_to_file,
};

/// Programmatic engine settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOptions {
    /// How long a clicked line stays hidden. `None` keeps it hidden until the
    /// caret moves off every hint.
    pub auto_show_delay: Option<Duration>,
    /// Text drawn before every value.
    pub hint_prefix: String,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            auto_show_delay: Some(DEFAULT_AUTO_SHOW_DELAY),
            hint_prefix: HINT_PREFIX.to_string(),
        }
    }
}

pub struct DecorationEngine<F: FileSystem = StdFileSystem> {
    project_root: PathBuf,
    loader: DictionaryLoader<F>,
    options: EngineOptions,
    /// Entries, file filter, and the files and globs that feed them
    loaded: LoadedDictionary,
    enabled: bool,
    hidden: SuppressionSet,
    /// Result of the last scan, used for selection hit tests
    placements: Vec<Placement>,
    /// `None` once disposed
    style: Option<StyleId>,
}

impl DecorationEngine<StdFileSystem> {
    /// Create an engine for `project_root` and register its decoration style.
    ///
    /// The dictionary starts empty; call [`DecorationEngine::load`] to fill it.
    pub fn new(project_root: impl Into<PathBuf>, editor: &mut dyn Editor) -> Self {
        Self::with_loader(
            project_root,
            DictionaryLoader::new(),
            EngineOptions::default(),
            editor,
        )
    }
}

impl<F: FileSystem> DecorationEngine<F> {
    pub fn with_loader(
        project_root: impl Into<PathBuf>,
        loader: DictionaryLoader<F>,
        options: EngineOptions,
        editor: &mut dyn Editor,
    ) -> Self {
        let project_root: PathBuf = project_root.into();
        let project_root = std::path::absolute(&project_root).unwrap_or(project_root);
        let project_root = normalize_path(&project_root);
        let style = editor.register_style(&DecorationStyle::default());
        Self {
            project_root,
            loader,
            options,
            loaded: LoadedDictionary::default(),
            enabled: true,
            hidden: SuppressionSet::new(),
            placements: Vec::new(),
            style: Some(style),
        }
    }

    // ========================================================================
    // STATE
    // ========================================================================

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_disposed(&self) -> bool {
        self.style.is_none()
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.loaded.entries
    }

    pub fn match_rule(&self) -> &MatchRule {
        &self.loaded.match_rule
    }

    /// Resolved value for `key`.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.loaded.entries.get(key).map(String::as_str)
    }

    /// Placements from the last scan.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Hidden lines in ascending order.
    pub fn hidden_lines(&self) -> Vec<u32> {
        self.hidden.lines()
    }

    /// When the next hidden line is due to reappear.
    pub fn next_expiry(&self) -> Option<Instant> {
        self.hidden.next_deadline()
    }

    /// The placement from the last scan touching `position`, if any.
    pub fn placement_at(&self, position: LineCol) -> Option<&Placement> {
        self.placements
            .iter()
            .find(|placement| placement.span().contains(position))
    }

    pub fn should_apply_to_file(&self, file_name: &str) -> bool {
        should_apply_to_file(&self.loaded.match_rule, file_name)
    }

    // ========================================================================
    // SCANNING
    // ========================================================================

    /// Compute the placements for `text` and remember them for hit testing.
    ///
    /// Yields nothing while disabled, with an empty dictionary, or when the
    /// file is filtered out.
    pub fn compute_placements(&mut self, text: &str, file_name: &str) -> &[Placement] {
        self.placements = if self.enabled
            && !self.loaded.is_empty()
            && self.should_apply_to_file(file_name)
        {
            find_placements(
                text,
                &self.loaded.entries,
                &self.hidden,
                &self.options.hint_prefix,
            )
        } else {
            Vec::new()
        };
        &self.placements
    }

    /// Rescan the active document and hand the result to the editor.
    fn render(&mut self, editor: &mut dyn Editor) {
        let Some(style) = self.style else {
            return;
        };
        if !self.enabled {
            self.placements.clear();
            editor.clear_decorations(style);
            return;
        }
        match editor.active_document() {
            Some(document) => {
                self.compute_placements(document.text, document.file_name);
            }
            None => {
                self.placements.clear();
                return;
            }
        }
        editor.apply_decorations(style, &self.placements);
    }

    // ========================================================================
    // LIFECYCLE
    // ========================================================================

    /// Initial load. Failures degrade to an empty dictionary without
    /// notifying the user.
    pub fn load(&mut self, editor: &mut dyn Editor) {
        if self.is_disposed() {
            return;
        }
        let loaded = self.loader.load(&self.project_root);
        tracing::info!(
            "Loaded {} key(s) for {}",
            loaded.len(),
            self.project_root.display()
        );
        self.loaded = loaded;
        self.render(editor);
    }

    /// Reload the dictionary from disk and redraw, showing every hidden line.
    ///
    /// A failed reload leaves the dictionary empty and is reported to the
    /// user as well as returned.
    pub fn refresh(&mut self, editor: &mut dyn Editor) -> Result<usize, LoadError> {
        if self.is_disposed() {
            return Ok(0);
        }
        self.hidden.clear();

        match self.loader.try_load(&self.project_root) {
            Ok(loaded) => {
                let count = loaded.len();
                self.loaded = loaded;
                self.render(editor);
                tracing::info!("Dictionary refreshed: {} key(s)", count);
                editor.notify(
                    NotificationLevel::Info,
                    &format!("KeyLens dictionary refreshed ({count} keys)"),
                );
                Ok(count)
            }
            Err(e) => {
                tracing::warn!("Dictionary refresh failed: {}", e);
                // Sources and patterns stay watched
                self.loaded.entries.clear();
                self.loaded.match_rule = MatchRule::Any;
                self.render(editor);
                editor.notify(
                    NotificationLevel::Error,
                    &format!("Failed to refresh KeyLens dictionary: {e}"),
                );
                Err(e)
            }
        }
    }

    pub fn enable(&mut self, editor: &mut dyn Editor) {
        if self.is_disposed() {
            return;
        }
        self.enabled = true;
        self.render(editor);
        editor.notify(NotificationLevel::Info, "KeyLens decorations enabled");
    }

    pub fn disable(&mut self, editor: &mut dyn Editor) {
        if self.is_disposed() {
            return;
        }
        self.enabled = false;
        self.render(editor);
        editor.notify(NotificationLevel::Info, "KeyLens decorations disabled");
    }

    pub fn toggle(&mut self, editor: &mut dyn Editor) {
        if self.enabled {
            self.disable(editor);
        } else {
            self.enable(editor);
        }
    }

    /// Run a host command by value.
    pub fn execute(&mut self, command: Command, editor: &mut dyn Editor) -> Result<(), LoadError> {
        match command {
            Command::Enable => self.enable(editor),
            Command::Disable => self.disable(editor),
            Command::Toggle => self.toggle(editor),
            Command::Refresh => {
                self.refresh(editor)?;
            }
        }
        Ok(())
    }

    /// Release the decoration style. Later calls, including a second
    /// `dispose`, do nothing.
    pub fn dispose(&mut self, editor: &mut dyn Editor) {
        let Some(style) = self.style.take() else {
            return;
        };
        editor.clear_decorations(style);
        editor.release_style(style);
        self.placements.clear();
        self.hidden.clear();
    }

    // ========================================================================
    // HIDDEN LINES
    // ========================================================================

    /// Hide the hints on `line`. With an auto-show delay configured the line
    /// reappears once [`DecorationEngine::expire_hidden_lines`] runs after
    /// the delay; hiding it again restarts that delay.
    pub fn hide_decorations_for_line(&mut self, line: u32, editor: &mut dyn Editor) {
        self.hide_line_at(line, Instant::now(), editor);
    }

    fn hide_line_at(&mut self, line: u32, now: Instant, editor: &mut dyn Editor) {
        match self.options.auto_show_delay {
            Some(delay) => self.hidden.hide_until(line, now + delay),
            None => self.hidden.hide(line),
        };
        self.render(editor);
    }

    pub fn show_decorations_for_line(&mut self, line: u32, editor: &mut dyn Editor) {
        self.hidden.show(line);
        self.render(editor);
    }

    pub fn clear_hidden_lines(&mut self, editor: &mut dyn Editor) {
        self.hidden.clear();
        self.render(editor);
    }

    /// Show every hidden line whose delay has passed by `now`.
    ///
    /// Returns the lines shown again; redraws only when there are any.
    pub fn expire_hidden_lines(&mut self, now: Instant, editor: &mut dyn Editor) -> Vec<u32> {
        let expired = self.hidden.take_expired(now);
        if !expired.is_empty() {
            self.render(editor);
        }
        expired
    }

    // ========================================================================
    // EDITOR EVENTS
    // ========================================================================

    /// Caret or selection moved to `position`.
    ///
    /// Landing on a hint hides that hint's line. Landing anywhere else shows
    /// every hidden line again.
    pub fn handle_selection_change(&mut self, position: LineCol, editor: &mut dyn Editor) {
        match self.placement_at(position).map(Placement::line) {
            Some(line) => self.hide_decorations_for_line(line, editor),
            None => {
                if self.hidden.clear() {
                    self.render(editor);
                }
            }
        }
    }

    /// A different document gained focus. Hidden lines belong to the
    /// previous document and are dropped.
    pub fn on_active_editor_changed(&mut self, editor: &mut dyn Editor) {
        self.hidden.clear();
        self.render(editor);
    }

    /// The active document's text changed.
    pub fn on_document_changed(&mut self, editor: &mut dyn Editor) {
        self.render(editor);
    }

    /// Files changed on disk. Reloads when any of them can alter the
    /// dictionary, including new files matching a glob in `paths`, and
    /// reports whether it did.
    pub fn on_files_changed<I, P>(
        &mut self,
        paths: I,
        editor: &mut dyn Editor,
    ) -> Result<bool, LoadError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let touched = paths.into_iter().any(|path| {
            let path = normalize_path(&self.project_root.join(path.as_ref()));
            self.loaded.is_watched(&self.project_root, &path)
        });
        if !touched {
            return Ok(false);
        }
        tracing::debug!("Dictionary sources changed, refreshing");
        self.refresh(editor)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests;
