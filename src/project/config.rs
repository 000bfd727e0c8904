//! `keylens.config.json`: where dictionaries live and which files get hints.

use serde::Deserialize;

use super::glob::FilePattern;

/// On-disk project configuration.
///
/// ```json
/// {
///   "paths": ["locales/**/*.json", "config/defaults.json"],
///   "extensions": ["ts", "tsx"]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    /// Glob patterns or plain root-relative paths of dictionary files.
    #[serde(default)]
    pub paths: Vec<String>,
    /// Bare file extensions (no leading dot) that receive hints.
    #[serde(default)]
    pub extensions: Option<Vec<String>>,
    /// File name patterns (`*` wildcard only) that receive hints.
    #[serde(default)]
    pub file_patterns: Option<Vec<String>>,
}

impl ProjectConfig {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// The file filter this configuration selects.
    ///
    /// `extensions` takes precedence when both filters are present.
    pub fn match_rule(&self) -> MatchRule {
        match (&self.extensions, &self.file_patterns) {
            (Some(extensions), patterns) => {
                if patterns.is_some() {
                    tracing::warn!(
                        "Both 'extensions' and 'filePatterns' are set; using 'extensions'"
                    );
                }
                MatchRule::Extensions(
                    extensions
                        .iter()
                        .map(|ext| ext.trim_start_matches('.').to_string())
                        .collect(),
                )
            }
            (None, Some(patterns)) => MatchRule::FilePatterns(
                patterns.iter().map(|p| FilePattern::new(p)).collect(),
            ),
            (None, None) => MatchRule::Any,
        }
    }
}

/// Which documents the engine decorates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MatchRule {
    /// No filter configured
    #[default]
    Any,
    /// Case-sensitive extension allow-list
    Extensions(Vec<String>),
    /// File name patterns
    FilePatterns(Vec<FilePattern>),
}
