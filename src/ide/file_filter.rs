//! Which documents receive hints.

use std::path::Path;

use crate::project::MatchRule;

/// Check whether `file_name` passes the configured filter.
///
/// `file_name` may be a full path; only its final component is matched.
/// Extensions compare case-sensitively without the leading dot.
pub fn should_apply_to_file(rule: &MatchRule, file_name: &str) -> bool {
    match rule {
        MatchRule::Any => true,
        MatchRule::Extensions(extensions) => Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| extensions.iter().any(|allowed| allowed == ext)),
        MatchRule::FilePatterns(patterns) => {
            let name = Path::new(file_name)
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or(file_name);
            patterns.iter().any(|pattern| pattern.matches(name))
        }
    }
}
