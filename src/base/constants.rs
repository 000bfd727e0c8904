//! Domain constants shared by the loader and the decoration engine.

use std::time::Duration;

/// Project configuration file, resolved against the project root.
pub const CONFIG_FILE_NAME: &str = "keylens.config.json";

/// Separator used when joining nested JSON keys.
pub const KEY_SEPARATOR: &str = ".";

/// Prefix rendered before every resolved value.
pub const HINT_PREFIX: &str = "➜ ";

/// Quote characters that may wrap a key literal. Opening and closing quote must match.
pub const QUOTE_CHARS: [char; 3] = ['\'', '"', '`'];

/// Delay after which a line hidden by a click shows its hints again.
pub const DEFAULT_AUTO_SHOW_DELAY: Duration = Duration::from_millis(3000);

/// Name under which the decoration style is registered with the editor.
pub const DECORATION_STYLE_NAME: &str = "keylens.valueHint";

// Command identifiers exposed to the host
pub const COMMAND_ENABLE: &str = "keylens.enable";
pub const COMMAND_DISABLE: &str = "keylens.disable";
pub const COMMAND_TOGGLE: &str = "keylens.toggle";
pub const COMMAND_REFRESH: &str = "keylens.refresh";

/// Characters that turn a `paths` entry into a glob pattern.
pub const GLOB_META_CHARS: [char; 3] = ['*', '?', '['];
