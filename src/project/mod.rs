//! Project loading: `keylens.config.json`, dictionary discovery and flattening.

mod config;
mod dictionary_loader;
mod error;
pub mod file_system;
pub mod flatten;
pub mod glob;

pub use config::{MatchRule, ProjectConfig};
pub use dictionary_loader::{DictionaryLoader, LoadedDictionary};
pub use error::LoadError;
pub use file_system::{FileSystem, StdFileSystem};
pub use flatten::{Dictionary, flatten, flatten_into, stringify};
pub use glob::{FilePattern, GlobPattern};
