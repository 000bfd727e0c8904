//! Editor features: the decoration engine and the seam to its host.
//!
//! ## Design Principles
//!
//! 1. **Pure scan**: [`find_placements`] takes text and a dictionary and
//!    returns placements, nothing else
//! 2. **One owner**: [`DecorationEngine`] holds all mutable state
//! 3. **No editor types**: the host adapts [`Editor`] to its own API

mod command;
mod editor;
mod engine;
mod file_filter;
mod placements;
mod suppression;

pub use command::{Command, UnknownCommand};
pub use editor::{ActiveDocument, DecorationStyle, Editor, NotificationLevel, StyleId};
pub use engine::{DecorationEngine, EngineOptions};
pub use file_filter::should_apply_to_file;
pub use placements::{Placement, find_placements, quoted_occurrences};
pub use suppression::SuppressionSet;
