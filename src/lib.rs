//! # keylens
//!
//! Inline value hints for string literals that name keys of a flattened
//! JSON dictionary (localization tables, configuration keys, ...).
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → DecorationEngine, placement scan, suppression, editor seam
//!   ↓
//! project   → keylens.config.json, glob expansion, JSON flattening
//!   ↓
//! base      → Primitives (TextRange, LineIndex, Span, constants)
//! ```

// ============================================================================
// MODULES (dependency order: base → project → ide)
// ============================================================================

/// Foundation types: TextRange, LineIndex, Span
pub mod base;

/// Project loading: configuration, dictionary files, flattening
pub mod project;

/// Editor features: decoration engine and its host seam
pub mod ide;

// Re-export foundation types
pub use base::{LineCol, LineIndex, Span, TextRange, TextSize};

pub use ide::{Command, DecorationEngine, Editor, EngineOptions, Placement};
pub use project::{Dictionary, DictionaryLoader, LoadError, LoadedDictionary, MatchRule};
