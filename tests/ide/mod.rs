//! Decoration engine tests against real project directories
//!
//! Tests for:
//! - Quote matching
//! - File filters
//! - Refresh and reload on file changes
//! - Click-to-hide

pub mod tests_decorations;
