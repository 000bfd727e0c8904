//! Foundation types for keylens.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`LineCol`], [`LineIndex`] - Line/column conversion
//! - [`Span`] - Line/column ranges for hit testing
//! - Domain constants (config file name, hint prefix, command ids)
//!
//! This module has NO dependencies on other keylens modules.

pub mod constants;
mod position;
mod span;

pub use position::Span;
pub use span::{LineCol, LineIndex, TextRange, TextSize};

// Re-export text-size types for convenience
pub use text_size;
