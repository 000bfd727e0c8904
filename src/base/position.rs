//! Line/column ranges used to hit test editor selections against placements.

use super::LineCol;

/// A span between two line/column positions (0-indexed, matching the editor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: LineCol,
    pub end: LineCol,
}

impl Span {
    pub fn new(start: LineCol, end: LineCol) -> Self {
        Self { start, end }
    }

    /// Create a span from line/column coordinates
    pub fn from_coords(start_line: u32, start_col: u32, end_line: u32, end_col: u32) -> Self {
        Self {
            start: LineCol::new(start_line, start_col),
            end: LineCol::new(end_line, end_col),
        }
    }

    /// Check if a position falls within this span.
    ///
    /// Both ends are inclusive: a caret placed right after the closing quote
    /// still counts as touching the literal.
    pub fn contains(&self, position: LineCol) -> bool {
        if position.line < self.start.line || position.line > self.end.line {
            return false;
        }
        if position.line == self.start.line && position.col < self.start.col {
            return false;
        }
        if position.line == self.end.line && position.col > self.end.col {
            return false;
        }
        true
    }
}
