//! Byte offsets and line/column conversion.

pub use text_size::{TextRange, TextSize};

/// A 0-indexed line/column pair. `col` counts UTF-8 bytes from the line start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

impl LineCol {
    pub fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }
}

/// Maps byte offsets of one text to line/column positions and back.
///
/// Built once per scan. A `\r` preceding `\n` stays on the line it ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Offset of the first byte of every line; always starts with `0`.
    line_starts: Vec<TextSize>,
    /// End of every line's content, before its `\n` or `\r\n`.
    line_ends: Vec<TextSize>,
    len: TextSize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::from(0)];
        let mut line_ends = Vec::new();
        for (idx, _) in text.match_indices('\n') {
            let end = if text[..idx].ends_with('\r') { idx - 1 } else { idx };
            line_ends.push(TextSize::from(end as u32));
            line_starts.push(TextSize::from(idx as u32 + 1));
        }
        line_ends.push(TextSize::of(text));
        Self {
            line_starts,
            line_ends,
            len: TextSize::of(text),
        }
    }

    /// Number of lines, counting a trailing empty line after a final newline.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert an offset to a line/column pair. Offsets past the end clamp to the end.
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let offset = offset.min(self.len);
        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let col = offset - self.line_starts[line];
        LineCol::new(line as u32, col.into())
    }

    /// Convert a line/column pair back to an offset.
    ///
    /// Returns `None` for lines that do not exist or columns past the line's
    /// content, so the result always maps back to `line_col`.
    pub fn offset(&self, line_col: LineCol) -> Option<TextSize> {
        let line = line_col.line as usize;
        let start = *self.line_starts.get(line)?;
        let end = self.line_ends[line];
        let offset = start.checked_add(TextSize::from(line_col.col))?;
        (offset <= end).then_some(offset)
    }
}
