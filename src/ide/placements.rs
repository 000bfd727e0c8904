//! Placement scan: quoted key literals in document text.

use crate::base::constants::QUOTE_CHARS;
use crate::base::{LineCol, LineIndex, Span, TextRange, TextSize};
use crate::project::Dictionary;

use super::SuppressionSet;

/// One hint to render: the quoted literal's range and the text shown after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Range of the literal, quotes included.
    pub range: TextRange,
    pub start: LineCol,
    pub end: LineCol,
    /// Hint prefix followed by the resolved value.
    pub label: String,
}

impl Placement {
    /// Line the literal starts on.
    pub fn line(&self) -> u32 {
        self.start.line
    }

    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }
}

/// Scan `text` for every quoted occurrence of every dictionary key.
///
/// Keys are visited in dictionary order and each key's matches left to
/// right, so overlapping literals of different keys all appear. Matches that
/// start on a hidden line are dropped.
pub fn find_placements(
    text: &str,
    dictionary: &Dictionary,
    hidden: &SuppressionSet,
    prefix: &str,
) -> Vec<Placement> {
    let index = LineIndex::new(text);
    let mut placements = Vec::new();

    for (key, value) in dictionary {
        for range in quoted_occurrences(text, key) {
            let start = index.line_col(range.start());
            if hidden.contains(start.line) {
                continue;
            }
            placements.push(Placement {
                range,
                start,
                end: index.line_col(range.end()),
                label: format!("{prefix}{value}"),
            });
        }
    }

    placements
}

/// Non-overlapping occurrences of `key` wrapped in a matching pair of quotes
/// (`'key'`, `"key"` or `` `key` ``), left to right.
pub fn quoted_occurrences<'a>(text: &'a str, key: &'a str) -> impl Iterator<Item = TextRange> + 'a {
    let mut cursor = 0;
    std::iter::from_fn(move || {
        while let Some(found) = text[cursor..].find(|c: char| QUOTE_CHARS.contains(&c)) {
            let open = cursor + found;
            let quote = text[open..].chars().next()?;
            let body = open + quote.len_utf8();
            let close = body + key.len();
            if text[body..].starts_with(key) && text[close..].starts_with(quote) {
                cursor = close + quote.len_utf8();
                return Some(TextRange::new(to_size(open), to_size(cursor)));
            }
            cursor = body;
        }
        None
    })
}

fn to_size(offset: usize) -> TextSize {
    TextSize::try_from(offset).unwrap_or(TextSize::from(u32::MAX))
}
