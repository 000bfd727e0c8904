//! Glob patterns for dictionary discovery and file filtering.
//!
//! Two flavours share one matcher:
//! - [`GlobPattern`]: `/`-separated path patterns from `paths`, supporting
//!   `**`, `*`, `?` and `[...]` classes.
//! - [`FilePattern`]: file name patterns from `filePatterns`, where only `*`
//!   is special and everything else matches literally.

use super::LoadError;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(char),
    /// `*`: any run of characters, including none
    AnyRun,
    /// `?`: exactly one character
    AnyChar,
    Class {
        negated: bool,
        ranges: Vec<(char, char)>,
    },
}

impl Token {
    fn matches_char(&self, c: char) -> bool {
        match self {
            Token::Literal(lit) => *lit == c,
            Token::AnyChar => true,
            Token::AnyRun => false,
            Token::Class { negated, ranges } => {
                let hit = ranges.iter().any(|&(lo, hi)| lo <= c && c <= hi);
                hit != *negated
            }
        }
    }
}

/// Match a whole string against a token sequence, backtracking on `*`.
fn match_tokens(tokens: &[Token], text: &[char]) -> bool {
    let (mut t, mut s) = (0, 0);
    let mut backtrack: Option<(usize, usize)> = None;

    while s < text.len() {
        match tokens.get(t) {
            Some(Token::AnyRun) => {
                backtrack = Some((t, s));
                t += 1;
                continue;
            }
            Some(token) if token.matches_char(text[s]) => {
                t += 1;
                s += 1;
                continue;
            }
            _ => {}
        }
        match backtrack {
            Some((star, consumed)) => {
                t = star + 1;
                s = consumed + 1;
                backtrack = Some((star, consumed + 1));
            }
            None => return false,
        }
    }

    tokens[t..].iter().all(|token| *token == Token::AnyRun)
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// `**`: zero or more directories
    AnyDirs,
    Component(Vec<Token>),
}

/// A compiled path glob, matched against paths relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl GlobPattern {
    pub fn new(pattern: &str) -> Result<Self, LoadError> {
        let trimmed = pattern.trim_start_matches("./");
        let mut segments = Vec::new();

        for part in trimmed.split('/').filter(|part| !part.is_empty() && *part != ".") {
            if part == "**" {
                // Consecutive `**` collapse into one
                if segments.last() != Some(&Segment::AnyDirs) {
                    segments.push(Segment::AnyDirs);
                }
                continue;
            }
            segments.push(Segment::Component(compile_segment(pattern, part)?));
        }

        if segments.is_empty() {
            return Err(LoadError::invalid_pattern(pattern, "pattern is empty"));
        }

        Ok(Self {
            raw: pattern.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Leading directory components free of wildcards.
    ///
    /// Expansion only needs to walk below this prefix.
    pub fn literal_prefix(&self) -> Vec<String> {
        let mut prefix = Vec::new();
        // The final segment names files, never a directory to descend into
        let dirs = &self.segments[..self.segments.len().saturating_sub(1)];
        for segment in dirs {
            let Segment::Component(tokens) = segment else {
                break;
            };
            let literal: Option<String> = tokens
                .iter()
                .map(|token| match token {
                    Token::Literal(c) => Some(*c),
                    _ => None,
                })
                .collect();
            match literal {
                Some(component) => prefix.push(component),
                None => break,
            }
        }
        prefix
    }

    /// Match the components of a root-relative path.
    pub fn matches_components(&self, components: &[&str]) -> bool {
        match_segments(&self.segments, components)
    }
}

fn match_segments(segments: &[Segment], components: &[&str]) -> bool {
    match segments.split_first() {
        None => components.is_empty(),
        Some((Segment::AnyDirs, rest)) => {
            (0..=components.len()).any(|skip| match_segments(rest, &components[skip..]))
        }
        Some((Segment::Component(tokens), rest)) => match components.split_first() {
            Some((head, tail)) => {
                let chars: Vec<char> = head.chars().collect();
                match_tokens(tokens, &chars) && match_segments(rest, tail)
            }
            None => false,
        },
    }
}

fn compile_segment(pattern: &str, segment: &str) -> Result<Vec<Token>, LoadError> {
    let mut tokens = Vec::new();
    let mut chars = segment.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '*' => {
                // `**` inside a component behaves like `*`
                while chars.peek() == Some(&'*') {
                    chars.next();
                }
                tokens.push(Token::AnyRun);
            }
            '?' => tokens.push(Token::AnyChar),
            '[' => {
                let negated = matches!(chars.peek(), Some('!') | Some('^'));
                if negated {
                    chars.next();
                }
                let mut ranges = Vec::new();
                let mut closed = false;
                while let Some(lo) = chars.next() {
                    if lo == ']' && !ranges.is_empty() {
                        closed = true;
                        break;
                    }
                    if chars.peek() == Some(&'-') {
                        chars.next();
                        match chars.next() {
                            Some(']') => {
                                // Trailing `-` is literal: `[a-]`
                                ranges.push((lo, lo));
                                ranges.push(('-', '-'));
                                closed = true;
                                break;
                            }
                            Some(hi) => ranges.push((lo, hi)),
                            None => break,
                        }
                    } else {
                        ranges.push((lo, lo));
                    }
                }
                if !closed {
                    return Err(LoadError::invalid_pattern(
                        pattern,
                        "unterminated character class",
                    ));
                }
                tokens.push(Token::Class { negated, ranges });
            }
            other => tokens.push(Token::Literal(other)),
        }
    }

    Ok(tokens)
}

/// A file name pattern from `filePatterns`: `*` matches any run of
/// characters, everything else is literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePattern {
    raw: String,
    tokens: Vec<Token>,
}

impl FilePattern {
    pub fn new(pattern: &str) -> Self {
        let tokens = pattern
            .chars()
            .map(|c| match c {
                '*' => Token::AnyRun,
                other => Token::Literal(other),
            })
            .collect();
        Self {
            raw: pattern.to_string(),
            tokens,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whole-name match.
    pub fn matches(&self, file_name: &str) -> bool {
        let chars: Vec<char> = file_name.chars().collect();
        match_tokens(&self.tokens, &chars)
    }
}
