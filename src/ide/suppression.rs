//! Lines whose hints the user has hidden.

use std::time::Instant;

use rustc_hash::{FxHashMap, FxHashSet};

/// Hidden line numbers, each optionally due to reappear at a deadline.
///
/// Hiding a line again replaces its deadline, so an older expiry never
/// reveals a line the user just hid.
#[derive(Debug, Clone, Default)]
pub struct SuppressionSet {
    lines: FxHashSet<u32>,
    deadlines: FxHashMap<u32, Instant>,
}

impl SuppressionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hide `line` until explicitly shown. Returns `true` if it was visible.
    pub fn hide(&mut self, line: u32) -> bool {
        self.deadlines.remove(&line);
        self.lines.insert(line)
    }

    /// Hide `line` until `deadline`, replacing any earlier deadline.
    pub fn hide_until(&mut self, line: u32, deadline: Instant) -> bool {
        self.deadlines.insert(line, deadline);
        self.lines.insert(line)
    }

    /// Show `line` again. Returns `true` if it was hidden.
    pub fn show(&mut self, line: u32) -> bool {
        self.deadlines.remove(&line);
        self.lines.remove(&line)
    }

    /// Show every line. Returns `true` if anything was hidden.
    pub fn clear(&mut self) -> bool {
        self.deadlines.clear();
        let had_lines = !self.lines.is_empty();
        self.lines.clear();
        had_lines
    }

    pub fn contains(&self, line: u32) -> bool {
        self.lines.contains(&line)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Hidden lines in ascending order.
    pub fn lines(&self) -> Vec<u32> {
        let mut lines: Vec<u32> = self.lines.iter().copied().collect();
        lines.sort_unstable();
        lines
    }

    /// Earliest pending deadline, for scheduling the next expiry check.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadlines.values().min().copied()
    }

    /// Show every line whose deadline is at or before `now`, returning them in
    /// ascending order.
    pub fn take_expired(&mut self, now: Instant) -> Vec<u32> {
        let mut expired: Vec<u32> = self
            .deadlines
            .iter()
            .filter(|&(_, deadline)| *deadline <= now)
            .map(|(&line, _)| line)
            .collect();
        expired.sort_unstable();
        for line in &expired {
            self.deadlines.remove(line);
            self.lines.remove(line);
        }
        expired
    }
}
