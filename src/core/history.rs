//! In-session record of completed computations.
//!
//! Bounded queue; in-memory only. Nothing here survives the process, the
//! session-persistence non-goal stands.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::format::fmt_number;
use super::operator::Operator;

/// One completed computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Left operand as parsed at compute time.
    pub lhs: f64,
    /// The operator applied.
    pub operator: Operator,
    /// Right operand as parsed at compute time.
    pub rhs: f64,
    /// The result, possibly non-finite.
    pub result: f64,
}

impl HistoryEntry {
    /// Creates a new entry.
    #[must_use]
    pub fn new(lhs: f64, operator: Operator, rhs: f64, result: f64) -> Self {
        Self {
            lhs,
            operator,
            rhs,
            result,
        }
    }

    /// Returns the display form, e.g. `"4 ÷ 2 = 2"`.
    #[must_use]
    pub fn display(&self) -> String {
        format!(
            "{} {} {} = {}",
            fmt_number(self.lhs),
            self.operator.symbol(),
            fmt_number(self.rhs),
            fmt_number(self.result)
        )
    }
}

/// Bounded computation history.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    max_entries: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Default maximum number of retained computations.
    pub const DEFAULT_MAX_ENTRIES: usize = 100;

    /// Creates a history with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_MAX_ENTRIES)
    }

    /// Creates a history retaining at most `max_entries` computations.
    #[must_use]
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries,
        }
    }

    /// Appends an entry, evicting the oldest when full.
    pub fn push(&mut self, entry: HistoryEntry) {
        if self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Records a computation.
    pub fn record(&mut self, lhs: f64, operator: Operator, rhs: f64, result: f64) {
        self.push(HistoryEntry::new(lhs, operator, rhs, result));
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no computation has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the most recent entry.
    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Iterates oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Iterates newest first (display order).
    pub fn iter_rev(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }

    /// Serializes the entries to JSON, oldest first.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries.iter().collect::<Vec<_>>())
    }

    /// Rebuilds a history from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<HistoryEntry> = serde_json::from_str(json)?;
        let mut history = Self::new();
        for entry in entries {
            history.push(entry);
        }
        Ok(history)
    }
}
