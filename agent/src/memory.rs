//! Bounded conversation history.

use std::collections::VecDeque;

use serde::Serialize;
use sutradhara_core::Mode;

/// Number of exchanges kept when no capacity is configured.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// One answered prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    /// Mode the prompt was answered in.
    pub mode: Mode,
    /// What the user asked.
    pub prompt: String,
    /// What the assistant answered.
    pub response: String,
}

impl HistoryEntry {
    /// Create an entry.
    pub fn new(mode: Mode, prompt: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            mode,
            prompt: prompt.into(),
            response: response.into(),
        }
    }
}

/// Most recent exchanges, oldest first.
///
/// Pushing past capacity evicts the oldest entry.
#[derive(Debug, Clone)]
pub struct ConversationHistory {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for ConversationHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl ConversationHistory {
    /// Create a history with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history holding at most `capacity` entries (at least one).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an entry, returning the evicted one if the log was full.
    pub fn push(&mut self, entry: HistoryEntry) -> Option<HistoryEntry> {
        self.entries.push_back(entry);
        if self.entries.len() > self.capacity {
            self.entries.pop_front()
        } else {
            None
        }
    }

    /// The most recent entry.
    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Prompt of the most recently answered exchange.
    ///
    /// The prompt currently being answered is not in the log yet.
    #[must_use]
    pub fn previous_prompt(&self) -> Option<&str> {
        self.last().map(|entry| entry.prompt.as_str())
    }

    /// Iterate entries, oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries kept.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(i: usize) -> HistoryEntry {
        HistoryEntry::new(Mode::FindMembers, format!("q{i}"), format!("a{i}"))
    }

    #[test]
    fn test_eleventh_push_evicts_oldest() {
        let mut history = ConversationHistory::new();
        for i in 0..10 {
            assert!(history.push(entry(i)).is_none());
        }

        let evicted = history.push(entry(10));
        assert_eq!(evicted, Some(entry(0)));
        assert_eq!(history.len(), 10);

        let prompts: Vec<&str> = history.iter().map(|e| e.prompt.as_str()).collect();
        let expected: Vec<String> = (1..=10).map(|i| format!("q{i}")).collect();
        assert_eq!(prompts, expected);
    }

    #[test]
    fn test_previous_prompt() {
        let mut history = ConversationHistory::new();
        assert_eq!(history.previous_prompt(), None);

        history.push(entry(1));
        history.push(entry(2));
        assert_eq!(history.previous_prompt(), Some("q2"));
    }

    #[test]
    fn test_capacity_is_at_least_one() {
        let mut history = ConversationHistory::with_capacity(0);
        assert_eq!(history.capacity(), 1);
        history.push(entry(1));
        history.push(entry(2));
        assert_eq!(history.len(), 1);
        assert_eq!(history.last(), Some(&entry(2)));
    }

    #[test]
    fn test_clear() {
        let mut history = ConversationHistory::new();
        history.push(entry(1));
        history.clear();
        assert!(history.is_empty());
    }
}
