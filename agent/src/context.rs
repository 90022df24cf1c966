//! Per-user session state.
//!
//! A [`Session`] owns everything the router remembers between prompts: the bounded
//! conversation history and the relation store. The router borrows it mutably for
//! the duration of one prompt, so two prompts of the same session can never be in
//! flight at once.

use crate::{
    memory::{ConversationHistory, DEFAULT_HISTORY_CAPACITY},
    relations::RelationStore,
};

/// Conversation state for one user.
#[derive(Debug, Clone, Default)]
pub struct Session {
    history: ConversationHistory,
    relations: RelationStore,
}

impl Session {
    /// Creates a session with the default history capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_history_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Creates a session keeping at most `capacity` exchanges.
    #[must_use]
    pub fn with_history_capacity(capacity: usize) -> Self {
        Self {
            history: ConversationHistory::with_capacity(capacity),
            relations: RelationStore::new(),
        }
    }

    /// Past exchanges, oldest first.
    #[must_use]
    pub const fn history(&self) -> &ConversationHistory {
        &self.history
    }

    /// Mutable access to the history.
    pub const fn history_mut(&mut self) -> &mut ConversationHistory {
        &mut self.history
    }

    /// Remembered relations.
    #[must_use]
    pub const fn relations(&self) -> &RelationStore {
        &self.relations
    }

    /// Mutable access to the relation store.
    pub const fn relations_mut(&mut self) -> &mut RelationStore {
        &mut self.relations
    }

    /// Forget history and relations.
    pub fn reset(&mut self) {
        self.history.clear();
        self.relations.clear();
    }
}
