//! Router configuration.

use sutradhara_skills::{
    Boundary, ConfusablePairs, DEFAULT_MEMBER_COUNT, MAX_MEMBER_COUNT, MatchPolicy,
};

use crate::{canned::CannedResponses, memory::DEFAULT_HISTORY_CAPACITY};

/// Reply used when the language model returns nothing or fails.
pub const DEFAULT_FALLBACK: &str = "Sorry, I couldn't process that request.";
/// Reply to "what was my last question" with an empty history.
pub const NO_PREVIOUS_QUESTION: &str = "You haven't asked me anything yet.";

/// Configuration for router behavior.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Members recommended per skill when the query gives no count.
    pub default_member_count: usize,

    /// Largest member count a query may request.
    pub max_member_count: usize,

    /// How queried skills are compared with member skills.
    pub policy: MatchPolicy,

    /// How skill mentions are located in the query.
    pub boundary: Boundary,

    /// Skill tokens that must not stand in for each other.
    pub confusables: ConfusablePairs,

    /// Fixed answers checked before anything else.
    pub canned: CannedResponses,

    /// Whether relation statements and questions are handled.
    pub relations: bool,

    /// Exchanges kept per session.
    pub history_capacity: usize,

    /// Reply when the language model gives no usable answer.
    pub fallback: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            default_member_count: DEFAULT_MEMBER_COUNT,
            max_member_count: MAX_MEMBER_COUNT,
            policy: MatchPolicy::Exact,
            boundary: Boundary::Substring,
            confusables: ConfusablePairs::default(),
            canned: CannedResponses::default(),
            relations: true,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            fallback: DEFAULT_FALLBACK.to_owned(),
        }
    }
}

impl RouterConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default member count.
    #[must_use]
    pub const fn with_default_member_count(mut self, count: usize) -> Self {
        self.default_member_count = count;
        self
    }

    /// Sets the maximum member count.
    #[must_use]
    pub const fn with_max_member_count(mut self, count: usize) -> Self {
        self.max_member_count = count;
        self
    }

    /// Sets the match policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the boundary policy.
    #[must_use]
    pub const fn with_boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }

    /// Sets the confusable table.
    #[must_use]
    pub fn with_confusables(mut self, confusables: ConfusablePairs) -> Self {
        self.confusables = confusables;
        self
    }

    /// Sets the canned responses.
    #[must_use]
    pub fn with_canned(mut self, canned: CannedResponses) -> Self {
        self.canned = canned;
        self
    }

    /// Enables or disables relation memory.
    #[must_use]
    pub const fn with_relations(mut self, enabled: bool) -> Self {
        self.relations = enabled;
        self
    }

    /// Sets the history capacity.
    #[must_use]
    pub const fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Sets the fallback reply.
    #[must_use]
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }
}
