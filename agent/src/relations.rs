//! Session memory of "who is whose what" facts.
//!
//! Users can tell the assistant things like "Priya is my mentor" or "Arjun is the lead
//! of the robotics club" and ask about them later in the same session.

use std::{collections::HashMap, sync::LazyLock};

use regex::Regex;

/// Target key used for facts about the user.
pub const SELF_TARGET: &str = "me";

const QUESTION_WORDS: &[&str] = &["who", "what", "where", "when", "which", "how", "why"];

static RECALL_MINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^who\s+is\s+my\s+(?P<relation>[a-z]+(?:\s+[a-z]+){0,2})$")
        .expect("relation pattern is valid")
});
static RECALL_OF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^who\s+is\s+the\s+(?P<relation>[a-z]+(?:\s+[a-z]+){0,2})\s+of\s+(?P<target>[\w.'-]+(?:\s+[\w.'-]+){0,3})$",
    )
    .expect("relation pattern is valid")
});
static REMEMBER_MY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^my\s+(?P<relation>[a-z]+(?:\s+[a-z]+){0,2})\s+is\s+(?P<subject>[\w.'-]+(?:\s+[\w.'-]+){0,3})$",
    )
    .expect("relation pattern is valid")
});
static REMEMBER_IS_MY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?P<subject>[\w.'-]+(?:\s+[\w.'-]+){0,3})\s+is\s+my\s+(?P<relation>[a-z]+(?:\s+[a-z]+){0,2})$",
    )
    .expect("relation pattern is valid")
});
static REMEMBER_OF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?P<subject>[\w.'-]+(?:\s+[\w.'-]+){0,3})\s+is\s+the\s+(?P<relation>[a-z]+(?:\s+[a-z]+){0,2})\s+of\s+(?P<target>[\w.'-]+(?:\s+[\w.'-]+){0,3})$",
    )
    .expect("relation pattern is valid")
});

/// A relation statement or question found in a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelationUtterance {
    /// "`subject` is the `relation` of `target`".
    Remember {
        /// Relationship type, lowercase.
        relation: String,
        /// Whose relation it is, lowercase; [`SELF_TARGET`] for the user.
        target: String,
        /// Who holds the relation, as written.
        subject: String,
    },
    /// "who is the `relation` of `target`?"
    Recall {
        /// Relationship type, lowercase.
        relation: String,
        /// Whose relation is asked about, lowercase.
        target: String,
    },
}

impl RelationUtterance {
    /// Recognize a relation statement or question.
    ///
    /// Only whole-prompt matches count, so longer requests that merely contain
    /// "is my" are left alone.
    #[must_use]
    pub fn parse(prompt: &str) -> Option<Self> {
        let text = prompt
            .trim()
            .trim_end_matches(['?', '.', '!'])
            .trim_end();

        if let Some(caps) = RECALL_MINE.captures(text) {
            return Some(Self::Recall {
                relation: key(&caps["relation"]),
                target: SELF_TARGET.to_owned(),
            });
        }
        if let Some(caps) = RECALL_OF.captures(text) {
            return Some(Self::Recall {
                relation: key(&caps["relation"]),
                target: key(&caps["target"]),
            });
        }
        if let Some(caps) = REMEMBER_MY.captures(text) {
            return Some(Self::Remember {
                relation: key(&caps["relation"]),
                target: SELF_TARGET.to_owned(),
                subject: caps["subject"].to_owned(),
            });
        }

        let (caps, target) = if let Some(caps) = REMEMBER_OF.captures(text) {
            let target = key(&caps["target"]);
            (caps, target)
        } else {
            let caps = REMEMBER_IS_MY.captures(text)?;
            (caps, SELF_TARGET.to_owned())
        };

        let subject = caps["subject"].to_owned();
        let first_word = subject
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_lowercase();
        if QUESTION_WORDS.contains(&first_word.as_str()) {
            return None;
        }

        Some(Self::Remember {
            relation: key(&caps["relation"]),
            target,
            subject,
        })
    }
}

/// Relationship type → (target → subject).
#[derive(Debug, Clone, Default)]
pub struct RelationStore {
    relations: HashMap<String, HashMap<String, String>>,
}

impl RelationStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `subject` is the `relation` of `target`, returning the previous subject.
    pub fn remember(
        &mut self,
        relation: &str,
        target: &str,
        subject: impl Into<String>,
    ) -> Option<String> {
        self.relations
            .entry(key(relation))
            .or_default()
            .insert(key(target), subject.into())
    }

    /// Who is the `relation` of `target`.
    #[must_use]
    pub fn recall(&self, relation: &str, target: &str) -> Option<&str> {
        self.relations
            .get(&key(relation))
            .and_then(|targets| targets.get(&key(target)))
            .map(String::as_str)
    }

    /// Number of stored facts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.relations.values().map(HashMap::len).sum()
    }

    /// Check if no facts are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        self.relations.clear();
    }

    /// Apply a parsed utterance and produce the reply.
    pub fn handle(&mut self, utterance: RelationUtterance) -> String {
        match utterance {
            RelationUtterance::Remember {
                relation,
                target,
                subject,
            } => {
                let reply = format!(
                    "Got it! I'll remember that {subject} is {}.",
                    describe(&relation, &target)
                );
                self.remember(&relation, &target, subject);
                reply
            }
            RelationUtterance::Recall { relation, target } => {
                match self.recall(&relation, &target) {
                    Some(subject) => format!("{subject} is {}.", describe(&relation, &target)),
                    None => format!(
                        "I don't know who {} is yet.",
                        describe(&relation, &target)
                    ),
                }
            }
        }
    }
}

fn key(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn describe(relation: &str, target: &str) -> String {
    if target == SELF_TARGET {
        format!("your {relation}")
    } else {
        format!("the {relation} of {target}")
    }
}
