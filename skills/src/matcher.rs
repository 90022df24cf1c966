//! Member recommendation for a queried skill.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::{MemberRecord, member::DEFAULT_ID};

/// Default similarity a fuzzy match has to beat, on a 0-100 scale.
pub const DEFAULT_FUZZY_THRESHOLD: u8 = 70;

/// How a queried skill is compared against a member's skill tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchPolicy {
    /// Case-insensitive equality with one of the member's tokens.
    #[default]
    Exact,
    /// Best similarity among the member's tokens must exceed `threshold` (0-100).
    Fuzzy {
        /// Score to beat.
        threshold: u8,
    },
}

impl MatchPolicy {
    /// Fuzzy matching with the default threshold.
    #[must_use]
    pub const fn fuzzy() -> Self {
        Self::Fuzzy {
            threshold: DEFAULT_FUZZY_THRESHOLD,
        }
    }
}

/// Pairs of skill tokens that text similarity tends to conflate.
///
/// Pairs are symmetric and compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfusablePairs {
    pairs: Vec<(String, String)>,
}

impl Default for ConfusablePairs {
    fn default() -> Self {
        Self::empty().with_pair("c++", "c#")
    }
}

impl ConfusablePairs {
    /// A table with no pairs.
    #[must_use]
    pub const fn empty() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Add a pair.
    #[must_use]
    pub fn with_pair(mut self, a: impl AsRef<str>, b: impl AsRef<str>) -> Self {
        self.pairs
            .push((a.as_ref().to_lowercase(), b.as_ref().to_lowercase()));
        self
    }

    /// Tokens that must not stand in for `skill`.
    pub fn partners<'a>(&'a self, skill: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs.iter().filter_map(move |(a, b)| {
            if a.eq_ignore_ascii_case(skill) {
                Some(b.as_str())
            } else if b.eq_ignore_ascii_case(skill) {
                Some(a.as_str())
            } else {
                None
            }
        })
    }

    /// Whether `token` is a known confusable partner of `skill`.
    #[must_use]
    pub fn conflicts(&self, skill: &str, token: &str) -> bool {
        self.partners(skill)
            .any(|partner| partner.eq_ignore_ascii_case(token))
    }

    /// Number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Check if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// One member recommended for a skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationEntry {
    /// Member name.
    pub name: String,
    /// Member USN.
    #[serde(rename = "USN")]
    pub id: String,
    /// Reputation score.
    pub points: i64,
    /// The member's own skill token that matched.
    pub matched_skill: Option<String>,
}

/// Ranks members holding a skill.
///
/// # Example
///
/// ```rust
/// use sutradhara_skills::{MemberRecord, Recommender, SkillSet};
///
/// let members = vec![
///     MemberRecord::new("A", "U1")
///         .with_points(10)
///         .with_technical_skills(SkillSet::weighted([("Python", 1)])),
///     MemberRecord::new("B", "U2")
///         .with_points(20)
///         .with_technical_skills(SkillSet::listed(["python"])),
/// ];
///
/// let ranked = Recommender::new().recommend("python", &members, 5);
/// assert_eq!(ranked[0].name, "B");
/// assert_eq!(ranked[1].name, "A");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Recommender {
    policy: MatchPolicy,
    confusables: ConfusablePairs,
}

impl Recommender {
    /// Exact matching with the default confusable table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the match policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace the confusable table.
    #[must_use]
    pub fn with_confusables(mut self, confusables: ConfusablePairs) -> Self {
        self.confusables = confusables;
        self
    }

    /// The active match policy.
    #[must_use]
    pub const fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Members holding `skill`, highest points first, at most `limit` entries.
    ///
    /// Members keep their roster order on equal points. A member appears at most once,
    /// and members sharing a USN are collapsed to the best-ranked one. Members without a
    /// USN all carry the [`DEFAULT_ID`] placeholder and are never collapsed, so that
    /// placeholder may repeat within one result.
    #[must_use]
    pub fn recommend(
        &self,
        skill: &str,
        members: &[MemberRecord],
        limit: usize,
    ) -> Vec<RecommendationEntry> {
        let skill = skill.trim();
        let mut entries: Vec<RecommendationEntry> = members
            .iter()
            .filter_map(|member| {
                self.match_member(skill, member)
                    .map(|matched| RecommendationEntry {
                        name: member.name.clone(),
                        id: member.id.clone(),
                        points: member.points,
                        matched_skill: Some(matched),
                    })
            })
            .collect();

        // Stable, so equal points keep roster order.
        entries.sort_by(|a, b| b.points.cmp(&a.points));

        let mut seen = HashSet::new();
        entries.retain(|entry| entry.id == DEFAULT_ID || seen.insert(entry.id.clone()));

        let eligible = entries.len();
        entries.truncate(limit);
        debug!(skill, eligible, returned = entries.len(), "recommended members");
        entries
    }

    /// The member token that satisfies `skill`, if any.
    fn match_member(&self, skill: &str, member: &MemberRecord) -> Option<String> {
        let candidates: Vec<String> = member
            .skills()
            .into_iter()
            .filter(|token| {
                token.eq_ignore_ascii_case(skill) || !self.confusables.conflicts(skill, token)
            })
            .collect();

        match self.policy {
            MatchPolicy::Exact => candidates
                .into_iter()
                .find(|token| token.to_lowercase() == skill.to_lowercase()),
            MatchPolicy::Fuzzy { threshold } => {
                let mut best: Option<(u8, String)> = None;
                for token in candidates {
                    let score = similarity(skill, &token);
                    if best.as_ref().is_none_or(|(top, _)| score > *top) {
                        best = Some((score, token));
                    }
                }
                best.filter(|(score, _)| *score > threshold)
                    .map(|(_, token)| token)
            }
        }
    }
}

/// Similarity of two skill names on a 0-100 scale, case-insensitive.
///
/// Normalized Levenshtein distance over the lowercased strings.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn similarity(a: &str, b: &str) -> u8 {
    let score = strsim::normalized_levenshtein(&a.to_lowercase(), &b.to_lowercase());
    (score * 100.0).round().clamp(0.0, 100.0) as u8
}
