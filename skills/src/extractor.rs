//! Finding skill mentions and a member-count hint in free text.

use std::sync::LazyLock;

use regex::Regex;

use crate::Vocabulary;

/// Number of members recommended per skill when the query does not ask for a count.
pub const DEFAULT_MEMBER_COUNT: usize = 5;
/// Upper bound applied to a requested member count.
pub const MAX_MEMBER_COUNT: usize = 25;

static MEMBER_COUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d+)\s+members?\b").expect("member count pattern is valid")
});

/// How a vocabulary token must appear in the query to count as a mention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Boundary {
    /// Plain case-insensitive containment. `go` is found inside `good`.
    #[default]
    Substring,
    /// The occurrence must not be flanked by letters or digits.
    Word,
}

/// Extracts skills and the requested member count from a query.
#[derive(Debug, Clone, Copy)]
pub struct SkillExtractor {
    boundary: Boundary,
    default_count: usize,
    max_count: usize,
}

impl Default for SkillExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl SkillExtractor {
    /// Create an extractor with substring matching and the default counts.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            boundary: Boundary::Substring,
            default_count: DEFAULT_MEMBER_COUNT,
            max_count: MAX_MEMBER_COUNT,
        }
    }

    /// Set the boundary policy.
    #[must_use]
    pub const fn with_boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }

    /// Set the count used when the query has no `<n> members` hint.
    #[must_use]
    pub const fn with_default_count(mut self, count: usize) -> Self {
        self.default_count = count;
        self
    }

    /// Set the largest count a query may request. Never below 1.
    #[must_use]
    pub fn with_max_count(mut self, count: usize) -> Self {
        self.max_count = count.max(1);
        self
    }

    /// Vocabulary tokens mentioned in the query, in vocabulary order.
    #[must_use]
    pub fn extract(&self, query: &str, vocabulary: &Vocabulary) -> Vec<String> {
        let query = query.to_lowercase();
        vocabulary
            .iter()
            .filter(|token| match self.boundary {
                Boundary::Substring => query.contains(token),
                Boundary::Word => contains_word(&query, token),
            })
            .map(str::to_owned)
            .collect()
    }

    /// Requested member count, clamped to `1..=max_count`.
    #[must_use]
    pub fn member_count(&self, query: &str) -> usize {
        extract_member_count(query, self.default_count).clamp(1, self.max_count)
    }
}

/// Skills from `vocabulary` contained in `query`, case-insensitive substring match.
#[must_use]
pub fn extract_skills(query: &str, vocabulary: &Vocabulary) -> Vec<String> {
    SkillExtractor::new().extract(query, vocabulary)
}

/// Parses `<n> members` anywhere in the query, or returns `default`.
///
/// No clamping happens here; see [`SkillExtractor::member_count`].
#[must_use]
pub fn extract_member_count(query: &str, default: usize) -> usize {
    MEMBER_COUNT
        .captures(query)
        .and_then(|captures| captures.get(1))
        .and_then(|digits| digits.as_str().parse().ok())
        .unwrap_or(default)
}

fn contains_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    haystack.match_indices(needle).any(|(start, _)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + needle.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocabulary() -> Vocabulary {
        ["python", "go", "c++", "machine learning", "sql"]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_member_count_hint() {
        assert_eq!(
            extract_member_count("find me 3 members who know python", 5),
            3
        );
        assert_eq!(extract_member_count("find python experts", 5), 5);
        assert_eq!(extract_member_count("Give me 12 MEMBERS for SQL", 5), 12);
        assert_eq!(extract_member_count("just 1 member please", 5), 1);
    }

    #[test]
    fn test_member_count_ignores_other_numbers() {
        assert_eq!(extract_member_count("python 3 experts", 5), 5);
        assert_eq!(extract_member_count("10 membership cards", 5), 5);
    }

    #[test]
    fn test_member_count_is_clamped() {
        let extractor = SkillExtractor::new();
        assert_eq!(extractor.member_count("show 500 members"), MAX_MEMBER_COUNT);
        assert_eq!(extractor.member_count("show 0 members"), 1);
        assert_eq!(extractor.member_count("show members"), DEFAULT_MEMBER_COUNT);
        assert_eq!(
            extractor.with_max_count(3).member_count("show 8 members"),
            3
        );
    }

    #[test]
    fn test_member_count_overflow_falls_back_to_default() {
        assert_eq!(
            extract_member_count("99999999999999999999999 members", 5),
            5
        );
    }

    #[test]
    fn test_extract_is_case_insensitive_and_ordered() {
        let skills = extract_skills("Need SQL and Python folks", &vocabulary());
        assert_eq!(skills, vec!["python", "sql"]);
    }

    #[test]
    fn test_substring_matches_inside_words() {
        let skills = extract_skills("any good python devs?", &vocabulary());
        assert_eq!(skills, vec!["go", "python"]);
    }

    #[test]
    fn test_word_boundary_rejects_embedded_tokens() {
        let extractor = SkillExtractor::new().with_boundary(Boundary::Word);
        let skills = extractor.extract("any good python devs?", &vocabulary());
        assert_eq!(skills, vec!["python"]);

        let skills = extractor.extract("who knows c++, go or machine learning?", &vocabulary());
        assert_eq!(skills, vec!["c++", "go", "machine learning"]);
    }

    #[test]
    fn test_nothing_found() {
        assert!(extract_skills("hello there", &vocabulary()).is_empty());
        assert!(extract_skills("python", &Vocabulary::new()).is_empty());
    }
}
