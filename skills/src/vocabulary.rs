//! The set of skill tokens known from a roster.

use std::collections::BTreeSet;

use crate::MemberRecord;

/// Every distinct lowercase skill name held by at least one member.
///
/// Built fresh for each request. Iteration is sorted, so anything derived from it
/// (like the order of extracted skills) is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    tokens: BTreeSet<String>,
}

impl Vocabulary {
    /// Create an empty vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the lowercased technical and soft skills of every member.
    #[must_use]
    pub fn build(members: &[MemberRecord]) -> Self {
        let mut vocabulary = Self::new();
        for member in members {
            for skill in member
                .technical_skills
                .normalize()
                .into_iter()
                .chain(member.soft_skills.normalize())
            {
                vocabulary.insert(&skill);
            }
        }
        vocabulary
    }

    /// Add a token. Blank names are ignored.
    pub fn insert(&mut self, skill: &str) {
        let token = skill.trim().to_lowercase();
        if !token.is_empty() {
            self.tokens.insert(token);
        }
    }

    /// Check if a token is known, case-insensitively.
    #[must_use]
    pub fn contains(&self, skill: &str) -> bool {
        self.tokens.contains(&skill.trim().to_lowercase())
    }

    /// Iterate tokens in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the vocabulary is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut vocabulary = Self::new();
        for skill in iter {
            vocabulary.insert(skill.as_ref());
        }
        vocabulary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SkillSet;

    fn roster() -> Vec<MemberRecord> {
        vec![
            MemberRecord::new("Asha", "U1")
                .with_technical_skills(SkillSet::weighted([("Python", 1), ("C++", 2)]))
                .with_soft_skills(SkillSet::listed(["Public Speaking"])),
            MemberRecord::new("Bilal", "U2").with_technical_skills(SkillSet::listed([
                "python", "C#", "  ",
            ])),
            MemberRecord::new("Chen", "U3"),
        ]
    }

    #[test]
    fn test_build_is_lowercased_union() {
        let vocabulary = Vocabulary::build(&roster());
        let tokens: Vec<&str> = vocabulary.iter().collect();
        assert_eq!(tokens, vec!["c#", "c++", "public speaking", "python"]);
    }

    #[test]
    fn test_every_member_skill_is_present() {
        let members = roster();
        let vocabulary = Vocabulary::build(&members);
        for member in &members {
            for skill in member.skills() {
                assert!(vocabulary.contains(&skill), "missing {skill}");
            }
        }
    }

    #[test]
    fn test_empty_roster() {
        let vocabulary = Vocabulary::build(&[]);
        assert!(vocabulary.is_empty());
        assert_eq!(vocabulary.len(), 0);
    }

    #[test]
    fn test_from_iterator() {
        let vocabulary: Vocabulary = ["Rust", "rust", "Go"].into_iter().collect();
        assert_eq!(vocabulary.len(), 2);
        assert!(vocabulary.contains("RUST"));
    }
}
