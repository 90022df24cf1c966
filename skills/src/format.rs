//! Rendering recommendations as chat text.

use std::fmt::Write;

use crate::RecommendationEntry;

/// Reply when the query mentions no known skill.
pub const NO_MATCHING_SKILLS: &str =
    "❓ No matching skills found in the database. Please specify valid skills from our system!";
/// Line emitted under a skill that no member holds.
pub const NO_MEMBERS_FOR_SKILL: &str =
    "❌ No members found with this skill. Try another skill or refine your request.";
/// First line of a non-empty reply.
pub const RESULTS_TITLE: &str = "🎯 **Top Experts Ready to Help!**";

/// Recommendations for one extracted skill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillRecommendations {
    /// The extracted skill token.
    pub skill: String,
    /// Ranked entries, possibly empty.
    pub entries: Vec<RecommendationEntry>,
}

impl SkillRecommendations {
    /// Pair a skill with its ranked entries.
    pub fn new(skill: impl Into<String>, entries: Vec<RecommendationEntry>) -> Self {
        Self {
            skill: skill.into(),
            entries,
        }
    }
}

/// Render per-skill results in extraction order.
///
/// Every skill gets a section, even one without members.
#[must_use]
pub fn format_recommendations(results: &[SkillRecommendations]) -> String {
    if results.is_empty() {
        return NO_MATCHING_SKILLS.to_owned();
    }

    let mut out = String::from(RESULTS_TITLE);
    out.push('\n');

    for result in results {
        // Writing into a String cannot fail.
        let _ = write!(out, "\n### {}\n\n", capitalize(&result.skill));

        if result.entries.is_empty() {
            out.push_str(NO_MEMBERS_FOR_SKILL);
            out.push('\n');
            continue;
        }

        for entry in &result.entries {
            let _ = write!(
                out,
                "🔥 **{}** · 📌 *USN:* `{}` · 🏆 *Points:* `{}`",
                entry.name, entry.id, entry.points
            );
            if let Some(matched) = &entry.matched_skill {
                let _ = write!(out, " · 💡 *Matched Skill:* `{matched}`");
            }
            out.push('\n');
        }
    }

    out
}

fn capitalize(skill: &str) -> String {
    let mut chars = skill.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
