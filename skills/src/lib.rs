//! Sutradhara skill matching
//!
//! Finds community members whose profiles list the skills a free-text query asks for.
//!
//! # Pipeline
//!
//! ```text
//! roster ──▶ Vocabulary::build ──▶ SkillExtractor::extract ──▶ Recommender::recommend ──▶ format
//!                                  (query, "<n> members")       (per skill, ranked)
//! ```
//!
//! # Roster format
//!
//! Member records come from the Skill Nest backend:
//!
//! ```json
//! {
//!   "data": [
//!     {
//!       "name": "Asha",
//!       "USN": "1XY22CS001",
//!       "points": 42,
//!       "Tech-skills": {"Python": 5, "C++": 2},
//!       "Soft-skills": ["Leadership"]
//!     }
//!   ]
//! }
//! ```
//!
//! Skills may be a mapping (weights ignored), a list, or missing entirely. See [`SkillSet`].
//!
//! # Usage
//!
//! ```rust
//! use sutradhara_skills::{
//!     Recommender, SkillExtractor, SkillRecommendations, Vocabulary, format_recommendations,
//!     parse_roster,
//! };
//!
//! let members = parse_roster(r#"[
//!     {"name": "A", "USN": "U1", "points": 10, "Tech-skills": {"Python": 1}},
//!     {"name": "B", "USN": "U2", "points": 20, "Tech-skills": ["python"]}
//! ]"#)?;
//!
//! let query = "find me 3 members who know python";
//! let vocabulary = Vocabulary::build(&members);
//! let extractor = SkillExtractor::new();
//! let recommender = Recommender::new();
//! let limit = extractor.member_count(query);
//!
//! let results: Vec<SkillRecommendations> = extractor
//!     .extract(query, &vocabulary)
//!     .into_iter()
//!     .map(|skill| {
//!         let entries = recommender.recommend(&skill, &members, limit);
//!         SkillRecommendations::new(skill, entries)
//!     })
//!     .collect();
//!
//! let reply = format_recommendations(&results);
//! assert!(reply.contains("### Python"));
//! # Ok::<(), sutradhara_skills::RosterError>(())
//! ```

mod error;
mod extractor;
mod format;
mod loader;
mod matcher;
mod member;
mod skill;
mod vocabulary;

pub use error::RosterError;
pub use extractor::{
    Boundary, DEFAULT_MEMBER_COUNT, MAX_MEMBER_COUNT, SkillExtractor, extract_member_count,
    extract_skills,
};
pub use format::{
    NO_MATCHING_SKILLS, NO_MEMBERS_FOR_SKILL, RESULTS_TITLE, SkillRecommendations,
    format_recommendations,
};
pub use loader::{RosterLoader, parse_roster, roster_from_value};
pub use matcher::{
    ConfusablePairs, DEFAULT_FUZZY_THRESHOLD, MatchPolicy, RecommendationEntry, Recommender,
    similarity,
};
pub use member::{DEFAULT_ID, DEFAULT_NAME, MemberRecord};
pub use skill::{SkillSet, normalize};
pub use vocabulary::Vocabulary;
