//! Member records as delivered by the Skill Nest backend.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::SkillSet;

/// Name used when a record has none.
pub const DEFAULT_NAME: &str = "Unknown";
/// Identifier used when a record has no USN.
pub const DEFAULT_ID: &str = "No USN";

/// One community member.
///
/// Field names follow the backend wire format (`USN`, `Tech-skills`, `Soft-skills`).
/// Absent or malformed fields fall back to documented defaults rather than failing the
/// whole record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MemberRecord {
    /// Display name.
    #[serde(default = "default_name", deserialize_with = "string_or_name")]
    pub name: String,
    /// University serial number.
    #[serde(rename = "USN", default = "default_id", deserialize_with = "string_or_id")]
    pub id: String,
    /// Reputation score, used only for ranking.
    #[serde(default, deserialize_with = "lenient_points")]
    pub points: i64,
    /// Technical skills.
    #[serde(rename = "Tech-skills", default)]
    pub technical_skills: SkillSet,
    /// Soft skills.
    #[serde(rename = "Soft-skills", default)]
    pub soft_skills: SkillSet,
}

impl Default for MemberRecord {
    fn default() -> Self {
        Self {
            name: default_name(),
            id: default_id(),
            points: 0,
            technical_skills: SkillSet::Absent,
            soft_skills: SkillSet::Absent,
        }
    }
}

impl MemberRecord {
    /// Create a member with the given name and USN and no skills.
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            ..Self::default()
        }
    }

    /// Set the reputation score.
    #[must_use]
    pub const fn with_points(mut self, points: i64) -> Self {
        self.points = points;
        self
    }

    /// Set the technical skills.
    #[must_use]
    pub fn with_technical_skills(mut self, skills: SkillSet) -> Self {
        self.technical_skills = skills;
        self
    }

    /// Set the soft skills.
    #[must_use]
    pub fn with_soft_skills(mut self, skills: SkillSet) -> Self {
        self.soft_skills = skills;
        self
    }

    /// Technical then soft skills, case preserved, exact duplicates removed.
    #[must_use]
    pub fn skills(&self) -> Vec<String> {
        let mut merged: Vec<String> = Vec::new();
        for skill in self
            .technical_skills
            .normalize()
            .into_iter()
            .chain(self.soft_skills.normalize())
        {
            if !merged.contains(&skill) {
                merged.push(skill);
            }
        }
        merged
    }

    /// Whether the record carries a real USN rather than the placeholder.
    #[must_use]
    pub fn has_id(&self) -> bool {
        self.id != DEFAULT_ID
    }
}

fn default_name() -> String {
    DEFAULT_NAME.to_owned()
}

fn default_id() -> String {
    DEFAULT_ID.to_owned()
}

fn string_or<'de, D: Deserializer<'de>>(
    deserializer: D,
    fallback: fn() -> String,
) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(value) => value,
        _ => fallback(),
    })
}

fn string_or_name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    string_or(deserializer, default_name)
}

fn string_or_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    string_or(deserializer, default_id)
}

// Integral floats and numeric strings show up in older profiles.
#[allow(clippy::cast_possible_truncation)]
fn lenient_points<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| {
                number
                    .as_f64()
                    .filter(|value| value.is_finite() && value.fract() == 0.0)
                    .map(|value| value as i64)
            })
            .unwrap_or_default(),
        Value::String(text) => text.trim().parse().unwrap_or_default(),
        _ => 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_wire_record() {
        let member: MemberRecord = serde_json::from_value(json!({
            "name": "Asha",
            "USN": "1XY22CS001",
            "points": 42,
            "Tech-skills": {"Python": 5, "Rust": 2},
            "Soft-skills": ["Leadership"]
        }))
        .unwrap();

        assert_eq!(member.name, "Asha");
        assert_eq!(member.id, "1XY22CS001");
        assert_eq!(member.points, 42);
        assert_eq!(member.skills(), vec!["Python", "Rust", "Leadership"]);
        assert!(member.has_id());
    }

    #[test]
    fn missing_fields_use_defaults() {
        let member: MemberRecord = serde_json::from_value(json!({})).unwrap();
        assert_eq!(member, MemberRecord::default());
        assert_eq!(member.name, "Unknown");
        assert_eq!(member.id, "No USN");
        assert_eq!(member.points, 0);
        assert!(member.skills().is_empty());
        assert!(!member.has_id());
    }

    #[test]
    fn malformed_fields_use_defaults() {
        let member: MemberRecord = serde_json::from_value(json!({
            "name": null,
            "USN": 17,
            "points": "lots",
            "Tech-skills": "python",
            "Soft-skills": null
        }))
        .unwrap();

        assert_eq!(member, MemberRecord::default());
    }

    #[test]
    fn points_accept_numeric_strings_and_integral_floats() {
        let parse = |points: Value| -> i64 {
            serde_json::from_value::<MemberRecord>(json!({ "points": points }))
                .unwrap()
                .points
        };

        assert_eq!(parse(json!("15")), 15);
        assert_eq!(parse(json!(12.0)), 12);
        assert_eq!(parse(json!(12.5)), 0);
        assert_eq!(parse(json!(-3)), -3);
    }

    #[test]
    fn merged_skills_drop_exact_duplicates_only() {
        let member = MemberRecord::new("Ravi", "U7")
            .with_technical_skills(SkillSet::listed(["SQL", "Python"]))
            .with_soft_skills(SkillSet::listed(["Python", "python", "Teamwork"]));

        assert_eq!(member.skills(), vec!["SQL", "Python", "python", "Teamwork"]);
    }
}
