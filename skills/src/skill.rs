//! Skill set representation and normalization.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Skills listed on a member profile.
///
/// The member backend is inconsistent about this field: some profiles store a mapping of
/// skill name to an arbitrary weight, others a plain list of names, and many omit it. The
/// shape is decided once at decode time; everything downstream goes through
/// [`SkillSet::normalize`].
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SkillSet {
    /// Skill name to weight, in source order. Weights are ignored.
    Weighted(Map<String, Value>),
    /// Plain list of skill names.
    Listed(Vec<String>),
    /// Missing, `null`, or any other shape.
    #[default]
    Absent,
}

impl SkillSet {
    /// Builds a listed skill set.
    pub fn listed<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Listed(skills.into_iter().map(Into::into).collect())
    }

    /// Builds a weighted skill set from `(name, weight)` pairs.
    pub fn weighted<I, S, W>(skills: I) -> Self
    where
        I: IntoIterator<Item = (S, W)>,
        S: Into<String>,
        W: Into<Value>,
    {
        Self::Weighted(
            skills
                .into_iter()
                .map(|(name, weight)| (name.into(), weight.into()))
                .collect(),
        )
    }

    /// Skill names in source order, case unchanged.
    ///
    /// Names are trimmed and blank names are dropped.
    #[must_use]
    pub fn normalize(&self) -> Vec<String> {
        match self {
            Self::Weighted(map) => trimmed(map.keys()),
            Self::Listed(list) => trimmed(list),
            Self::Absent => Vec::new(),
        }
    }

    /// Returns `true` if no skill names are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Weighted(map) => map.is_empty(),
            Self::Listed(list) => list.is_empty(),
            Self::Absent => true,
        }
    }
}

impl From<Value> for SkillSet {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::Weighted(map),
            Value::Array(items) => Self::Listed(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::String(name) => Some(name),
                        _ => None,
                    })
                    .collect(),
            ),
            _ => Self::Absent,
        }
    }
}

impl<'de> Deserialize<'de> for SkillSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from)
    }
}

fn trimmed<'a>(names: impl IntoIterator<Item = &'a String>) -> Vec<String> {
    names
        .into_iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Free-function form of [`SkillSet::normalize`].
#[must_use]
pub fn normalize(skills: &SkillSet) -> Vec<String> {
    skills.normalize()
}
