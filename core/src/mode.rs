//! Answering modes.

use core::{fmt, str::FromStr};

/// How a prompt is answered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Mode {
    /// Forward the prompt to the language model collaborator.
    GeneralConversation,
    /// Recommend community members whose skills appear in the prompt.
    #[default]
    FindMembers,
}

impl Mode {
    /// Human-readable label, as shown in the chat front-end.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::GeneralConversation => "General Conversation",
            Self::FindMembers => "Find Members",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a string names no known [`Mode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseModeError;

impl fmt::Display for ParseModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown mode, expected `general` or `members`")
    }
}

impl core::error::Error for ParseModeError {}

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim();
        let is = |candidate: &str| normalized.eq_ignore_ascii_case(candidate);

        if is("general") || is("chat") || is("general conversation") || is("general-conversation")
        {
            Ok(Self::GeneralConversation)
        } else if is("members") || is("find") || is("find members") || is("find-members") {
            Ok(Self::FindMembers)
        } else {
            Err(ParseModeError)
        }
    }
}
