//! Fixed answers to identity and meta questions.

/// Platform description returned for questions about Skill Nest.
pub const ABOUT_SKILL_NEST: &str = "**Skill Nest** is a dynamic platform designed to foster collaboration and skill-sharing among students. 🚀";
/// Identity line returned for questions about the assistant.
pub const ABOUT_ASSISTANT: &str =
    "**I am Sutradhara**, your intelligent chatbot assistant for Skill Nest! 🤖";

/// A canned answer and the phrases that trigger it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CannedResponse {
    triggers: Vec<String>,
    answer: String,
}

impl CannedResponse {
    /// Create a canned response. Triggers are matched case-insensitively.
    pub fn new<I, S>(triggers: I, answer: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            triggers: triggers
                .into_iter()
                .map(|t| t.as_ref().to_lowercase())
                .collect(),
            answer: answer.into(),
        }
    }

    /// The fixed answer.
    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Whether any trigger occurs in the lowercased prompt.
    #[must_use]
    pub fn matches(&self, prompt_lower: &str) -> bool {
        self.triggers
            .iter()
            .any(|trigger| prompt_lower.contains(trigger.as_str()))
    }
}

/// Ordered list of canned responses; the first match wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CannedResponses {
    responses: Vec<CannedResponse>,
}

impl Default for CannedResponses {
    fn default() -> Self {
        Self::empty()
            .with(CannedResponse::new(
                ["skill nest", "what is skill nest", "about skill nest"],
                ABOUT_SKILL_NEST,
            ))
            .with(CannedResponse::new(
                ["who are you", "what is sutradhara", "who is sutradhara"],
                ABOUT_ASSISTANT,
            ))
    }
}

impl CannedResponses {
    /// No canned responses at all.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            responses: Vec::new(),
        }
    }

    /// Append a response, checked after the existing ones.
    #[must_use]
    pub fn with(mut self, response: CannedResponse) -> Self {
        self.responses.push(response);
        self
    }

    /// The canned answer for `prompt`, if any.
    #[must_use]
    pub fn lookup(&self, prompt: &str) -> Option<&str> {
        let prompt = prompt.to_lowercase();
        self.responses
            .iter()
            .find(|response| response.matches(&prompt))
            .map(CannedResponse::answer)
    }
}
