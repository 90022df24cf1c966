//! Prompt routing.
//!
//! The [`Router`] decides who answers a prompt: a canned response, the session
//! history, the relation store, the member recommender, or the language model.

use sutradhara_core::{LanguageModel, Mode};
use sutradhara_skills::{
    MemberRecord, Recommender, SkillExtractor, SkillRecommendations, Vocabulary,
    format_recommendations,
};
use tracing::{debug, warn};

use crate::{
    config::{NO_PREVIOUS_QUESTION, RouterConfig},
    context::Session,
    memory::HistoryEntry,
    relations::RelationUtterance,
};

const LAST_QUESTION_TRIGGER: &str = "what was my last question";

/// Routes prompts to the right responder and records every exchange.
///
/// # Example
///
/// ```rust
/// use sutradhara_agent::{Router, Session};
/// use sutradhara_core::{Mode, Offline};
/// use sutradhara_skills::{MemberRecord, SkillSet};
///
/// # futures_lite::future::block_on(async {
/// let router = Router::new(Offline);
/// let mut session = Session::new();
/// let members = vec![
///     MemberRecord::new("Asha", "1SN01")
///         .with_points(42)
///         .with_technical_skills(SkillSet::listed(["Rust"])),
/// ];
///
/// let reply = router
///     .respond(&mut session, "who knows rust?", &members, Mode::FindMembers)
///     .await;
/// assert!(reply.contains("Asha"));
/// assert_eq!(session.history().len(), 1);
/// # });
/// ```
#[derive(Debug)]
pub struct Router<LLM> {
    llm: LLM,
    config: RouterConfig,
}

impl<LLM: LanguageModel> Router<LLM> {
    /// Creates a router with the default configuration.
    pub fn new(llm: LLM) -> Self {
        Self {
            llm,
            config: RouterConfig::default(),
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: RouterConfig) -> Self {
        self.config = config;
        self
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// The language model collaborator.
    #[must_use]
    pub const fn llm(&self) -> &LLM {
        &self.llm
    }

    /// Creates a session sized by this router's history capacity.
    #[must_use]
    pub fn session(&self) -> Session {
        Session::with_history_capacity(self.config.history_capacity)
    }

    /// Answers `prompt` and appends the exchange to the session history.
    ///
    /// Canned answers come first, then the "what was my last question" lookup,
    /// then relation memory. Anything else is dispatched by `mode`. In
    /// [`Mode::FindMembers`] a prompt naming a known skill always reaches the
    /// recommender, even when it also reads like a relation statement.
    pub async fn respond(
        &self,
        session: &mut Session,
        prompt: &str,
        members: &[MemberRecord],
        mode: Mode,
    ) -> String {
        let response = match self.answer_directly(session, prompt, members, mode) {
            Some(response) => response,
            None => match mode {
                Mode::FindMembers => self.find_members(prompt, members),
                Mode::GeneralConversation => self.converse(prompt).await,
            },
        };

        session
            .history_mut()
            .push(HistoryEntry::new(mode, prompt, response.clone()));
        response
    }

    /// Formatted recommendations for every skill mentioned in `query`.
    #[must_use]
    pub fn find_members(&self, query: &str, members: &[MemberRecord]) -> String {
        let vocabulary = Vocabulary::build(members);
        let extractor = self.extractor();
        let recommender = Recommender::new()
            .with_policy(self.config.policy)
            .with_confusables(self.config.confusables.clone());

        let skills = extractor.extract(query, &vocabulary);
        let limit = extractor.member_count(query);
        debug!(
            skills = ?skills,
            limit,
            vocabulary = vocabulary.len(),
            "Finding members"
        );

        let results: Vec<SkillRecommendations> = skills
            .into_iter()
            .map(|skill| {
                let entries = recommender.recommend(&skill, members, limit);
                SkillRecommendations::new(skill, entries)
            })
            .collect();

        format_recommendations(&results)
    }

    fn extractor(&self) -> SkillExtractor {
        SkillExtractor::new()
            .with_boundary(self.config.boundary)
            .with_default_count(self.config.default_member_count)
            .with_max_count(self.config.max_member_count)
    }

    fn mentions_skill(&self, prompt: &str, members: &[MemberRecord]) -> bool {
        !self
            .extractor()
            .extract(prompt, &Vocabulary::build(members))
            .is_empty()
    }

    fn answer_directly(
        &self,
        session: &mut Session,
        prompt: &str,
        members: &[MemberRecord],
        mode: Mode,
    ) -> Option<String> {
        if let Some(answer) = self.config.canned.lookup(prompt) {
            debug!("Answered with canned response");
            return Some(answer.to_owned());
        }

        if prompt.to_lowercase().contains(LAST_QUESTION_TRIGGER) {
            debug!("Answered from history");
            let previous = session
                .history()
                .previous_prompt()
                .map_or_else(|| NO_PREVIOUS_QUESTION.to_owned(), str::to_owned);
            return Some(previous);
        }

        if self.config.relations
            && !(mode == Mode::FindMembers && self.mentions_skill(prompt, members))
        {
            if let Some(utterance) = RelationUtterance::parse(prompt) {
                debug!(?utterance, "Answered from relation memory");
                return Some(session.relations_mut().handle(utterance));
            }
        }

        None
    }

    async fn converse(&self, prompt: &str) -> String {
        match self.llm.respond(prompt).await {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => {
                warn!("Language model returned an empty answer");
                self.config.fallback.clone()
            }
            Err(error) => {
                warn!(error = %error, "Language model request failed");
                self.config.fallback.clone()
            }
        }
    }
}
