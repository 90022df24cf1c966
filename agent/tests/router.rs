//! Integration tests for the conversation router.

use std::sync::atomic::{AtomicUsize, Ordering};

use sutradhara_agent::{
    ABOUT_ASSISTANT, DEFAULT_FALLBACK, DEFAULT_HISTORY_CAPACITY, Router, RouterConfig, Session,
};
use sutradhara_core::{LanguageModel, Mode};
use sutradhara_skills::{Boundary, MatchPolicy, MemberRecord, NO_MATCHING_SKILLS, parse_roster};

#[derive(Debug)]
struct Failing;

#[derive(Debug)]
struct Boom;

impl std::fmt::Display for Boom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("connection reset")
    }
}

impl std::error::Error for Boom {}

impl LanguageModel for Failing {
    type Error = Boom;

    async fn respond(&self, _prompt: &str) -> Result<String, Self::Error> {
        Err(Boom)
    }
}

#[derive(Debug, Default)]
struct Counting {
    calls: AtomicUsize,
}

impl LanguageModel for Counting {
    type Error = Boom;

    async fn respond(&self, prompt: &str) -> Result<String, Self::Error> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(format!("#{n}: {prompt}"))
    }
}

fn members() -> Vec<MemberRecord> {
    parse_roster(
        r#"[
            {"name": "Asha", "USN": "1SN01", "points": 70, "Tech-skills": ["Go", "C++"]},
            {"name": "Bala", "USN": "1SN02", "points": 90, "Tech-skills": {"C#": 5}},
            {"name": "Chitra", "USN": "1SN03", "points": 40, "Soft-skills": ["Good Listener"]}
        ]"#,
    )
    .unwrap()
}

#[tokio::test]
async fn test_collaborator_error_becomes_fallback() {
    let router = Router::new(Failing);
    let mut session = Session::new();
    let reply = router
        .respond(&mut session, "tell me a joke", &members(), Mode::GeneralConversation)
        .await;
    assert_eq!(reply, DEFAULT_FALLBACK);
    assert_eq!(session.history().last().unwrap().response, DEFAULT_FALLBACK);
}

#[tokio::test]
async fn test_modes_switch_per_prompt() {
    let llm = Counting::default();
    let router = Router::new(&llm);
    let mut session = Session::new();

    let reply = router
        .respond(&mut session, "hello", &members(), Mode::GeneralConversation)
        .await;
    assert_eq!(reply, "#1: hello");

    let reply = router
        .respond(&mut session, "who knows c#?", &members(), Mode::FindMembers)
        .await;
    assert!(reply.contains("Bala"));
    assert!(!reply.contains("Asha"));

    let reply = router
        .respond(&mut session, "who are you", &members(), Mode::GeneralConversation)
        .await;
    assert_eq!(reply, ABOUT_ASSISTANT);
    assert_eq!(llm.calls.load(Ordering::SeqCst), 1);

    let modes: Vec<Mode> = session.history().iter().map(|e| e.mode).collect();
    assert_eq!(
        modes,
        [
            Mode::GeneralConversation,
            Mode::FindMembers,
            Mode::GeneralConversation
        ]
    );
}

#[tokio::test]
async fn test_word_boundary_config() {
    let loose = Router::new(Failing);
    let strict =
        Router::new(Failing).with_config(RouterConfig::default().with_boundary(Boundary::Word));
    let mut session = Session::new();

    let reply = loose
        .respond(&mut session, "any good listener here?", &members(), Mode::FindMembers)
        .await;
    assert!(reply.contains("### Go\n"), "{reply}");

    let reply = strict
        .respond(&mut session, "any good listener here?", &members(), Mode::FindMembers)
        .await;
    assert!(!reply.contains("### Go\n"), "{reply}");
    assert!(reply.contains("Chitra"), "{reply}");
}

#[tokio::test]
async fn test_fuzzy_policy_config() {
    let router = Router::new(Failing).with_config(
        RouterConfig::default()
            .with_policy(MatchPolicy::fuzzy())
            .with_boundary(Boundary::Word),
    );
    let mut session = Session::new();

    let reply = router
        .respond(&mut session, "find c++ folks", &members(), Mode::FindMembers)
        .await;
    assert!(reply.contains("Asha"));
    assert!(!reply.contains("Bala"));

    let reply = router
        .respond(&mut session, "find rust folks", &members(), Mode::FindMembers)
        .await;
    assert_eq!(reply, NO_MATCHING_SKILLS);
}

#[tokio::test]
async fn test_history_is_bounded() {
    let router = Router::new(Failing);
    let mut session = router.session();

    for i in 0..=DEFAULT_HISTORY_CAPACITY {
        router
            .respond(&mut session, &format!("prompt {i}"), &[], Mode::FindMembers)
            .await;
    }

    let history = session.history();
    assert_eq!(history.len(), DEFAULT_HISTORY_CAPACITY);
    assert_eq!(history.iter().next().unwrap().prompt, "prompt 1");
    assert_eq!(
        history.previous_prompt(),
        Some(format!("prompt {DEFAULT_HISTORY_CAPACITY}").as_str())
    );
}

#[tokio::test]
async fn test_sessions_are_independent() {
    let router = Router::new(Failing);
    let mut first = router.session();
    let mut second = router.session();

    router
        .respond(&mut first, "Asha is my mentor", &[], Mode::GeneralConversation)
        .await;
    let reply = router
        .respond(&mut second, "who is my mentor", &[], Mode::GeneralConversation)
        .await;
    assert_eq!(reply, "I don't know who your mentor is yet.");

    let reply = router
        .respond(&mut first, "who is my mentor", &[], Mode::GeneralConversation)
        .await;
    assert_eq!(reply, "Asha is your mentor.");
}
