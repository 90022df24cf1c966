//! Sutradhara conversation router
//!
//! Answers Skill Nest chat prompts. Each prompt goes through a fixed chain of
//! responders and the exchange is recorded in the caller's [`Session`].
//!
//! ```text
//! prompt ──► canned answer? ──► "what was my last question"? ──► relation fact?
//!                                                                     │
//!                                   ┌──────────── mode ───────────────┘
//!                                   ▼
//!                 FindMembers: vocabulary → extract → recommend → format
//!         GeneralConversation: LanguageModel::respond (fallback on failure)
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use sutradhara_agent::{Router, RouterConfig};
//! use sutradhara_core::{Mode, Offline};
//! use sutradhara_skills::{MatchPolicy, parse_roster};
//!
//! let members = parse_roster(
//!     r#"{"data": [{"name": "Ravi", "USN": "1SN07", "points": 30, "Tech-skills": ["Python"]}]}"#,
//! )
//! .unwrap();
//!
//! let router = Router::new(Offline)
//!     .with_config(RouterConfig::default().with_policy(MatchPolicy::fuzzy()));
//! let mut session = router.session();
//!
//! # futures_lite::future::block_on(async {
//! let reply = router
//!     .respond(&mut session, "find 2 python members", &members, Mode::FindMembers)
//!     .await;
//! assert!(reply.contains("1SN07"));
//! # });
//! ```

mod canned;
mod config;
mod context;
mod memory;
mod relations;
mod router;

pub use canned::{ABOUT_ASSISTANT, ABOUT_SKILL_NEST, CannedResponse, CannedResponses};
pub use config::{DEFAULT_FALLBACK, NO_PREVIOUS_QUESTION, RouterConfig};
pub use context::Session;
pub use memory::{ConversationHistory, DEFAULT_HISTORY_CAPACITY, HistoryEntry};
pub use relations::{RelationStore, RelationUtterance, SELF_TARGET};
pub use router::Router;
