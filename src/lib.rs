//! # sutradhara
//!
//! Façade crate for the Skill Nest assistant. Re-exports the collaborator traits from
//! [`sutradhara_core`], the recommendation pipeline from [`sutradhara_skills`] and the
//! conversation router from [`sutradhara_agent`].
//!
//! ## What's inside?
//!
//! - [`LanguageModel`] and [`Mode`]: the boundary to a chat model and the answering modes.
//! - [`skills`]: roster decoding, skill vocabulary, extraction, ranking and formatting.
//! - [`Router`] and [`Session`]: canned answers, history, relation memory, mode dispatch.
//!
//! ## Example
//!
//! ```rust
//! use sutradhara::{Mode, Offline, Router, skills::parse_roster};
//!
//! let roster = r#"[
//!     {"name": "Meera", "USN": "1SN11", "points": 80, "Tech-skills": {"Rust": 4}},
//!     {"name": "Kabir", "USN": "1SN12", "points": 95, "Soft-skills": ["Rust"]}
//! ]"#;
//! let members = parse_roster(roster).unwrap();
//!
//! let router = Router::new(Offline);
//! let mut session = router.session();
//! let reply = futures_lite::future::block_on(router.respond(
//!     &mut session,
//!     "need 1 member for rust",
//!     &members,
//!     Mode::FindMembers,
//! ));
//!
//! assert!(reply.contains("Kabir"));
//! assert!(!reply.contains("Meera"));
//! ```

pub use sutradhara_agent::*;
pub use sutradhara_core::*;
pub use sutradhara_skills as skills;
