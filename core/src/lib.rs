//! # sutradhara-core
//!
//! `sutradhara-core` hosts the no-std trait APIs shared by the rest of the workspace: the
//! [`LanguageModel`] collaborator that answers general conversation, and the [`Mode`] selector
//! that decides whether a prompt goes to that collaborator or to the member recommender.
//!
//! ```text
//! ┌─────────────────┐    ┌──────────────────┐    ┌─────────────────┐
//! │   Front-end     │───▶│   sutradhara     │◀───│  Collaborators  │
//! │                 │    │                  │    │                 │
//! │ - CLI / REPL    │    │ - Router         │    │ - Gemini, ...   │
//! │ - Web chat      │    │ - Recommender    │    │ - Offline       │
//! └─────────────────┘    └──────────────────┘    └─────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use sutradhara_core::{LanguageModel, Mode};
//!
//! async fn ask(model: impl LanguageModel, prompt: &str) -> String {
//!     model
//!         .respond(prompt)
//!         .await
//!         .unwrap_or_else(|_| String::from("Sorry, I couldn't process that request."))
//! }
//!
//! assert_eq!("members".parse::<Mode>().unwrap(), Mode::FindMembers);
//! ```

#![no_std]
extern crate alloc;

pub mod llm;
pub mod mode;

use alloc::string::String;

#[doc(inline)]
pub use llm::{LanguageModel, Offline, Unavailable};
#[doc(inline)]
pub use mode::{Mode, ParseModeError};

/// Result type used throughout the crate.
///
/// Type alias for [`anyhow::Result<T>`](anyhow::Result) with [`String`] as default success type.
pub type Result<T = String> = anyhow::Result<T>;

pub use anyhow::Error;
