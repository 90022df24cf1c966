//! # Language model collaborator
//!
//! General conversation is delegated to a third-party model. This module only describes the
//! boundary: a prompt goes in, free text (or an error) comes out. Network transport, API keys
//! and retries belong to the implementor.
//!
//! ```rust
//! use core::future::{Future, ready};
//! use sutradhara_core::LanguageModel;
//!
//! #[derive(Debug)]
//! struct Parrot;
//!
//! impl LanguageModel for Parrot {
//!     type Error = core::convert::Infallible;
//!
//!     fn respond(&self, prompt: &str) -> impl Future<Output = Result<String, Self::Error>> + Send {
//!         ready(Ok(prompt.to_owned()))
//!     }
//! }
//! ```

use alloc::{boxed::Box, string::String, sync::Arc};
use core::{fmt, future::Future};

/// Language models used for free-form conversation.
///
/// An empty string is a valid answer; callers decide how to present it.
pub trait LanguageModel: Send + Sync {
    /// The error type returned by this language model.
    type Error: core::error::Error + Send + Sync + 'static;

    /// Generates a complete answer to a single prompt.
    fn respond(&self, prompt: &str) -> impl Future<Output = Result<String, Self::Error>> + Send;
}

macro_rules! impl_language_model {
    ($($name:ident),*) => {
        $(
            impl<T: LanguageModel> LanguageModel for $name<T> {
                type Error = T::Error;

                fn respond(
                    &self,
                    prompt: &str,
                ) -> impl Future<Output = Result<String, Self::Error>> + Send {
                    T::respond(self, prompt)
                }
            }
        )*
    };
}

impl<T: LanguageModel> LanguageModel for &T {
    type Error = T::Error;

    fn respond(&self, prompt: &str) -> impl Future<Output = Result<String, Self::Error>> + Send {
        T::respond(self, prompt)
    }
}

impl_language_model!(Arc, Box);

/// A collaborator that is never reachable.
///
/// Useful for front-ends that only serve member recommendations: every general
/// conversation request fails with [`Unavailable`] and the router answers with its
/// fallback text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Offline;

/// Error returned by [`Offline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unavailable;

impl fmt::Display for Unavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("no language model is configured")
    }
}

impl core::error::Error for Unavailable {}

impl LanguageModel for Offline {
    type Error = Unavailable;

    fn respond(&self, _prompt: &str) -> impl Future<Output = Result<String, Self::Error>> + Send {
        core::future::ready(Err(Unavailable))
    }
}
