//! Client for the external chat-completion service.
//!
//! One request per call: no timeout, retry, or streaming. Failures come back as
//! [`CompletionError`] so callers can match on the discriminant.

mod client;

pub use client::CompletionClient;
pub use pytutor_types::{CompletionConfig, CompletionError, CompletionResult};
