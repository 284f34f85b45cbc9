//! Errors raised inside the action dispatcher.

use pytutor_types::CompletionError;
use thiserror::Error;

/// Anything an action branch can fail with. Caught once by the dispatcher.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum WidgetError {
    /// The completion service could not produce a reply.
    #[error(transparent)]
    Completion(#[from] CompletionError),

    /// A record could not be rendered as JSON.
    #[error("Failed to render record: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type WidgetResult<T> = Result<T, WidgetError>;
