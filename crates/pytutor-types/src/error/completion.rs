//! Chat-completion errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the credential the completion service needs.
pub const CREDENTIAL_NAME: &str = "OPENAI_API_KEY";

/// Errors that can occur while asking the completion service for a reply.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum CompletionError {
    /// No service credential configured
    #[error("Missing {}", CREDENTIAL_NAME)]
    MissingCredential,

    /// Upstream answered with a non-success status
    #[error("OpenAI error: {body}")]
    Upstream {
        /// HTTP status returned by the service
        status: u16,
        /// Raw response body, kept as diagnostic text
        body: String,
    },

    /// Request never produced a response (DNS, TLS, connection reset)
    #[error("OpenAI request failed: {message}")]
    Transport {
        /// Description of the transport failure
        message: String,
    },
}

impl CompletionError {
    /// Configuration errors are operator mistakes, not upstream incidents.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingCredential)
    }

    /// Upstream status, when the service answered at all.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => Some(*status),
            Self::MissingCredential | Self::Transport { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_display_carries_body() {
        let err = CompletionError::Upstream {
            status: 429,
            body: r#"{"error":{"message":"quota"}}"#.to_string(),
        };
        assert_eq!(err.to_string(), r#"OpenAI error: {"error":{"message":"quota"}}"#);
        assert_eq!(err.upstream_status(), Some(429));
        assert!(!err.is_configuration());
    }

    #[test]
    fn test_missing_credential_is_configuration() {
        assert!(CompletionError::MissingCredential.is_configuration());
        assert_eq!(CompletionError::MissingCredential.upstream_status(), None);
    }
}
