//! Typed error definitions for PyTutor.
//!
//! Errors are serializable for diagnostics, displayable for the error card,
//! and matchable so the single error boundary can branch on the discriminant.

mod completion;

pub use completion::{CompletionError, CREDENTIAL_NAME};

/// Result type for chat-completion calls.
pub type CompletionResult<T> = std::result::Result<T, CompletionError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let err = CompletionError::Upstream { status: 401, body: "bad key".to_string() };

        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("Upstream"));
        assert!(json.contains("bad key"));

        let deserialized: CompletionError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, deserialized);
    }

    #[test]
    fn test_missing_credential_display_names_the_variable() {
        let msg = CompletionError::MissingCredential.to_string();
        assert!(msg.contains("Missing"));
        assert!(msg.contains(CREDENTIAL_NAME));
        assert_eq!(msg, "Missing OPENAI_API_KEY");
    }
}
