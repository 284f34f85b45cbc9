use pytutor_types::protocol::{ChatMessage, ChatRequest, ChatResponse};
use pytutor_types::{CompletionConfig, CompletionError, CompletionResult};
use reqwest::Client;

/// Sends system/user prompt pairs to an OpenAI-compatible endpoint.
#[derive(Clone)]
pub struct CompletionClient {
    client: Client,
    config: CompletionConfig,
}

impl CompletionClient {
    pub fn new(config: CompletionConfig) -> CompletionResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| CompletionError::Transport { message: e.to_string() })?;
        Ok(Self { client, config })
    }

    /// Ask for one reply; returns the first choice's content, trimmed.
    ///
    /// A missing credential fails before any network I/O. A success status with
    /// an unexpected payload yields an empty string.
    pub async fn complete(&self, system: &str, user: &str) -> CompletionResult<String> {
        let api_key = self.config.api_key.as_deref().ok_or(CompletionError::MissingCredential)?;

        let request = ChatRequest {
            model: self.config.model.clone(),
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
        };

        tracing::debug!(model = %request.model, "Sending chat completion request");

        let resp = self
            .client
            .post(self.config.endpoint())
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| CompletionError::Transport { message: e.to_string() })?;

        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(CompletionError::Upstream { status: status.as_u16(), body });
        }

        let text = resp.text().await.unwrap_or_default();
        match serde_json::from_str::<ChatResponse>(&text) {
            Ok(parsed) => Ok(parsed.first_content()),
            Err(e) => {
                tracing::debug!("Unparseable completion payload, treating as empty: {}", e);
                Ok(String::new())
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_credential_fails_without_network() {
        let config = CompletionConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            ..Default::default()
        };
        let client = CompletionClient::new(config).expect("client builds");

        let err = client.complete("sys", "user").await.expect_err("no key configured");
        assert_eq!(err, CompletionError::MissingCredential);
        assert_eq!(err.to_string(), "Missing OPENAI_API_KEY");
    }
}
