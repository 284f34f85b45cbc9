use async_trait::async_trait;
use pytutor_client::CompletionClient;
use pytutor_types::CompletionResult;

/// Source of chat replies for the tutor and quiz actions.
#[async_trait]
pub trait Completer: Send + Sync {
    async fn complete(&self, system: &str, user: &str) -> CompletionResult<String>;
}

#[async_trait]
impl Completer for CompletionClient {
    async fn complete(&self, system: &str, user: &str) -> CompletionResult<String> {
        CompletionClient::complete(self, system, user).await
    }
}
