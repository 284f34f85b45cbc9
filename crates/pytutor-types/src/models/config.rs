//! Widget and completion-service configuration.

use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TEMPERATURE: f32 = 0.45;
pub const DEFAULT_MAX_TOKENS: u32 = 700;

/// Origins allowed to receive `Access-Control-Allow-Origin`.
///
/// Order is preserved from the configured value; matching is exact.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct AllowList(Vec<String>);

impl AllowList {
    /// Parse a comma-separated list, trimming entries and dropping empty ones.
    pub fn parse(raw: &str) -> Self {
        Self(
            raw.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn contains(&self, origin: &str) -> bool {
        self.0.iter().any(|o| o == origin)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Settings for the chat-completion service used by tutor and quiz.
#[derive(Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct CompletionConfig {
    /// Bearer credential; `None` fails tutor/quiz requests, not startup
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    /// Service root, without the `/v1/...` path
    #[validate(url)]
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model identifier sent with every request
    #[validate(length(min = 1_u64))]
    #[serde(default = "default_model")]
    pub model: String,
    /// Sampling temperature
    #[validate(range(min = 0.0_f32, max = 2.0_f32))]
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Token budget for one reply
    #[validate(range(min = 1_u32, max = 16_384_u32))]
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}

impl CompletionConfig {
    /// Builder-style credential setter. Empty strings count as absent.
    #[must_use]
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key.filter(|k| !k.trim().is_empty());
        self
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Full chat-completions endpoint URL.
    pub fn endpoint(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            model: default_model(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl std::fmt::Debug for CompletionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

/// Process-wide configuration handed to the widget handler.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Validate)]
pub struct WidgetConfig {
    /// Origins that get a CORS allow header
    #[serde(default)]
    pub allow_origins: AllowList,
    /// Completion service settings
    #[serde(default)]
    #[validate(nested)]
    pub completion: CompletionConfig,
}
