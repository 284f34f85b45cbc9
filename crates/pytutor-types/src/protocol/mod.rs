//! Protocol definitions for the upstream completion service.

pub mod openai;

pub use openai::{ChatChoice, ChatMessage, ChatRequest, ChatResponse, ChoiceMessage, OpenAIRole};
