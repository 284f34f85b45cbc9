//! # PyTutor Types
//!
//! Foundational types for the PyTutor widget service.
//!
//! - **`error`** - Typed failures of the chat-completion call
//! - **`models`** - Startup configuration (allow-list, completion settings)
//! - **`protocol`** - OpenAI ChatCompletions wire types
//!
//! ## Architecture Role
//!
//! ```text
//!                pytutor-types (this crate)
//!                        │
//!          ┌─────────────┴─────────────┐
//!          ▼                           ▼
//!   pytutor-client  ───────────▶  pytutor-core
//!                                      │
//!                                      ▼
//!                               pytutor-server
//! ```

pub mod error;
pub mod models;
pub mod protocol;

pub use error::{CompletionError, CompletionResult};
pub use models::{AllowList, CompletionConfig, WidgetConfig};
