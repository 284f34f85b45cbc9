//! Startup configuration models.
//!
//! Everything here is assembled once at process start and shared read-only.

pub mod config;

pub use config::{AllowList, CompletionConfig, WidgetConfig};
