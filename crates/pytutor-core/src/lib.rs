//! # PyTutor Core
//!
//! The widget request handler, transport-agnostic.
//!
//! ```text
//! pytutor-core/src/
//! ├── widget/           # request context, CORS, form decoding, dispatch
//! │   ├── cors.rs       # origin guard
//! │   ├── form.rs       # url-encoded / JSON / multipart normalization
//! │   ├── fields.rs     # typed per-action field schemas
//! │   ├── action.rs     # closed action selector
//! │   └── dispatch.rs   # the handler and its single error boundary
//! └── content/          # curriculum, prompts, HTML shell and cards
//! ```
//!
//! Every request is evaluated independently; the only shared values are the
//! read-only [`WidgetConfig`] and the completion client.

#![cfg_attr(test, allow(clippy::panic, clippy::unwrap_used, clippy::expect_used))]

pub mod content;
pub mod error;
pub mod widget;

pub use error::{WidgetError, WidgetResult};
pub use pytutor_types::WidgetConfig;
pub use widget::{Action, Completer, FormFields, RequestContext, ResponseEnvelope, Widget};
