//! Widget request handling.
//!
//! Flow: origin guard → preflight short-circuit → form decoding → action
//! dispatch → document shell → [`ResponseEnvelope`].

mod action;
mod completer;
pub mod cors;
mod dispatch;
mod envelope;
pub mod fields;
pub mod form;
mod request;


pub use action::Action;
pub use completer::Completer;
pub use dispatch::Widget;
pub use envelope::ResponseEnvelope;
pub use form::{FormFields, RawBody};
pub use request::RequestContext;
