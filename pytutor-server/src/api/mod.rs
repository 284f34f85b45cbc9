//! Widget Routes
//!
//! The widget answers on `/` and `/proxy` for every method; the handler itself
//! decides between preflight and action dispatch.

mod widget;


use axum::{routing::any, Router};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", any(widget::handle_widget))
        .route("/proxy", any(widget::handle_widget))
}
