//! Widget handler: adapts an axum request into a [`RequestContext`].

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{HeaderMap, Method, Uri},
};
use tracing::warn;

use pytutor_core::{RequestContext, ResponseEnvelope};

use crate::state::AppState;

/// An oversized or broken body still goes through the widget, so the caller
/// gets CORS headers and an HTML document instead of a bare rejection.
pub async fn handle_widget(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> ResponseEnvelope {
    let ctx = match body {
        Ok(body) => RequestContext::new(method, uri, headers, body),
        Err(rejection) => {
            warn!(status = %rejection.status(), "Request body not read: {}", rejection.body_text());
            RequestContext::new(method, uri, headers, Bytes::new()).with_unread_body()
        },
    };
    state.widget().handle(&ctx).await
}
