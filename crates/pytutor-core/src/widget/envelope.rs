use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};

/// Status, headers and a complete HTML document (empty for preflight).
#[derive(Debug, Clone)]
pub struct ResponseEnvelope {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl ResponseEnvelope {
    pub fn ok(headers: HeaderMap, body: String) -> Self {
        Self { status: StatusCode::OK, headers, body }
    }

    pub fn preflight(headers: HeaderMap) -> Self {
        Self { status: StatusCode::OK, headers, body: String::new() }
    }

    pub fn internal_error(headers: HeaderMap, body: String) -> Self {
        Self { status: StatusCode::INTERNAL_SERVER_ERROR, headers, body }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

impl IntoResponse for ResponseEnvelope {
    fn into_response(self) -> Response {
        (self.status, self.headers, self.body).into_response()
    }
}
