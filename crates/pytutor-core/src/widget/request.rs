use axum::body::Bytes;
use axum::http::{HeaderMap, Method, Uri};

/// One inbound call, as handed over by the transport. Read-only.
#[derive(Debug, Clone)]
pub struct RequestContext {
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
    body_is_base64: bool,
    body_unread: bool,
}

impl RequestContext {
    pub fn new(method: Method, uri: Uri, headers: HeaderMap, body: impl Into<Bytes>) -> Self {
        Self { method, uri, headers, body: body.into(), body_is_base64: false, body_unread: false }
    }

    /// Mark the body as base64 text, the way serverless gateways deliver binary payloads.
    #[must_use]
    pub fn with_base64_body(mut self, encoded: bool) -> Self {
        self.body_is_base64 = encoded;
        self
    }

    /// Mark the body as never received, e.g. when it exceeded the transport's size limit.
    #[must_use]
    pub fn with_unread_body(mut self) -> Self {
        self.body = Bytes::new();
        self.body_unread = true;
        self
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    pub fn body_is_base64(&self) -> bool {
        self.body_is_base64
    }

    pub fn body_unread(&self) -> bool {
        self.body_unread
    }

    pub fn is_preflight(&self) -> bool {
        self.method == Method::OPTIONS
    }

    /// Case-insensitive header lookup; non-ASCII values read as absent.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// First value of a query parameter, percent-decoded.
    pub fn query_param(&self, name: &str) -> Option<String> {
        let query = self.uri.query()?;
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }
}
