//! Origin guard.
//!
//! CORS headers are computed here rather than by a tower layer: the widget
//! must echo only allow-listed origins and always send the same method and
//! header directives, including on error documents.

use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    CONTENT_TYPE,
};
use axum::http::{HeaderMap, HeaderValue};
use pytutor_types::AllowList;

pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";
pub const ALLOW_METHODS: &str = "POST,OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type";

/// The origin to echo back, if it is allow-listed.
pub fn allowed_origin<'a>(origin: Option<&'a str>, allow: &AllowList) -> Option<&'a str> {
    origin.filter(|o| !o.is_empty() && allow.contains(o))
}

/// Headers sent with every widget response.
pub fn response_headers(origin: Option<&str>, allow: &AllowList) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(HTML_CONTENT_TYPE));
    if let Some(value) =
        allowed_origin(origin, allow).and_then(|o| HeaderValue::from_str(o).ok())
    {
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, value);
    }
    headers.insert(ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static(ALLOW_METHODS));
    headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static(ALLOW_HEADERS));
    headers
}
