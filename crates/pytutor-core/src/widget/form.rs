//! Form decoder.
//!
//! Turns a request body into [`FormFields`]. Never fails: anything it cannot
//! make sense of becomes an empty field set.

use std::collections::HashMap;

use base64::Engine;
use serde_json::Value;

use super::request::RequestContext;

pub const MULTIPART_NOTE: &str = "multipart received (demo only)";

/// What the multipart path reports instead of parsed parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBody {
    pub is_raw: bool,
    pub byte_length: usize,
    pub note: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormFields {
    /// Flat name → value mapping.
    Fields(HashMap<String, String>),
    /// Multipart payload, measured but not parsed.
    Raw(RawBody),
}

impl Default for FormFields {
    fn default() -> Self {
        Self::Fields(HashMap::new())
    }
}

impl FormFields {
    /// Field value; always `None` for a raw body.
    pub fn get(&self, name: &str) -> Option<&str> {
        match self {
            Self::Fields(map) => map.get(name).map(String::as_str),
            Self::Raw(_) => None,
        }
    }

    /// Field value, or `default` when the field is missing or empty.
    pub fn get_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.get(name).filter(|v| !v.is_empty()).unwrap_or(default)
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Fields(map) => map.len(),
            Self::Raw(_) => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, Self::Raw(_))
    }
}

/// Decode the request body according to its `Content-Type`.
pub fn decode(ctx: &RequestContext) -> FormFields {
    let content_type = ctx.header("content-type").unwrap_or_default().to_ascii_lowercase();

    let fields = if ctx.body_unread() {
        unread_body(ctx, &content_type)
    } else if content_type.contains("application/x-www-form-urlencoded") {
        decode_urlencoded(ctx.body())
    } else if content_type.contains("application/json") {
        decode_json(ctx.body())
    } else if content_type.contains("multipart/form-data") {
        FormFields::Raw(RawBody {
            is_raw: true,
            byte_length: decoded_length(ctx.body(), ctx.body_is_base64()),
            note: MULTIPART_NOTE,
        })
    } else {
        FormFields::default()
    };

    tracing::debug!(fields = fields.len(), raw = fields.is_raw(), "Decoded form body");
    fields
}

/// The transport gave up on the body; multipart still reports its declared size.
fn unread_body(ctx: &RequestContext, content_type: &str) -> FormFields {
    if !content_type.contains("multipart/form-data") {
        return FormFields::default();
    }
    let declared = ctx.header("content-length").and_then(|v| v.trim().parse().ok()).unwrap_or(0);
    FormFields::Raw(RawBody { is_raw: true, byte_length: declared, note: MULTIPART_NOTE })
}

fn decode_urlencoded(body: &[u8]) -> FormFields {
    // Later duplicates overwrite earlier ones.
    FormFields::Fields(url::form_urlencoded::parse(body).into_owned().collect())
}

fn decode_json(body: &[u8]) -> FormFields {
    if body.iter().all(u8::is_ascii_whitespace) {
        return FormFields::default();
    }
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => FormFields::Fields(
            map.into_iter()
                .filter_map(|(key, value)| json_field_text(value).map(|text| (key, text)))
                .collect(),
        ),
        Ok(_) => FormFields::default(),
        Err(e) => {
            tracing::debug!("Ignoring unparseable JSON body: {}", e);
            FormFields::default()
        },
    }
}

/// `null`, `false` and zero read as absent, so they take the field's default.
fn json_field_text(value: Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) => Some(s),
        Value::Bool(true) => Some(true.to_string()),
        Value::Number(n) => Some(n.to_string()),
        nested @ (Value::Array(_) | Value::Object(_)) => Some(nested.to_string()),
    }
}

fn decoded_length(body: &[u8], is_base64: bool) -> usize {
    if !is_base64 {
        return body.len();
    }
    let compact: Vec<u8> = body.iter().copied().filter(|b| !b.is_ascii_whitespace()).collect();
    base64::engine::general_purpose::STANDARD
        .decode(&compact)
        .map(|bytes| bytes.len())
        .unwrap_or(body.len())
}
