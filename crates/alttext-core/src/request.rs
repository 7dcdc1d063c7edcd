//! Alt-text request wire form and validation.
//!
//! Validation runs in a fixed order and the first failure wins:
//! required fields, type, then the type-specific payload check.

use crate::error::RequestError;
use serde::Deserialize;
use serde_json::Value;

/// Prefix every inline image payload must carry.
pub const DATA_URI_IMAGE_PREFIX: &str = "data:image/";

/// How the request payload should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// Payload is a `data:image/...;base64,...` URI
    Image,
    /// Payload is an absolute URL to fetch
    Url,
}

impl RequestKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestKind::Image => "image",
            RequestKind::Url => "url",
        }
    }
}

/// Request body as it arrives over the wire, before validation.
///
/// Fields stay untyped JSON so a wrongly-typed value reaches validation
/// and gets the matching rejection instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAltTextRequest {
    #[serde(rename = "type")]
    pub kind: Option<Value>,
    pub data: Option<Value>,
    pub context: Option<Value>,
    pub previous_alt_text: Option<Value>,
}

/// A validated alt-text request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AltTextRequest {
    pub kind: RequestKind,
    pub payload: String,
    pub context: Option<String>,
    pub previous_alt_text: Option<String>,
}

impl RawAltTextRequest {
    /// Validate the raw body into an [`AltTextRequest`].
    ///
    /// `null`, `false`, `0` and `""` count as missing, both for the required
    /// fields and for the optional prompt hints. A non-string `type` is an
    /// invalid type; a non-string `data` fails the type-specific check.
    /// Scalar hints are stringified, structured ones are dropped.
    pub fn validate(self) -> Result<AltTextRequest, RequestError> {
        let (kind, data) = match (present(self.kind), present(self.data)) {
            (Some(kind), Some(data)) => (kind, data),
            _ => return Err(RequestError::MissingFields),
        };

        let kind = match kind.as_str() {
            Some("image") => RequestKind::Image,
            Some("url") => RequestKind::Url,
            _ => return Err(RequestError::InvalidType),
        };

        let payload = match (kind, data) {
            (RequestKind::Url, Value::String(payload)) => {
                url::Url::parse(&payload).map_err(|_| RequestError::InvalidUrl)?;
                payload
            }
            (RequestKind::Url, _) => return Err(RequestError::InvalidUrl),
            (RequestKind::Image, Value::String(payload))
                if payload.starts_with(DATA_URI_IMAGE_PREFIX) =>
            {
                payload
            }
            (RequestKind::Image, _) => return Err(RequestError::InvalidImageData),
        };

        Ok(AltTextRequest {
            kind,
            payload,
            context: hint(self.context),
            previous_alt_text: hint(self.previous_alt_text),
        })
    }
}

fn present(value: Option<Value>) -> Option<Value> {
    value.filter(|v| match v {
        Value::Null | Value::Bool(false) => false,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::Bool(true) | Value::Array(_) | Value::Object(_) => true,
    })
}

fn hint(value: Option<Value>) -> Option<String> {
    match present(value)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
