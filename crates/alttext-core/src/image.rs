//! Turning a validated request into a model-ready image payload.
//!
//! Inline data URIs are split without decoding. URLs are fetched once and
//! the body re-encoded as base64.

use crate::error::{GenerateError, GenerateResult};
use crate::request::{AltTextRequest, RequestKind};
use base64::Engine;

/// Media type used when none can be determined.
pub const DEFAULT_MEDIA_TYPE: &str = "image/jpeg";

/// Base64-encoded image ready to send to an LLM API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInput {
    /// Base64-encoded image bytes
    pub data: String,
    /// MIME type (e.g., "image/jpeg", "image/png")
    pub media_type: String,
}

impl ImageInput {
    /// Create an `ImageInput` from raw bytes and a format/extension string.
    pub fn from_bytes(bytes: &[u8], format: &str) -> Self {
        let media_type = match format.to_ascii_lowercase().as_str() {
            "jpeg" | "jpg" => "image/jpeg",
            "png" => "image/png",
            "webp" => "image/webp",
            "gif" => "image/gif",
            other => {
                tracing::warn!("Unknown image format '{other}', defaulting to {DEFAULT_MEDIA_TYPE}");
                DEFAULT_MEDIA_TYPE
            }
        };

        Self::encode(bytes, media_type)
    }

    /// Base64-encode `bytes` under the given media type.
    pub fn encode(bytes: &[u8], media_type: &str) -> Self {
        Self {
            data: base64::engine::general_purpose::STANDARD.encode(bytes),
            media_type: media_type.to_string(),
        }
    }

    /// Split a `data:<mediaType>;base64,<body>` URI on its first comma.
    ///
    /// The body is passed through untouched; a URI without a comma yields an
    /// empty body.
    pub fn from_data_uri(uri: &str) -> Self {
        let (header, body) = uri.split_once(',').unwrap_or((uri, ""));
        let media_type = header
            .find("data:")
            .map(|at| &header[at + "data:".len()..])
            .map(|rest| rest.split(';').next().unwrap_or_default())
            .filter(|mt| !mt.is_empty())
            .unwrap_or(DEFAULT_MEDIA_TYPE);

        Self {
            data: body.to_string(),
            media_type: media_type.to_string(),
        }
    }

    /// Return a data URL suitable for OpenAI-style APIs.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.media_type, self.data)
    }
}

/// Resolves request payloads into [`ImageInput`]s.
#[derive(Debug, Clone, Default)]
pub struct ImageResolver {
    client: reqwest::Client,
}

impl ImageResolver {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Produce the image payload for a validated request.
    ///
    /// Only the `url` kind performs I/O.
    pub async fn resolve(&self, request: &AltTextRequest) -> GenerateResult<ImageInput> {
        match request.kind {
            RequestKind::Image => Ok(ImageInput::from_data_uri(&request.payload)),
            RequestKind::Url => self.fetch(&request.payload).await,
        }
    }

    /// Download an image and base64-encode it.
    ///
    /// The response status is not inspected; the `content-type` header
    /// becomes the media type.
    pub async fn fetch(&self, url: &str) -> GenerateResult<ImageInput> {
        let fetch_error = |e: reqwest::Error| GenerateError::Fetch {
            url: url.to_string(),
            message: e.to_string(),
        };

        let resp = self.client.get(url).send().await.map_err(fetch_error)?;

        let media_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_MEDIA_TYPE)
            .to_string();

        let bytes = resp.bytes().await.map_err(fetch_error)?;
        tracing::debug!(url, media_type = %media_type, size = bytes.len(), "Fetched image");

        Ok(ImageInput::encode(&bytes, &media_type))
    }
}
