//! Route handlers.

use super::error::ApiError;
use super::AppState;
use alttext_core::RawAltTextRequest;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

/// Successful alt-text response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AltTextResponse {
    pub alt_text: String,
    pub success: bool,
}

pub async fn health() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

/// `POST /api/generate-alt-text`
///
/// The body is parsed by hand so malformed JSON maps onto the same
/// `{ "error": ... }` shape as every other failure. Any JSON object is
/// handed to validation; field types are judged there.
pub async fn generate_alt_text(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AltTextResponse>, ApiError> {
    let request = parse_body(&body)?.validate()?;

    tracing::debug!(kind = request.kind.as_str(), "Alt text request accepted");

    let alt_text = state.generator.generate(&request).await.map_err(|e| {
        tracing::error!("Alt text generation error: {e}");
        ApiError::from(e)
    })?;

    Ok(Json(AltTextResponse {
        alt_text,
        success: true,
    }))
}

fn parse_body(body: &[u8]) -> Result<RawAltTextRequest, ApiError> {
    let value: Value = serde_json::from_slice(body).map_err(|e| {
        tracing::debug!("Rejected request body: {e}");
        ApiError::MalformedBody
    })?;
    if !value.is_object() {
        tracing::debug!("Rejected request body: not a JSON object");
        return Err(ApiError::MalformedBody);
    }
    serde_json::from_value(value).map_err(|e| {
        tracing::debug!("Rejected request body: {e}");
        ApiError::MalformedBody
    })
}
