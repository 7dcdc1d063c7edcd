//! Mapping of request outcomes onto HTTP responses.

use alttext_core::{GenerateError, RequestError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Error body returned for every failure.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Everything the alt-text endpoint can fail with.
#[derive(Debug)]
pub enum ApiError {
    /// The body was not JSON of the expected shape
    MalformedBody,
    /// The body failed validation
    Invalid(RequestError),
    /// Image fetch or model invocation failed
    Generate(GenerateError),
}

impl From<RequestError> for ApiError {
    fn from(e: RequestError) -> Self {
        ApiError::Invalid(e)
    }
}

impl From<GenerateError> for ApiError {
    fn from(e: GenerateError) -> Self {
        ApiError::Generate(e)
    }
}

impl ApiError {
    /// Status code and client-facing message.
    ///
    /// Generation failures are classified only by the provider's HTTP
    /// status. A rejected credential is reported as a server error.
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            ApiError::MalformedBody => {
                (StatusCode::BAD_REQUEST, "Invalid request body".to_string())
            }
            ApiError::Invalid(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            ApiError::Generate(e) => match e.provider_status() {
                Some(401) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Invalid API key".to_string(),
                ),
                Some(429) => (
                    StatusCode::TOO_MANY_REQUESTS,
                    "Rate limit exceeded. Please try again later.".to_string(),
                ),
                Some(400) => (
                    StatusCode::BAD_REQUEST,
                    "Invalid request to provider".to_string(),
                ),
                _ => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to generate alt text".to_string(),
                ),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = self.status_and_message();
        (status, Json(ErrorBody { error })).into_response()
    }
}
