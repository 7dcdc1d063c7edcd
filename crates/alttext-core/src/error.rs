//! Error types for alt-text generation.
//!
//! Errors are split by where they arise: configuration loading, request
//! validation (client input, never reaches the network) and generation
//! (image fetch or model provider failures).

use thiserror::Error;

/// Top-level error type for alt-text operations.
#[derive(Error, Debug)]
pub enum AltTextError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The request failed validation
    #[error("Invalid request: {0}")]
    Request(#[from] RequestError),

    /// Image resolution or model invocation failed
    #[error("Generation error: {0}")]
    Generate(#[from] GenerateError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Request validation failures.
///
/// The `Display` text is the message returned to the client verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("Missing required fields: type and data are required")]
    MissingFields,

    #[error("Invalid type. Must be \"image\" or \"url\"")]
    InvalidType,

    #[error("Invalid URL provided")]
    InvalidUrl,

    #[error("Invalid image data format")]
    InvalidImageData,
}

/// Failures while resolving the image or calling the model.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// The image URL could not be fetched
    #[error("Failed to fetch image from URL {url}: {message}")]
    Fetch { url: String, message: String },

    /// The model provider rejected the call or could not be reached
    #[error("{provider} error: {message}")]
    Provider {
        provider: String,
        message: String,
        /// HTTP status reported by the provider, if the call got that far
        status_code: Option<u16>,
    },
}

impl GenerateError {
    /// HTTP status reported by the provider, if any.
    pub fn provider_status(&self) -> Option<u16> {
        match self {
            GenerateError::Provider { status_code, .. } => *status_code,
            GenerateError::Fetch { .. } => None,
        }
    }
}

/// Convenience type alias for alt-text results.
pub type Result<T> = std::result::Result<T, AltTextError>;

/// Convenience type alias for generation results.
pub type GenerateResult<T> = std::result::Result<T, GenerateError>;
