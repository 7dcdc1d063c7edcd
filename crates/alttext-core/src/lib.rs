//! Alt-text core - accessible image descriptions from vision LLMs.
//!
//! Takes an image (inline data URI or remote URL), asks a vision-capable
//! model for WCAG-style alt text, and returns the trimmed result.
//!
//! # Architecture
//!
//! Every request runs the same linear path with no shared mutable state:
//!
//! ```text
//! Raw JSON → Validate → Resolve image → Build prompt → LLM provider → Text
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use alttext_core::{AltTextGenerator, Config, RawAltTextRequest};
//!
//! #[tokio::main]
//! async fn main() -> alttext_core::Result<()> {
//!     let config = Config::load()?;
//!     let generator = AltTextGenerator::from_config(&config)?;
//!
//!     let request = RawAltTextRequest {
//!         kind: Some("url".into()),
//!         data: Some("https://example.com/bike.jpg".into()),
//!         ..Default::default()
//!     }
//!     .validate()?;
//!
//!     println!("{}", generator.generate(&request).await?);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod image;
pub mod llm;
pub mod prompt;
pub mod request;

pub use config::Config;
pub use error::{AltTextError, ConfigError, GenerateError, GenerateResult, RequestError, Result};
pub use generator::AltTextGenerator;
pub use image::{ImageInput, ImageResolver};
pub use llm::{LlmProvider, LlmProviderFactory, LlmRequest, LlmResponse};
pub use prompt::build_prompt;
pub use request::{AltTextRequest, RawAltTextRequest, RequestKind};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_generator_from_default_config() {
        let generator = AltTextGenerator::from_config(&Config::default()).unwrap();
        assert_eq!(generator.provider().name(), "anthropic");
    }
}
