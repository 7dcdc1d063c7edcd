//! LLM provider trait and request/response types.
//!
//! Defines the interface that all vision model providers implement, plus the
//! factory that builds the configured provider once at startup.

use crate::config::{GenerationConfig, LlmConfig};
use crate::error::{ConfigError, GenerateError};
use crate::image::ImageInput;
use async_trait::async_trait;
use std::sync::Arc;

/// Provider names accepted by `llm.provider`.
pub const SUPPORTED_PROVIDERS: &[&str] = &["anthropic", "openai", "ollama"];

/// A request to generate alt text for one image.
#[derive(Debug, Clone)]
pub struct LlmRequest {
    /// The image to describe
    pub image: ImageInput,
    /// Text prompt for the model
    pub prompt: String,
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Sampling temperature, provider default when `None`
    pub temperature: Option<f32>,
}

impl LlmRequest {
    pub fn new(image: ImageInput, prompt: String, generation: &GenerationConfig) -> Self {
        Self {
            image,
            prompt,
            max_tokens: generation.max_tokens,
            temperature: generation.temperature,
        }
    }
}

/// The response from an LLM call.
#[derive(Debug, Clone)]
pub struct LlmResponse {
    /// Generated text, trimmed
    pub text: String,
    /// Model identifier used
    pub model: String,
    /// Number of tokens used (input + output), if reported
    pub tokens_used: Option<u32>,
    /// Round-trip latency in milliseconds
    pub latency_ms: u64,
}

/// Image + prompt in, text out.
///
/// Uses `async_trait` because native async fn in trait is not object-safe
/// (the handler holds an `Arc<dyn LlmProvider>`).
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Provider name for logging (e.g., "anthropic", "ollama").
    fn name(&self) -> &str;

    /// Model identifier requests are sent to.
    fn model(&self) -> &str;

    /// Check whether the provider is configured and reachable.
    async fn is_available(&self) -> bool;

    /// Generate text for the given request. One call, no retries.
    async fn generate(&self, request: &LlmRequest) -> Result<LlmResponse, GenerateError>;
}

/// Resolve `${ENV_VAR}` references in config strings.
pub fn resolve_env_var(value: &str) -> Option<String> {
    if value.starts_with("${") && value.ends_with('}') {
        let var_name = &value[2..value.len() - 1];
        std::env::var(var_name).ok().filter(|v| !v.is_empty())
    } else if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Resolve an API key, warning instead of failing when it is missing.
///
/// A missing key only shows up when the provider rejects the first call.
fn resolve_api_key(provider: &str, value: &str) -> String {
    resolve_env_var(value).unwrap_or_else(|| {
        tracing::warn!(
            "{provider} API key not set ({value}); requests will fail until it is configured"
        );
        String::new()
    })
}

/// Factory that creates the configured provider.
pub struct LlmProviderFactory;

impl LlmProviderFactory {
    /// Create the provider named by `config.provider`.
    ///
    /// Credentials are resolved here, once, for the lifetime of the process.
    pub fn create(config: &LlmConfig) -> Result<Arc<dyn LlmProvider>, ConfigError> {
        match config.provider.as_str() {
            "anthropic" => {
                let cfg = config.anthropic.clone().unwrap_or_default();
                let api_key = resolve_api_key("Anthropic", &cfg.api_key);
                Ok(Arc::new(super::anthropic::AnthropicProvider::new(
                    &api_key,
                    &cfg.model,
                    &cfg.endpoint,
                )))
            }
            "openai" => {
                let cfg = config.openai.clone().unwrap_or_default();
                let api_key = resolve_api_key("OpenAI", &cfg.api_key);
                Ok(Arc::new(super::openai::OpenAiProvider::new(
                    &api_key,
                    &cfg.model,
                    &cfg.endpoint,
                )))
            }
            "ollama" => {
                let cfg = config.ollama.clone().unwrap_or_default();
                Ok(Arc::new(super::ollama::OllamaProvider::new(
                    &cfg.endpoint,
                    &cfg.model,
                )))
            }
            other => Err(ConfigError::ValidationError(format!(
                "Unknown LLM provider: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AnthropicConfig, OpenAiConfig};

    #[test]
    fn test_request_uses_generation_settings() {
        let image = ImageInput::from_bytes(&[1, 2, 3], "jpeg");
        let generation = GenerationConfig {
            max_tokens: 64,
            temperature: Some(0.2),
        };
        let request = LlmRequest::new(image, "Describe".to_string(), &generation);
        assert_eq!(request.max_tokens, 64);
        assert_eq!(request.temperature, Some(0.2));
    }

    #[test]
    fn test_resolve_env_var() {
        // Non-env-var strings pass through
        assert_eq!(resolve_env_var("plain-key"), Some("plain-key".to_string()));
        // Empty returns None
        assert_eq!(resolve_env_var(""), None);
        // Unset env var returns None
        assert_eq!(resolve_env_var("${DEFINITELY_NOT_SET_XYZ_123}"), None);
    }

    #[test]
    fn test_factory_creates_each_provider() {
        let mut config = LlmConfig {
            anthropic: Some(AnthropicConfig {
                api_key: "sk-ant-test".to_string(),
                ..Default::default()
            }),
            openai: Some(OpenAiConfig {
                api_key: "sk-test".to_string(),
                model: "gpt-4o".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        };

        let provider = LlmProviderFactory::create(&config).unwrap();
        assert_eq!(provider.name(), "anthropic");
        assert_eq!(provider.model(), "claude-3-5-sonnet-20241022");

        config.provider = "openai".to_string();
        let provider = LlmProviderFactory::create(&config).unwrap();
        assert_eq!(provider.name(), "openai");
        assert_eq!(provider.model(), "gpt-4o");

        config.provider = "ollama".to_string();
        let provider = LlmProviderFactory::create(&config).unwrap();
        assert_eq!(provider.name(), "ollama");
        assert_eq!(provider.model(), "llama3.2-vision");
    }

    #[tokio::test]
    async fn test_missing_key_is_deferred_to_call_time() {
        let config = LlmConfig {
            anthropic: Some(AnthropicConfig {
                api_key: "${DEFINITELY_NOT_SET_XYZ_123}".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        };
        let provider = LlmProviderFactory::create(&config).unwrap();
        assert!(!provider.is_available().await);
    }

    #[test]
    fn test_factory_rejects_unknown_provider() {
        let config = LlmConfig {
            provider: "gemini".to_string(),
            ..Default::default()
        };
        assert!(LlmProviderFactory::create(&config).is_err());
    }
}
