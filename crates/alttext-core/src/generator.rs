//! Alt-text generation: resolve image, build prompt, invoke the model.
//!
//! Each call is linear and stateless. The first failing stage ends the
//! request; nothing is retried.

use crate::config::{Config, GenerationConfig};
use crate::error::{ConfigError, GenerateResult};
use crate::image::ImageResolver;
use crate::llm::{LlmProvider, LlmProviderFactory, LlmRequest};
use crate::prompt::build_prompt;
use crate::request::AltTextRequest;
use std::sync::Arc;

/// Process-wide alt-text generator, shared across requests.
#[derive(Clone)]
pub struct AltTextGenerator {
    provider: Arc<dyn LlmProvider>,
    resolver: ImageResolver,
    generation: GenerationConfig,
}

impl AltTextGenerator {
    pub fn new(provider: Arc<dyn LlmProvider>, generation: GenerationConfig) -> Self {
        Self {
            provider,
            resolver: ImageResolver::default(),
            generation,
        }
    }

    /// Build the generator with the provider named in the config.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let provider = LlmProviderFactory::create(&config.llm)?;
        Ok(Self::new(provider, config.generation.clone()))
    }

    /// The active provider.
    pub fn provider(&self) -> &dyn LlmProvider {
        self.provider.as_ref()
    }

    /// Generate alt text for a validated request.
    ///
    /// Returns the trimmed model output.
    pub async fn generate(&self, request: &AltTextRequest) -> GenerateResult<String> {
        let image = self.resolver.resolve(request).await?;
        let prompt = build_prompt(
            request.context.as_deref(),
            request.previous_alt_text.as_deref(),
        );

        let llm_request = LlmRequest::new(image, prompt, &self.generation);
        let response = self.provider.generate(&llm_request).await?;

        tracing::debug!(
            provider = self.provider.name(),
            model = %response.model,
            tokens = ?response.tokens_used,
            latency_ms = response.latency_ms,
            "Generated alt text"
        );

        Ok(response.text.trim().to_string())
    }
}
