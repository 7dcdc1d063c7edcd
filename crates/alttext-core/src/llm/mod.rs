//! LLM integration for alt-text generation.
//!
//! Provides a provider abstraction over the supported vision model backends
//! (Anthropic, OpenAI-compatible, Ollama). Exactly one provider is active per
//! process, chosen by `llm.provider`.

pub(crate) mod anthropic;
pub(crate) mod ollama;
pub(crate) mod openai;
pub(crate) mod provider;

pub use provider::{
    resolve_env_var, LlmProvider, LlmProviderFactory, LlmRequest, LlmResponse,
    SUPPORTED_PROVIDERS,
};
