//! CLI enum types shared across commands.

use clap::ValueEnum;

/// Supported LLM providers.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ProviderArg {
    /// Anthropic Messages API
    Anthropic,
    /// OpenAI (or compatible) Chat Completions API
    Openai,
    /// Local Ollama instance
    Ollama,
}

impl std::fmt::Display for ProviderArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderArg::Anthropic => write!(f, "anthropic"),
            ProviderArg::Openai => write!(f, "openai"),
            ProviderArg::Ollama => write!(f, "ollama"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_config_names() {
        for provider in ProviderArg::value_variants() {
            let name = provider.to_string();
            assert!(alttext_core::llm::SUPPORTED_PROVIDERS.contains(&name.as_str()));
        }
    }
}
