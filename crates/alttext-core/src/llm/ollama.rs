//! Ollama LLM provider for local vision model inference.
//!
//! Talks to a local Ollama instance via its HTTP API.
//! No authentication required, just needs Ollama running locally.

use super::provider::{LlmProvider, LlmRequest, LlmResponse};
use crate::error::GenerateError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Ollama provider for local vision model inference.
pub struct OllamaProvider {
    endpoint: String,
    model: String,
    client: reqwest::Client,
}

impl OllamaProvider {
    pub fn new(endpoint: &str, model: &str) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            model: model.to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn error(&self, message: String, status_code: Option<u16>) -> GenerateError {
        GenerateError::Provider {
            provider: self.name().to_string(),
            message,
            status_code,
        }
    }
}

/// Ollama /api/generate request body.
#[derive(Serialize)]
struct OllamaRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    images: [&'a str; 1],
    stream: bool,
    options: OllamaOptions,
}

#[derive(Serialize)]
struct OllamaOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    num_predict: u32,
}

/// Ollama /api/generate response.
#[derive(Deserialize)]
struct OllamaResponse {
    response: String,
    #[serde(default)]
    prompt_eval_count: Option<u32>,
    #[serde(default)]
    eval_count: Option<u32>,
}

#[async_trait]
impl LlmProvider for OllamaProvider {
    fn name(&self) -> &str {
        "ollama"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn is_available(&self) -> bool {
        // Liveness probe only; generation itself carries no client timeout.
        let url = format!("{}/api/tags", self.endpoint);
        match self.client.get(&url).timeout(Duration::from_secs(5)).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    async fn generate(&self, request: &LlmRequest) -> Result<LlmResponse, GenerateError> {
        let url = format!("{}/api/generate", self.endpoint);
        let start = Instant::now();

        let body = OllamaRequest {
            model: &self.model,
            prompt: &request.prompt,
            images: [request.image.data.as_str()],
            stream: false,
            options: OllamaOptions {
                temperature: request.temperature,
                num_predict: request.max_tokens,
            },
        };

        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.error(format!("Ollama request failed: {e}"), None))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(self.error(
                format!("Ollama HTTP {status}: {text}"),
                Some(status.as_u16()),
            ));
        }

        let ollama_resp: OllamaResponse = resp
            .json()
            .await
            .map_err(|e| self.error(format!("Failed to parse Ollama response: {e}"), None))?;

        let text = ollama_resp.response.trim().to_string();

        let tokens_used = match (ollama_resp.prompt_eval_count, ollama_resp.eval_count) {
            (Some(prompt), Some(eval)) => Some(prompt + eval),
            _ => None,
        };

        Ok(LlmResponse {
            text,
            model: self.model.clone(),
            tokens_used,
            latency_ms: start.elapsed().as_millis() as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageInput;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_generate_posts_raw_base64() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .and(body_partial_json(serde_json::json!({
                "model": "llama3.2-vision",
                "images": ["AAAA"],
                "stream": false,
                "options": {"num_predict": 150}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "response": " A lighthouse on a rocky shore ",
                "prompt_eval_count": 20,
                "eval_count": 8
            })))
            .expect(1)
            .mount(&server)
            .await;

        let provider = OllamaProvider::new(&format!("{}/", server.uri()), "llama3.2-vision");
        let request = LlmRequest {
            image: ImageInput::from_data_uri("data:image/png;base64,AAAA"),
            prompt: "Describe it".to_string(),
            max_tokens: 150,
            temperature: None,
        };
        let resp = provider.generate(&request).await.unwrap();
        assert_eq!(resp.text, "A lighthouse on a rocky shore");
        assert_eq!(resp.tokens_used, Some(28));
    }

    #[tokio::test]
    async fn test_generate_blank_response_becomes_empty() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"response": "  \n"})),
            )
            .mount(&server)
            .await;

        let provider = OllamaProvider::new(&server.uri(), "llama3.2-vision");
        let request = LlmRequest {
            image: ImageInput::from_data_uri("data:image/png;base64,AAAA"),
            prompt: "Describe it".to_string(),
            max_tokens: 150,
            temperature: None,
        };
        let resp = provider.generate(&request).await.unwrap();
        assert_eq!(resp.text, "");
        assert_eq!(resp.tokens_used, None);
    }

    #[tokio::test]
    async fn test_is_available_probes_tags() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/tags"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"models": []})))
            .mount(&server)
            .await;

        let provider = OllamaProvider::new(&server.uri(), "llama3.2-vision");
        assert!(provider.is_available().await);

        let offline = OllamaProvider::new("http://127.0.0.1:1", "llama3.2-vision");
        assert!(!offline.is_available().await);
    }
}
