// Gemini client implementation

use crate::config::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};
use crate::gemini::types::{Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig};
use crate::traits::{GenerateOptions, GenerateRequest, GenerateResponse, GenerativeModel, TokenUsage};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use std::time::Duration;

/// Gemini client (HTTP direct, no SDK)
///
/// Calls `POST {base_url}/models/{model}:generateContent` and authenticates
/// with the `x-goog-api-key` header so the key never appears in URLs or logs.
#[derive(Debug)]
pub struct GeminiClient {
    http_client: reqwest::Client,
    base_url: String,
    model: String,
}

impl GeminiClient {
    /// Create a client for the default model and endpoint
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    pub fn builder() -> GeminiClientBuilder {
        GeminiClientBuilder::default()
    }

    fn build_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    fn build_payload(&self, prompt: String, options: &GenerateOptions) -> GenerateContentRequest {
        let generation_config = if options.temperature.is_some() || options.max_output_tokens.is_some() {
            Some(GenerationConfig {
                temperature: options.temperature,
                max_output_tokens: options.max_output_tokens,
            })
        } else {
            None
        };

        GenerateContentRequest {
            contents: vec![Content::user(prompt)],
            generation_config,
        }
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse> {
        let payload = self.build_payload(request.prompt, &request.options);

        tracing::debug!(model = %self.model, "Sending generateContent request");

        let response = self
            .http_client
            .post(self.build_url())
            .json(&payload)
            .send()
            .await
            .context("Failed to send request")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Gemini API error ({}): {}", status, error_text);
        }

        let raw: GenerateContentResponse = response
            .json()
            .await
            .context("Failed to parse response")?;

        if let Some(reason) = raw.prompt_feedback.as_ref().and_then(|f| f.block_reason.as_deref()) {
            tracing::warn!(model = %self.model, block_reason = %reason, "Prompt was blocked by the provider");
        }

        Ok(GenerateResponse {
            text: raw.text(),
            finish_reason: raw.finish_reason(),
            usage: raw.usage_metadata.as_ref().map(|u| TokenUsage {
                input_tokens: u.prompt_token_count,
                output_tokens: u.candidates_token_count,
                total_tokens: u.total_token_count,
            }),
            raw: serde_json::to_value(&raw)?,
        })
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

/// Builder for GeminiClient
#[derive(Default)]
pub struct GeminiClientBuilder {
    api_key: Option<String>,
    model: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl GeminiClientBuilder {
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Override the API root, e.g. "https://generativelanguage.googleapis.com/v1beta"
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Whole-request timeout applied to every provider call
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<GeminiClient> {
        let api_key = self
            .api_key
            .filter(|k| !k.trim().is_empty())
            .context("API key is required")?;
        let model = self.model.unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let timeout = self
            .timeout
            .unwrap_or_else(|| Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-goog-api-key",
            HeaderValue::from_str(&api_key).context("Invalid API key format")?,
        );

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(GeminiClient {
            http_client,
            base_url,
            model,
        })
    }
}
