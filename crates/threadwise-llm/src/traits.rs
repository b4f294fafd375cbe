use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A hosted text-generation model
///
/// Implementations are created once at startup and shared across requests,
/// so they must not mutate per-request state.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Single non-streaming generation call
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse>;

    /// Model identifier requests are sent to
    fn model_name(&self) -> &str;
}

#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub prompt: String,
    pub options: GenerateOptions,
}

impl GenerateRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            options: GenerateOptions::default(),
        }
    }

    pub fn with_options(mut self, options: GenerateOptions) -> Self {
        self.options = options;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerateOptions {
    pub temperature: Option<f32>,
    pub max_output_tokens: Option<u32>,
}

impl GenerateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }

    pub fn max_output_tokens(mut self, tokens: u32) -> Self {
        self.max_output_tokens = Some(tokens);
        self
    }
}

#[derive(Debug, Clone)]
pub struct GenerateResponse {
    /// Concatenated text of the first candidate, if the provider returned any
    pub text: Option<String>,
    pub finish_reason: Option<String>,
    pub usage: Option<TokenUsage>,
    pub raw: serde_json::Value,
}

impl GenerateResponse {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            finish_reason: None,
            usage: None,
            raw: serde_json::Value::Null,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
    pub total_tokens: u32,
}
