// Provider configuration and client construction

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::gemini::GeminiClient;
use crate::traits::GenerativeModel;

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the Gemini provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    /// Base URL for the Generative Language API (defaults to the public v1beta endpoint)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    pub timeout_secs: u64,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Build the shared model handle from configuration
pub fn create_model(config: &GeminiConfig) -> Result<Arc<dyn GenerativeModel>> {
    let mut builder = GeminiClient::builder()
        .api_key(&config.api_key)
        .model(&config.model)
        .timeout(config.timeout());

    if let Some(base_url) = &config.base_url {
        builder = builder.base_url(base_url);
    }

    let client = builder.build().context("Failed to create Gemini client")?;
    Ok(Arc::new(client))
}
