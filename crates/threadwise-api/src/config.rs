use config::{builder::DefaultState, Config as ConfigLoader, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use threadwise_llm::config::{GeminiConfig, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};

/// Required provider credential
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
/// Overrides `llm.model`
pub const MODEL_NAME_VAR: &str = "GEMINI_MODEL_NAME";
/// Overrides `logging.level`
pub const LOG_LEVEL_VAR: &str = "AI_SERVICE_LOG_LEVEL";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub llm: LlmConfig,
    pub logging: LoggingConfig,

    // Secrets (from ENV only)
    #[serde(default)]
    pub gemini_api_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Return provider error text in 500 bodies instead of a generic message
    #[serde(default = "default_true")]
    pub expose_error_details: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    pub enabled: bool,
    pub origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_llm_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub temperature: Option<f32>,
    #[serde(default)]
    pub max_output_tokens: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

fn default_request_timeout_secs() -> u64 {
    120
}

fn default_llm_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from TOML files and environment variables
    ///
    /// Hierarchy (weakest to strongest):
    /// 1. built-in defaults
    /// 2. config/default.toml
    /// 3. config/{ENV}.toml (if ENV is set)
    /// 4. THREADWISE_<SECTION>__<KEY> variables, e.g. THREADWISE_SERVER__PORT
    /// 5. GEMINI_MODEL_NAME and AI_SERVICE_LOG_LEVEL
    ///
    /// GEMINI_API_KEY must be set; startup fails without it.
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("ENV").unwrap_or_else(|_| "dev".to_string());

        let builder = Self::defaults_builder()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("THREADWISE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("llm.model", non_empty_var(MODEL_NAME_VAR))?
            .set_override_option("logging.level", non_empty_var(LOG_LEVEL_VAR))?;

        let mut cfg: Config = builder.build()?.try_deserialize()?;

        cfg.gemini_api_key = require_api_key(non_empty_var(API_KEY_VAR))?;

        Ok(cfg)
    }

    /// Load config from a specific path on top of the defaults (useful for testing)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::defaults_builder()?
            .add_source(File::from(path.as_ref()))
            .build()?
            .try_deserialize()
    }

    /// Built-in defaults only, no files or environment
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::defaults_builder()?.build()?.try_deserialize()
    }

    fn defaults_builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        ConfigLoader::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("cors.enabled", true)?
            .set_default("cors.origins", vec!["*"])?
            .set_default("llm.model", DEFAULT_MODEL)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")
    }

    /// Provider settings for building the shared model handle
    pub fn gemini_config(&self) -> GeminiConfig {
        let mut gemini = GeminiConfig::new(self.gemini_api_key.clone())
            .with_model(self.llm.model.clone())
            .with_timeout_secs(self.llm.timeout_secs);
        if let Some(base_url) = &self.llm.base_url {
            gemini = gemini.with_base_url(base_url.clone());
        }
        gemini
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn require_api_key(value: Option<String>) -> Result<String, ConfigError> {
    value.ok_or_else(|| ConfigError::Message(format!("{} environment variable is required", API_KEY_VAR)))
}
