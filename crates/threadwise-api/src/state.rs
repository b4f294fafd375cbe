use std::sync::Arc;
use threadwise_llm::{GenerateOptions, GenerativeModel, ThreadModelClient};
use crate::config::Config;

/// Shared application state passed to all handlers
///
/// The model handle is built once at startup and shared read-only by every request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub model_client: ThreadModelClient,
}

impl AppState {
    pub fn new(config: Config, model: Arc<dyn GenerativeModel>) -> Self {
        let mut options = GenerateOptions::new();
        if let Some(temp) = config.llm.temperature {
            options = options.temperature(temp);
        }
        if let Some(tokens) = config.llm.max_output_tokens {
            options = options.max_output_tokens(tokens);
        }

        Self {
            config: Arc::new(config),
            model_client: ThreadModelClient::new(model).with_options(options),
        }
    }
}
