use std::sync::Arc;

use threadwise_types::{SuggestReplyRequest, SummarizeRequest};

use crate::error::{ModelError, Operation, Result};
use crate::parsing::parse_reply_list;
use crate::prompt::{build_reply_prompt, build_summary_prompt};
use crate::traits::{GenerateOptions, GenerateRequest, GenerativeModel};

/// Turns thread requests into prompts, calls the model once, and shapes the text
#[derive(Clone)]
pub struct ThreadModelClient {
    model: Arc<dyn GenerativeModel>,
    options: GenerateOptions,
}

impl ThreadModelClient {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self {
            model,
            options: GenerateOptions::default(),
        }
    }

    pub fn with_options(mut self, options: GenerateOptions) -> Self {
        self.options = options;
        self
    }

    pub fn model_name(&self) -> &str {
        self.model.model_name()
    }

    /// Summary text for the thread, trimmed and guaranteed non-empty
    pub async fn summarize_thread(&self, request: &SummarizeRequest) -> Result<String> {
        let prompt = build_summary_prompt(request);
        tracing::debug!(
            thread_id = %request.thread_id,
            messages = request.messages.len(),
            prompt_chars = prompt.len(),
            "Summarizing thread"
        );

        self.generate_text(prompt, Operation::Summarization).await
    }

    /// Between 1 and `max_replies` reply options, in model order
    pub async fn suggest_replies(&self, request: &SuggestReplyRequest) -> Result<Vec<String>> {
        let prompt = build_reply_prompt(request);
        tracing::debug!(
            thread_id = %request.thread_id,
            max_replies = request.max_replies,
            "Generating reply suggestions"
        );

        let text = self.generate_text(prompt, Operation::ReplyGeneration).await?;

        let mut replies = parse_reply_list(&text);
        if replies.is_empty() {
            return Err(ModelError::NoReplies);
        }

        let limit = usize::try_from(request.max_replies).unwrap_or(usize::MAX);
        if replies.len() > limit {
            tracing::debug!(parsed = replies.len(), limit, "Truncating reply list");
            replies.truncate(limit);
        }

        Ok(replies)
    }

    async fn generate_text(&self, prompt: String, operation: Operation) -> Result<String> {
        let request = GenerateRequest::new(prompt).with_options(self.options.clone());

        let response = self
            .model
            .generate(request)
            .await
            .map_err(|e| ModelError::provider(operation, &e))?;

        if let Some(usage) = &response.usage {
            tracing::debug!(
                %operation,
                input_tokens = usage.input_tokens,
                output_tokens = usage.output_tokens,
                "Model call completed"
            );
        }

        let text = response.text.as_deref().unwrap_or_default().trim();
        if text.is_empty() {
            tracing::warn!(
                %operation,
                finish_reason = ?response.finish_reason,
                "Model returned no usable text"
            );
            return Err(ModelError::EmptyResult { operation });
        }

        Ok(text.to_string())
    }
}
