use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::ValidationError;

/// One email in a thread, as sent by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ThreadMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "from", alias = "from_")]
    pub sender: String,

    pub to: Vec<String>,

    /// Opaque timestamp, forwarded to the model as-is
    pub sent_at: String,

    pub text: String,
}

impl ThreadMessage {
    pub fn new(
        sender: impl Into<String>,
        to: Vec<String>,
        sent_at: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            sender: sender.into(),
            to,
            sent_at: sent_at.into(),
            text: text.into(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SummarizeRequest {
    pub thread_id: String,
    pub messages: Vec<ThreadMessage>,
}

impl SummarizeRequest {
    pub fn new(thread_id: impl Into<String>, messages: Vec<ThreadMessage>) -> Self {
        Self {
            thread_id: thread_id.into(),
            messages,
        }
    }

    /// A thread with no messages has nothing to summarize
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.messages.is_empty() {
            return Err(ValidationError::EmptyThread);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SummarizeResponse {
    pub thread_id: String,
    pub summary: String,
    pub key_issues: Vec<String>,
    pub action_required: Vec<String>,
}

impl SummarizeResponse {
    /// Summary-only response; issue and action extraction are not produced yet
    pub fn from_summary(thread_id: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            thread_id: thread_id.into(),
            summary: summary.into(),
            key_issues: Vec::new(),
            action_required: Vec::new(),
        }
    }
}
