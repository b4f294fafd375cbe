use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::ValidationError;

pub const DEFAULT_MAX_REPLIES: u32 = 3;

fn default_max_replies() -> u32 {
    DEFAULT_MAX_REPLIES
}

/// The inbound message a reply is being drafted for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LatestMessage {
    pub id: String,

    #[serde(rename = "from", alias = "from_")]
    pub sender: String,

    pub text: String,
}

impl LatestMessage {
    pub fn new(id: impl Into<String>, sender: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            sender: sender.into(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SuggestReplyRequest {
    pub thread_id: String,

    #[serde(default)]
    pub conversation_context: Option<String>,

    pub latest_message: LatestMessage,

    #[serde(default = "default_max_replies")]
    pub max_replies: u32,
}

impl SuggestReplyRequest {
    pub fn new(thread_id: impl Into<String>, latest_message: LatestMessage) -> Self {
        Self {
            thread_id: thread_id.into(),
            conversation_context: None,
            latest_message,
            max_replies: DEFAULT_MAX_REPLIES,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.conversation_context = Some(context.into());
        self
    }

    pub fn with_max_replies(mut self, max_replies: u32) -> Self {
        self.max_replies = max_replies;
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_replies == 0 {
            return Err(ValidationError::ZeroReplies);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SuggestReplyResponse {
    pub thread_id: String,
    pub replies: Vec<String>,
}
