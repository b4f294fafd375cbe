pub mod reply;
pub mod summarize;

pub use reply::{LatestMessage, SuggestReplyRequest, SuggestReplyResponse, DEFAULT_MAX_REPLIES};
pub use summarize::{SummarizeRequest, SummarizeResponse, ThreadMessage};

use thiserror::Error;

/// Semantic request problems that serde cannot express
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("messages must contain at least one message")]
    EmptyThread,

    #[error("max_replies must be a positive integer")]
    ZeroReplies,
}
