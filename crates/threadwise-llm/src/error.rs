use std::fmt;
use thiserror::Error;

/// Which model-client operation produced an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Summarization,
    ReplyGeneration,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Summarization => write!(f, "summarization"),
            Operation::ReplyGeneration => write!(f, "reply generation"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ModelError {
    /// The provider call itself failed (network, auth, quota, bad status, bad body)
    #[error("Gemini {operation} failed: {message}")]
    Provider { operation: Operation, message: String },

    #[error("Gemini {operation} returned empty text")]
    EmptyResult { operation: Operation },

    /// Non-empty provider text that yielded zero reply lines
    #[error("Gemini reply parsing produced no replies")]
    NoReplies,
}

impl ModelError {
    pub fn provider(operation: Operation, err: &anyhow::Error) -> Self {
        Self::Provider {
            operation,
            message: format!("{:#}", err),
        }
    }

    /// Stable short name for logs
    pub fn kind(&self) -> &'static str {
        match self {
            ModelError::Provider { .. } => "provider_error",
            ModelError::EmptyResult { .. } => "empty_result",
            ModelError::NoReplies => "no_replies",
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
