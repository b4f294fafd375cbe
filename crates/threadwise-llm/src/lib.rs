pub mod client;
pub mod config;
pub mod error;
pub mod gemini;
pub mod parsing;
pub mod prompt;
pub mod traits;

pub use client::ThreadModelClient;
pub use config::{create_model, GeminiConfig};
pub use error::{ModelError, Operation};
pub use gemini::GeminiClient;
pub use parsing::parse_reply_list;
pub use traits::{GenerateOptions, GenerateRequest, GenerateResponse, GenerativeModel, TokenUsage};
