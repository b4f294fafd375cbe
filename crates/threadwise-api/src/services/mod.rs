pub mod smart_reply;
pub mod summarizer;
