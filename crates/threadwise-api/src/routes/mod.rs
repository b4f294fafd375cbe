pub mod health;
pub mod reply;
pub mod summarize;
