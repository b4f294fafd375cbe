pub mod logging;
pub mod redact;
pub mod timeout;
