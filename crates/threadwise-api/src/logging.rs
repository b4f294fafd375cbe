use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Turn a configured level into an `EnvFilter` directive.
///
/// Accepts tracing levels, the Python-style names carried by
/// `AI_SERVICE_LOG_LEVEL` (`WARNING`, `CRITICAL`), and full directives such as
/// `threadwise_api=debug`. Returns `None` for anything else, since a bare
/// unknown word would otherwise be read as a target and silence every event.
pub fn filter_directive(level: &str) -> Option<String> {
    let normalized = level.trim().to_ascii_lowercase();

    if normalized.contains('=') || normalized.contains(',') {
        return Some(normalized);
    }

    let level = match normalized.as_str() {
        "warning" => "warn",
        "critical" | "fatal" => "error",
        "notset" => "trace",
        other => other,
    };

    level.parse::<LevelFilter>().ok().map(|filter| filter.to_string())
}

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
pub fn init_logging(config: &LoggingConfig) {
    let (env_filter, unrecognized) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, false),
        Err(_) => match filter_directive(&config.level).and_then(|d| EnvFilter::try_new(d).ok()) {
            Some(filter) => (filter, false),
            None => (EnvFilter::new("info"), true),
        },
    };

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.format.as_str() {
        "json" => {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            registry
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }

    if unrecognized {
        tracing::warn!(level = %config.level, "Unrecognized log level, falling back to info");
    }
}
