use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use threadwise_types::{
    LatestMessage, SuggestReplyRequest, SuggestReplyResponse, SummarizeRequest, SummarizeResponse,
    ThreadMessage,
};

use crate::{
    config::Config,
    error::ErrorBody,
    middleware::{logging, redact, timeout},
    routes::{health, reply, summarize},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Threadwise AI Service",
        description = "Email thread summarization and smart reply suggestions"
    ),
    paths(
        health::root,
        health::health_check,
        summarize::summarize,
        reply::suggest_reply,
    ),
    components(schemas(
        ThreadMessage,
        SummarizeRequest,
        SummarizeResponse,
        LatestMessage,
        SuggestReplyRequest,
        SuggestReplyResponse,
        ErrorBody,
        health::StatusResponse,
        health::HealthResponse,
    )),
    tags(
        (name = "ai", description = "Model-backed endpoints"),
        (name = "health", description = "Liveness and health")
    )
)]
pub struct ApiDoc;

pub fn build_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        // Health
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        // AI
        .route("/summarize", post(summarize::summarize))
        .route("/suggest-reply", post(reply::suggest_reply));

    let request_timeout = Duration::from_secs(state.config.server.request_timeout_secs);

    Router::new()
        .merge(api_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(middleware::from_fn_with_state(state.clone(), redact::redact_server_errors))
        .layer(middleware::from_fn(logging::log_request))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(middleware::from_fn(timeout::timeout_detail))
        .layer(CompressionLayer::new())
        .layer(build_cors_layer(&state.config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn build_cors_layer(config: &Config) -> CorsLayer {
    if !config.cors.enabled {
        return CorsLayer::new();
    }

    let cors = CorsLayer::new()
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers(Any);

    if config.cors.origins.iter().any(|o| o == "*") {
        cors.allow_origin(Any)
    } else {
        let parsed_origins: Vec<axum::http::HeaderValue> = config
            .cors
            .origins
            .iter()
            .filter_map(|o| o.parse::<axum::http::HeaderValue>().ok())
            .collect();

        cors.allow_origin(parsed_origins)
    }
}
