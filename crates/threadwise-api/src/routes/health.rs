use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub model: String,
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is running", body = StatusResponse)
    ),
    tag = "health"
)]
pub async fn root() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "AI service running".to_string(),
    })
}

/// Health check endpoint
///
/// Reports the build version and the model requests are routed to. Does not call the provider.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model: state.model_client.model_name().to_string(),
    })
}
