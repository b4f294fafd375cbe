use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::{error::ErrorBody, state::AppState};

pub const REDACTED_DETAIL: &str = "Internal server error";

/// Replace 5xx bodies with a generic message when `server.expose_error_details` is off.
///
/// The original error has already been logged by `ApiError::into_response`.
pub async fn redact_server_errors(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    let response = next.run(req).await;

    if state.config.server.expose_error_details || !response.status().is_server_error() {
        return response;
    }

    let body = Json(ErrorBody {
        detail: REDACTED_DETAIL.to_string(),
    });
    (response.status(), body).into_response()
}
