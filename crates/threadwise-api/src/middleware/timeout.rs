use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::ErrorBody;

pub const TIMEOUT_DETAIL: &str = "Request timed out";

/// Give the bare 408 from `TimeoutLayer` the usual `{"detail"}` body
pub async fn timeout_detail(req: Request, next: Next) -> Response {
    let response = next.run(req).await;

    if response.status() != StatusCode::REQUEST_TIMEOUT {
        return response;
    }

    tracing::warn!("Request exceeded server.request_timeout_secs");
    let body = Json(ErrorBody {
        detail: TIMEOUT_DETAIL.to_string(),
    });
    (StatusCode::REQUEST_TIMEOUT, body).into_response()
}
