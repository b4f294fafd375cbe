use axum::{extract::rejection::JsonRejection, extract::State, Json};
use std::sync::Arc;
use threadwise_types::{SummarizeRequest, SummarizeResponse};

use crate::{error::{ApiResult, ErrorBody}, services::summarizer, state::AppState};

/// Summarize an email thread
#[utoipa::path(
    post,
    path = "/summarize",
    request_body = SummarizeRequest,
    responses(
        (status = 200, description = "Thread summary", body = SummarizeResponse),
        (status = 422, description = "Invalid request", body = ErrorBody),
        (status = 500, description = "Model call failed", body = ErrorBody)
    ),
    tag = "ai"
)]
pub async fn summarize(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> ApiResult<Json<SummarizeResponse>> {
    let Json(req) = payload?;
    req.validate()?;

    tracing::info!(thread_id = %req.thread_id, messages = req.messages.len(), "Summarize request");

    let response = summarizer::generate_summary(&state.model_client, &req).await?;
    Ok(Json(response))
}
