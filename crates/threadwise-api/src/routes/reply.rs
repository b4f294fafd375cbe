use axum::{extract::rejection::JsonRejection, extract::State, Json};
use std::sync::Arc;
use threadwise_types::{SuggestReplyRequest, SuggestReplyResponse};

use crate::{error::{ApiResult, ErrorBody}, services::smart_reply, state::AppState};

/// Suggest replies to the latest message of a thread
#[utoipa::path(
    post,
    path = "/suggest-reply",
    request_body = SuggestReplyRequest,
    responses(
        (status = 200, description = "Reply suggestions", body = SuggestReplyResponse),
        (status = 422, description = "Invalid request", body = ErrorBody),
        (status = 500, description = "Model call failed", body = ErrorBody)
    ),
    tag = "ai"
)]
pub async fn suggest_reply(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SuggestReplyRequest>, JsonRejection>,
) -> ApiResult<Json<SuggestReplyResponse>> {
    let Json(req) = payload?;
    req.validate()?;

    tracing::info!(thread_id = %req.thread_id, max_replies = req.max_replies, "Suggest-reply request");

    let response = smart_reply::suggest_replies(&state.model_client, &req).await?;
    Ok(Json(response))
}
