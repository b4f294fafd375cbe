use threadwise_llm::{ModelError, ThreadModelClient};
use threadwise_types::{SuggestReplyRequest, SuggestReplyResponse};

pub async fn suggest_replies(
    client: &ThreadModelClient,
    request: &SuggestReplyRequest,
) -> Result<SuggestReplyResponse, ModelError> {
    let replies = client.suggest_replies(request).await?;
    Ok(SuggestReplyResponse {
        thread_id: request.thread_id.clone(),
        replies,
    })
}
