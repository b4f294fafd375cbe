use threadwise_llm::{ModelError, ThreadModelClient};
use threadwise_types::{SummarizeRequest, SummarizeResponse};

/// Summarize a thread; `key_issues` and `action_required` are not extracted yet and stay empty
pub async fn generate_summary(
    client: &ThreadModelClient,
    request: &SummarizeRequest,
) -> Result<SummarizeResponse, ModelError> {
    let summary = client.summarize_thread(request).await?;
    Ok(SummarizeResponse::from_summary(request.thread_id.clone(), summary))
}
