use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use threadwise_llm::{
    GenerateOptions, GenerateRequest, GenerateResponse, GenerativeModel, ModelError, Operation,
    ThreadModelClient,
};
use threadwise_types::{LatestMessage, SuggestReplyRequest, SummarizeRequest, ThreadMessage};

/// In-memory model that replays a canned reply and records every prompt
struct ScriptedModel {
    reply: std::result::Result<Option<String>, String>,
    prompts: Mutex<Vec<GenerateRequest>>,
}

impl ScriptedModel {
    fn text(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(Some(text.to_string())),
            prompts: Mutex::new(Vec::new()),
        })
    }

    fn no_text() -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(None),
            prompts: Mutex::new(Vec::new()),
        })
    }

    fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(message.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    fn last_prompt(&self) -> String {
        self.prompts.lock().unwrap().last().unwrap().prompt.clone()
    }
}

#[async_trait]
impl GenerativeModel for ScriptedModel {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse> {
        self.prompts.lock().unwrap().push(request);
        match &self.reply {
            Ok(Some(text)) => Ok(GenerateResponse::from_text(text.clone())),
            Ok(None) => Ok(GenerateResponse {
                text: None,
                finish_reason: Some("SAFETY".to_string()),
                usage: None,
                raw: serde_json::Value::Null,
            }),
            Err(message) => Err(anyhow::anyhow!(message.clone())),
        }
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}

fn thread() -> SummarizeRequest {
    SummarizeRequest::new(
        "thread-1",
        vec![
            ThreadMessage::new("alice@example.com", vec!["bob@example.com".into()], "Mon 09:00", "Kickoff on Monday?"),
            ThreadMessage::new("bob@example.com", vec!["alice@example.com".into()], "Mon 09:15", "Yes, 10am."),
        ],
    )
}

fn reply_request(max_replies: u32) -> SuggestReplyRequest {
    SuggestReplyRequest::new("thread-1", LatestMessage::new("m2", "bob@example.com", "Yes, 10am."))
        .with_max_replies(max_replies)
}

#[tokio::test]
async fn test_summary_is_trimmed() {
    let model = ScriptedModel::text("\n  Kickoff set for Monday 10am.  \n");
    let client = ThreadModelClient::new(model.clone());

    let summary = client.summarize_thread(&thread()).await.unwrap();

    assert_eq!(summary, "Kickoff set for Monday 10am.");
    assert_eq!(model.calls(), 1);
    assert!(model.last_prompt().contains("From: alice@example.com\nTo: bob@example.com"));
}

#[tokio::test]
async fn test_whitespace_summary_is_empty_result() {
    let model = ScriptedModel::text("   \n\t ");
    let client = ThreadModelClient::new(model);

    let err = client.summarize_thread(&thread()).await.unwrap_err();

    assert!(matches!(
        err,
        ModelError::EmptyResult {
            operation: Operation::Summarization
        }
    ));
    assert_eq!(err.to_string(), "Gemini summarization returned empty text");
}

#[tokio::test]
async fn test_missing_text_is_empty_result() {
    let client = ThreadModelClient::new(ScriptedModel::no_text());
    let err = client.suggest_replies(&reply_request(3)).await.unwrap_err();
    assert_eq!(err.kind(), "empty_result");
}

#[tokio::test]
async fn test_provider_failure_is_wrapped() {
    let client = ThreadModelClient::new(ScriptedModel::failing("quota exceeded"));

    let err = client.summarize_thread(&thread()).await.unwrap_err();

    assert!(matches!(err, ModelError::Provider { .. }));
    assert_eq!(err.to_string(), "Gemini summarization failed: quota exceeded");

    let client = ThreadModelClient::new(ScriptedModel::failing("timeout"));
    let err = client.suggest_replies(&reply_request(3)).await.unwrap_err();
    assert_eq!(err.to_string(), "Gemini reply generation failed: timeout");
}

#[tokio::test]
async fn test_replies_parsed_from_numbered_list() {
    let model = ScriptedModel::text("1. See you then!\n2) Thanks, confirmed.\n3 - Works for me.");
    let client = ThreadModelClient::new(model.clone());

    let replies = client.suggest_replies(&reply_request(3)).await.unwrap();

    assert_eq!(replies, vec!["See you then!", "Thanks, confirmed.", "Works for me."]);
    assert_eq!(model.calls(), 1);
    assert!(model.last_prompt().contains("Generate exactly 3 distinct reply options."));
}

#[tokio::test]
async fn test_replies_truncated_to_max() {
    let model = ScriptedModel::text("1. A\n2. B\n3. C\n4. D\n5. E");
    let client = ThreadModelClient::new(model);

    let replies = client.suggest_replies(&reply_request(2)).await.unwrap();

    assert_eq!(replies, vec!["A", "B"]);
}

#[tokio::test]
async fn test_fewer_replies_than_requested_is_ok() {
    let client = ThreadModelClient::new(ScriptedModel::text("1. Only one"));
    let replies = client.suggest_replies(&reply_request(4)).await.unwrap();
    assert_eq!(replies, vec!["Only one"]);
}

#[tokio::test]
async fn test_markers_only_is_no_replies() {
    let client = ThreadModelClient::new(ScriptedModel::text("1.\n2)\n3:"));

    let err = client.suggest_replies(&reply_request(3)).await.unwrap_err();

    assert!(matches!(err, ModelError::NoReplies));
    assert_eq!(err.to_string(), "Gemini reply parsing produced no replies");
}

#[tokio::test]
async fn test_options_forwarded_to_model() {
    let model = ScriptedModel::text("Fine.");
    let options = GenerateOptions::new().temperature(0.2).max_output_tokens(128);
    let client = ThreadModelClient::new(model.clone()).with_options(options.clone());

    client.summarize_thread(&thread()).await.unwrap();

    let recorded = model.prompts.lock().unwrap();
    assert_eq!(recorded[0].options, options);
    assert_eq!(client.model_name(), "scripted");
}
