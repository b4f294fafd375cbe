use mockito::Matcher;
use serde_json::json;
use std::time::Duration;
use threadwise_llm::{GeminiClient, GenerateOptions, GenerateRequest, GenerativeModel};

const PATH: &str = "/models/gemini-1.5-flash:generateContent";

fn client_for(server: &mockito::Server) -> GeminiClient {
    GeminiClient::builder()
        .api_key("test-key")
        .model("gemini-1.5-flash")
        .base_url(format!("{}/", server.url()))
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

#[test]
fn test_builder_missing_api_key() {
    let result = GeminiClient::builder().model("gemini-1.5-flash").build();

    assert!(result.is_err());
    let err_msg = result.err().unwrap().to_string();
    assert!(err_msg.contains("API key"));
}

#[test]
fn test_builder_defaults_model() {
    let client = GeminiClient::new("test-key").unwrap();
    assert_eq!(client.model_name(), "gemini-1.5-flash");
}

#[tokio::test]
async fn test_generate_returns_candidate_text() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", PATH)
        .match_header("x-goog-api-key", "test-key")
        .match_body(Matcher::PartialJson(json!({
            "contents": [{"role": "user", "parts": [{"text": "Summarize this"}]}]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "candidates": [{
                    "content": {"role": "model", "parts": [{"text": "A short summary."}]},
                    "finishReason": "STOP"
                }],
                "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 4, "totalTokenCount": 16}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let response = client.generate(GenerateRequest::new("Summarize this")).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.text.as_deref(), Some("A short summary."));
    assert_eq!(response.finish_reason.as_deref(), Some("STOP"));
    let usage = response.usage.unwrap();
    assert_eq!(usage.input_tokens, 12);
    assert_eq!(usage.total_tokens, 16);
}

#[tokio::test]
async fn test_generation_config_sent_when_options_set() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", PATH)
        .match_body(Matcher::PartialJson(json!({
            "generationConfig": {"maxOutputTokens": 64}
        })))
        .with_status(200)
        .with_body(json!({"candidates": []}).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let request = GenerateRequest::new("hi").with_options(GenerateOptions::new().max_output_tokens(64));
    let response = client.generate(request).await.unwrap();

    mock.assert_async().await;
    assert!(response.text.is_none());
}

#[tokio::test]
async fn test_error_status_surfaces_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", PATH)
        .with_status(403)
        .with_body(r#"{"error":{"message":"API key not valid"}}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.generate(GenerateRequest::new("hi")).await.unwrap_err();

    let msg = err.to_string();
    assert!(msg.contains("Gemini API error (403 Forbidden)"));
    assert!(msg.contains("API key not valid"));
}

#[tokio::test]
async fn test_malformed_body_is_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", PATH)
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.generate(GenerateRequest::new("hi")).await.unwrap_err();

    assert!(err.to_string().contains("Failed to parse response"));
}
