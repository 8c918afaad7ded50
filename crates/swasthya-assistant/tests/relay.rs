use serde_json::json;
use swasthya_assistant::error::AssistantError;
use swasthya_assistant::relay::Fallback;
use swasthya_assistant::{ChatMessage, ChatRelay, GeminiClient};
use swasthya_core::lang::Language;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GENERATE_PATH: &str = "/v1beta/models/gemini-flash-latest:generateContent";

fn relay_for(server: &MockServer) -> ChatRelay {
    let client = GeminiClient::new(
        reqwest::Client::new(),
        "test-key",
        "gemini-flash-latest",
        server.uri(),
    );
    ChatRelay::new(Some(client))
}

#[tokio::test]
async fn returns_model_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "generationConfig": {"maxOutputTokens": 500}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "Drink plenty "}, {"text": "of water."}]}
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let relay = relay_for(&server);
    let history = vec![ChatMessage::user("Hello"), ChatMessage::assistant("Hi!")];
    let reply = relay.send("I have a fever", Language::En, &history).await;

    assert_eq!(reply, "Drink plenty of water.");
}

#[tokio::test]
async fn missing_key_returns_unconfigured_fallback() {
    let relay = ChatRelay::new(None);
    assert!(!relay.is_configured());

    let reply = relay.send("hello", Language::En, &[]).await;
    assert_eq!(reply, "Please try again later or check API configuration.");

    let reply = relay.send("नमस्ते", Language::Hi, &[]).await;
    assert_eq!(reply, "कृपया बाद में प्रयास करें।");

    let err = relay.try_send("hello", Language::En, &[]).await.unwrap_err();
    assert!(matches!(err, AssistantError::MissingCredentials));
}

#[tokio::test]
async fn rate_limit_returns_quota_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let reply = relay_for(&server).send("hello", Language::Hi, &[]).await;
    assert_eq!(reply, "अपर्याप्त कोटा। कृपया बाद में प्रयास करें।");
}

#[tokio::test]
async fn resource_exhausted_body_returns_quota_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {"code": 400, "status": "RESOURCE_EXHAUSTED"}
        })))
        .mount(&server)
        .await;

    let reply = relay_for(&server).send("hello", Language::En, &[]).await;
    assert_eq!(reply, "Quota exceeded. Please try again later.");
}

#[tokio::test]
async fn server_error_returns_apology() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .mount(&server)
        .await;

    let reply = relay_for(&server).send("hello", Language::En, &[]).await;
    assert_eq!(
        reply,
        "Sorry, I'm having trouble answering your question. Please try again."
    );
}

#[tokio::test]
async fn empty_candidates_returns_apology() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
        .mount(&server)
        .await;

    let relay = relay_for(&server);
    let err = relay.try_send("hello", Language::En, &[]).await.unwrap_err();
    assert!(matches!(err, AssistantError::ResponseParse(_)));
    assert_eq!(Fallback::for_error(&err), Fallback::Apology);
}

#[test]
fn quota_detection() {
    let upstream = |status, message: &str| AssistantError::Upstream {
        status,
        message: message.to_string(),
    };
    assert!(upstream(429, "").is_quota());
    assert!(upstream(403, "quota exceeded for project").is_quota());
    assert!(!upstream(500, "boom").is_quota());
    assert!(AssistantError::Request("HTTP 429 Too Many Requests".into()).is_quota());
    assert!(!AssistantError::MissingCredentials.is_quota());
}
