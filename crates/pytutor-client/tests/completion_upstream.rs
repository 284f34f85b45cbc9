#![allow(clippy::tests_outside_test_module, reason = "integration tests live in tests/ dir")]
#![allow(clippy::expect_used, reason = "integration test, panics are the assertion mechanism")]

use pytutor_client::{CompletionClient, CompletionConfig, CompletionError};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> CompletionClient {
    let config = CompletionConfig { base_url: server.uri(), ..Default::default() }
        .with_api_key(Some("sk-test".to_string()));
    CompletionClient::new(config).expect("client builds")
}

fn completion_body(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}

#[tokio::test]
async fn test_success_returns_trimmed_first_choice() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(serde_json::json!({
            "model": "gpt-4o-mini",
            "max_tokens": 700,
            "messages": [
                {"role": "system", "content": "be brief"},
                {"role": "user", "content": "what is a list?"}
            ]
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(completion_body("\n  A mutable sequence.  \n")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let reply = client_for(&server)
        .complete("be brief", "what is a list?")
        .await
        .expect("200 scenario: expected Ok");

    assert_eq!(reply, "A mutable sequence.");
}

#[tokio::test]
async fn test_non_success_carries_upstream_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(
            ResponseTemplate::new(401).set_body_string(r#"{"error":{"message":"Incorrect API key"}}"#),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).complete("sys", "user").await.expect_err("401 scenario");

    match &err {
        CompletionError::Upstream { status, body } => {
            assert_eq!(*status, 401);
            assert!(body.contains("Incorrect API key"));
        },
        other => panic!("expected Upstream, got {other:?}"),
    }
    assert!(err.to_string().starts_with("OpenAI error: "));
}

#[tokio::test]
async fn test_malformed_payload_yields_empty_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let reply = client_for(&server).complete("sys", "user").await.expect("still Ok");
    assert_eq!(reply, "");
}

#[tokio::test]
async fn test_empty_choices_yields_empty_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"choices": []})))
        .mount(&server)
        .await;

    let reply = client_for(&server).complete("sys", "user").await.expect("still Ok");
    assert_eq!(reply, "");
}

#[tokio::test]
async fn test_missing_credential_never_reaches_upstream() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("unused")))
        .expect(0)
        .mount(&server)
        .await;

    let config = CompletionConfig { base_url: server.uri(), ..Default::default() };
    let client = CompletionClient::new(config).expect("client builds");

    let err = client.complete("sys", "user").await.expect_err("no key");
    assert!(err.is_configuration());
}

#[tokio::test]
async fn test_unreachable_service_is_transport_error() {
    let config = CompletionConfig { base_url: "http://127.0.0.1:1".to_string(), ..Default::default() }
        .with_api_key(Some("sk-test".to_string()));
    let client = CompletionClient::new(config).expect("client builds");

    let err = client.complete("sys", "user").await.expect_err("nothing listens on port 1");

    assert!(matches!(err, CompletionError::Transport { .. }), "expected Transport, got {err:?}");
    assert!(err.to_string().starts_with("OpenAI request failed: "));
    assert_eq!(err.upstream_status(), None);
    assert!(!err.is_configuration());
}
