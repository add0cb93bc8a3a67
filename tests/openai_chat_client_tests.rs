mod common;

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use chatrelay::{ChatErrorKind, LlmService, OpenAiChatClient};

use common::{closed_base_url, MockEndpoint};

fn service_for(base_url: &str, api_key: Option<&str>, timeout: Duration) -> LlmService {
    let client = OpenAiChatClient::new(base_url, api_key.map(str::to_string), timeout)
        .expect("client");
    LlmService::new(Arc::new(client), "You are helpful.", "test-model")
}

#[tokio::test]
async fn returns_first_choice_content_verbatim() {
    let endpoint = MockEndpoint::replying("Hello!  \n  How can I help?");
    let base_url = endpoint.spawn().await;
    let service = service_for(&base_url, None, Duration::from_secs(5));

    let reply = service.chat("hello").await.expect("chat");
    assert_eq!(reply, "Hello!  \n  How can I help?");
}

#[tokio::test]
async fn request_body_has_fixed_shape() {
    let endpoint = MockEndpoint::replying("ok");
    let base_url = endpoint.spawn().await;
    let service = service_for(&base_url, None, Duration::from_secs(5));

    service.chat("first").await.expect("chat");
    service.chat("").await.expect("chat with empty message");

    let requests = endpoint.requests();
    assert_eq!(requests.len(), 2);

    for (request, input) in requests.iter().zip(["first", ""]) {
        let body = &request.body;
        assert_eq!(body["model"], "test-model");
        assert_eq!(body["temperature"], 1.0);
        assert_eq!(body["max_tokens"], 1024);

        let messages = body["messages"].as_array().expect("messages array");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[0]["content"], "You are helpful.");
        assert_eq!(messages[1]["role"], "user");
        assert_eq!(messages[1]["content"], input);
    }
}

#[tokio::test]
async fn sends_bearer_token_only_when_configured() {
    let endpoint = MockEndpoint::replying("ok");
    let base_url = endpoint.spawn().await;

    service_for(&base_url, Some("secret-key"), Duration::from_secs(5))
        .chat("cloud")
        .await
        .expect("chat");
    service_for(&base_url, None, Duration::from_secs(5))
        .chat("local")
        .await
        .expect("chat");

    let requests = endpoint.requests();
    assert_eq!(requests[0].authorization.as_deref(), Some("Bearer secret-key"));
    assert_eq!(requests[1].authorization, None);
}

#[tokio::test]
async fn unauthorized_is_an_authentication_failure() {
    let endpoint = MockEndpoint::raw(
        StatusCode::UNAUTHORIZED,
        r#"{"error": {"message": "invalid api key"}}"#,
    );
    let base_url = endpoint.spawn().await;
    let service = service_for(&base_url, Some("wrong"), Duration::from_secs(5));

    let err = service.chat("hello").await.unwrap_err();
    assert_eq!(err.kind(), ChatErrorKind::Authentication);
    assert!(err.to_string().contains("invalid api key"));
}

#[tokio::test]
async fn server_error_is_a_status_failure() {
    let endpoint = MockEndpoint::raw(StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded");
    let base_url = endpoint.spawn().await;
    let service = service_for(&base_url, None, Duration::from_secs(5));

    let err = service.chat("hello").await.unwrap_err();
    assert_eq!(err.kind(), ChatErrorKind::Status);
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn non_json_body_is_malformed() {
    let endpoint = MockEndpoint::raw(StatusCode::OK, "<html>not json</html>");
    let base_url = endpoint.spawn().await;
    let service = service_for(&base_url, None, Duration::from_secs(5));

    let err = service.chat("hello").await.unwrap_err();
    assert_eq!(err.kind(), ChatErrorKind::MalformedResponse);
}

#[tokio::test]
async fn empty_choices_are_malformed() {
    let endpoint = MockEndpoint::raw(StatusCode::OK, r#"{"choices": []}"#);
    let base_url = endpoint.spawn().await;
    let service = service_for(&base_url, None, Duration::from_secs(5));

    let err = service.chat("hello").await.unwrap_err();
    assert_eq!(err.kind(), ChatErrorKind::MalformedResponse);
    assert!(err.to_string().contains("no choices"));
}

#[tokio::test]
async fn null_content_is_malformed() {
    let endpoint = MockEndpoint::raw(
        StatusCode::OK,
        r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#,
    );
    let base_url = endpoint.spawn().await;
    let service = service_for(&base_url, None, Duration::from_secs(5));

    let err = service.chat("hello").await.unwrap_err();
    assert_eq!(err.kind(), ChatErrorKind::MalformedResponse);
}

#[tokio::test]
async fn slow_endpoint_times_out() {
    let endpoint = MockEndpoint::replying("too late").with_delay(Duration::from_secs(3));
    let base_url = endpoint.spawn().await;
    let service = service_for(&base_url, None, Duration::from_millis(200));

    let err = service.chat("hello").await.unwrap_err();
    assert_eq!(err.kind(), ChatErrorKind::Timeout);
}

#[tokio::test]
async fn unreachable_endpoint_yields_error_text() {
    let base_url = closed_base_url().await;
    let service = service_for(&base_url, None, Duration::from_secs(5));

    let err = service.chat("hello").await.unwrap_err();
    assert_eq!(err.kind(), ChatErrorKind::Transport);

    let text = service.chat_text("hello").await;
    assert!(text.starts_with("An error occurred: request failed: "));
    assert!(text.contains(&err.to_string()));
}
