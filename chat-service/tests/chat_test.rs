mod common;

use chat_service::services::providers::mock::MockChatProvider;
use common::TestApp;
use reqwest::{Client, Method};
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn chat_returns_completion() {
    let app = TestApp::spawn(Arc::new(MockChatProvider::new(true))).await;
    let client = Client::new();

    let response = client
        .post(&format!("{}/chat", app.address))
        .json(&json!({ "message": "Hello", "sessionId": "session-one" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    let message = body["message"].as_str().expect("message missing");
    // System block plus the new user message.
    assert!(message.contains("[2 prompt messages]"), "got: {}", message);
    assert!(message.ends_with("Hello"), "got: {}", message);

    app.cleanup().await;
}

#[tokio::test]
async fn history_replay_is_cumulative_per_session() {
    let app = TestApp::spawn(Arc::new(MockChatProvider::new(true))).await;
    let client = Client::new();
    let url = format!("{}/chat", app.address);

    let mut prompt_sizes = Vec::new();
    for text in ["first", "second", "third"] {
        let response = client
            .post(&url)
            .json(&json!({ "message": text, "sessionId": "session-grow" }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status().as_u16(), 200);

        let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
        prompt_sizes.push(body["message"].as_str().unwrap().to_string());
    }

    // Each successful exchange appends two turns, all replayed next time.
    assert!(prompt_sizes[0].contains("[2 prompt messages]"));
    assert!(prompt_sizes[1].contains("[4 prompt messages]"));
    assert!(prompt_sizes[2].contains("[6 prompt messages]"));

    app.cleanup().await;
}

#[tokio::test]
async fn sessions_are_isolated_by_id() {
    let app = TestApp::spawn(Arc::new(MockChatProvider::new(true))).await;
    let client = Client::new();
    let url = format!("{}/chat", app.address);

    for session_id in ["session-a", "session-b"] {
        let response = client
            .post(&url)
            .json(&json!({ "message": "hi", "sessionId": session_id }))
            .send()
            .await
            .expect("Failed to execute request");

        let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
        // A fresh session sees no replayed history.
        assert!(body["message"].as_str().unwrap().contains("[2 prompt messages]"));
    }

    app.cleanup().await;
}

#[tokio::test]
async fn missing_session_id_routes_to_shared_default_session() {
    let app = TestApp::spawn(Arc::new(MockChatProvider::new(true))).await;
    let client = Client::new();
    let url = format!("{}/chat", app.address);

    let first: serde_json::Value = client
        .post(&url)
        .json(&json!({ "message": "anonymous one" }))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");
    assert!(first["message"].as_str().unwrap().contains("[2 prompt messages]"));

    let second: serde_json::Value = client
        .post(&url)
        .json(&json!({ "message": "anonymous two" }))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");
    // The second anonymous call sees the first call's exchange replayed.
    assert!(second["message"].as_str().unwrap().contains("[4 prompt messages]"));

    app.cleanup().await;
}

#[tokio::test]
async fn empty_message_returns_400_and_mutates_nothing() {
    let app = TestApp::spawn(Arc::new(MockChatProvider::new(true))).await;
    let client = Client::new();
    let url = format!("{}/chat", app.address);

    let response = client
        .post(&url)
        .json(&json!({ "message": "", "sessionId": "session-empty" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status().as_u16(), 400);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Message is required");

    // Missing field behaves the same way.
    let response = client
        .post(&url)
        .json(&json!({ "sessionId": "session-empty" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status().as_u16(), 400);

    // The rejected calls left no history behind.
    let response: serde_json::Value = client
        .post(&url)
        .json(&json!({ "message": "now a real one", "sessionId": "session-empty" }))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");
    assert!(response["message"]
        .as_str()
        .unwrap()
        .contains("[2 prompt messages]"));

    app.cleanup().await;
}

#[tokio::test]
async fn upstream_failure_returns_500_with_details() {
    let app = TestApp::spawn(Arc::new(MockChatProvider::new(false))).await;
    let client = Client::new();

    let response = client
        .post(&format!("{}/chat", app.address))
        .json(&json!({ "message": "Hello", "sessionId": "session-down" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 500);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Internal Server Error");
    assert!(body["details"]
        .as_str()
        .expect("details missing")
        .contains("not enabled"));

    app.cleanup().await;
}

#[tokio::test]
async fn options_preflight_returns_cors_headers() {
    let app = TestApp::spawn(Arc::new(MockChatProvider::new(true))).await;
    let client = Client::new();

    let response = client
        .request(Method::OPTIONS, &format!("{}/chat", app.address))
        .header("Origin", "http://localhost:3000")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);

    let headers = response.headers();
    assert_eq!(
        headers
            .get("access-control-allow-origin")
            .expect("missing allow-origin"),
        "*"
    );
    let methods = headers
        .get("access-control-allow-methods")
        .expect("missing allow-methods")
        .to_str()
        .unwrap();
    assert!(methods.contains("GET") && methods.contains("POST") && methods.contains("OPTIONS"));
    let allowed_headers = headers
        .get("access-control-allow-headers")
        .expect("missing allow-headers")
        .to_str()
        .unwrap()
        .to_lowercase();
    assert!(allowed_headers.contains("content-type") && allowed_headers.contains("authorization"));

    app.cleanup().await;
}

#[tokio::test]
async fn chat_response_carries_permissive_origin() {
    let app = TestApp::spawn(Arc::new(MockChatProvider::new(true))).await;
    let client = Client::new();

    let response = client
        .post(&format!("{}/chat", app.address))
        .header("Origin", "http://localhost:3000")
        .json(&json!({ "message": "Hello" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .expect("missing allow-origin"),
        "*"
    );

    app.cleanup().await;
}
