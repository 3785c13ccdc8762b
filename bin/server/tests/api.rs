//! Integration tests for the HTTP surface: routing, JSON contracts, and the
//! never-throws error behavior of the four text operations.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use clap::Parser as _;
use serde_json::{Value, json};
use tower::util::ServiceExt; // for `oneshot`

use textpolish_core::{ChatApi, ChatRequest, UpstreamError};
use textpolish_server::api::{build_app, state::AppState};
use textpolish_server::opts::HttpOpts;

/// Upstream double: echoes a canned reply and counts calls.
struct EchoApi {
    reply: &'static str,
    calls: AtomicUsize,
}

impl EchoApi {
    fn new(reply: &'static str) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait::async_trait]
impl ChatApi for EchoApi {
    async fn complete(&self, _req: ChatRequest) -> Result<String, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.reply.to_owned())
    }
}

struct ThrottledApi;

#[async_trait::async_trait]
impl ChatApi for ThrottledApi {
    async fn complete(&self, _req: ChatRequest) -> Result<String, UpstreamError> {
        Err(UpstreamError::RateLimited)
    }
}

fn setup_app(upstream: Option<Arc<dyn ChatApi>>) -> axum::Router {
    let opts = HttpOpts::try_parse_from(["test"]).expect("default opts parse");
    build_app(&opts, AppState::new(upstream)).expect("app builds")
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("parse JSON")
}

#[tokio::test]
async fn healthz_answers_ok() {
    let app = setup_app(None);
    let response = app
        .oneshot(
            Request::builder()
                .uri("/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn infoz_reports_name_and_version() {
    let app = setup_app(None);
    let response = app
        .oneshot(
            Request::builder()
                .uri("/infoz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let info: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(info["name"], "textpolish-server");
}

#[tokio::test]
async fn correct_happy_path_returns_text_and_suggestions() {
    let api = EchoApi::new("I went to the store yesterday.");
    let app = setup_app(Some(api.clone()));

    let response = app
        .oneshot(post_json(
            "/api/correct",
            json!({ "text": "i has went to the store yesterday." }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["correctedText"], "I went to the store yesterday.");
    let suggestions = body["suggestions"].as_array().unwrap();
    assert!(!suggestions.is_empty() && suggestions.len() <= 5);
    // Correction call plus suggestion call.
    assert_eq!(api.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn over_cap_text_fails_without_calling_upstream() {
    let api = EchoApi::new("unused");
    let app = setup_app(Some(api.clone()));

    let response = app
        .oneshot(post_json(
            "/api/correct",
            json!({ "text": "a".repeat(5001) }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["success"], false);
    assert!(
        body["error"].as_str().unwrap().contains("Text is too long"),
        "{body}"
    );
    assert_eq!(api.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn tone_result_comes_back_trimmed() {
    let api = EchoApi::new("  Hello, how are you doing?  ");
    let app = setup_app(Some(api));

    let response = app
        .oneshot(post_json(
            "/api/tone",
            json!({ "text": "hey whats up", "tone": "formal" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["result"], "Hello, how are you doing?");
}

#[tokio::test]
async fn unknown_tone_variant_is_rejected_by_the_extractor() {
    let app = setup_app(Some(EchoApi::new("unused")));
    let response = app
        .oneshot(post_json(
            "/api/tone",
            json!({ "text": "hello", "tone": "sarcastic" }),
        ))
        .await
        .unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn summarize_accepts_all_lengths() {
    for length in ["short", "medium", "long"] {
        let app = setup_app(Some(EchoApi::new("A summary.")));
        let response = app
            .oneshot(post_json(
                "/api/summarize",
                json!({ "text": "a long article", "length": length }),
            ))
            .await
            .unwrap();
        let body = extract_json(response.into_body()).await;
        assert_eq!(body["success"], true, "length {length}: {body}");
        assert_eq!(body["result"], "A summary.");
    }
}

#[tokio::test]
async fn missing_api_key_reports_configuration_not_network() {
    let app = setup_app(None);
    let response = app
        .oneshot(post_json("/api/expand", json!({ "text": "short note" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["success"], false);
    assert!(
        body["error"].as_str().unwrap().contains("OPENAI_API_KEY"),
        "{body}"
    );
}

#[tokio::test]
async fn throttled_upstream_surfaces_the_rate_limit_message() {
    let app = setup_app(Some(Arc::new(ThrottledApi)));
    let response = app
        .oneshot(post_json(
            "/api/summarize",
            json!({ "text": "a long article", "length": "short" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["success"], false);
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .starts_with("Rate limit exceeded"),
        "{body}"
    );
}
