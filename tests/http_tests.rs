//! End-to-end tests driving the real router over HTTP.
//!
//! Each test spawns the service on an ephemeral port and issues
//! requests with reqwest, the same way the smoke-test client talks to
//! a deployed instance.

use std::net::SocketAddr;

use serde_json::{json, Value};

use podling::config::Config;
use podling::routes::create_router;
use podling::state::AppState;
use podling::templates::init_templates;

fn test_config() -> Config {
    Config {
        secret_key: "test-secret".to_string(),
        app_name: "TestApp".to_string(),
        app_version: "9.9.9".to_string(),
        environment: "test".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        debug: false,
    }
}

/// Spawns the service on an ephemeral port and returns its base URL.
async fn spawn_app() -> String {
    let tera = init_templates().expect("failed to load templates");
    let state = AppState::new(test_config(), tera);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind test listener");
    let addr = listener.local_addr().expect("failed to read local addr");

    tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .expect("test server exited");
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn home_page_returns_html() {
    let base_url = spawn_app().await;

    let response = reqwest::get(&base_url).await.unwrap();
    assert_eq!(response.status(), 200);

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let body = response.text().await.unwrap();
    assert!(body.contains("TestApp"));
    assert!(body.contains("9.9.9"));
}

#[tokio::test]
async fn health_reports_configured_identity() {
    let base_url = spawn_app().await;

    let response = reqwest::get(format!("{}/health", base_url)).await.unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["app_name"], "TestApp");
    assert_eq!(body["version"], "9.9.9");
    assert_eq!(body["environment"], "test");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn health_is_stable_across_calls() {
    let base_url = spawn_app().await;

    let first: Value = reqwest::get(format!("{}/health", base_url))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let second: Value = reqwest::get(format!("{}/health", base_url))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(first["status"], second["status"]);
    assert_eq!(first["app_name"], second["app_name"]);
    assert_eq!(first["version"], second["version"]);
}

#[tokio::test]
async fn api_info_reflects_the_request() {
    let base_url = spawn_app().await;

    let client = reqwest::Client::new();
    let response = client
        .get(format!("{}/api/info", base_url))
        .header("x-demo", "smoke")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["application"]["name"], "TestApp");
    assert_eq!(body["application"]["version"], "9.9.9");
    assert!(body["system"]["hostname"].is_string());
    assert!(body["system"]["platform"].is_string());
    assert_eq!(body["request"]["method"], "GET");
    assert_eq!(body["request"]["headers"]["x-demo"], "smoke");
    assert!(body["request"]["remote_addr"]
        .as_str()
        .unwrap()
        .starts_with("127.0.0.1"));
    assert!(body["request"]["url"]
        .as_str()
        .unwrap()
        .ends_with("/api/info"));
}

#[tokio::test]
async fn echo_round_trips_json() {
    let base_url = spawn_app().await;

    let payload = json!({"a": 1});
    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/api/echo", base_url))
        .json(&payload)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Echo response");
    assert_eq!(body["received_data"], payload);
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn echo_parses_form_bodies() {
    let base_url = spawn_app().await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/api/echo", base_url))
        .form(&[("a", "1"), ("b", "2")])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["received_data"], json!({"a": "1", "b": "2"}));
}

#[tokio::test]
async fn echo_rejects_malformed_json() {
    let base_url = spawn_app().await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/api/echo", base_url))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Bad Request");
    assert!(body["message"].is_string());
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn echo_accepts_an_empty_body() {
    let base_url = spawn_app().await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/api/echo", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["received_data"], json!({}));
}

#[tokio::test]
async fn unknown_path_returns_json_not_found() {
    let base_url = spawn_app().await;

    let response = reqwest::get(format!("{}/nonexistent-path", base_url))
        .await
        .unwrap();
    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Not Found");
    assert!(body["message"].is_string());
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn status_page_shows_system_info() {
    let base_url = spawn_app().await;

    let response = reqwest::get(format!("{}/status", base_url)).await.unwrap();
    assert_eq!(response.status(), 200);

    let body = response.text().await.unwrap();
    assert!(body.contains("TestApp"));
    assert!(body.contains("Hostname"));
    assert!(body.contains("healthy"));
}
