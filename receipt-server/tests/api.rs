// receipt-server/tests/api.rs
// HTTP API 集成测试 (进程内调用，不走网络)

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use receipt_printer::encode_receipt;
use receipt_server::{Config, ServerState, build_app};
use serde_json::{Value, json};
use std::path::Path;
use tempfile::{NamedTempFile, TempDir};
use tower::ServiceExt;

fn state_for(device: &Path) -> ServerState {
    ServerState::new(&Config::with_device(device))
}

async fn send(state: ServerState, request: Request<Body>) -> (StatusCode, Value) {
    let response = build_app(state).oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

fn print_json(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/print")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn status_request() -> Request<Body> {
    Request::builder()
        .uri("/status")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_print_hello() {
    let device = NamedTempFile::new().unwrap();

    let (status, body) = send(state_for(device.path()), print_json(json!({"text": "Hello"}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "printed", "length": 5}));
    assert_eq!(std::fs::read(device.path()).unwrap(), encode_receipt("Hello"));
}

#[tokio::test]
async fn test_print_length_counts_characters() {
    let device = NamedTempFile::new().unwrap();

    let (status, body) = send(state_for(device.path()), print_json(json!({"text": "café 你好"}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["length"], 7);
}

#[tokio::test]
async fn test_print_empty_text() {
    let device = NamedTempFile::new().unwrap();

    let (status, body) = send(state_for(device.path()), print_json(json!({"text": ""}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "printed", "length": 0}));
    assert_eq!(std::fs::read(device.path()).unwrap().len(), 11);
}

#[tokio::test]
async fn test_print_plain_text_body() {
    let device = NamedTempFile::new().unwrap();
    let request = Request::builder()
        .method("POST")
        .uri("/print")
        .header(header::CONTENT_TYPE, "text/plain; charset=utf-8")
        .body(Body::from("Table 7\nTotal 12.00"))
        .unwrap();

    let (status, body) = send(state_for(device.path()), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["length"], 19);
    assert_eq!(
        std::fs::read(device.path()).unwrap(),
        encode_receipt("Table 7\nTotal 12.00")
    );
}

#[tokio::test]
async fn test_print_plain_text_content_type_is_case_insensitive() {
    let device = NamedTempFile::new().unwrap();
    let request = Request::builder()
        .method("POST")
        .uri("/print")
        .header(header::CONTENT_TYPE, "Text/Plain; Charset=UTF-8")
        .body(Body::from("Hello"))
        .unwrap();

    let (status, body) = send(state_for(device.path()), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "printed", "length": 5}));
    assert_eq!(std::fs::read(device.path()).unwrap(), encode_receipt("Hello"));
}

#[tokio::test]
async fn test_print_missing_device() {
    let dir = TempDir::new().unwrap();
    let device = dir.path().join("lp0");

    let (status, body) = send(state_for(&device), print_json(json!({"text": "Hello"}))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body["detail"].as_str().unwrap().is_empty());
    assert_eq!(body["code"], "device_not_found");
    assert!(!device.exists());
}

#[tokio::test]
async fn test_print_unwritable_device() {
    // A directory cannot be opened for writing, even as root
    let dir = TempDir::new().unwrap();

    let (status, body) = send(state_for(dir.path()), print_json(json!({"text": "Hello"}))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body["detail"].as_str().unwrap().is_empty());
    assert_eq!(body["code"], "write_failed");
}

#[tokio::test]
async fn test_print_rejects_malformed_body() {
    let device = NamedTempFile::new().unwrap();

    let (status, body) = send(state_for(device.path()), print_json(json!({"txt": "Hello"}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().unwrap().contains("text"));

    let request = Request::builder()
        .method("POST")
        .uri("/print")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, _) = send(state_for(device.path()), request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    // Nothing reached the device
    assert!(std::fs::read(device.path()).unwrap().is_empty());
}

#[tokio::test]
async fn test_repeated_prints_are_independent() {
    let device = NamedTempFile::new().unwrap();
    let state = state_for(device.path());

    for _ in 0..3 {
        let (status, body) = send(state.clone(), print_json(json!({"text": "Hello"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "printed", "length": 5}));
        assert_eq!(std::fs::read(device.path()).unwrap(), encode_receipt("Hello"));
    }
}

#[tokio::test]
async fn test_status_available() {
    let device = NamedTempFile::new().unwrap();

    let (status, body) = send(state_for(device.path()), status_request()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"printer_available": true}));
}

#[tokio::test]
async fn test_status_unavailable() {
    let dir = TempDir::new().unwrap();

    let (status, body) = send(state_for(&dir.path().join("lp0")), status_request()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"printer_available": false}));
}

#[tokio::test]
async fn test_status_path_under_regular_file() {
    let file = NamedTempFile::new().unwrap();

    let (status, body) = send(state_for(&file.path().join("lp0")), status_request()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"printer_available": false}));
}

#[cfg(unix)]
#[tokio::test]
async fn test_status_check_failure() {
    let dir = TempDir::new().unwrap();
    let device = dir.path().join("lp0");
    let other = dir.path().join("lp1");
    std::os::unix::fs::symlink(&other, &device).unwrap();
    std::os::unix::fs::symlink(&device, &other).unwrap();

    let (status, body) = send(state_for(&device), status_request()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body["detail"].as_str().unwrap().is_empty());
    assert_eq!(body["code"], "status_check_failed");
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let device = NamedTempFile::new().unwrap();

    let response = build_app(state_for(device.path()))
        .oneshot(status_request())
        .await
        .unwrap();

    assert!(response.headers().contains_key("x-request-id"));
}
