//! Integration tests for the status server.

use std::sync::Arc;
use std::sync::OnceLock;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use metrics_exporter_prometheus::PrometheusHandle;
use probe_store::{ConnectionHealth, InMemoryProbeStore};
use tower::ServiceExt;

static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

fn get_metrics_handle() -> PrometheusHandle {
    METRICS_HANDLE
        .get_or_init(|| {
            let builder = metrics_exporter_prometheus::PrometheusBuilder::new();
            builder
                .install_recorder()
                .expect("failed to install Prometheus recorder")
        })
        .clone()
}

fn setup() -> (axum::Router, InMemoryProbeStore, ConnectionHealth) {
    let store = InMemoryProbeStore::new();
    let health = ConnectionHealth::new();
    let state = Arc::new(api::AppState {
        store: store.clone(),
        health: health.clone(),
    });
    let app = api::create_app(state, get_metrics_handle());
    (app, store, health)
}

async fn get_message(app: axum::Router) -> serde_json::Value {
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/message")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_root_liveness() {
    let (app, _, _) = setup();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"Status server is running!");
}

#[tokio::test]
async fn test_disconnected_reports_false_and_skips_write() {
    let (app, store, _) = setup();
    // No monitor tick has happened yet: health starts disconnected.

    let json = get_message(app).await;
    assert_eq!(json["message"], "Hello from the backend!");
    assert_eq!(json["databaseConnected"], false);
    assert_eq!(json["error"], serde_json::Value::Null);
    assert_eq!(store.probe_count().await, 0);
}

#[tokio::test]
async fn test_disconnect_default_message_surfaces() {
    let (app, store, health) = setup();
    health.mark_connected().await;
    health.mark_disconnected().await;

    let json = get_message(app).await;
    assert_eq!(json["databaseConnected"], false);
    assert_eq!(json["error"], "database disconnected unexpectedly");
    assert_eq!(store.probe_count().await, 0);
}

#[tokio::test]
async fn test_connected_write_succeeds_with_null_error() {
    let (app, store, health) = setup();
    health.mark_connected().await;

    let json = get_message(app).await;
    assert_eq!(json["databaseConnected"], true);
    assert_eq!(json["error"], serde_json::Value::Null);
    assert_eq!(store.probe_count().await, 1);
}

#[tokio::test]
async fn test_write_failure_shadows_error_for_one_response() {
    let (app, store, health) = setup();
    health.mark_connected().await;
    store.fail_writes_with(Some("disk full")).await;

    let json = get_message(app.clone()).await;
    assert_eq!(json["databaseConnected"], true);
    assert_eq!(json["error"], "Probe write failed: disk full");

    // The write failure is response-local: nothing was stored process-wide.
    assert_eq!(health.last_error().await, None);

    store.fail_writes_with(None).await;
    let json = get_message(app).await;
    assert_eq!(json["error"], serde_json::Value::Null);
    assert_eq!(store.probe_count().await, 1);
}

#[tokio::test]
async fn test_connection_error_surfaces_until_reconnect() {
    let (app, _, health) = setup();
    health.record_error("connection refused").await;

    let json = get_message(app.clone()).await;
    assert_eq!(json["databaseConnected"], false);
    assert_eq!(json["error"], "connection refused");

    health.mark_connected().await;
    let json = get_message(app).await;
    assert_eq!(json["databaseConnected"], true);
    assert_eq!(json["error"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_metrics_endpoint_renders() {
    let (app, _, _) = setup();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/metrics")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
