//! Database status endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use probe_store::{ProbeRecord, ProbeStore};
use serde::Serialize;

use crate::AppState;

/// Wire format of the status response. Always served with HTTP 200; database
/// trouble shows up in the body, never as an error status.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub message: String,
    pub database_connected: bool,
    pub error: Option<String>,
}

/// GET /api/message — reports database connectivity and the freshest known
/// error.
///
/// When connected, attempts one disposable probe write. A write failure
/// shadows the stored connection error for this response only; it is never
/// stored process-wide. When disconnected, no write is attempted.
pub async fn get<S: ProbeStore>(State(state): State<Arc<AppState<S>>>) -> Json<MessageResponse> {
    let snapshot = state.health.snapshot().await;
    let connected = snapshot.state.is_connected();
    let mut error = snapshot.last_error;

    if connected {
        let record = ProbeRecord::new("api");
        match state.store.insert_probe(&record).await {
            Ok(()) => {
                metrics::counter!("probe_writes_total").increment(1);
            }
            Err(err) => {
                tracing::warn!(error = %err, probe_id = %record.id, "probe write failed");
                metrics::counter!("probe_write_failures_total").increment(1);
                error = Some(err.to_string());
            }
        }
    }

    Json(MessageResponse {
        message: "Hello from the backend!".to_string(),
        database_connected: connected,
        error,
    })
}
