//! HTTP status server for the database status service.
//!
//! One JSON endpoint reports live database connectivity, the freshest known
//! connection error, and performs a best-effort probe write per request,
//! with structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use metrics_exporter_prometheus::PrometheusHandle;
use probe_store::{ConnectionHealth, ProbeStore};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state: the probe store and the connection health it is
/// monitored into.
pub struct AppState<S> {
    pub store: S,
    pub health: ConnectionHealth,
}

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S: ProbeStore + 'static>(
    state: Arc<AppState<S>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/", get(routes::root::get))
        .route("/api/message", get(routes::message::get::<S>))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
