//! Minimal HTTP service exposing a greeting and a health check.
//!
//! `GET /` answers with a plain-text greeting, `GET /health` with a fixed
//! JSON status. Both handlers are pure and stateless. The router also carries a
//! Prometheus `/metrics` endpoint plus request tracing.

pub mod config;
pub mod error;
pub mod routes;

use axum::Router;
use axum::middleware;
use axum::routing::get;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use error::{ConfigError, ServerError};

/// Creates the Axum application router with all routes.
///
/// Requests to `/` and `/health` are counted per route by a route layer;
/// scrapes of `/metrics` are not.
pub fn create_app(metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/", get(routes::root::hello))
        .route("/health", get(routes::health::check))
        .route_layer(middleware::from_fn(routes::metrics::track_requests))
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Installs the global Prometheus recorder and returns its render handle.
///
/// Only one recorder may be installed per process; a second call fails.
pub fn install_metrics_recorder() -> error::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    Ok(handle)
}
