//! Prometheus metrics: the request-counting layer and the scrape endpoint.

use axum::extract::{MatchedPath, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use metrics_exporter_prometheus::PrometheusHandle;

const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Counter incremented once per routed request, labelled by route template.
pub const REQUESTS_TOTAL: &str = "http_requests_total";

/// Route-layer middleware counting requests per matched route.
///
/// Must be installed with `Router::route_layer` so `MatchedPath` is already
/// set; requests that match no route are not counted.
pub async fn track_requests(request: Request, next: Next) -> Response {
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_owned());

    let response = next.run(request).await;

    if let Some(route) = route {
        ::metrics::counter!(REQUESTS_TOTAL, "route" => route).increment(1);
    }
    response
}

/// GET /metrics — renders request counters in Prometheus text format.
pub async fn get(State(handle): State<PrometheusHandle>) -> impl IntoResponse {
    ([(CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE)], handle.render())
}

/// Reads the value of one series from a Prometheus text scrape.
///
/// `series` is the metric name with its rendered labels, e.g.
/// `http_requests_total{route="/"}`. Returns `None` when the series is absent.
pub fn series_value(scrape: &str, series: &str) -> Option<f64> {
    scrape.lines().find_map(|line| {
        let value = line.strip_prefix(series)?.strip_prefix(' ')?;
        value.trim().parse().ok()
    })
}
