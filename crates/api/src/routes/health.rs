//! Health check endpoint.

use axum::Json;
use serde::Serialize;

/// Status reported while the process is serving requests.
pub const STATUS_UP: &str = "UP";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /health — returns system health status.
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse { status: STATUS_UP })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_check_serializes_status_only() {
        let Json(response) = check().await;
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "UP" }));
    }
}
