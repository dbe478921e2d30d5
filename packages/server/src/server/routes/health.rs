use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    service: String,
}

/// Health check endpoint
///
/// The service is stateless with no backing stores, so liveness is the only
/// thing to report.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "mumbai-lead-generator".to_string(),
    })
}
