use crate::transport::http::types::{AppState, HealthResponse, ReadinessResponse};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;

#[utoipa::path(
    get,
    path = "/api/",
    responses(
        (status = 200, description = "API is running", body = HealthResponse)
    )
)]
pub async fn health_check_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        message: "Portfolio Photographique API is running".to_string(),
        timestamp: Utc::now(),
    })
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy (store reachable)", body = ReadinessResponse),
        (status = 503, description = "Service is unhealthy (store unreachable)", body = ReadinessResponse)
    )
)]
pub async fn readiness_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.service.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ReadinessResponse {
                success: true,
                data: serde_json::json!({ "status": "ok" }),
                error: None,
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadinessResponse {
                    success: false,
                    data: serde_json::json!({ "status": "unhealthy" }),
                    error: Some("document store unreachable".to_string()),
                }),
            )
        }
    }
}
