use crate::models::HealthResponse;
use axum::Json;

/// Liveness probe; never touches the upstream
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
