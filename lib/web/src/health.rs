use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
}

/// Liveness check. Does not contact the triple-store.
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
