use crate::AppState;
use axum::routing::post;
use axum::{Json, Router};
use circuit_analyzer_patterns::{translate, SubcircuitDefinition, Translation};

pub fn create_patterns_routes() -> Router<AppState> {
    Router::new().route("/translate", post(handle_translate))
}

pub async fn handle_translate(Json(definition): Json<SubcircuitDefinition>) -> Json<Translation> {
    let translation = translate(&definition);
    tracing::info!(
        pattern = %translation.pattern,
        source = ?translation.source,
        "Translated subcircuit"
    );
    Json(translation)
}
