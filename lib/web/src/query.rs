use crate::error::CircuitAnalyzerServerError;
use crate::AppState;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use circuit_analyzer_gateway::{QueryResponse, SPARQL_RESULTS_JSON};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct QueryRequest {
    pub sparql: String,
}

pub fn create_query_routes() -> Router<AppState> {
    Router::new().route("/run", post(handle_query_run))
}

pub async fn handle_query_run(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> Result<QueryResultsResponse, CircuitAnalyzerServerError> {
    let response = state.gateway.run(&request.sparql).await?;
    Ok(QueryResultsResponse(response))
}

/// Relays the body of the triple-store's answer unchanged.
pub struct QueryResultsResponse(QueryResponse);

impl IntoResponse for QueryResultsResponse {
    fn into_response(self) -> Response {
        let content_type = self
            .0
            .content_type
            .unwrap_or_else(|| SPARQL_RESULTS_JSON.to_owned());
        (StatusCode::OK, [(CONTENT_TYPE, content_type)], self.0.body).into_response()
    }
}
