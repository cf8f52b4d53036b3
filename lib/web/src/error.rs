use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use circuit_analyzer_gateway::GatewayError;

#[derive(thiserror::Error, Debug)]
pub enum CircuitAnalyzerServerError {
    #[error("Query failed: {0}")]
    Gateway(#[from] GatewayError),
}

impl IntoResponse for CircuitAnalyzerServerError {
    fn into_response(self) -> Response {
        let status = match &self {
            CircuitAnalyzerServerError::Gateway(error) => match error {
                GatewayError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
                GatewayError::Status { .. }
                | GatewayError::Transport(_)
                | GatewayError::InvalidResults(_) => StatusCode::BAD_GATEWAY,
                GatewayError::InvalidEndpoint { .. } | GatewayError::Client(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
        };

        tracing::error!(%status, error = %self, "Request failed");
        (status, self.to_string()).into_response()
    }
}
