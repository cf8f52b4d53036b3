use reqwest::StatusCode;
use thiserror::Error;

/// An error that occurred while forwarding a query to the triple-store.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Invalid query endpoint '{endpoint}': {source}")]
    InvalidEndpoint {
        endpoint: String,
        source: url::ParseError,
    },
    #[error("Could not create HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("The query endpoint responded with {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("The query endpoint did not respond in time")]
    Timeout(#[source] reqwest::Error),
    #[error("Could not reach the query endpoint: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("The query endpoint returned results that are not JSON: {0}")]
    InvalidResults(#[source] serde_json::Error),
}

impl GatewayError {
    /// Classifies an error raised by [reqwest] while sending a request or reading its body.
    pub(crate) fn from_request(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            GatewayError::Timeout(error)
        } else {
            GatewayError::Transport(error)
        }
    }
}
