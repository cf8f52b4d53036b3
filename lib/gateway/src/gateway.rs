use crate::{GatewayConfig, GatewayError};
use bytes::Bytes;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Url};
use serde::de::IgnoredAny;
use std::time::Instant;

/// Media type of the SPARQL 1.1 Query Results JSON format.
pub const SPARQL_RESULTS_JSON: &str = "application/sparql-results+json";

/// Sends SPARQL queries to a triple-store.
///
/// Cloning is cheap; all clones share the same connection pool.
#[derive(Clone, Debug)]
pub struct QueryGateway {
    client: Client,
    endpoint: Url,
}

/// The successful answer of the triple-store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryResponse {
    /// The `Content-Type` the endpoint declared, if any.
    pub content_type: Option<String>,
    /// The response body exactly as it was received.
    pub body: Bytes,
}

impl QueryGateway {
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(GatewayError::Client)?;
        Ok(Self {
            client,
            endpoint: config.endpoint,
        })
    }

    /// POSTs `sparql` as the `query` form field and returns the endpoint's JSON results.
    ///
    /// There is no retry. A non-success status, a timeout, a transport error, or a body that is
    /// not JSON is returned as a [GatewayError].
    pub async fn run(&self, sparql: &str) -> Result<QueryResponse, GatewayError> {
        let start = Instant::now();
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(ACCEPT, SPARQL_RESULTS_JSON)
            .form(&[("query", sparql)])
            .send()
            .await
            .map_err(GatewayError::from_request)?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        if !status.is_success() {
            tracing::warn!(endpoint = %self.endpoint, %status, "Query endpoint returned an error");
            // The status is the error; a body that cannot be read is left out.
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Status { status, body });
        }

        let body = response
            .bytes()
            .await
            .map_err(GatewayError::from_request)?;

        serde_json::from_slice::<IgnoredAny>(&body).map_err(GatewayError::InvalidResults)?;

        tracing::debug!(
            endpoint = %self.endpoint,
            bytes = body.len(),
            elapsed_ms = start.elapsed().as_millis(),
            "Query evaluated"
        );
        Ok(QueryResponse { content_type, body })
    }
}
