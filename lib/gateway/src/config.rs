use crate::GatewayError;
use reqwest::Url;
use std::env;
use std::time::Duration;

/// Name of the environment variable that holds the query endpoint URL.
pub const QUERY_ENDPOINT_ENV: &str = "FUSEKI_QUERY_ENDPOINT";
pub const DEFAULT_QUERY_ENDPOINT: &str = "http://fuseki:3030/dataset/query";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Holds the configuration of a [QueryGateway](crate::QueryGateway).
#[derive(Clone, Debug)]
pub struct GatewayConfig {
    /// The SPARQL query endpoint of the triple-store.
    pub endpoint: Url,
    /// Upper bound for a whole request, from connecting until the body has been read.
    pub timeout: Duration,
}

impl GatewayConfig {
    /// Creates a configuration for `endpoint` with the [DEFAULT_TIMEOUT].
    pub fn new(endpoint: &str) -> Result<Self, GatewayError> {
        let endpoint = Url::parse(endpoint).map_err(|source| GatewayError::InvalidEndpoint {
            endpoint: endpoint.to_owned(),
            source,
        })?;
        Ok(Self {
            endpoint,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Reads the endpoint from [QUERY_ENDPOINT_ENV], falling back to [DEFAULT_QUERY_ENDPOINT].
    pub fn from_env() -> Result<Self, GatewayError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, GatewayError> {
        match lookup(QUERY_ENDPOINT_ENV) {
            Some(endpoint) if !endpoint.is_empty() => Self::new(&endpoint),
            _ => Self::new(DEFAULT_QUERY_ENDPOINT),
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
