//! Forwards SPARQL queries to the query endpoint of a triple-store and relays its results.

mod config;
mod error;
mod gateway;

pub use config::{GatewayConfig, DEFAULT_QUERY_ENDPOINT, DEFAULT_TIMEOUT, QUERY_ENDPOINT_ENV};
pub use error::GatewayError;
pub use gateway::{QueryGateway, QueryResponse, SPARQL_RESULTS_JSON};
