use axum::extract::DefaultBodyLimit;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

mod config;
mod error;
mod health;
mod patterns;
mod query;
mod state;

use crate::config::MAX_REQUEST_BODY_SIZE;
use crate::health::handle_health;
use crate::patterns::create_patterns_routes;
use crate::query::create_query_routes;
use circuit_analyzer_gateway::QueryGateway;
pub use config::ServerConfig;
pub use error::CircuitAnalyzerServerError;
pub use query::QueryRequest;
pub use state::AppState;

/// Binds to the configured address and serves the API until the process is stopped.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let app_state = AppState {
        gateway: QueryGateway::new(config.gateway)?,
    };

    let app = create_router(app_state);
    let app = if config.cors {
        app.layer(tower_http::cors::CorsLayer::permissive())
    } else {
        app
    };

    let listener = tokio::net::TcpListener::bind(&config.bind).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening");
    Ok(axum::serve(listener, app).await?)
}

/// Creates the router of the Circuit Analyzer API.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .nest("/patterns", create_patterns_routes())
        .nest("/query", create_query_routes())
        .with_state(app_state)
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_SIZE))
        .layer(TraceLayer::new_for_http())
}
