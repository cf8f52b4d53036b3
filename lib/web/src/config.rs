use circuit_analyzer_gateway::GatewayConfig;

/// Upper bound for request bodies. Netlists and queries are text, so this is generous.
pub const MAX_REQUEST_BODY_SIZE: usize = 1024 * 1024 * 16; // 16MB

/// Holds the configuration for a Circuit Analyzer web server.
pub struct ServerConfig {
    /// The IP address or DNS name that the socket binds to.
    pub bind: String,
    /// Whether CORS is enabled.
    pub cors: bool,
    /// Where and how queries are forwarded.
    pub gateway: GatewayConfig,
}
