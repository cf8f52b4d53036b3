use circuit_analyzer_gateway::QueryGateway;

#[derive(Clone)]
pub struct AppState {
    pub gateway: QueryGateway,
}
