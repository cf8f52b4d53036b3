#![cfg(test)]

use circuit_analyzer_gateway::{GatewayConfig, GatewayError, QueryGateway, SPARQL_RESULTS_JSON};
use std::time::{Duration, Instant};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const RESULTS: &str = r#"{ "head": { "vars": ["dev"] },
  "results": { "bindings": [ { "dev": { "type": "uri", "value": "http://example.org/ckt#M1" } } ] } }"#;

const QUERY: &str = "SELECT ?dev WHERE { ?dev a <http://example.org/ckt#Device> }";

fn gateway(server: &MockServer, timeout: Duration) -> QueryGateway {
    let config = GatewayConfig::new(&format!("{}/dataset/query", server.uri()))
        .unwrap()
        .with_timeout(timeout);
    QueryGateway::new(config).unwrap()
}

#[tokio::test]
async fn relays_results_unmodified() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/dataset/query"))
        .and(header("accept", SPARQL_RESULTS_JSON))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("query=SELECT"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(RESULTS, SPARQL_RESULTS_JSON))
        .expect(1)
        .mount(&server)
        .await;

    let response = gateway(&server, Duration::from_secs(5))
        .run(QUERY)
        .await
        .unwrap();

    assert_eq!(response.body, RESULTS.as_bytes());
    assert_eq!(response.content_type.as_deref(), Some(SPARQL_RESULTS_JSON));
}

#[tokio::test]
async fn propagates_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Parse error: unexpected '}'"))
        .mount(&server)
        .await;

    let error = gateway(&server, Duration::from_secs(5))
        .run("SELECT {")
        .await
        .unwrap_err();

    match error {
        GatewayError::Status { status, body } => {
            assert_eq!(status.as_u16(), 400);
            assert!(body.contains("Parse error"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn keeps_status_when_error_body_is_cut_off() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buffer = [0; 1024];
        while !String::from_utf8_lossy(&request).contains("query=") {
            let read = socket.read(&mut buffer).await.unwrap();
            if read == 0 {
                return;
            }
            request.extend_from_slice(&buffer[..read]);
        }
        // Announces more body than is sent before the connection is closed.
        socket
            .write_all(b"HTTP/1.1 503 Service Unavailable\r\ncontent-length: 100\r\n\r\nbusy")
            .await
            .unwrap();
    });

    let config = GatewayConfig::new(&format!("http://{address}/dataset/query"))
        .unwrap()
        .with_timeout(Duration::from_secs(5));
    let error = QueryGateway::new(config)
        .unwrap()
        .run(QUERY)
        .await
        .unwrap_err();

    match error {
        GatewayError::Status { status, .. } => assert_eq!(status.as_u16(), 503),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(RESULTS, SPARQL_RESULTS_JSON)
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let start = Instant::now();
    let error = gateway(&server, Duration::from_millis(200))
        .run(QUERY)
        .await
        .unwrap_err();

    assert!(matches!(error, GatewayError::Timeout(_)), "{error}");
    assert!(start.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn rejects_non_json_results() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy login</html>"))
        .mount(&server)
        .await;

    let error = gateway(&server, Duration::from_secs(5))
        .run(QUERY)
        .await
        .unwrap_err();

    assert!(matches!(error, GatewayError::InvalidResults(_)), "{error}");
}

#[tokio::test]
async fn unreachable_endpoint() {
    let config = GatewayConfig::new("http://127.0.0.1:1/dataset/query")
        .unwrap()
        .with_timeout(Duration::from_secs(5));
    let error = QueryGateway::new(config)
        .unwrap()
        .run(QUERY)
        .await
        .unwrap_err();

    assert!(
        matches!(error, GatewayError::Transport(_) | GatewayError::Timeout(_)),
        "{error}"
    );
}
