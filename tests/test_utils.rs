//! Shared mock Portainer server for the integration tests.
//!
//! Each test builds an axum router with the routes it cares about and serves
//! it on an ephemeral port; every request that reaches the server is recorded
//! so tests can assert on headers and query strings.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::Router;
use portainer_client::PortainerConfig;

/// One request as seen by the mock server
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
}

/// Handle onto the requests the mock server has served so far
#[derive(Clone, Default)]
pub struct RequestLog {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

#[allow(dead_code)]
impl RequestLog {
    pub fn recorded(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("request log lock").clone()
    }

    pub fn last(&self) -> RecordedRequest {
        self.recorded()
            .last()
            .cloned()
            .expect("mock server has served at least one request")
    }
}

async fn record(State(log): State<RequestLog>, request: Request, next: Next) -> Response {
    let recorded = RecordedRequest {
        method: request.method().to_string(),
        path: request.uri().path().to_string(),
        query: request.uri().query().map(str::to_string),
        authorization: request
            .headers()
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string),
    };
    log.requests
        .lock()
        .expect("request log lock")
        .push(recorded);

    next.run(request).await
}

/// Serve `router` on an ephemeral port, recording every request.
#[allow(dead_code)]
pub async fn spawn_mock_portainer(router: Router) -> (SocketAddr, RequestLog) {
    let log = RequestLog::default();
    let app = router.layer(middleware::from_fn_with_state(log.clone(), record));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock server");
    let addr = listener.local_addr().expect("mock server address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve mock server");
    });

    (addr, log)
}

/// Client configuration pointing at the mock server.
#[allow(dead_code)]
pub fn config_for(addr: SocketAddr) -> PortainerConfig {
    PortainerConfig {
        host: addr.ip().to_string(),
        port: addr.port(),
        schema: "http".to_string(),
        username: "admin".to_string(),
        password: "tryharder".to_string(),
        base_path: "/api".to_string(),
        ..Default::default()
    }
}
