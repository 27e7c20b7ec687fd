use std::sync::Arc;

use axum::Router;
use taskdeck_service::LocalService;
use tokio::net::TcpListener;

use crate::routes::{build_router, AppState, InnerAppState};

/// Build a test router over an empty in-memory store, no CORS.
pub fn test_router() -> Router {
    let state: AppState = Arc::new(InnerAppState {
        service: LocalService::new(),
    });
    build_router(state, None).expect("router without cors origin always builds")
}

/// A running test server with base_url and background task handle.
pub struct TestServer {
    /// API root, e.g. "http://127.0.0.1:12345/api".
    pub base_url: String,
    _handle: tokio::task::JoinHandle<()>,
}

/// Spawn an axum test server on a random port.
pub async fn spawn_test_server() -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{addr}/api");
    let app = test_router();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    TestServer {
        base_url,
        _handle: handle,
    }
}
