//! Shared helpers for integration tests.

use std::time::Duration;

use axum::response::Response;
use unionhub::server::{model::app::AppState, proxy::ProxyClient};
use unionhub_test_utils::{constant::TEST_PUBLIC_BASE_URL, TestContext};

/// Extension trait for TestContext to create an AppState wired to the mock proxy
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        let proxy = ProxyClient::new(&self.proxy_url(), Duration::from_secs(5))
            .expect("Failed to build proxy client");

        AppState {
            db: self.db.clone(),
            proxy,
            public_base_url: TEST_PUBLIC_BASE_URL.to_string(),
        }
    }
}

/// Reads a response body as JSON
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Response body is not JSON")
}
