//! Mock alimtalk proxy endpoints.
//!
//! Mocks are registered on the context's mockito server and verify they were called the
//! expected number of times once passed to `assert_mocks` (or asserted directly).

use mockito::Mock;

use crate::TestContext;

/// Path of the bulk upload hand-off endpoint on the proxy.
pub static BULK_UPLOAD_PATH: &str = "/api/consent/bulk-upload";
/// Path of the templated message endpoint on the proxy.
pub static SEND_MESSAGE_PATH: &str = "/api/alimtalk/send";

impl TestContext {
    pub fn proxy<'a>(&'a mut self) -> ProxyFixtures<'a> {
        ProxyFixtures { setup: self }
    }
}

pub struct ProxyFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> ProxyFixtures<'a> {
    /// Create a mock POST endpoint for the bulk upload hand-off.
    ///
    /// # Arguments
    /// - `status` - HTTP status the proxy answers with
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_bulk_upload_endpoint(&mut self, status: usize, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("POST", BULK_UPLOAD_PATH)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(r#"{"accepted":true}"#)
            .expect(expected_requests)
            .create()
    }

    /// Create a mock POST endpoint for templated message delivery.
    ///
    /// # Arguments
    /// - `response` - JSON body returned for every request, e.g. `{"success":true,"channel":"KAKAO"}`
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_send_message_endpoint(
        &mut self,
        response: serde_json::Value,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", SEND_MESSAGE_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(response.to_string())
            .expect(expected_requests)
            .create()
    }
}
