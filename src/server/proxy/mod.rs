//! Client for the alimtalk/SMS proxy service.
//!
//! The proxy fronts two things unionhub does not run itself: the asynchronous bulk upload
//! worker and the kakao alimtalk / SMS provider. Both are reached over plain JSON HTTP.

pub mod channel;

use std::time::Duration;

use serde::Serialize;

use crate::{
    model::consent::BulkUploadRowDto,
    server::{config::trim_base_url, error::proxy::ProxyError},
};

/// Path of the external bulk upload worker endpoint.
pub static BULK_UPLOAD_PATH: &str = "/api/consent/bulk-upload";
/// Path of the templated message endpoint.
pub static SEND_MESSAGE_PATH: &str = "/api/alimtalk/send";

/// Body handed to the external bulk upload worker.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkUploadHandoff<'a> {
    /// Sync job tracking the batch
    pub job_id: i32,
    /// Union the rows belong to
    pub union_id: i32,
    /// Stage the rows record consent for
    pub stage_id: i32,
    /// Uploaded rows
    pub data: &'a [BulkUploadRowDto],
}

/// HTTP client bound to the proxy base URL.
///
/// Cheap to clone; the inner `reqwest::Client` shares its connection pool.
#[derive(Clone, Debug)]
pub struct ProxyClient {
    http: reqwest::Client,
    base_url: String,
}

impl ProxyClient {
    /// Builds a client whose requests all time out after `timeout`.
    ///
    /// # Arguments
    /// - `base_url` - Proxy base URL, trailing slashes are ignored
    /// - `timeout` - Connect and overall request timeout
    ///
    /// # Returns
    /// - `Ok(ProxyClient)` - Client ready to use
    /// - `Err(ProxyError::Request)` - The TLS backend failed to initialize
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ProxyError> {
        let http = reqwest::Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: trim_base_url(base_url),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Hands a bulk upload off to the external worker.
    ///
    /// Only a 2xx response counts as accepted; the response body is ignored.
    pub async fn dispatch_bulk_upload(
        &self,
        handoff: &BulkUploadHandoff<'_>,
    ) -> Result<(), ProxyError> {
        let response = self
            .http
            .post(self.url(BULK_UPLOAD_PATH))
            .json(handoff)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(
                job_id = handoff.job_id,
                rows = handoff.data.len(),
                "Bulk upload accepted by proxy"
            );

            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();

        Err(ProxyError::UnexpectedStatus {
            status: status.as_u16(),
            body,
        })
    }
}
