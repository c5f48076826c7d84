use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Failures talking to the alimtalk proxy.
///
/// Callers that have a fallback (bulk upload hand-off, per-recipient delivery) absorb these;
/// anything that reaches a handler is reported as a 500.
#[derive(Error, Debug)]
pub enum ProxyError {
    /// Transport failure or timeout
    #[error("Failed to reach alimtalk proxy: {0}")]
    Request(#[from] reqwest::Error),
    /// Non-2xx response
    #[error("Alimtalk proxy responded with status {status}: {body}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body, possibly empty
        body: String,
    },
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
