//! Error types for the unionhub server.
//!
//! Domain errors (configuration, request validation, missing resources, proxy failures) are
//! split into their own enums and aggregated into [`Error`] together with the library errors
//! the server propagates. All of them implement `IntoResponse` so handlers can return
//! `Result<_, Error>` and rely on `?`.

/// Environment configuration errors
pub mod config;
/// Missing resource errors (404)
pub mod not_found;
/// Alimtalk proxy errors
pub mod proxy;
/// Request validation errors (400)
pub mod validation;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        config::ConfigError, not_found::NotFoundError, proxy::ProxyError,
        validation::ValidationError,
    },
};

/// Main error type for the unionhub server.
///
/// Uses `thiserror`'s `#[from]` attribute so the underlying error types convert via `?`.
///
/// # Error Categories
/// - Request validation failures (400)
/// - Missing tenant resources (404)
/// - Configuration and proxy failures (500)
/// - External library errors (database, JSON, IO) (500)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Request body or path failed validation.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// A referenced resource does not exist.
    #[error(transparent)]
    NotFoundError(#[from] NotFoundError),
    /// The alimtalk proxy could not be reached or answered with an error.
    #[error(transparent)]
    ProxyError(#[from] ProxyError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in unionhub's code.
    #[error("Internal error with unionhub's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// JSON serialization error.
    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
    /// IO error (socket binding, server shutdown).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For [`ValidationError`]
/// - 404 Not Found - For [`NotFoundError`]
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::NotFoundError(err) => err.into_response(),
            Self::ProxyError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Malformed or mistyped JSON bodies are client errors answered with an [`ErrorDto`].
impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        ValidationError::InvalidBody(rejection.body_text()).into()
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the client
/// so implementation details are not leaked.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
