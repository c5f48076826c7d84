//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with an [`AppState`](unionhub::server::model::app::AppState)
//! backed by the test database and the mock proxy server, and their responses are checked for
//! status and body.

mod alimtalk;
mod consent;
mod sync_job;
mod union;

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use unionhub::server::controller::util::json::ApiJson;
use unionhub_test_utils::prelude::*;

use crate::util::{body_json, TestContextExt};
