//! HTTP controller endpoints for the unionhub web API.
//!
//! Axum handlers for bulk consent uploads, consent reminders, alimtalk pricing and logs, and
//! the union administration surface. Handlers build the service they need from
//! [`AppState`](crate::server::model::app::AppState), delegate to it, and let
//! [`Error`](crate::server::error::Error) map failures to responses. Every handler carries a
//! utoipa annotation collected into the OpenAPI document.

/// Consent reminders, pricing, templates and send logs
pub mod alimtalk;
/// Bulk consent uploads, consent stages and owner consent
pub mod consent;
/// Sync job polling
pub mod sync_job;
/// Union administration
pub mod union;
pub mod util;
