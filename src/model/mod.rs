//! Request and response bodies shared by the HTTP API.

pub mod alimtalk;
pub mod api;
pub mod consent;
pub mod sync_job;
pub mod union;
