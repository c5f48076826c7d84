//! Consent stages, consent records and the bulk upload pipeline.

pub mod bulk_upload;
pub mod matcher;
/// Owner consent recording
pub mod owner;
pub mod reconcile;
/// Consent stages and their summaries
pub mod stage;
pub mod status;
