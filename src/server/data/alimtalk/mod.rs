//! Alimtalk template, pricing and send log repositories.

/// Send logs, one row per dispatch
pub mod log;
/// Effective-dated unit price history
pub mod pricing;
/// Template registry
pub mod template;
