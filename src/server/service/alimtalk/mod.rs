//! Alimtalk templates, pricing, send logs and consent reminder dispatch.

/// Send log listing and statistics
pub mod log;
/// Unit prices
pub mod pricing;
pub mod reminder;
/// Template registry
pub mod template;
