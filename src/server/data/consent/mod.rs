//! Consent stage and consent record repositories.

/// Consent of land/building owners
pub mod owner_consent;
/// Consent stages of a union
pub mod stage;
/// Consent of registered members
pub mod user_consent;
