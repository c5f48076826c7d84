//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries per table group. They are generic over
//! `ConnectionTrait` so callers can pass either the pool or a transaction, and they return
//! `DbErr` untouched; mapping to HTTP errors happens in services.

pub mod alimtalk;
pub mod consent;
/// Invite tokens for owners without a member account
pub mod invite;
/// Union members and their property units
pub mod member;
/// Owners, the recipients of consent reminders
pub mod owner;
/// Tracked long-running jobs
pub mod sync_job;
/// Tenant unions
pub mod union;
