//! Test fixture modules for database and HTTP mock creation.
//!
//! Each submodule adds an accessor on [`TestContext`](crate::TestContext) returning a
//! fixture helper that borrows the context:
//!
//! - `union` - Tenant unions
//! - `member` - Union members and their property units
//! - `consent` - Consent stages and member/owner consent rows
//! - `owner` - Land lots, building units and property owners
//! - `alimtalk` - Templates, pricing history and send logs
//! - `sync_job` - Tracked long-running jobs
//! - `proxy` - Mock alimtalk proxy endpoints
//!
//! `factory` holds pure functions building in-memory models for unit tests.

pub mod alimtalk;
pub mod consent;
pub mod factory;
pub mod member;
pub mod owner;
pub mod proxy;
pub mod sync_job;
pub mod union;
