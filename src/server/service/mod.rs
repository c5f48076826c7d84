//! Service layer for business logic and orchestration.
//!
//! Services validate requests, coordinate repositories and the alimtalk proxy, and map
//! missing resources to domain errors. Pure steps (status parsing, row matching, payload
//! preparation, log aggregation) live beside the services as free functions so they can be
//! tested without a database.

pub mod alimtalk;
pub mod consent;
/// Sync job lookup
pub mod sync_job;
/// Union administration
pub mod union;
