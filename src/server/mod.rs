//! Server application core modules.
//!
//! This module contains all server-side functionality for unionhub, including HTTP routing,
//! database access, the alimtalk proxy integration and the consent reconciliation pipeline.
//! Handlers are stateless; every request works against the shared database pool and proxy
//! client carried in [`model::app::AppState`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod proxy;
pub mod router;
pub mod service;
/// Server startup: database, proxy client, listener and shutdown signal
pub mod startup;
pub mod util;
