//! Server application models and type definitions.
//!
//! This module contains the shared application state handed to every handler and type
//! aliases for the database models used across repositories and services.

/// Shared handler state
pub mod app;
pub mod db;
