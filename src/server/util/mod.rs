//! Utility functions and helpers for server operations.
//!
//! Small pure helpers shared by services: phone number normalization, invite token
//! generation and time calculations.

pub mod phone;
pub mod time;
/// Invite token generation
pub mod token;
