//! Tests for consent controller endpoints.

mod bulk_upload;
mod owner_consent;
mod stage;

use super::*;
