//! Test utilities for unionhub.
//!
//! Tests are set up in two phases:
//! 1. [`TestBuilder`] declares tables, fixtures and mock proxy endpoints.
//! 2. [`TestContext`] is returned by `build()` and exposes the database, the mock proxy
//!    server and fixture helpers for inserting more data while the test runs.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_PUBLIC_BASE_URL, TEST_UNION_NAME, TEST_UNION_SLUG},
        fixtures::factory,
        TestBuilder, TestContext, TestError,
    };
}
