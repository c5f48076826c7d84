//! Standard values shared by fixtures and assertions.

/// Slug of the union created by [`TestBuilder::with_mock_union`](crate::TestBuilder::with_mock_union).
pub static TEST_UNION_SLUG: &str = "test-union";

/// Name of the union created by [`TestBuilder::with_mock_union`](crate::TestBuilder::with_mock_union).
pub static TEST_UNION_NAME: &str = "테스트 재개발조합";

/// Contact number of the mock union.
pub static TEST_UNION_PHONE: &str = "02-123-4567";

/// Public base URL used to build invite links in tests.
pub static TEST_PUBLIC_BASE_URL: &str = "https://unionhub.test";
