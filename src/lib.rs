// Library exports for integration tests and reusable components

pub mod config;
pub mod github;
pub mod pagination;
pub mod search;
pub mod ui;

// Test support (only available with test-utils feature)
#[cfg(any(test, feature = "test-utils"))]
pub mod test_support;
