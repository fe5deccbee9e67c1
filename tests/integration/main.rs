//! Integration test entry point.
//!
//! Single binary so the mock hardware module is shared across suites.

mod mock_hw;
mod service_tests;
