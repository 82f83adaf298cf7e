//! Shared test utilities used across windrow crates.

pub mod proptest_profile;
pub mod tracing;
