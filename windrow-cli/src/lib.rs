//! Support library for the `windrow` binary.
//!
//! Exposes the command pipeline and logging setup so doctests and unit tests
//! can drive them without spawning a process.

pub mod cli;
pub mod logging;
