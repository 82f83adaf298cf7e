//! JSON provider for precomputed garden graphs implementing
//! [`windrow_core::Garden`].
//!
//! The document lists every cell in row-major order together with its load,
//! its workable neighbours and, optionally, its distance to the sink:
//!
//! ```json
//! {
//!   "capacity": 2,
//!   "cells": [
//!     { "load": 1, "neighbours": [1], "sink_distance": 0 },
//!     { "load": 1, "neighbours": [0] },
//!     { "blocked": true }
//!   ]
//! }
//! ```
//!
//! A cell without a `load` is blocked.

mod errors;
mod provider;

pub use errors::JsonGardenError;
pub use provider::JsonGardenProvider;

#[cfg(test)]
mod tests;
