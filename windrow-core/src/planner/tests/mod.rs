//! Unit tests for cluster formation.
//!
//! `scenarios` pins exact successor tables for hand-traced gardens,
//! `oracle` holds a list-based reference transcription of the algorithm,
//! and `property` checks structural invariants plus oracle equivalence over
//! generated grids for every policy triple.
