//! Shared types for the bootstrap-current-fraction engine.
//!
//! Stage 1: plasma-state snapshot, radial profile table, engine
//! configuration, result type, physical constants, error taxonomy.

pub mod config;
pub mod constants;
pub mod error;
pub mod state;
