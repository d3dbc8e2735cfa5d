//! Squatcheck Common Utilities
//!
//! Shared infrastructure for all Squatcheck crates:
//! - Error types and result aliases
//! - Tracing/logging initialization
//! - Configuration loading (sampling, depth thresholds, logging)

pub mod config;
pub mod error;
pub mod logging;

pub use config::*;
pub use error::*;
