//! Squatcheck Depth Engine
//!
//! Decides whether a squat reached competition depth from a sampled clip:
//! - **Locator:** Finds the bottom frame (lowest hip in the raster)
//! - **Evaluator:** Compares hip and knee height on each side against a
//!   torso-scaled margin
//! - **Reconciliation:** Keeps the shallower of the two valid sides
//! - **Findings:** Explains the outcome in a timestamped finding
//!
//! This crate is pure computation: no I/O, no shared state. All inputs
//! are data; all outputs are data.

pub mod analyzer;
pub mod evaluator;
pub mod findings;
pub mod locator;
pub mod pairing;
pub mod reconcile;

pub use analyzer::{analyze, AnalysisReport, BottomFrame, DepthAnalyzer, DepthConfig};
pub use evaluator::{DepthStatus, DepthVerdict, FailureReason, SideReading};
