//! Squatcheck Pose Model
//!
//! Defines the data contracts shared by the frame producer and the depth
//! engine:
//! - **Joints:** A closed set of MoveNet joint identifiers and body sides
//! - **Frames:** Timestamped joint maps in the shared analysis raster
//! - **Findings:** Timestamped, human-readable verdicts
//!
//! All coordinates are raster units after rescaling to the common render
//! width; the vertical axis grows downward.

pub mod finding;
pub mod frame;
pub mod joint;

pub use finding::*;
pub use frame::*;
pub use joint::*;
