//! Squatcheck Frame Sampler
//!
//! Walks a pose source at a fixed nominal rate over a bounded window and
//! collects timestamped frames in the shared analysis raster:
//! - **Schedule:** Which source times to sample (5 fps, at most 20 s)
//! - **Source:** The contract a decoder + pose model pair must satisfy
//! - **Sampler:** The strictly sequential capture loop
//! - **Replay:** A source backed by a recorded JSONL pose track
//!
//! Video decoding and pose inference are not implemented here; they sit
//! behind [`PoseSource`].

pub mod replay;
pub mod sampler;
pub mod schedule;
pub mod source;

pub use replay::{parse_pose_track, PoseRecord, ReplaySource};
pub use sampler::{FrameSampler, SampledClip};
pub use schedule::{rescale_factor, SampleSchedule};
pub use source::{PoseSource, RawKeypoint, RawPose};
