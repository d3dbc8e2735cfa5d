//! The pose source contract.
//!
//! A pose source combines a seekable media decoder with a single-person
//! pose estimator. Given a source time it seeks, grabs the frame, runs the
//! estimator, and reports at most one pose in native pixel coordinates.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use squatcheck_common::SquatcheckResult;
use squatcheck_pose_model::{Joint, JointSet, Keypoint};

/// One keypoint as an estimator reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawKeypoint {
    /// Estimator joint name; unnamed keypoints cannot be analyzed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// A single detected pose in native pixel coordinates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPose {
    pub keypoints: Vec<RawKeypoint>,
}

impl RawPose {
    /// Named MoveNet joints rescaled into the analysis raster.
    ///
    /// Unnamed keypoints and names outside the MoveNet set are dropped.
    pub fn to_joint_set(&self, scale: f64) -> JointSet {
        self.keypoints
            .iter()
            .filter_map(|kp| {
                let joint = Joint::from_name(kp.name.as_deref()?)?;
                Some((
                    joint,
                    Keypoint {
                        x: kp.x * scale,
                        y: kp.y * scale,
                        confidence: kp.score,
                    },
                ))
            })
            .collect()
    }
}

/// A seekable media source paired with a pose estimator.
///
/// The sampler awaits each `pose_at` call to completion before issuing the
/// next one, so implementations never see overlapping requests.
#[async_trait]
pub trait PoseSource: Send {
    /// Length of the media in seconds. NaN when unknown.
    fn duration_secs(&self) -> f64;

    /// Width of the decoded frames in pixels. Zero when unknown.
    fn native_width(&self) -> u32;

    /// Seek to `t`, grab the frame, and estimate at most one pose.
    ///
    /// `Ok(None)` means no subject was detected at that instant.
    async fn pose_at(&mut self, t: f64) -> SquatcheckResult<Option<RawPose>>;
}
