//! Timestamped joint maps.
//!
//! Frames are exchanged as JSONL, one frame per line:
//!
//! ```text
//! {"t":0.4,"joints":{"left_hip":{"x":100.0,"y":200.0,"confidence":0.9}}}
//! ```
//!
//! A frame may hold any subset of joints, including none.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::joint::{Joint, Keypoint};

/// Fixed-slot storage for one frame's joints.
///
/// A `None` slot means the estimator did not report that joint, which is
/// different from a joint reported with zero confidence.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, Keypoint>",
    into = "BTreeMap<String, Keypoint>"
)]
pub struct JointSet {
    slots: [Option<Keypoint>; Joint::COUNT],
}

impl JointSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, joint: Joint) -> Option<&Keypoint> {
        self.slots[joint.index()].as_ref()
    }

    pub fn set(&mut self, joint: Joint, keypoint: Keypoint) {
        self.slots[joint.index()] = Some(keypoint);
    }

    /// Builder-style insert, handy for fixtures.
    pub fn with(mut self, joint: Joint, keypoint: Keypoint) -> Self {
        self.set(joint, keypoint);
        self
    }

    /// Number of joints present.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Present joints in model order.
    pub fn iter(&self) -> impl Iterator<Item = (Joint, &Keypoint)> + '_ {
        Joint::ALL
            .into_iter()
            .filter_map(move |joint| self.get(joint).map(|kp| (joint, kp)))
    }

    /// A copy with every coordinate multiplied by `k`.
    pub fn scaled(&self, k: f64) -> JointSet {
        let mut out = JointSet::new();
        for (joint, kp) in self.iter() {
            out.set(joint, kp.scaled(k));
        }
        out
    }
}

impl From<BTreeMap<String, Keypoint>> for JointSet {
    fn from(map: BTreeMap<String, Keypoint>) -> Self {
        let mut set = JointSet::new();
        for (name, keypoint) in map {
            // Estimators may report joints outside the MoveNet set.
            if let Some(joint) = Joint::from_name(&name) {
                set.set(joint, keypoint);
            }
        }
        set
    }
}

impl From<JointSet> for BTreeMap<String, Keypoint> {
    fn from(set: JointSet) -> Self {
        set.iter()
            .map(|(joint, kp)| (joint.name().to_string(), *kp))
            .collect()
    }
}

impl FromIterator<(Joint, Keypoint)> for JointSet {
    fn from_iter<I: IntoIterator<Item = (Joint, Keypoint)>>(iter: I) -> Self {
        let mut set = JointSet::new();
        for (joint, keypoint) in iter {
            set.set(joint, keypoint);
        }
        set
    }
}

/// One sampled instant: a timestamp plus whatever joints were detected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Seconds since the start of the sampled window.
    pub t: f64,

    #[serde(default, alias = "kps")]
    pub joints: JointSet,
}

impl Frame {
    pub fn new(t: f64, joints: JointSet) -> Self {
        Self { t, joints }
    }

    /// A frame in which nothing was detected.
    pub fn empty(t: f64) -> Self {
        Self {
            t,
            joints: JointSet::new(),
        }
    }

    pub fn joint(&self, joint: Joint) -> Option<&Keypoint> {
        self.joints.get(joint)
    }
}

/// Failure to decode a frame line.
#[derive(Debug, thiserror::Error)]
#[error("line {line}: {source}")]
pub struct FrameParseError {
    /// 1-based line number in the input.
    pub line: usize,
    #[source]
    pub source: serde_json::Error,
}

/// Parse frames from JSONL content (one JSON object per line).
///
/// Blank lines and lines starting with `#` are skipped.
pub fn parse_frames(jsonl: &str) -> Result<Vec<Frame>, FrameParseError> {
    jsonl
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line, text)| {
            serde_json::from_str(text).map_err(|source| FrameParseError { line, source })
        })
        .collect()
}

/// Serialize frames to JSONL format.
pub fn serialize_frames(frames: &[Frame]) -> Result<String, serde_json::Error> {
    let mut output = String::new();
    for frame in frames {
        output.push_str(&serde_json::to_string(frame)?);
        output.push('\n');
    }
    Ok(output)
}

/// A data-quality observation about a frame sequence.
///
/// Issues are advisory: the depth engine accepts any sequence.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FrameIssue {
    #[error("frame {index}: timestamp is not a finite number")]
    NonFiniteTimestamp { index: usize },

    #[error("frame {index}: timestamp {t:.3}s is earlier than the previous {previous:.3}s")]
    TimestampRegression { index: usize, t: f64, previous: f64 },

    #[error("frame {index}: {joint} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize, joint: Joint },
}

/// Check a sequence for decreasing timestamps and non-finite values.
pub fn validate_frames(frames: &[Frame]) -> Vec<FrameIssue> {
    let mut issues = Vec::new();
    let mut previous: Option<f64> = None;

    for (index, frame) in frames.iter().enumerate() {
        if !frame.t.is_finite() {
            issues.push(FrameIssue::NonFiniteTimestamp { index });
        } else {
            if let Some(prev) = previous {
                if frame.t < prev {
                    issues.push(FrameIssue::TimestampRegression {
                        index,
                        t: frame.t,
                        previous: prev,
                    });
                }
            }
            previous = Some(frame.t);
        }

        for (joint, kp) in frame.joints.iter() {
            if !kp.x.is_finite() || !kp.y.is_finite() {
                issues.push(FrameIssue::NonFiniteCoordinate { index, joint });
            }
        }
    }

    issues
}
