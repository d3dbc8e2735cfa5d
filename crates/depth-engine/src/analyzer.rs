//! Engine entry point: bottom frame, depth status, finding.

use serde::Serialize;
use squatcheck_common::{DepthDefaults, FindingLanguage};
use squatcheck_pose_model::{Finding, Frame};

use crate::evaluator::{depth_status, DepthStatus};
use crate::findings::finding_for;
use crate::locator::locate_bottom;

/// Thresholds for depth judging.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthConfig {
    /// Sequences shorter than this are too sparse to judge.
    pub min_frames: usize,

    /// Smallest torso length (raster units) accepted as a body scale.
    pub torso_floor: f64,

    /// Margin as a fraction of torso length.
    pub margin_ratio: f64,

    /// Per-joint confidence gate for hip and knee (inclusive).
    pub min_confidence: f64,

    /// Wording of the emitted findings.
    pub language: FindingLanguage,
}

impl Default for DepthConfig {
    fn default() -> Self {
        Self::from(&DepthDefaults::default())
    }
}

impl From<&DepthDefaults> for DepthConfig {
    fn from(defaults: &DepthDefaults) -> Self {
        Self {
            min_frames: defaults.min_frames,
            torso_floor: defaults.torso_floor,
            margin_ratio: defaults.margin_ratio,
            min_confidence: defaults.min_confidence,
            language: defaults.language,
        }
    }
}

/// Where the bottom of the movement was found.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BottomFrame {
    /// Index into the analyzed sequence.
    pub index: usize,
    pub t: f64,
}

/// Findings plus the intermediate results that produced them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// Number of frames analyzed.
    pub samples: usize,
    /// `None` when the sequence was too short to judge.
    pub bottom: Option<BottomFrame>,
    pub status: Option<DepthStatus>,
    pub findings: Vec<Finding>,
}

impl AnalysisReport {
    fn insufficient(samples: usize) -> Self {
        Self {
            samples,
            bottom: None,
            status: None,
            findings: Vec::new(),
        }
    }
}

/// The depth verdict engine.
///
/// Stateless apart from its configuration: the same frames always yield the
/// same findings, and one analyzer may be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct DepthAnalyzer {
    config: DepthConfig,
}

impl DepthAnalyzer {
    /// Create a new analyzer with the given configuration.
    pub fn new(config: DepthConfig) -> Self {
        Self { config }
    }

    /// Create an analyzer with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(DepthConfig::default())
    }

    pub fn config(&self) -> &DepthConfig {
        &self.config
    }

    /// Analyze a sampled clip. Yields one finding, or none if too few
    /// frames were collected.
    pub fn analyze(&self, frames: &[Frame]) -> Vec<Finding> {
        self.analyze_with_report(frames).findings
    }

    /// Analyze a sampled clip and keep the intermediate results.
    pub fn analyze_with_report(&self, frames: &[Frame]) -> AnalysisReport {
        if frames.len() < self.config.min_frames {
            tracing::debug!(
                samples = frames.len(),
                min_frames = self.config.min_frames,
                "Too few samples to judge depth"
            );
            return AnalysisReport::insufficient(frames.len());
        }

        let Some(index) = locate_bottom(frames) else {
            return AnalysisReport::insufficient(frames.len());
        };
        let frame = &frames[index];
        tracing::debug!(index, t = frame.t, "Located bottom frame");

        let status = depth_status(&frame.joints, &self.config);
        match &status {
            DepthStatus::Judged(verdict) => tracing::info!(
                t = frame.t,
                side = %verdict.side,
                deep = verdict.deep,
                delta = verdict.delta,
                margin = verdict.margin,
                "Depth judged"
            ),
            DepthStatus::Unjudgeable { reason } => {
                tracing::info!(t = frame.t, ?reason, "Depth could not be judged")
            }
        }

        let finding = finding_for(frame.t, &status, self.config.language);
        AnalysisReport {
            samples: frames.len(),
            bottom: Some(BottomFrame { index, t: frame.t }),
            status: Some(status),
            findings: vec![finding],
        }
    }
}

/// Analyze with default thresholds and English findings.
pub fn analyze(frames: &[Frame]) -> Vec<Finding> {
    DepthAnalyzer::with_defaults().analyze(frames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use squatcheck_pose_model::{Joint, JointSet, Keypoint};

    fn standing(t: f64) -> Frame {
        Frame::new(
            t,
            JointSet::new()
                .with(Joint::LeftShoulder, Keypoint::new(100.0, 20.0, 0.9))
                .with(Joint::LeftHip, Keypoint::new(100.0, 120.0, 0.9))
                .with(Joint::LeftKnee, Keypoint::new(100.0, 200.0, 0.9)),
        )
    }

    #[test]
    fn four_frames_yield_nothing() {
        let frames: Vec<Frame> = (0..4).map(|i| standing(i as f64 * 0.2)).collect();
        let report = DepthAnalyzer::with_defaults().analyze_with_report(&frames);
        assert!(report.findings.is_empty());
        assert!(report.bottom.is_none());
        assert_eq!(report.samples, 4);
    }

    #[test]
    fn report_points_at_bottom_frame() {
        let mut frames: Vec<Frame> = (0..5).map(|i| standing(i as f64 * 0.2)).collect();
        frames[3]
            .joints
            .set(Joint::LeftHip, Keypoint::new(100.0, 210.0, 0.9));
        let report = DepthAnalyzer::with_defaults().analyze_with_report(&frames);
        let bottom = report.bottom.unwrap();
        assert_eq!(bottom.index, 3);
        assert_eq!(bottom.t, frames[3].t);
        assert_eq!(report.findings.len(), 1);
        assert_eq!(report.findings[0].t, frames[3].t);
        assert!(report.status.unwrap().verdict().unwrap().deep);
    }

    #[test]
    fn custom_min_frames_is_honored() {
        let analyzer = DepthAnalyzer::new(DepthConfig {
            min_frames: 1,
            ..Default::default()
        });
        assert_eq!(analyzer.analyze(&[standing(0.0)]).len(), 1);
        assert!(analyzer.analyze(&[]).is_empty());
    }

    #[test]
    fn config_mirrors_defaults() {
        let config = DepthConfig::default();
        assert_eq!(config.min_frames, 5);
        assert_eq!(config.torso_floor, 10.0);
        assert_eq!(config.margin_ratio, 0.03);
        assert_eq!(config.min_confidence, 0.4);
        assert_eq!(config.language, FindingLanguage::English);
    }
}
