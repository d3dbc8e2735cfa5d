//! Per-side depth evaluation at the bottom frame.
//!
//! Depth is judged as "hip below knee by more than a margin", where the
//! margin is a fixed fraction of the subject's torso length in the same
//! frame. Raster `y` grows downward, so `delta = hip.y - knee.y > 0` means
//! the hip is visually lower than the knee.

use serde::Serialize;
use squatcheck_pose_model::{JointSet, Side};

use crate::analyzer::DepthConfig;
use crate::pairing::SidePair;
use crate::reconcile::reconcile;

/// Why a bottom frame could not be judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    /// No shoulder-hip pair, or the pair is degenerate (below the floor).
    TorsoUnknown,
    /// Neither side has a hip and knee above the confidence gate.
    LowConfidence,
}

/// Depth reading for one usable side.
///
/// Sides that fail the presence or confidence gate have no reading at all,
/// so their delta cannot be consulted by mistake.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SideReading {
    pub side: Side,
    /// `hip.y - knee.y` in raster units.
    pub delta: f64,
    /// `delta > margin`.
    pub deep: bool,
}

/// Merged verdict for the bottom frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DepthVerdict {
    /// Side whose reading decided the verdict.
    pub side: Side,
    pub deep: bool,
    pub delta: f64,
    pub margin: f64,
    /// Shoulder-hip distance the margin was derived from.
    pub torso: f64,
}

/// Outcome of judging one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DepthStatus {
    Unjudgeable { reason: FailureReason },
    Judged(DepthVerdict),
}

impl DepthStatus {
    pub fn verdict(&self) -> Option<&DepthVerdict> {
        match self {
            DepthStatus::Judged(verdict) => Some(verdict),
            DepthStatus::Unjudgeable { .. } => None,
        }
    }
}

/// Shoulder-hip distance on the preferred side that has both joints.
///
/// Presence alone picks the side; the caller decides whether the length is
/// usable.
pub fn torso_length(joints: &JointSet) -> Option<(Side, f64)> {
    SidePair::from_fn(|side| {
        let shoulder = joints.get(side.shoulder())?;
        let hip = joints.get(side.hip())?;
        Some(shoulder.distance(hip))
    })
    .primary_or_fallback()
    .map(|(side, torso)| (side, *torso))
}

/// Read one side's hip-knee separation against `margin`.
///
/// Returns `None` when either joint is missing, below `min_confidence`, or
/// has a non-finite vertical coordinate.
pub fn evaluate_side(
    joints: &JointSet,
    side: Side,
    margin: f64,
    min_confidence: f64,
) -> Option<SideReading> {
    let hip = joints.get(side.hip())?;
    let knee = joints.get(side.knee())?;
    if !hip.passes(min_confidence) || !knee.passes(min_confidence) {
        return None;
    }

    let delta = hip.y - knee.y;
    if !delta.is_finite() {
        return None;
    }

    Some(SideReading {
        side,
        delta,
        deep: delta > margin,
    })
}

/// Judge depth from a single frame's joints.
pub fn depth_status(joints: &JointSet, config: &DepthConfig) -> DepthStatus {
    let torso = match torso_length(joints) {
        Some((_, torso)) if torso.is_finite() && torso >= config.torso_floor => torso,
        other => {
            tracing::debug!(torso = ?other.map(|(_, t)| t), floor = config.torso_floor, "Torso unusable");
            return DepthStatus::Unjudgeable {
                reason: FailureReason::TorsoUnknown,
            };
        }
    };

    let margin = config.margin_ratio * torso;
    let readings = SidePair::from_fn(|side| {
        evaluate_side(joints, side, margin, config.min_confidence)
    });
    tracing::debug!(torso, margin, left = ?readings.left, right = ?readings.right, "Side readings");

    match reconcile(&readings) {
        Some(reading) => DepthStatus::Judged(DepthVerdict {
            side: reading.side,
            deep: reading.deep,
            delta: reading.delta,
            margin,
            torso,
        }),
        None => DepthStatus::Unjudgeable {
            reason: FailureReason::LowConfidence,
        },
    }
}
