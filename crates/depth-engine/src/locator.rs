//! Bottom-frame location.
//!
//! The bottom of a squat is the sampled frame where the hip sits lowest in
//! the raster, i.e. where its `y` is largest.

use squatcheck_pose_model::{Frame, Keypoint};

use crate::pairing::SidePair;

/// Hip used for the bottom search: left hip if present, else right hip.
///
/// Confidence is not consulted here; a low-confidence bottom frame is
/// reported by the depth evaluator instead.
pub fn search_hip(frame: &Frame) -> Option<&Keypoint> {
    SidePair::from_fn(|side| frame.joint(side.hip()))
        .primary_or_fallback()
        .map(|(_, hip)| *hip)
        .filter(|hip| hip.y.is_finite())
}

/// Index of the frame with the lowest hip.
///
/// Frames without a usable hip are skipped. The first frame wins ties. If
/// no frame has a hip, index 0 is returned so the evaluator can explain why
/// nothing could be judged. Returns `None` only for an empty slice.
pub fn locate_bottom(frames: &[Frame]) -> Option<usize> {
    if frames.is_empty() {
        return None;
    }

    let mut bottom: Option<(usize, f64)> = None;
    for (index, frame) in frames.iter().enumerate() {
        let Some(hip) = search_hip(frame) else {
            continue;
        };
        match bottom {
            Some((_, lowest_y)) if hip.y <= lowest_y => {}
            _ => bottom = Some((index, hip.y)),
        }
    }

    Some(bottom.map(|(index, _)| index).unwrap_or(0))
}
