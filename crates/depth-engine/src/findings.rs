//! Turning a depth status into a finding.
//!
//! There are exactly three outcomes a lifter sees: the depth could not be
//! judged, the depth was insufficient, or the depth was fine. Each carries
//! its own explanation; judged outcomes quote the measured delta and the
//! margin it was compared against.

use squatcheck_common::FindingLanguage;
use squatcheck_pose_model::Finding;

use crate::evaluator::{DepthStatus, DepthVerdict, FailureReason};

/// Build the finding for a bottom frame at time `t`.
pub fn finding_for(t: f64, status: &DepthStatus, language: FindingLanguage) -> Finding {
    match status {
        DepthStatus::Unjudgeable { reason } => unjudgeable(t, *reason, language),
        DepthStatus::Judged(verdict) if verdict.deep => depth_ok(t, verdict, language),
        DepthStatus::Judged(verdict) => insufficient_depth(t, verdict, language),
    }
}

fn unjudgeable(t: f64, reason: FailureReason, language: FindingLanguage) -> Finding {
    match language {
        FindingLanguage::English => {
            let cause = match reason {
                FailureReason::TorsoUnknown => {
                    "No usable shoulder-to-hip length was found at the bottom position."
                }
                FailureReason::LowConfidence => {
                    "Hip and knee were not detected confidently on either side at the bottom position."
                }
            };
            Finding::new(
                t,
                "Depth could not be reliably judged (low confidence, occlusion, or camera angle)",
                format!(
                    "{cause} Film from the side with the whole body in frame, good lighting and \
                     a fixed camera; keep the hip and knee clear of knee sleeves, belts and plates."
                ),
            )
        }
        FindingLanguage::TraditionalChinese => {
            let cause = match reason {
                FailureReason::TorsoUnknown => "最低點無法取得可用的肩到髖長度。",
                FailureReason::LowConfidence => "最低點左右兩側的髖與膝皆未達可信度。",
            };
            Finding::new(
                t,
                "深度無法可靠判定（置信度/遮擋/角度）",
                format!(
                    "{cause}請用側面、全身入鏡、光線足、相機固定；髖與膝不要被護膝/腰帶/槓片遮到。"
                ),
            )
        }
    }
}

fn insufficient_depth(t: f64, verdict: &DepthVerdict, language: FindingLanguage) -> Finding {
    let (delta, margin) = (verdict.delta, verdict.margin);
    match language {
        FindingLanguage::English => Finding::new(
            t,
            "Insufficient depth (high risk of a no-rep)",
            format!(
                "At the bottom the hip is not clearly below the knee (Δy={delta:.1}, \
                 threshold ≈{margin:.1}). Don't cut it close in competition: sit deeper on the \
                 next set and leave yourself a margin for error."
            ),
        ),
        FindingLanguage::TraditionalChinese => Finding::new(
            t,
            "深度不足（競賽紅燈風險極高）",
            format!(
                "最低點髖未明顯低於膝（Δy={delta:.1}，門檻≈{margin:.1}）。競技不要擦邊：下一組再多坐下去一點，寧可更深。"
            ),
        ),
    }
}

fn depth_ok(t: f64, verdict: &DepthVerdict, language: FindingLanguage) -> Finding {
    let (delta, margin) = (verdict.delta, verdict.margin);
    match language {
        FindingLanguage::English => Finding::new(
            t,
            "Depth OK (judged from this side view)",
            format!(
                "At the bottom the hip is below the knee (Δy={delta:.1}, threshold ≈{margin:.1}). \
                 Keep every rep this deep and don't let the last reps get shallow."
            ),
        ),
        FindingLanguage::TraditionalChinese => Finding::new(
            t,
            "深度 OK（以本影片側面判讀）",
            format!(
                "最低點髖低於膝（Δy={delta:.1}，門檻≈{margin:.1}）。保持每一下深度一致，避免最後幾下變淺。"
            ),
        ),
    }
}
