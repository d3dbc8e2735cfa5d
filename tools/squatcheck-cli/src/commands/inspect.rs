//! Show sampling and bottom-frame diagnostics for a frame file.

use std::path::PathBuf;

use squatcheck_common::AppConfig;
use squatcheck_depth_engine::evaluator::{evaluate_side, torso_length};
use squatcheck_depth_engine::locator::locate_bottom;
use squatcheck_depth_engine::DepthConfig;
use squatcheck_pose_model::{format_timestamp, validate_frames, Keypoint, Side};

use super::load_frames;

pub fn run(path: PathBuf, config: &AppConfig) -> anyhow::Result<()> {
    let frames = load_frames(&path)?;
    let depth = DepthConfig::from(&config.depth);

    println!("Frames: {}", path.display());
    println!("  Samples: {}", frames.len());
    if let (Some(first), Some(last)) = (frames.first(), frames.last()) {
        println!(
            "  Span: {} - {}",
            format_timestamp(first.t),
            format_timestamp(last.t)
        );
    }
    let empty = frames.iter().filter(|f| f.joints.is_empty()).count();
    println!("  Frames without joints: {empty}");

    let issues = validate_frames(&frames);
    if issues.is_empty() {
        println!("  Data: no issues");
    } else {
        println!("\nData issues:");
        for issue in &issues {
            println!("  - {issue}");
        }
    }

    let Some(index) = locate_bottom(&frames) else {
        println!("\nNo frames to inspect.");
        return Ok(());
    };
    let bottom = &frames[index];

    println!();
    println!("Bottom frame: #{index} at {}", format_timestamp(bottom.t));
    let torso = torso_length(&bottom.joints);
    match torso {
        Some((side, torso)) => println!(
            "  Torso ({side}): {torso:.1} (floor {:.1}, margin {:.1})",
            depth.torso_floor,
            depth.margin_ratio * torso
        ),
        None => println!("  Torso: unavailable"),
    }

    let margin = torso
        .map(|(_, torso)| depth.margin_ratio * torso)
        .unwrap_or(0.0);
    for side in Side::PREFERENCE {
        let hip = bottom.joint(side.hip());
        let knee = bottom.joint(side.knee());
        let conf = |kp: Option<&Keypoint>| {
            kp.map(|kp| format!("{:.2}", kp.effective_confidence()))
                .unwrap_or_else(|| "absent".to_string())
        };
        let reading = match evaluate_side(&bottom.joints, side, margin, depth.min_confidence) {
            Some(reading) => format!("Δy={:.1}", reading.delta),
            None => "unusable".to_string(),
        };
        println!(
            "  {side:<5} hip {} knee {} -> {reading}",
            conf(hip),
            conf(knee)
        );
    }

    if frames.len() < depth.min_frames {
        println!(
            "\nOnly {} samples; analysis needs at least {}.",
            frames.len(),
            depth.min_frames
        );
    }

    Ok(())
}
