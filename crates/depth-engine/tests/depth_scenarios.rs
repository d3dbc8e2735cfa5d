use std::path::PathBuf;

use squatcheck_common::FindingLanguage;
use squatcheck_depth_engine::{
    analyze, DepthAnalyzer, DepthConfig, DepthStatus, FailureReason,
};
use squatcheck_pose_model::{parse_frames, Frame, Joint, JointSet, Keypoint, Side};

fn load_fixture_frames() -> Vec<Frame> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("fixtures")
        .join("side-view-squat")
        .join("frames.jsonl");

    let content = std::fs::read_to_string(path).expect("fixture frames should be readable");
    parse_frames(&content).expect("fixture frames should parse")
}

/// Five samples at 5 fps; only the last one carries the bottom position.
fn clip_with_bottom(bottom: JointSet) -> Vec<Frame> {
    let high = JointSet::new()
        .with(Joint::LeftShoulder, Keypoint::new(100.0, 0.0, 0.9))
        .with(Joint::LeftHip, Keypoint::new(100.0, 100.0, 0.9))
        .with(Joint::LeftKnee, Keypoint::new(100.0, 150.0, 0.9));
    let mut frames: Vec<Frame> = [0.0, 0.2, 0.4, 0.6]
        .into_iter()
        .map(|t| Frame::new(t, high))
        .collect();
    frames.push(Frame::new(0.8, bottom));
    frames
}

fn left_bottom(hip_y: f64) -> JointSet {
    JointSet::new()
        .with(Joint::LeftHip, Keypoint::new(100.0, hip_y, 0.9))
        .with(Joint::LeftKnee, Keypoint::new(100.0, 150.0, 0.9))
        .with(Joint::LeftShoulder, Keypoint::new(100.0, 50.0, 0.9))
}

#[test]
fn deep_squat_reports_depth_ok() {
    let frames = clip_with_bottom(left_bottom(200.0));
    let report = DepthAnalyzer::with_defaults().analyze_with_report(&frames);

    assert_eq!(report.findings.len(), 1);
    let finding = &report.findings[0];
    assert_eq!(finding.t, 0.8);
    assert!(finding.title.starts_with("Depth OK"));
    assert!(finding.detail.contains("Δy=50.0"));
    assert!(finding.detail.contains("≈4.5"));

    let verdict = *report.status.unwrap().verdict().unwrap();
    assert!(verdict.deep);
    assert!((verdict.margin - 4.5).abs() < 1e-9);
}

#[test]
fn hip_just_below_knee_is_insufficient() {
    let frames = clip_with_bottom(left_bottom(152.0));
    let findings = analyze(&frames);

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].t, 0.8);
    assert!(findings[0].title.starts_with("Insufficient depth"));
    assert!(findings[0].detail.contains("Δy=2.0"));
}

#[test]
fn worst_side_decides_when_sides_disagree() {
    // Torso 100 gives margin 3; left delta 5 (deep), right delta -2 (shallow).
    let bottom = JointSet::new()
        .with(Joint::LeftShoulder, Keypoint::new(100.0, 105.0, 0.9))
        .with(Joint::LeftHip, Keypoint::new(100.0, 205.0, 0.9))
        .with(Joint::LeftKnee, Keypoint::new(100.0, 200.0, 0.9))
        .with(Joint::RightHip, Keypoint::new(110.0, 198.0, 0.9))
        .with(Joint::RightKnee, Keypoint::new(110.0, 200.0, 0.9));
    let frames = clip_with_bottom(bottom);
    let report = DepthAnalyzer::with_defaults().analyze_with_report(&frames);

    let verdict = *report.status.unwrap().verdict().unwrap();
    assert_eq!(verdict.side, Side::Right);
    assert!(!verdict.deep);
    assert_eq!(verdict.delta, -2.0);
    assert!((verdict.margin - 3.0).abs() < 1e-9);
    assert!(report.findings[0].title.starts_with("Insufficient depth"));
}

#[test]
fn tiny_torso_on_both_sides_is_unjudgeable() {
    let bottom = JointSet::new()
        .with(Joint::LeftShoulder, Keypoint::new(100.0, 195.0, 0.9))
        .with(Joint::LeftHip, Keypoint::new(100.0, 204.0, 0.9))
        .with(Joint::LeftKnee, Keypoint::new(100.0, 150.0, 0.9))
        .with(Joint::RightShoulder, Keypoint::new(100.0, 196.0, 0.9))
        .with(Joint::RightHip, Keypoint::new(100.0, 204.0, 0.9))
        .with(Joint::RightKnee, Keypoint::new(100.0, 150.0, 0.9));
    let report = DepthAnalyzer::with_defaults().analyze_with_report(&clip_with_bottom(bottom));

    assert_eq!(
        report.status,
        Some(DepthStatus::Unjudgeable {
            reason: FailureReason::TorsoUnknown
        })
    );
    assert_eq!(report.findings.len(), 1);
    assert!(report.findings[0]
        .title
        .contains("could not be reliably judged"));
}

#[test]
fn low_confidence_hip_with_missing_other_side() {
    let mut bottom = left_bottom(200.0);
    bottom.set(Joint::LeftHip, Keypoint::new(100.0, 200.0, 0.39));
    let report = DepthAnalyzer::with_defaults().analyze_with_report(&clip_with_bottom(bottom));

    assert_eq!(
        report.status,
        Some(DepthStatus::Unjudgeable {
            reason: FailureReason::LowConfidence
        })
    );
    assert_eq!(report.findings[0].t, 0.8);
}

#[test]
fn frames_without_joints_are_tolerated() {
    let frames: Vec<Frame> = (0..6).map(|i| Frame::empty(i as f64 * 0.2)).collect();
    let report = DepthAnalyzer::with_defaults().analyze_with_report(&frames);

    assert_eq!(report.bottom.map(|b| b.index), Some(0));
    assert_eq!(
        report.status,
        Some(DepthStatus::Unjudgeable {
            reason: FailureReason::TorsoUnknown
        })
    );
    assert_eq!(report.findings.len(), 1);
}

#[test]
fn intermediate_frames_do_not_affect_the_verdict() {
    // A deep-looking frame away from the bottom does not rescue a shallow bottom.
    let mut frames = clip_with_bottom(left_bottom(152.0));
    frames[1].joints.set(Joint::LeftKnee, Keypoint::new(100.0, 60.0, 0.9));
    let findings = analyze(&frames);
    assert!(findings[0].title.starts_with("Insufficient depth"));
}

#[test]
fn input_frames_are_left_untouched() {
    let frames = clip_with_bottom(left_bottom(200.0));
    let before = frames.clone();
    let _ = analyze(&frames);
    assert_eq!(frames, before);
}

#[test]
fn fixture_clip_is_judged_from_left_side() {
    let frames = load_fixture_frames();
    assert_eq!(frames.len(), 12);

    let report = DepthAnalyzer::with_defaults().analyze_with_report(&frames);
    let bottom = report.bottom.unwrap();
    assert_eq!(bottom.index, 6);
    assert_eq!(bottom.t, 1.2);

    // The right knee is below the confidence gate at the bottom.
    let verdict = *report.status.unwrap().verdict().unwrap();
    assert_eq!(verdict.side, Side::Left);
    assert!(verdict.deep);
    assert_eq!(verdict.delta, 10.0);
    assert!((verdict.torso - 22.5f64.hypot(160.0)).abs() < 1e-9);
    assert_eq!(report.findings[0].timestamp_label(), "0:01.2");
}

#[test]
fn fixture_clip_in_traditional_chinese() {
    let analyzer = DepthAnalyzer::new(DepthConfig {
        language: FindingLanguage::TraditionalChinese,
        ..Default::default()
    });
    let findings = analyzer.analyze(&load_fixture_frames());
    assert_eq!(findings.len(), 1);
    assert!(findings[0].title.starts_with("深度 OK"));
}
