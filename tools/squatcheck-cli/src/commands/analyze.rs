//! Judge squat depth from a frame file.

use std::path::PathBuf;

use squatcheck_common::AppConfig;
use squatcheck_depth_engine::{DepthAnalyzer, DepthConfig};

use super::load_frames;

pub fn run(path: PathBuf, config: &AppConfig, json: bool) -> anyhow::Result<()> {
    let frames = load_frames(&path)?;
    tracing::info!(path = %path.display(), frames = frames.len(), "Loaded frames");

    let analyzer = DepthAnalyzer::new(DepthConfig::from(&config.depth));
    let report = analyzer.analyze_with_report(&frames);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Analyzing: {}", path.display());
    println!("  Samples: {}", report.samples);

    if report.findings.is_empty() {
        println!(
            "  Not enough samples to judge depth (need at least {}).",
            analyzer.config().min_frames
        );
        return Ok(());
    }

    println!();
    for finding in &report.findings {
        println!("[{}] {}", finding.timestamp_label(), finding.title);
        println!("    {}", finding.detail);
    }

    Ok(())
}
