//! Resample a recorded pose track into analysis frames.

use std::path::PathBuf;

use squatcheck_common::AppConfig;
use squatcheck_frame_sampler::{FrameSampler, ReplaySource};
use squatcheck_pose_model::serialize_frames;

pub async fn run(
    path: PathBuf,
    native_width: u32,
    config: &AppConfig,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let sampler = FrameSampler::from(&config.sampling);
    let mut source = ReplaySource::open(&path, native_width)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to open pose track: {e}"))?
        .with_tolerance(sampler.schedule().step_secs() / 2.0);

    let clip = sampler
        .collect(&mut source)
        .await
        .map_err(|e| anyhow::anyhow!("Sampling failed: {e}"))?;

    let jsonl = serialize_frames(&clip.frames)?;
    match output {
        Some(out) => {
            tokio::fs::write(&out, jsonl).await?;
            eprintln!(
                "Wrote {} frames ({} sampled at {}fps over {:.1}s) to {}",
                clip.frames.len(),
                clip.attempted,
                config.sampling.fps,
                clip.window_secs,
                out.display()
            );
        }
        None => print!("{jsonl}"),
    }

    Ok(())
}
