pub mod analyze;
pub mod config;
pub mod inspect;
pub mod sample;

use std::path::Path;

use squatcheck_pose_model::{parse_frames, Frame};

/// Read a frame JSONL file.
pub fn load_frames(path: &Path) -> anyhow::Result<Vec<Frame>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Frames file not readable: {}: {e}", path.display()))?;
    parse_frames(&content)
        .map_err(|e| anyhow::anyhow!("Failed to parse frames in {}: {e}", path.display()))
}
