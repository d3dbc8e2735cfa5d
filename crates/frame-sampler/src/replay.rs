//! A pose source that replays a recorded pose track.
//!
//! Tracks are JSONL, one estimator result per line, in native pixels:
//!
//! ```text
//! {"t":0.0,"keypoints":[{"name":"left_hip","x":600.0,"y":744.0,"score":0.86}]}
//! ```
//!
//! Lines without a detected subject may omit `keypoints` or leave it empty.

use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use squatcheck_common::{SquatcheckError, SquatcheckResult};

use crate::source::{PoseSource, RawKeypoint, RawPose};

/// One recorded estimator result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoseRecord {
    pub t: f64,
    #[serde(default)]
    pub keypoints: Vec<RawKeypoint>,
}

/// Parse a pose track, sorted by time.
///
/// Blank lines and `#` comments are skipped. Records with a non-finite
/// timestamp are rejected.
pub fn parse_pose_track(jsonl: &str) -> SquatcheckResult<Vec<PoseRecord>> {
    let mut records = Vec::new();
    for (i, line) in jsonl.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let record: PoseRecord = serde_json::from_str(line)
            .map_err(|e| SquatcheckError::pose_data(i + 1, e.to_string()))?;
        if !record.t.is_finite() {
            return Err(SquatcheckError::pose_data(i + 1, "timestamp is not finite"));
        }
        records.push(record);
    }
    records.sort_by(|a, b| a.t.total_cmp(&b.t));
    Ok(records)
}

/// Replays recorded poses as if they came from a live estimator.
#[derive(Debug, Clone)]
pub struct ReplaySource {
    records: Vec<PoseRecord>,
    native_width: u32,
    tolerance_secs: f64,
}

impl ReplaySource {
    /// Records must be sorted by `t` (as returned by [`parse_pose_track`]).
    pub fn new(records: Vec<PoseRecord>, native_width: u32) -> Self {
        Self {
            records,
            native_width,
            tolerance_secs: 0.1,
        }
    }

    /// Load and parse a track file.
    pub async fn open(path: &Path, native_width: u32) -> SquatcheckResult<Self> {
        if !tokio::fs::try_exists(path).await? {
            return Err(SquatcheckError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = tokio::fs::read_to_string(path).await?;
        let records = parse_pose_track(&content)?;
        tracing::debug!(path = %path.display(), records = records.len(), "Loaded pose track");
        Ok(Self::new(records, native_width))
    }

    /// How far back a record may lie and still answer a request.
    pub fn with_tolerance(mut self, tolerance_secs: f64) -> Self {
        self.tolerance_secs = tolerance_secs.max(0.0);
        self
    }

    pub fn records(&self) -> &[PoseRecord] {
        &self.records
    }

    /// Latest record at or before `t`, if it is recent enough.
    fn record_at(&self, t: f64) -> Option<&PoseRecord> {
        let upto = self.records.partition_point(|r| r.t <= t + 1e-9);
        let record = self.records[..upto].last()?;
        (t - record.t <= self.tolerance_secs + 1e-9).then_some(record)
    }
}

#[async_trait]
impl PoseSource for ReplaySource {
    fn duration_secs(&self) -> f64 {
        self.records.last().map(|r| r.t.max(0.0)).unwrap_or(0.0)
    }

    fn native_width(&self) -> u32 {
        self.native_width
    }

    async fn pose_at(&mut self, t: f64) -> SquatcheckResult<Option<RawPose>> {
        Ok(self
            .record_at(t)
            .filter(|record| !record.keypoints.is_empty())
            .map(|record| RawPose {
                keypoints: record.keypoints.clone(),
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRACK: &str = "\
# recorded at 1280px
{\"t\":0.4,\"keypoints\":[{\"name\":\"left_hip\",\"x\":10.0,\"y\":20.0}]}
{\"t\":0.0,\"keypoints\":[{\"name\":\"left_hip\",\"x\":10.0,\"y\":10.0,\"score\":0.9}]}

{\"t\":0.2}
";

    #[test]
    fn track_is_sorted_by_time() {
        let records = parse_pose_track(TRACK).unwrap();
        let times: Vec<f64> = records.iter().map(|r| r.t).collect();
        assert_eq!(times, vec![0.0, 0.2, 0.4]);
        assert!(records[1].keypoints.is_empty());
    }

    #[test]
    fn bad_line_is_reported_with_number() {
        let err = parse_pose_track("{\"t\":0.0}\n{\"t\":}\n").unwrap_err();
        assert!(matches!(err, SquatcheckError::PoseData { line: 2, .. }));
    }

    #[tokio::test]
    async fn pose_at_uses_latest_record_within_tolerance() {
        let mut source = ReplaySource::new(parse_pose_track(TRACK).unwrap(), 1280);
        assert_eq!(source.duration_secs(), 0.4);

        let first = source.pose_at(0.05).await.unwrap().unwrap();
        assert_eq!(first.keypoints[0].y, 10.0);

        // The 0.2s record has no subject.
        assert!(source.pose_at(0.2).await.unwrap().is_none());

        let last = source.pose_at(0.4).await.unwrap().unwrap();
        assert_eq!(last.keypoints[0].y, 20.0);

        // Too far past the last record.
        assert!(source.pose_at(0.7).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn open_missing_file_is_not_found() {
        let path = std::env::temp_dir().join("squatcheck-missing-track.jsonl");
        let err = ReplaySource::open(&path, 640).await.unwrap_err();
        assert!(matches!(err, SquatcheckError::FileNotFound { .. }));
    }
}
