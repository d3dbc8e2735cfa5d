//! The sequential capture loop.

use squatcheck_common::{SamplingDefaults, SquatcheckError, SquatcheckResult};
use squatcheck_pose_model::Frame;

use crate::schedule::{rescale_factor, SampleSchedule};
use crate::source::PoseSource;

/// Frames collected from one pass over a source.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledClip {
    /// Frames with at least one recognised joint, in time order.
    pub frames: Vec<Frame>,
    /// Number of instants that were requested from the source.
    pub attempted: usize,
    /// Seconds of source time covered by the schedule.
    pub window_secs: f64,
    /// Native-to-raster scale applied to every coordinate.
    pub scale: f64,
}

/// Samples a pose source on a fixed schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSampler {
    schedule: SampleSchedule,
    render_width: u32,
}

impl Default for FrameSampler {
    fn default() -> Self {
        Self::from(&SamplingDefaults::default())
    }
}

impl From<&SamplingDefaults> for FrameSampler {
    fn from(defaults: &SamplingDefaults) -> Self {
        Self::new(SampleSchedule::from(defaults), defaults.render_width)
    }
}

impl FrameSampler {
    pub fn new(schedule: SampleSchedule, render_width: u32) -> Self {
        Self {
            schedule,
            render_width,
        }
    }

    pub fn schedule(&self) -> &SampleSchedule {
        &self.schedule
    }

    /// Walk the source once and collect frames.
    ///
    /// One request is in flight at a time. A source error aborts the pass as
    /// a sampling error naming the failed instant; frames gathered so far are
    /// discarded with it.
    pub async fn collect<S>(&self, source: &mut S) -> SquatcheckResult<SampledClip>
    where
        S: PoseSource + ?Sized,
    {
        let duration = source.duration_secs();
        let window_secs = self.schedule.window_secs(duration);
        let times = self.schedule.timestamps(duration);
        let scale = rescale_factor(source.native_width(), self.render_width);

        tracing::info!(
            duration,
            window_secs,
            samples = times.len(),
            scale,
            "Sampling pose source"
        );

        let mut frames = Vec::with_capacity(times.len());
        for (i, &t) in times.iter().enumerate() {
            let pose = source.pose_at(t).await.map_err(|e| {
                tracing::warn!(t, error = %e, "Pose request failed");
                SquatcheckError::sampling(format!("pose request at {t:.2}s failed: {e}"))
            })?;

            match pose.map(|pose| pose.to_joint_set(scale)) {
                Some(joints) if !joints.is_empty() => frames.push(Frame::new(t, joints)),
                _ => tracing::trace!(t, "No subject detected"),
            }

            tracing::debug!(
                t,
                progress_pct = ((i + 1) * 100 / times.len()) as u32,
                collected = frames.len(),
                "Sampled"
            );
        }

        tracing::info!(
            attempted = times.len(),
            collected = frames.len(),
            "Sampling finished"
        );

        Ok(SampledClip {
            frames,
            attempted: times.len(),
            window_secs,
            scale,
        })
    }
}
