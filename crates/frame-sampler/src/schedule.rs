//! Sampling schedule and raster rescaling.

use squatcheck_common::SamplingDefaults;

/// Which instants of a source get sampled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleSchedule {
    /// Nominal samples per second of source time.
    pub fps: u32,
    /// Never sample past this many seconds, whatever the source length.
    pub max_window_secs: f64,
}

impl Default for SampleSchedule {
    fn default() -> Self {
        Self::from(&SamplingDefaults::default())
    }
}

impl From<&SamplingDefaults> for SampleSchedule {
    fn from(defaults: &SamplingDefaults) -> Self {
        Self {
            fps: defaults.fps,
            max_window_secs: defaults.max_window_secs,
        }
    }
}

impl SampleSchedule {
    /// Seconds between consecutive samples.
    pub fn step_secs(&self) -> f64 {
        1.0 / self.fps.max(1) as f64
    }

    /// Length of source time that will be sampled.
    ///
    /// Unknown (NaN) or negative durations count as zero; an unbounded
    /// source is capped at the window.
    pub fn window_secs(&self, duration_secs: f64) -> f64 {
        let duration = if duration_secs.is_nan() || duration_secs < 0.0 {
            0.0
        } else {
            duration_secs
        };
        duration.min(self.max_window_secs.max(0.0))
    }

    /// Sample instants `0, step, 2*step, ...` up to and including the end
    /// of the window.
    ///
    /// Times are computed from the sample index so that rounding never
    /// adds or drops a sample at the window end.
    pub fn timestamps(&self, duration_secs: f64) -> Vec<f64> {
        let fps = self.fps.max(1) as f64;
        let window = self.window_secs(duration_secs);
        let last = (window * fps + 1e-9).floor() as usize;
        (0..=last).map(|i| i as f64 / fps).collect()
    }
}

/// Factor that maps native source pixels onto the analysis raster.
///
/// An unknown (zero) native width is assumed to already be at render width.
pub fn rescale_factor(native_width: u32, render_width: u32) -> f64 {
    if native_width == 0 {
        return 1.0;
    }
    render_width as f64 / native_width as f64
}
