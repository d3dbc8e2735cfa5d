//! Human-readable verdicts produced by analysis.

use serde::{Deserialize, Serialize};

/// A timestamped verdict or diagnostic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Source time the finding refers to, in seconds. Players seek here.
    pub t: f64,
    pub title: String,
    pub detail: String,
}

impl Finding {
    pub fn new(t: f64, title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            t,
            title: title.into(),
            detail: detail.into(),
        }
    }

    /// `t` rendered as `m:ss.s`.
    pub fn timestamp_label(&self) -> String {
        format_timestamp(self.t)
    }
}

/// Format seconds as `m:ss.s` (e.g. `83.26` -> `1:23.3`).
pub fn format_timestamp(t: f64) -> String {
    let t = if t.is_finite() { t.max(0.0) } else { 0.0 };
    // Round once, in tenths, so a carry reaches the minutes.
    let tenths = (t * 10.0).round() as u64;
    let minutes = tenths / 600;
    let rest = tenths % 600;
    format!("{}:{:02}.{}", minutes, rest / 10, rest % 10)
}
