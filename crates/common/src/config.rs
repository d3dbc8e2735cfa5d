//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{SquatcheckError, SquatcheckResult};

/// Global application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// How the frame sampler walks a source.
    pub sampling: SamplingDefaults,

    /// Depth-judging thresholds and finding wording.
    pub depth: DepthDefaults,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Default sampling parameters for the frame producer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingDefaults {
    /// Nominal samples per second of source time.
    pub fps: u32,

    /// Upper bound on how much source time is sampled, in seconds.
    pub max_window_secs: f64,

    /// Width of the shared analysis raster that coordinates are rescaled to.
    pub render_width: u32,
}

/// Default depth-judging thresholds.
///
/// `torso_floor` is expressed in units of the shared raster, so it is only
/// meaningful together with `SamplingDefaults::render_width`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DepthDefaults {
    /// Fewer frames than this produce no findings.
    pub min_frames: usize,

    /// Minimum shoulder-hip distance accepted as a body scale.
    pub torso_floor: f64,

    /// Margin as a fraction of torso length.
    pub margin_ratio: f64,

    /// Minimum per-joint confidence for a side to count.
    pub min_confidence: f64,

    /// Language used for finding titles and details.
    pub language: FindingLanguage,
}

/// Language of the human-readable findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FindingLanguage {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "zh-tw")]
    TraditionalChinese,
}

impl FromStr for FindingLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "zh-tw" | "zh_tw" | "zh-hant" => Ok(Self::TraditionalChinese),
            other => Err(format!("unknown finding language '{other}' (expected en or zh-tw)")),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "squatcheck=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,
}

impl Default for SamplingDefaults {
    fn default() -> Self {
        Self {
            fps: 5,
            max_window_secs: 20.0,
            render_width: 640,
        }
    }
}

impl Default for DepthDefaults {
    fn default() -> Self {
        Self {
            min_frames: 5,
            torso_floor: 10.0,
            margin_ratio: 0.03,
            min_confidence: 0.4,
            language: FindingLanguage::English,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load config from `path`, falling back to defaults.
    ///
    /// A missing file is not an error. A file that fails to parse or
    /// validate yields the defaults together with the error, so the caller
    /// can report it once logging is up.
    pub fn load_or_default(path: &Path) -> (Self, Option<SquatcheckError>) {
        if !path.exists() {
            return (Self::default(), None);
        }
        match Self::load_from(path) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Load config from an explicit path. Missing keys take their defaults.
    pub fn load_from(path: &Path) -> SquatcheckResult<Self> {
        if !path.exists() {
            return Err(SquatcheckError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make sampling or judging meaningless.
    pub fn validate(&self) -> SquatcheckResult<()> {
        if self.sampling.fps == 0 {
            return Err(SquatcheckError::config("sampling.fps must be at least 1"));
        }
        if !(self.sampling.max_window_secs.is_finite() && self.sampling.max_window_secs >= 0.0) {
            return Err(SquatcheckError::config(
                "sampling.max_window_secs must be a non-negative number",
            ));
        }
        if self.sampling.render_width == 0 {
            return Err(SquatcheckError::config(
                "sampling.render_width must be at least 1",
            ));
        }
        if self.depth.min_frames == 0 {
            return Err(SquatcheckError::config("depth.min_frames must be at least 1"));
        }
        if !(self.depth.torso_floor.is_finite() && self.depth.torso_floor >= 0.0) {
            return Err(SquatcheckError::config(
                "depth.torso_floor must be a non-negative number",
            ));
        }
        if !(self.depth.margin_ratio.is_finite() && self.depth.margin_ratio >= 0.0) {
            return Err(SquatcheckError::config(
                "depth.margin_ratio must be a non-negative number",
            ));
        }
        if !(0.0..=1.0).contains(&self.depth.min_confidence) {
            return Err(SquatcheckError::config(
                "depth.min_confidence must lie in [0, 1]",
            ));
        }
        Ok(())
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("squatcheck").join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_judging_constants() {
        let config = AppConfig::default();
        assert_eq!(config.sampling.fps, 5);
        assert_eq!(config.sampling.max_window_secs, 20.0);
        assert_eq!(config.sampling.render_width, 640);
        assert_eq!(config.depth.min_frames, 5);
        assert_eq!(config.depth.torso_floor, 10.0);
        assert_eq!(config.depth.margin_ratio, 0.03);
        assert_eq!(config.depth.min_confidence, 0.4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_config_fills_missing_keys() {
        let raw = r#"{"depth":{"language":"zh-tw"},"logging":{"json":true}}"#;
        let config: AppConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(config.depth.language, FindingLanguage::TraditionalChinese);
        assert_eq!(config.depth.min_frames, 5);
        assert!(config.logging.json);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.sampling, SamplingDefaults::default());
    }

    #[test]
    fn validate_rejects_zero_fps() {
        let mut config = AppConfig::default();
        config.sampling.fps = 0;
        assert!(matches!(
            config.validate(),
            Err(SquatcheckError::Config { .. })
        ));
    }

    #[test]
    fn validate_rejects_negative_torso_floor() {
        let mut config = AppConfig::default();
        config.depth.torso_floor = -1.0;
        assert!(matches!(
            config.validate(),
            Err(SquatcheckError::Config { .. })
        ));

        config.depth.torso_floor = f64::INFINITY;
        assert!(config.validate().is_err());

        config.depth.torso_floor = 0.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_min_frames() {
        let mut config = AppConfig::default();
        config.depth.min_frames = 0;
        assert!(matches!(
            config.validate(),
            Err(SquatcheckError::Config { .. })
        ));
    }

    #[test]
    fn language_parses_from_cli_spelling() {
        assert_eq!("en".parse::<FindingLanguage>(), Ok(FindingLanguage::English));
        assert_eq!("ZH-TW".parse::<FindingLanguage>(), Ok(FindingLanguage::TraditionalChinese));
        assert!("fr".parse::<FindingLanguage>().is_err());
    }

    #[test]
    fn load_from_missing_path_reports_file_not_found() {
        let path = std::env::temp_dir().join("squatcheck-does-not-exist.json");
        assert!(matches!(
            AppConfig::load_from(&path),
            Err(SquatcheckError::FileNotFound { .. })
        ));
    }

    fn write_temp_config(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "squatcheck-{}-{name}.json",
            std::process::id()
        ));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn load_or_default_without_file_is_silent() {
        let path = std::env::temp_dir().join("squatcheck-no-config-here.json");
        let (config, error) = AppConfig::load_or_default(&path);
        assert_eq!(config, AppConfig::default());
        assert!(error.is_none());
    }

    #[test]
    fn load_or_default_reports_unknown_language() {
        let path = write_temp_config("bad-language", r#"{"depth":{"language":"klingon"}}"#);
        let (config, error) = AppConfig::load_or_default(&path);
        std::fs::remove_file(&path).ok();

        assert_eq!(config, AppConfig::default());
        assert!(matches!(error, Some(SquatcheckError::Json(_))));
    }

    #[test]
    fn load_or_default_reports_out_of_range_values() {
        let path = write_temp_config("bad-confidence", r#"{"depth":{"min_confidence":5}}"#);
        let (config, error) = AppConfig::load_or_default(&path);
        std::fs::remove_file(&path).ok();

        assert_eq!(config.depth.min_confidence, 0.4);
        assert!(matches!(error, Some(SquatcheckError::Config { .. })));
    }

    #[test]
    fn load_or_default_keeps_a_valid_file() {
        let path = write_temp_config("zh-tw", r#"{"depth":{"language":"zh-tw"}}"#);
        let (config, error) = AppConfig::load_or_default(&path);
        std::fs::remove_file(&path).ok();

        assert!(error.is_none());
        assert_eq!(config.depth.language, FindingLanguage::TraditionalChinese);
    }
}
