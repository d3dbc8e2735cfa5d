//! Squatcheck CLI: judge squat depth from sampled pose data.
//!
//! Usage:
//!   squatcheck analyze <FRAMES>    Judge depth from a frame JSONL file
//!   squatcheck sample <TRACK>      Resample a recorded pose track into frames
//!   squatcheck inspect <FRAMES>    Show sampling and bottom-frame diagnostics
//!   squatcheck config              Print the effective configuration

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use squatcheck_common::{config_file_path, AppConfig, FindingLanguage};

mod commands;

#[derive(Parser)]
#[command(
    name = "squatcheck",
    about = "Strict squat depth judging from pose-estimation samples",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    /// Config file (defaults to $XDG_CONFIG_HOME/squatcheck/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Judge squat depth from sampled frames
    Analyze {
        /// Frame JSONL file in analysis raster coordinates
        path: PathBuf,

        /// Finding language: en | zh-tw
        #[arg(long)]
        lang: Option<FindingLanguage>,

        /// Print the full analysis report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resample a recorded pose track into analysis frames
    Sample {
        /// Pose track JSONL in native pixel coordinates
        path: PathBuf,

        /// Width of the recorded video in pixels
        #[arg(long)]
        native_width: u32,

        /// Samples per second
        #[arg(long)]
        fps: Option<u32>,

        /// Maximum seconds of source time to sample
        #[arg(long)]
        max_secs: Option<f64>,

        /// Analysis raster width
        #[arg(long)]
        width: Option<u32>,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show diagnostics for a frame file
    Inspect {
        /// Frame JSONL file
        path: PathBuf,
    },

    /// Print the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_path = config_file_path();
    let (mut config, load_error) = match &cli.config {
        Some(path) => (
            AppConfig::load_from(path)
                .map_err(|e| anyhow::anyhow!("Failed to load config {}: {e}", path.display()))?,
            None,
        ),
        None => AppConfig::load_or_default(&default_path),
    };

    // Initialize logging
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    if cli.json_logs {
        config.logging.json = true;
    }
    squatcheck_common::logging::init_logging(&config.logging);

    if let Some(e) = &load_error {
        tracing::warn!(
            path = %default_path.display(),
            error = %e,
            "Ignoring config file, using defaults"
        );
    }

    match cli.command {
        Commands::Analyze { path, lang, json } => {
            if let Some(lang) = lang {
                config.depth.language = lang;
            }
            commands::analyze::run(path, &config, json)
        }
        Commands::Sample {
            path,
            native_width,
            fps,
            max_secs,
            width,
            output,
        } => {
            if let Some(fps) = fps {
                config.sampling.fps = fps;
            }
            if let Some(max_secs) = max_secs {
                config.sampling.max_window_secs = max_secs;
            }
            if let Some(width) = width {
                config.sampling.render_width = width;
            }
            config
                .validate()
                .map_err(|e| anyhow::anyhow!("Invalid sampling options: {e}"))?;
            commands::sample::run(path, native_width, &config, output).await
        }
        Commands::Inspect { path } => commands::inspect::run(path, &config),
        Commands::Config => {
            let source = match (&cli.config, &load_error) {
                (Some(path), _) => path.display().to_string(),
                (None, Some(_)) => {
                    format!("built-in defaults ({} ignored)", default_path.display())
                }
                (None, None) if default_path.exists() => default_path.display().to_string(),
                (None, None) => "built-in defaults".to_string(),
            };
            commands::config::run(&config, &source)
        }
    }
}
