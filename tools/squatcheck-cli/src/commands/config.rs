//! Print the effective configuration.

use squatcheck_common::AppConfig;

/// `source` names where the printed values came from.
pub fn run(config: &AppConfig, source: &str) -> anyhow::Result<()> {
    println!("# {source}");
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
