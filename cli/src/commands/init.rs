//! Init command: scaffold a configuration file

use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;
use workbench_core::{ResolvedWorkflowConfig, Scenario};

use crate::config::RawConfig;

/// Write a workbench.json scaffold for the selected scenario
pub async fn init_command(scenario: Option<String>, output: PathBuf, force: bool) -> Result<()> {
    let scenario = match scenario {
        Some(name) => Scenario::from_str(&name)?,
        None => Scenario::WaterPump,
    };

    if output.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            output.display()
        );
    }

    let defaults = ResolvedWorkflowConfig::for_scenario(scenario);
    let scaffold = RawConfig {
        scenario: Some(scenario.as_str().to_string()),
        bucket: Some(defaults.bucket.clone()),
        prefix_training: Some(defaults.prefixes.training.clone()),
        prefix_label: Some(defaults.prefixes.label.clone()),
        prefix_inference: Some(defaults.prefixes.inference.clone()),
        dataset_name: Some(defaults.dataset_name.clone()),
    };

    let content = serde_json::to_string_pretty(&scaffold)?;
    tokio::fs::write(&output, content)
        .await
        .with_context(|| format!("Failed to write {}", output.display()))?;

    info!("Wrote configuration scaffold to {}", output.display());

    println!("📝 Wrote {} for scenario '{}'", output.display(), scenario);
    println!("💡 Replace the bucket placeholder before running the notebooks!");

    Ok(())
}
