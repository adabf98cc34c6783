//! Show command: print the resolved workflow configuration

use anyhow::Result;
use tracing::{info, warn};

use crate::config::CliConfigLoader;

/// Print the resolved workflow configuration
pub async fn show_command(config_loader: CliConfigLoader, json: bool) -> Result<()> {
    info!("Resolving workflow configuration");

    let config = config_loader.load().await?;

    if json {
        println!("{}", config.to_json_pretty()?);
        return Ok(());
    }

    println!("🧭 Workflow configuration: {}\n", config.dataset_name);
    println!("🪣 Bucket: {}", config.bucket);
    println!("📦 Dataset: {}", config.dataset_name);
    println!("🤖 Model: {}", config.model_name);
    println!("⏰ Inference scheduler: {}", config.inference_scheduler_name);
    println!();
    println!("📁 Training data:  {}", config.training_data_uri());
    println!("📁 Label data:     {}", config.label_data_uri());
    println!("📁 Inference data: {}", config.inference_data_uri());

    if config.is_bucket_placeholder() {
        warn!("Bucket still carries the placeholder value");
        println!("\n💡 Replace the bucket placeholder before pointing the notebooks at this configuration!");
    }

    Ok(())
}
