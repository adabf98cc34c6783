//! Scenarios listing command

use anyhow::Result;
use tracing::info;
use workbench_core::{ResolvedWorkflowConfig, Scenario};

/// Show the built-in dataset scenarios
pub async fn scenarios_command() -> Result<()> {
    info!("Listing built-in scenarios");

    println!("🗂️  Built-in Scenarios\n");

    for scenario in Scenario::all() {
        let config = ResolvedWorkflowConfig::for_scenario(scenario);

        println!("📦 {}", scenario);
        println!("   Model:     {}", config.model_name);
        println!("   Scheduler: {}", config.inference_scheduler_name);
        println!("   Training:  {}", config.prefixes.training);
        println!("   Label:     {}", config.prefixes.label);
        println!("   Inference: {}\n", config.prefixes.inference);
    }

    println!("💡 Select one with `workbench --scenario <name>` or scaffold a file with `workbench init`.");

    Ok(())
}
