//! Example demonstrating how external tooling reads the workflow configuration
//!
//! This example shows the two ways to obtain a configuration:
//! 1. A built-in scenario, exactly as the getting-started notebooks use it
//! 2. A custom dataset with derived resource names

use workbench_core::{ResolvedWorkflowConfig, Scenario};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== anomaly-workbench Configuration Example ===\n");

    // Method 1: Built-in scenarios
    for scenario in Scenario::all() {
        let config = ResolvedWorkflowConfig::for_scenario(scenario);

        println!("Scenario '{}':", scenario);
        println!("  model:     {}", config.model_name);
        println!("  scheduler: {}", config.inference_scheduler_name);
        println!("  training:  {}", config.training_data_uri());

        if config.is_bucket_placeholder() {
            println!("  (bucket placeholder not replaced yet)");
        }
        println!();
    }

    // Method 2: A custom dataset keeps the same naming rules
    let custom = ResolvedWorkflowConfig::new(
        "my-results-bucket".to_string(),
        "cooling-tower".to_string(),
        Scenario::WaterPump.default_prefixes(),
    );
    println!("Custom dataset '{}':", custom.dataset_name);
    println!("{}", custom.to_json_pretty()?);

    Ok(())
}
