//! Naming rules for workflow resources
//!
//! The model and inference scheduler are located by name by the tooling
//! that consumes this configuration, so the dataset-name derivation here
//! is a compatibility contract: suffix and hyphen must not change.

/// Sentinel bucket value shipped in every built-in scenario
pub const BUCKET_PLACEHOLDER: &str = "<<YOUR_BUCKET>>";

/// Suffix appended to the dataset name to form the model name
pub const MODEL_SUFFIX: &str = "-model";

/// Suffix appended to the dataset name to form the inference scheduler name
pub const SCHEDULER_SUFFIX: &str = "-scheduler";

/// Derive the model name for a dataset
pub fn model_name_for(dataset_name: &str) -> String {
    format!("{}{}", dataset_name, MODEL_SUFFIX)
}

/// Derive the inference scheduler name for a dataset
pub fn scheduler_name_for(dataset_name: &str) -> String {
    format!("{}{}", dataset_name, SCHEDULER_SUFFIX)
}
