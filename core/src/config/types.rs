//! Configuration data types for the anomaly-detection workflow
//!
//! Core only holds fully resolved configuration values. A resolved
//! configuration is defined once and read by external tooling; nothing
//! here mutates it afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ConfigError, Result};

use super::naming;

/// Built-in dataset scenarios shipped with the getting-started workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scenario {
    /// Industrial water-pump telemetry, the default getting-started dataset
    #[serde(rename = "water-pump")]
    WaterPump,
    /// Generated signal with seeded anomalies
    #[serde(rename = "synthetic")]
    Synthetic,
}

impl Scenario {
    /// Get the scenario name as a string
    ///
    /// The scenario name doubles as the dataset name of its built-in
    /// configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::WaterPump => "water-pump",
            Scenario::Synthetic => "synthetic",
        }
    }

    /// Storage prefixes the notebooks expect for this scenario
    pub fn default_prefixes(&self) -> StoragePrefixes {
        match self {
            Scenario::WaterPump => StoragePrefixes {
                training: "smarter-anomaly-detection/training-data/".to_string(),
                label: "smarter-anomaly-detection/label-data/".to_string(),
                inference: "smarter-anomaly-detection/inference-data".to_string(),
            },
            Scenario::Synthetic => StoragePrefixes {
                training: "smarter-anomaly-detection-synth/training-data/".to_string(),
                label: "smarter-anomaly-detection-synth/label-data/".to_string(),
                inference: "smarter-anomaly-detection-synth/inference-data".to_string(),
            },
        }
    }

    /// All built-in scenarios
    pub fn all() -> [Scenario; 2] {
        [Scenario::WaterPump, Scenario::Synthetic]
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scenario {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "water-pump" => Ok(Scenario::WaterPump),
            "synthetic" => Ok(Scenario::Synthetic),
            other => Err(ConfigError::InvalidValue {
                field: "scenario".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// Storage prefixes for the three data categories within the bucket
///
/// Note the asymmetry inherited from the notebooks: the training and label
/// prefixes carry a trailing slash, the inference prefix does not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoragePrefixes {
    /// Prefix under which training data resides
    pub training: String,
    /// Prefix under which label data resides
    pub label: String,
    /// Prefix under which inference data resides
    pub inference: String,
}

impl StoragePrefixes {
    /// Whether the three prefixes are pairwise distinct
    pub fn are_distinct(&self) -> bool {
        self.training != self.label
            && self.training != self.inference
            && self.label != self.inference
    }
}

/// A fully resolved workflow configuration ready for use by external tooling
///
/// The model and scheduler names are always derived from the dataset name at
/// construction time; they never appear in raw configuration input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedWorkflowConfig {
    /// Object-storage bucket holding the intermediate results
    pub bucket: String,
    /// Storage prefixes for the three data categories
    pub prefixes: StoragePrefixes,
    /// Short identifier distinguishing this configuration instance
    pub dataset_name: String,
    /// Model name, always `{dataset_name}-model`
    pub model_name: String,
    /// Inference scheduler name, always `{dataset_name}-scheduler`
    pub inference_scheduler_name: String,
}

impl ResolvedWorkflowConfig {
    /// Create a configuration, deriving the model and scheduler names
    pub fn new(bucket: String, dataset_name: String, prefixes: StoragePrefixes) -> Self {
        let model_name = naming::model_name_for(&dataset_name);
        let inference_scheduler_name = naming::scheduler_name_for(&dataset_name);

        Self {
            bucket,
            prefixes,
            dataset_name,
            model_name,
            inference_scheduler_name,
        }
    }

    /// Built-in configuration for a scenario
    ///
    /// The bucket starts out as the placeholder sentinel and must be
    /// replaced before any downstream tooling uses the configuration.
    pub fn for_scenario(scenario: Scenario) -> Self {
        Self::new(
            naming::BUCKET_PLACEHOLDER.to_string(),
            scenario.as_str().to_string(),
            scenario.default_prefixes(),
        )
    }

    /// Override the bucket
    pub fn with_bucket(mut self, bucket: String) -> Self {
        self.bucket = bucket;
        self
    }

    /// Whether the bucket still carries the placeholder sentinel
    pub fn is_bucket_placeholder(&self) -> bool {
        self.bucket == naming::BUCKET_PLACEHOLDER
    }

    /// `s3://bucket/prefix` location of the training data
    pub fn training_data_uri(&self) -> String {
        format!("s3://{}/{}", self.bucket, self.prefixes.training)
    }

    /// `s3://bucket/prefix` location of the label data
    pub fn label_data_uri(&self) -> String {
        format!("s3://{}/{}", self.bucket, self.prefixes.label)
    }

    /// `s3://bucket/prefix` location of the inference data
    pub fn inference_data_uri(&self) -> String {
        format!("s3://{}/{}", self.bucket, self.prefixes.inference)
    }

    /// Render the configuration as pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.bucket.is_empty() {
            return Err("Bucket cannot be empty".to_string());
        }

        if self.dataset_name.is_empty() {
            return Err("Dataset name cannot be empty".to_string());
        }

        if self.prefixes.training.is_empty()
            || self.prefixes.label.is_empty()
            || self.prefixes.inference.is_empty()
        {
            return Err("Storage prefixes cannot be empty".to_string());
        }

        if !self.prefixes.are_distinct() {
            return Err("Storage prefixes must be distinct within one configuration".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn water_pump_scenario_matches_the_notebook_values() {
        let config = ResolvedWorkflowConfig::for_scenario(Scenario::WaterPump);

        assert_eq!(config.bucket, "<<YOUR_BUCKET>>");
        assert!(config.is_bucket_placeholder());
        assert_eq!(config.dataset_name, "water-pump");
        assert_eq!(config.model_name, "water-pump-model");
        assert_eq!(config.inference_scheduler_name, "water-pump-scheduler");
        assert_eq!(
            config.prefixes.training,
            "smarter-anomaly-detection/training-data/"
        );
        assert_eq!(config.prefixes.label, "smarter-anomaly-detection/label-data/");
        assert_eq!(
            config.prefixes.inference,
            "smarter-anomaly-detection/inference-data"
        );
    }

    #[test]
    fn synthetic_scenario_matches_the_notebook_values() {
        let config = ResolvedWorkflowConfig::for_scenario(Scenario::Synthetic);

        assert_eq!(config.bucket, "<<YOUR_BUCKET>>");
        assert_eq!(config.dataset_name, "synthetic");
        assert_eq!(config.model_name, "synthetic-model");
        assert_eq!(config.inference_scheduler_name, "synthetic-scheduler");
        assert_eq!(
            config.prefixes.training,
            "smarter-anomaly-detection-synth/training-data/"
        );
        assert_eq!(
            config.prefixes.label,
            "smarter-anomaly-detection-synth/label-data/"
        );
        assert_eq!(
            config.prefixes.inference,
            "smarter-anomaly-detection-synth/inference-data"
        );
    }

    #[test]
    fn scenarios_do_not_share_dataset_names_or_prefixes() {
        let water_pump = ResolvedWorkflowConfig::for_scenario(Scenario::WaterPump);
        let synthetic = ResolvedWorkflowConfig::for_scenario(Scenario::Synthetic);

        assert_ne!(water_pump.dataset_name, synthetic.dataset_name);
        assert_ne!(water_pump.prefixes, synthetic.prefixes);
        assert!(water_pump.prefixes.are_distinct());
        assert!(synthetic.prefixes.are_distinct());
    }

    #[test]
    fn custom_dataset_names_derive_consistent_resource_names() {
        let config = ResolvedWorkflowConfig::new(
            "demo-bucket".to_string(),
            "centrifugal-pump".to_string(),
            Scenario::WaterPump.default_prefixes(),
        );

        assert_eq!(config.model_name, "centrifugal-pump-model");
        assert_eq!(config.inference_scheduler_name, "centrifugal-pump-scheduler");
        assert!(!config.is_bucket_placeholder());
    }

    #[test]
    fn with_bucket_clears_the_placeholder() {
        let config = ResolvedWorkflowConfig::for_scenario(Scenario::WaterPump)
            .with_bucket("my-results-bucket".to_string());

        assert!(!config.is_bucket_placeholder());
        assert_eq!(
            config.training_data_uri(),
            "s3://my-results-bucket/smarter-anomaly-detection/training-data/"
        );
        assert_eq!(
            config.inference_data_uri(),
            "s3://my-results-bucket/smarter-anomaly-detection/inference-data"
        );
    }

    #[test]
    fn validation_rejects_duplicate_prefixes_and_empty_names() {
        let mut config = ResolvedWorkflowConfig::for_scenario(Scenario::WaterPump);
        assert!(config.validate().is_ok());

        config.prefixes.label = config.prefixes.training.clone();
        assert!(config.validate().is_err());

        let empty = ResolvedWorkflowConfig::new(
            "demo-bucket".to_string(),
            String::new(),
            Scenario::Synthetic.default_prefixes(),
        );
        assert!(empty.validate().is_err());
    }

    #[test]
    fn scenario_names_parse_and_render_consistently() {
        assert_eq!("water-pump".parse::<Scenario>().unwrap(), Scenario::WaterPump);
        assert_eq!("synthetic".parse::<Scenario>().unwrap(), Scenario::Synthetic);
        assert!("turbine".parse::<Scenario>().is_err());

        for scenario in Scenario::all() {
            assert_eq!(scenario.as_str().parse::<Scenario>().unwrap(), scenario);
        }

        let json = serde_json::to_string(&Scenario::WaterPump).unwrap();
        assert_eq!(json, "\"water-pump\"");
    }
}
