//! Simple CLI configuration loader for anomaly-workbench
//!
//! Implements single-source priority loading with flag overrides:
//! 1. --config file/dir (highest priority)
//! 2. Current working directory: ./workbench.json or ./.workbench/config.json
//! 3. Git repository root: <repo_root>/.workbench/config.json
//! 4. XDG config: $XDG_CONFIG_HOME/workbench/config.json or ~/.config/workbench/config.json
//! 5. Built-in scenario defaults (no files)
//!
//! Bucket resolution within the selected source: --bucket flag, then the
//! file value (with "env:VAR_NAME" indirection), then $WORKBENCH_BUCKET,
//! then the scenario's placeholder sentinel.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use workbench_core::{ResolvedWorkflowConfig, Scenario, BUCKET_PLACEHOLDER};

/// Raw configuration file format (simple single-file schema)
///
/// Every field is optional; anything not provided falls back to the
/// selected scenario's built-in value. The model and scheduler names are
/// never part of the file schema - they always follow the dataset name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawConfig {
    /// Built-in scenario the file starts from (defaults to "water-pump")
    #[serde(default)]
    pub scenario: Option<String>,
    /// Bucket name (can be "env:VAR_NAME" for environment variable)
    #[serde(default)]
    pub bucket: Option<String>,
    /// Training data prefix override
    #[serde(default)]
    pub prefix_training: Option<String>,
    /// Label data prefix override
    #[serde(default)]
    pub prefix_label: Option<String>,
    /// Inference data prefix override
    #[serde(default)]
    pub prefix_inference: Option<String>,
    /// Dataset name override (model and scheduler names follow it)
    #[serde(default)]
    pub dataset_name: Option<String>,
}

/// CLI configuration loader
pub struct CliConfigLoader {
    /// Override config file/directory path
    config_override: Option<PathBuf>,
    /// Flag overrides
    scenario_override: Option<String>,
    bucket_override: Option<String>,
}

impl CliConfigLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self {
            config_override: None,
            scenario_override: None,
            bucket_override: None,
        }
    }

    /// Set config file/directory override
    pub fn with_config_override(mut self, path: PathBuf) -> Self {
        self.config_override = Some(path);
        self
    }

    /// Set scenario override
    pub fn with_scenario_override(mut self, scenario: String) -> Self {
        self.scenario_override = Some(scenario);
        self
    }

    /// Set bucket override
    pub fn with_bucket_override(mut self, bucket: String) -> Self {
        self.bucket_override = Some(bucket);
        self
    }

    /// Load and resolve configuration
    pub async fn load(&self) -> Result<ResolvedWorkflowConfig> {
        // Step 1: Find and load base configuration
        let mut config = if let Some(override_path) = &self.config_override {
            // Use explicit config override
            let expanded = shellexpand::tilde(&override_path.to_string_lossy()).into_owned();
            let path = PathBuf::from(expanded);
            self.load_from_path(&path).await.with_context(|| {
                format!(
                    "Failed to load config from override path: {}",
                    path.display()
                )
            })?
        } else {
            // Search in priority order
            self.search_and_load().await?
        };

        // Step 2: Apply flag overrides
        if let Some(scenario) = &self.scenario_override {
            config.scenario = Some(scenario.clone());
        }
        if let Some(bucket) = &self.bucket_override {
            config.bucket = Some(bucket.clone());
        }

        // Step 3: Resolve to the final workflow config
        self.resolve_config(config)
    }

    /// Search for config in priority order
    async fn search_and_load(&self) -> Result<RawConfig> {
        // 1. Current working directory
        if let Some(config) = self.try_load_cwd().await? {
            return Ok(config);
        }

        // 2. Git repository root
        if let Some(config) = self.try_load_git_root().await? {
            return Ok(config);
        }

        // 3. XDG config directory
        if let Some(config) = self.try_load_xdg().await? {
            return Ok(config);
        }

        // 4. No files anywhere: built-in scenario defaults
        Ok(RawConfig::default())
    }

    /// Try loading from current working directory
    async fn try_load_cwd(&self) -> Result<Option<RawConfig>> {
        let cwd = std::env::current_dir()?;

        // Try ./workbench.json first
        let workbench_json = cwd.join("workbench.json");
        if workbench_json.exists() {
            return Ok(Some(self.load_file(&workbench_json).await?));
        }

        // Try ./.workbench/config.json
        let workbench_dir_config = cwd.join(".workbench").join("config.json");
        if workbench_dir_config.exists() {
            return Ok(Some(self.load_file(&workbench_dir_config).await?));
        }

        Ok(None)
    }

    /// Try loading from git repository root
    async fn try_load_git_root(&self) -> Result<Option<RawConfig>> {
        if let Some(git_root) = self.find_git_root()? {
            let config_path = git_root.join(".workbench").join("config.json");
            if config_path.exists() {
                return Ok(Some(self.load_file(&config_path).await?));
            }
        }
        Ok(None)
    }

    /// Try loading from XDG config directory
    async fn try_load_xdg(&self) -> Result<Option<RawConfig>> {
        if let Some(config_dir) = self.get_xdg_config_dir() {
            let config_path = config_dir.join("workbench").join("config.json");
            if config_path.exists() {
                return Ok(Some(self.load_file(&config_path).await?));
            }
        }
        Ok(None)
    }

    /// Load from an explicit file or directory path
    async fn load_from_path(&self, path: &Path) -> Result<RawConfig> {
        if path.is_file() {
            self.load_file(path).await
        } else if path.is_dir() {
            let config_file = path.join("config.json");
            if config_file.exists() {
                self.load_file(&config_file).await
            } else {
                Err(anyhow!(
                    "No config.json found in directory: {}",
                    path.display()
                ))
            }
        } else {
            Err(anyhow!("Config path does not exist: {}", path.display()))
        }
    }

    /// Load a single config file
    async fn load_file(&self, path: &Path) -> Result<RawConfig> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Find git repository root
    fn find_git_root(&self) -> Result<Option<PathBuf>> {
        let mut current = std::env::current_dir()?;

        loop {
            if current.join(".git").exists() {
                return Ok(Some(current));
            }

            if let Some(parent) = current.parent() {
                current = parent.to_path_buf();
            } else {
                break;
            }
        }

        Ok(None)
    }

    /// Get XDG config directory
    fn get_xdg_config_dir(&self) -> Option<PathBuf> {
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            Some(PathBuf::from(xdg_config))
        } else {
            dirs::home_dir().map(|home| home.join(".config"))
        }
    }

    /// Resolve raw config to ResolvedWorkflowConfig
    fn resolve_config(&self, config: RawConfig) -> Result<ResolvedWorkflowConfig> {
        // Parse scenario (the notebooks default to the water-pump dataset)
        let scenario = match &config.scenario {
            Some(name) => Scenario::from_str(name)?,
            None => Scenario::WaterPump,
        };

        // Overlay prefixes on the scenario defaults
        let mut prefixes = scenario.default_prefixes();
        if let Some(training) = config.prefix_training {
            prefixes.training = training;
        }
        if let Some(label) = config.prefix_label {
            prefixes.label = label;
        }
        if let Some(inference) = config.prefix_inference {
            prefixes.inference = inference;
        }

        // The dataset name drives the derived model and scheduler names
        let dataset_name = config
            .dataset_name
            .unwrap_or_else(|| scenario.as_str().to_string());

        // Resolve bucket (handle env: indirection and the env fallback)
        let bucket = match config.bucket {
            Some(value) if value.starts_with("env:") => {
                let var_name = &value[4..];
                std::env::var(var_name)
                    .with_context(|| format!("Environment variable not found: {}", var_name))?
            }
            Some(value) => value,
            None => match std::env::var("WORKBENCH_BUCKET") {
                Ok(value) => value,
                Err(_) => BUCKET_PLACEHOLDER.to_string(),
            },
        };

        // Create resolved config
        let resolved = ResolvedWorkflowConfig::new(bucket, dataset_name, prefixes);

        // Validate
        resolved
            .validate()
            .map_err(|e| anyhow!("Configuration validation failed: {}", e))?;

        Ok(resolved)
    }
}

impl Default for CliConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
