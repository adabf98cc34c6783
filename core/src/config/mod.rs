//! Configuration module for workbench core
//!
//! Only exports pure data types. All discovery, loading, and merging
//! happens in the CLI layer.

pub mod naming;
pub mod types;

pub use naming::{model_name_for, scheduler_name_for, BUCKET_PLACEHOLDER};
pub use types::{ResolvedWorkflowConfig, Scenario, StoragePrefixes};
