//! # anomaly-workbench Core
//!
//! Core library for anomaly-workbench - the configuration contract of the
//! smarter-anomaly-detection getting-started workflow.
//!
//! This library holds the data model read by external tooling (the
//! getting-started notebooks): which bucket and prefixes hold the training,
//! label, and inference data, and how the model and inference scheduler are
//! named for a given dataset.

// Core modules
pub mod config;
pub mod error;

// Re-export commonly used types
pub use config::{ResolvedWorkflowConfig, Scenario, StoragePrefixes, BUCKET_PLACEHOLDER};
pub use error::{Error, Result};

/// Current version of the workbench-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing for the library
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

/// Initialize tracing with a specific debug mode
pub fn init_tracing_with_debug(debug: bool) {
    let filter = if debug { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
