//! CLI-side configuration discovery and loading

pub mod loader;

pub use loader::{CliConfigLoader, RawConfig};
