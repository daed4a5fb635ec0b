//! Configuration management
//!
//! Defaults, an optional TOML file and `HASHER__*` environment variables,
//! merged with Figment.

pub mod loader;
pub mod types;

pub use loader::{ConfigFileStatus, ConfigLoader};
pub use types::{GeneratorConfig, HasherConfig, HashingConfig, LoggingConfig};
