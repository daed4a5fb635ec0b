//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables,
//! and default values.

use crate::config::HasherConfig;
use crate::constants::*;
use crate::crypto::validate_cost;
use crate::error::{Error, Result};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use tracing::debug;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use std::env;
use std::path::{Path, PathBuf};

/// Which configuration file, if any, a load used
///
/// Returned to the caller so the outcome can be logged once a subscriber is
/// installed, since logging itself is configured from the loaded values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigFileStatus {
    /// The file was found and merged
    Loaded(PathBuf),
    /// An explicit path was given but does not exist
    Missing(PathBuf),
    /// No path was given and no default file exists
    NotConfigured,
}

impl ConfigFileStatus {
    /// Emit the outcome through `tracing`
    pub fn log(&self) {
        match self {
            Self::Loaded(path) => log_config_loaded(path, true),
            Self::Missing(path) => log_config_loaded(path, false),
            Self::NotConfigured => debug!("No configuration file, using defaults"),
        }
    }
}

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `HasherConfig::default()`
    /// 2. TOML configuration file (if exists)
    /// 3. Environment variables with prefix (e.g., `HASHER__HASHING__COST`)
    pub fn load(&self) -> Result<HasherConfig> {
        self.load_with_status().map(|(config, _)| config)
    }

    /// Load configuration and report which file was used
    pub fn load_with_status(&self) -> Result<(HasherConfig, ConfigFileStatus)> {
        let mut figment = Figment::new().merge(Serialized::defaults(HasherConfig::default()));

        let status = match &self.config_path {
            Some(config_path) if config_path.exists() => {
                ConfigFileStatus::Loaded(config_path.clone())
            }
            Some(config_path) => ConfigFileStatus::Missing(config_path.clone()),
            None => Self::find_default_config_path()
                .map_or(ConfigFileStatus::NotConfigured, ConfigFileStatus::Loaded),
        };
        if let ConfigFileStatus::Loaded(path) = &status {
            figment = figment.merge(Toml::file(path));
        }

        // Double underscore separates nested keys (HASHER__LOGGING__JSON_FORMAT)
        figment = figment.merge(
            Env::prefixed(&format!("{}{}", self.env_prefix, CONFIG_ENV_SEPARATOR))
                .split(CONFIG_ENV_SEPARATOR),
        );

        let config: HasherConfig = figment.extract().with_config_context(|| {
            format!(
                "Failed to extract configuration (file: {})",
                self.config_path
                    .as_deref()
                    .map_or_else(|| "default search".to_string(), |p| p.display().to_string())
            )
        })?;

        validate_config(&config)?;

        Ok((config, status))
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &HasherConfig, path: P) -> Result<()> {
        let toml_string = toml::to_string_pretty(config)
            .config_context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context(format!(
            "Failed to write config file {}",
            path.as_ref().display()
        ))?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find the first existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
            dirs::home_dir().map(|d| {
                d.join(format!(".{}", DEFAULT_CONFIG_DIR))
                    .join(DEFAULT_CONFIG_FILENAME)
            }),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate every configuration section
fn validate_config(config: &HasherConfig) -> Result<()> {
    validate_cost(config.hashing.cost).map_err(|_| {
        Error::configuration(format!(
            "hashing.cost must be between {} and {}, got {}",
            BCRYPT_MIN_COST, BCRYPT_MAX_COST, config.hashing.cost
        ))
    })?;

    if config.generator.length == 0 {
        return Err(Error::configuration(
            "generator.length must be greater than 0",
        ));
    }

    parse_log_level(&config.logging.level)?;

    Ok(())
}
