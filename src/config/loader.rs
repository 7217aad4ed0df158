//! Rate-configuration loading functionality.
//!
//! This module provides the [`RateConfigLoader`] type for loading a
//! [`PayRateConfig`] from a YAML file. Fields omitted from the file fall
//! back to their documented defaults, so a minimal override file is enough.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::PayRateConfig;

/// Loads and provides access to the pay-rate configuration.
///
/// # File format
///
/// A single YAML document with any subset of the [`PayRateConfig`] fields:
///
/// ```text
/// base_hourly_rate: "25.00"
/// overtime_multiplier: "1.5"
/// night_diff_start: "18:00"
/// night_diff_end: "06:00"
/// ```
///
/// # Example
///
/// ```no_run
/// use timeclock_engine::config::RateConfigLoader;
///
/// let loader = RateConfigLoader::load("./config/rates.yaml").unwrap();
/// println!("Base rate: {}", loader.config().base_hourly_rate);
/// ```
#[derive(Debug, Clone)]
pub struct RateConfigLoader {
    config: PayRateConfig,
}

impl RateConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] if the file cannot be read,
    /// or [`EngineError::ConfigParseError`] if it contains invalid YAML or
    /// ill-typed fields.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(Self { config })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &PayRateConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> PayRateConfig {
        self.config
    }
}
