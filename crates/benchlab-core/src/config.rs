//! Configuration system for benchlab

use crate::error::{BenchError, Result};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, OnceLock};

/// Global configuration for benchlab
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Default log filter, overridden by `RUST_LOG`
    pub log_filter: String,
    /// Select every suite right after startup (demo convenience; the library
    /// itself always constructs suites deselected)
    pub preselect_all: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            preselect_all: false,
        }
    }
}

impl BenchConfig {
    /// Parse a configuration from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| BenchError::configuration(format!("invalid config: {e}")))
    }
}

/// Global configuration manager
pub struct ConfigManager {
    config: Arc<RwLock<BenchConfig>>,
}

impl ConfigManager {
    /// Create a new configuration manager with default settings
    pub fn new() -> Self {
        Self::with_config(BenchConfig::default())
    }

    /// Create a configuration manager with custom config
    pub fn with_config(config: BenchConfig) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
        }
    }

    /// Get a copy of the current configuration
    pub fn get_config(&self) -> BenchConfig {
        self.config.read().clone()
    }

    /// Update the configuration
    pub fn update_config<F>(&self, updater: F)
    where
        F: FnOnce(&mut BenchConfig),
    {
        let mut config = self.config.write();
        updater(&mut config);
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Global configuration instance
static CONFIG_MANAGER: OnceLock<ConfigManager> = OnceLock::new();

/// Initialize the global configuration manager
pub fn init_config() -> &'static ConfigManager {
    CONFIG_MANAGER.get_or_init(ConfigManager::new)
}

/// Initialize the global configuration manager with custom config
pub fn init_config_with(config: BenchConfig) -> &'static ConfigManager {
    CONFIG_MANAGER.get_or_init(|| ConfigManager::with_config(config))
}

/// Get the global configuration manager, if initialized
pub fn get_config_manager() -> Option<&'static ConfigManager> {
    CONFIG_MANAGER.get()
}
