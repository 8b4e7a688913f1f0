//! Storage configuration types

use crate::constants::DEFAULT_STORAGE_BACKEND;
use dtr_application::ports::registry::StorageProviderConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Base storage selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Registered storage provider name
    pub backend: String,
    /// Provider specific options
    pub options: HashMap<String, String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: DEFAULT_STORAGE_BACKEND.to_string(),
            options: HashMap::new(),
        }
    }
}

impl StorageConfig {
    /// Registry lookup config for the selected backend
    pub fn provider_config(&self) -> StorageProviderConfig {
        self.options.iter().fold(
            StorageProviderConfig::new(&self.backend),
            |config, (key, value)| config.with_extra(key, value),
        )
    }
}
