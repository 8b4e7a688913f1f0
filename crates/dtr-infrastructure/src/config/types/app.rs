//! Main application configuration

use super::{EventsConfig, HierarchyConfig, LoggingConfig, StorageConfig};
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Base storage selection
    #[serde(default)]
    pub storage: StorageConfig,
    /// Delegation to peer registries
    #[serde(default)]
    pub hierarchy: HierarchyConfig,
    /// Event emission
    #[serde(default)]
    pub events: EventsConfig,
}
