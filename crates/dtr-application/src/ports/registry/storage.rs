//! Storage Provider Registry

use dtr_domain::ports::{SharedShellStorage, SharedSubmodelStorage};
use std::collections::HashMap;

/// Configuration for storage provider creation
///
/// Providers use what they need and ignore the rest.
#[derive(Debug, Clone, Default)]
pub struct StorageProviderConfig {
    /// Provider name (e.g., "memory")
    pub provider: String,
    /// Additional provider-specific configuration
    pub extra: HashMap<String, String>,
}

impl StorageProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Add extra configuration
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Registry entry for shell descriptor storages
pub struct ShellStorageProviderEntry {
    /// Unique provider name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create a storage instance
    pub factory: fn(&StorageProviderConfig) -> Result<SharedShellStorage, String>,
}

/// Registry entry for submodel descriptor storages
pub struct SubmodelStorageProviderEntry {
    /// Unique provider name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create a storage instance
    pub factory: fn(&StorageProviderConfig) -> Result<SharedSubmodelStorage, String>,
}

#[linkme::distributed_slice]
pub static SHELL_STORAGE_PROVIDERS: [ShellStorageProviderEntry] = [..];

#[linkme::distributed_slice]
pub static SUBMODEL_STORAGE_PROVIDERS: [SubmodelStorageProviderEntry] = [..];

/// Resolve a shell storage by provider name
pub fn resolve_shell_storage(config: &StorageProviderConfig) -> Result<SharedShellStorage, String> {
    let provider_name = &config.provider;
    if let Some(entry) = SHELL_STORAGE_PROVIDERS
        .iter()
        .find(|e| e.name == provider_name)
    {
        return (entry.factory)(config);
    }

    let available: Vec<&str> = SHELL_STORAGE_PROVIDERS.iter().map(|e| e.name).collect();
    Err(format!(
        "Unknown shell storage provider '{provider_name}'. Available providers: {available:?}"
    ))
}

/// Resolve a submodel storage by provider name
pub fn resolve_submodel_storage(
    config: &StorageProviderConfig,
) -> Result<SharedSubmodelStorage, String> {
    let provider_name = &config.provider;
    if let Some(entry) = SUBMODEL_STORAGE_PROVIDERS
        .iter()
        .find(|e| e.name == provider_name)
    {
        return (entry.factory)(config);
    }

    let available: Vec<&str> = SUBMODEL_STORAGE_PROVIDERS.iter().map(|e| e.name).collect();
    Err(format!(
        "Unknown submodel storage provider '{provider_name}'. Available providers: {available:?}"
    ))
}

/// List all registered shell storages as (name, description)
pub fn list_shell_storages() -> Vec<(&'static str, &'static str)> {
    SHELL_STORAGE_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}

/// List all registered submodel storages as (name, description)
pub fn list_submodel_storages() -> Vec<(&'static str, &'static str)> {
    SUBMODEL_STORAGE_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
