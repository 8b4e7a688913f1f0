//! In-memory descriptor storage
//!
//! Descriptors live in a `BTreeMap` keyed by id, so the collection order used
//! by cursors is lexicographic id order. A single `RwLock` guards the map;
//! every operation holds it for its whole duration, which makes operations on
//! the same key linearizable. A shell keeps its nested submodel descriptors in
//! the order they were added, but nested listings and their cursors follow id
//! order like the top-level collection.

use async_trait::async_trait;
use dtr_application::ports::registry::{
    SHELL_STORAGE_PROVIDERS, SUBMODEL_STORAGE_PROVIDERS, ShellStorageProviderEntry,
    StorageProviderConfig, SubmodelStorageProviderEntry,
};
use dtr_domain::error::{Error, Result};
use dtr_domain::ports::{RegistryStorage, ShellSubmodelStorage};
use dtr_domain::value_objects::{
    Descriptor, DescriptorFilter, PaginationRequest, PaginationResult, ShellDescriptor,
    SubmodelDescriptor, paginate,
};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory base storage for one descriptor collection
pub struct InMemoryRegistryStorage<D> {
    entries: RwLock<BTreeMap<String, D>>,
}

/// In-memory shell descriptor storage
pub type InMemoryShellStorage = InMemoryRegistryStorage<ShellDescriptor>;

/// In-memory submodel descriptor storage
pub type InMemorySubmodelStorage = InMemoryRegistryStorage<SubmodelDescriptor>;

impl<D: Descriptor> InMemoryRegistryStorage<D> {
    /// Create an empty storage
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(BTreeMap::new()),
        }
    }

    /// Create as Arc for sharing
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// True when nothing is stored
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl<D: Descriptor> Default for InMemoryRegistryStorage<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> std::fmt::Debug for InMemoryRegistryStorage<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryRegistryStorage").finish_non_exhaustive()
    }
}

#[async_trait]
impl<D: Descriptor> RegistryStorage<D> for InMemoryRegistryStorage<D> {
    async fn get_all(
        &self,
        request: PaginationRequest,
        filter: &DescriptorFilter<D>,
    ) -> Result<PaginationResult<D>> {
        let entries = self.entries.read().await;
        paginate(entries.values(), &request, |d| d.id(), |d| filter.matches(d))
    }

    async fn get(&self, id: &str) -> Result<D> {
        self.entries
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| Error::not_found(id))
    }

    async fn insert(&self, descriptor: D) -> Result<()> {
        descriptor.validate()?;
        let mut entries = self.entries.write().await;
        if entries.contains_key(descriptor.id()) {
            return Err(Error::already_exists(descriptor.id()));
        }
        entries.insert(descriptor.id().to_string(), descriptor);
        Ok(())
    }

    async fn replace(&self, id: &str, descriptor: D) -> Result<()> {
        descriptor.validate()?;
        let mut entries = self.entries.write().await;
        if !entries.contains_key(id) {
            return Err(Error::not_found(id));
        }
        let new_id = descriptor.id();
        if new_id != id && entries.contains_key(new_id) {
            return Err(Error::already_exists(new_id));
        }
        entries.remove(id);
        entries.insert(new_id.to_string(), descriptor);
        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<()> {
        self.entries
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| Error::not_found(id))
    }

    async fn clear(&self) -> Result<BTreeSet<String>> {
        let removed = std::mem::take(&mut *self.entries.write().await);
        Ok(removed.into_keys().collect())
    }
}

fn submodel_position(shell: &ShellDescriptor, submodel_id: &str) -> Result<usize> {
    shell
        .submodel_descriptors
        .iter()
        .position(|sm| sm.id == submodel_id)
        .ok_or_else(|| Error::submodel_not_found(&shell.id, submodel_id))
}

#[async_trait]
impl ShellSubmodelStorage for InMemoryRegistryStorage<ShellDescriptor> {
    async fn get_all_submodels(
        &self,
        shell_id: &str,
        request: PaginationRequest,
    ) -> Result<PaginationResult<SubmodelDescriptor>> {
        let entries = self.entries.read().await;
        let shell = entries.get(shell_id).ok_or_else(|| Error::not_found(shell_id))?;
        let mut nested: Vec<&SubmodelDescriptor> = shell.submodel_descriptors.iter().collect();
        nested.sort_by(|a, b| a.id.cmp(&b.id));
        paginate(
            nested,
            &request,
            |sm| sm.id.as_str(),
            |_| true,
        )
    }

    async fn get_submodel(&self, shell_id: &str, submodel_id: &str) -> Result<SubmodelDescriptor> {
        let entries = self.entries.read().await;
        let shell = entries.get(shell_id).ok_or_else(|| Error::not_found(shell_id))?;
        shell
            .submodel(submodel_id)
            .cloned()
            .ok_or_else(|| Error::submodel_not_found(shell_id, submodel_id))
    }

    async fn insert_submodel(&self, shell_id: &str, submodel: SubmodelDescriptor) -> Result<()> {
        submodel.validate()?;
        let mut entries = self.entries.write().await;
        let shell = entries
            .get_mut(shell_id)
            .ok_or_else(|| Error::not_found(shell_id))?;
        if shell.submodel(&submodel.id).is_some() {
            return Err(Error::submodel_already_exists(shell_id, &submodel.id));
        }
        shell.submodel_descriptors.push(submodel);
        Ok(())
    }

    async fn replace_submodel(
        &self,
        shell_id: &str,
        submodel_id: &str,
        submodel: SubmodelDescriptor,
    ) -> Result<()> {
        submodel.validate()?;
        let mut entries = self.entries.write().await;
        let shell = entries
            .get_mut(shell_id)
            .ok_or_else(|| Error::not_found(shell_id))?;
        let position = submodel_position(shell, submodel_id)?;
        if submodel.id != submodel_id && shell.submodel(&submodel.id).is_some() {
            return Err(Error::submodel_already_exists(shell_id, &submodel.id));
        }
        shell.submodel_descriptors[position] = submodel;
        Ok(())
    }

    async fn remove_submodel(&self, shell_id: &str, submodel_id: &str) -> Result<()> {
        let mut entries = self.entries.write().await;
        let shell = entries
            .get_mut(shell_id)
            .ok_or_else(|| Error::not_found(shell_id))?;
        let position = submodel_position(shell, submodel_id)?;
        shell.submodel_descriptors.remove(position);
        Ok(())
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

#[linkme::distributed_slice(SHELL_STORAGE_PROVIDERS)]
static MEMORY_SHELL_STORAGE: ShellStorageProviderEntry = ShellStorageProviderEntry {
    name: "memory",
    description: "In-memory shell descriptor storage (not persisted)",
    factory: |_config: &StorageProviderConfig| Ok(InMemoryShellStorage::new_shared()),
};

#[linkme::distributed_slice(SUBMODEL_STORAGE_PROVIDERS)]
static MEMORY_SUBMODEL_STORAGE: SubmodelStorageProviderEntry = SubmodelStorageProviderEntry {
    name: "memory",
    description: "In-memory submodel descriptor storage (not persisted)",
    factory: |_config: &StorageProviderConfig| Ok(InMemorySubmodelStorage::new_shared()),
};
