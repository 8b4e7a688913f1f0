//! Descriptor Storage Ports
//!
//! [`RegistryStorage`] is the contract of the base storage and of every
//! decorator stacked on it. Identifiers are the primary key; the collection
//! order is the storage's stable iteration order and is what cursors refer to.

use crate::error::Result;
use crate::value_objects::descriptor::{Descriptor, ShellDescriptor, SubmodelDescriptor};
use crate::value_objects::filter::DescriptorFilter;
use crate::value_objects::pagination::{PaginationRequest, PaginationResult};
use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Storage of one descriptor collection
///
/// | Operation | Failure |
/// |-----------|---------|
/// | `get_all` | `CursorNotFound` for a stale cursor |
/// | `get` | `NotFound` |
/// | `insert` | `AlreadyExists` |
/// | `replace` | `NotFound`; `AlreadyExists` when renaming onto another entry |
/// | `remove` | `NotFound` |
#[async_trait]
pub trait RegistryStorage<D: Descriptor>: Send + Sync {
    /// One page of the collection, filtered after cursor positioning
    async fn get_all(
        &self,
        request: PaginationRequest,
        filter: &DescriptorFilter<D>,
    ) -> Result<PaginationResult<D>>;

    /// Descriptor by id
    async fn get(&self, id: &str) -> Result<D>;

    /// Store a new descriptor
    async fn insert(&self, descriptor: D) -> Result<()>;

    /// Replace the descriptor stored under `id`
    ///
    /// `descriptor.id()` may differ from `id`, which moves the entry (rename).
    async fn replace(&self, id: &str, descriptor: D) -> Result<()>;

    /// Delete the descriptor stored under `id`
    async fn remove(&self, id: &str) -> Result<()>;

    /// Delete everything and report the removed ids
    async fn clear(&self) -> Result<BTreeSet<String>>;
}

/// Nested submodel descriptors of shell descriptors
#[async_trait]
pub trait ShellSubmodelStorage: Send + Sync {
    /// One page of the nested submodel descriptors of a shell
    async fn get_all_submodels(
        &self,
        shell_id: &str,
        request: PaginationRequest,
    ) -> Result<PaginationResult<SubmodelDescriptor>>;

    /// Nested submodel descriptor by id
    async fn get_submodel(&self, shell_id: &str, submodel_id: &str) -> Result<SubmodelDescriptor>;

    /// Append a nested submodel descriptor
    async fn insert_submodel(&self, shell_id: &str, submodel: SubmodelDescriptor) -> Result<()>;

    /// Replace a nested submodel descriptor, possibly under a new id
    async fn replace_submodel(
        &self,
        shell_id: &str,
        submodel_id: &str,
        submodel: SubmodelDescriptor,
    ) -> Result<()>;

    /// Delete a nested submodel descriptor
    async fn remove_submodel(&self, shell_id: &str, submodel_id: &str) -> Result<()>;
}

/// Full contract of the shell registry
pub trait ShellRegistryStorage: RegistryStorage<ShellDescriptor> + ShellSubmodelStorage {}

impl<T> ShellRegistryStorage for T where
    T: RegistryStorage<ShellDescriptor> + ShellSubmodelStorage + ?Sized
{
}

/// Shared shell registry storage
pub type SharedShellStorage = Arc<dyn ShellRegistryStorage>;

/// Shared submodel registry storage
pub type SharedSubmodelStorage = Arc<dyn RegistryStorage<SubmodelDescriptor>>;
