//! Event-sending storage
//!
//! Emits one event per logical change after the inner storage committed it.
//! A failed mutation emits nothing and its error is returned unchanged.
//!
//! | Operation | Events, in order |
//! |-----------|------------------|
//! | `insert(d)` | `REGISTERED(d)` |
//! | `replace(id, d)`, same id | `REGISTERED(d)` |
//! | `replace(id, d)`, rename | `UNREGISTERED(id)`, `REGISTERED(d)` |
//! | `remove(id)` | `UNREGISTERED(id)` |
//! | `clear()` | `UNREGISTERED(x)` per removed id |
//! | `insert_submodel` | `SUBMODEL_REGISTERED` |
//! | `replace_submodel`, rename | `SUBMODEL_UNREGISTERED(old)`, `SUBMODEL_REGISTERED(new)` |
//! | `remove_submodel` | `SUBMODEL_UNREGISTERED` |

use async_trait::async_trait;
use dtr_domain::error::Result;
use dtr_domain::events::RegistryEvent;
use dtr_domain::ports::{
    RegistryStorage, SharedEventSink, ShellRegistryStorage, ShellSubmodelStorage,
};
use dtr_domain::value_objects::{
    Descriptor, DescriptorFilter, PaginationRequest, PaginationResult, SubmodelDescriptor,
};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::debug;

/// Storage that reports committed changes to an event sink
pub struct EventSendingStorage<S: ?Sized> {
    inner: Arc<S>,
    sink: SharedEventSink,
}

impl<S: ?Sized> EventSendingStorage<S> {
    /// Wrap `inner`, sending events to `sink`
    pub fn new(inner: Arc<S>, sink: SharedEventSink) -> Self {
        Self { inner, sink }
    }

    async fn emit(&self, event: RegistryEvent) {
        debug!(
            kind = %event.kind,
            id = %event.id,
            event_type = %event.event_type,
            "emitting registry event"
        );
        self.sink.consume_event(event).await;
    }
}

#[async_trait]
impl<D, S> RegistryStorage<D> for EventSendingStorage<S>
where
    D: Descriptor,
    S: RegistryStorage<D> + ?Sized,
{
    async fn get_all(
        &self,
        request: PaginationRequest,
        filter: &DescriptorFilter<D>,
    ) -> Result<PaginationResult<D>> {
        self.inner.get_all(request, filter).await
    }

    async fn get(&self, id: &str) -> Result<D> {
        self.inner.get(id).await
    }

    async fn insert(&self, descriptor: D) -> Result<()> {
        self.inner.insert(descriptor.clone()).await?;
        self.emit(RegistryEvent::registered(descriptor)).await;
        Ok(())
    }

    async fn replace(&self, id: &str, descriptor: D) -> Result<()> {
        let renamed = descriptor.id() != id;
        self.inner.replace(id, descriptor.clone()).await?;
        if renamed {
            self.emit(RegistryEvent::unregistered(D::KIND, id)).await;
        }
        self.emit(RegistryEvent::registered(descriptor)).await;
        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<()> {
        self.inner.remove(id).await?;
        self.emit(RegistryEvent::unregistered(D::KIND, id)).await;
        Ok(())
    }

    async fn clear(&self) -> Result<BTreeSet<String>> {
        let removed = self.inner.clear().await?;
        for id in &removed {
            self.emit(RegistryEvent::unregistered(D::KIND, id.as_str()))
                .await;
        }
        Ok(removed)
    }
}

#[async_trait]
impl<S> ShellSubmodelStorage for EventSendingStorage<S>
where
    S: ShellRegistryStorage + ?Sized,
{
    async fn get_all_submodels(
        &self,
        shell_id: &str,
        request: PaginationRequest,
    ) -> Result<PaginationResult<SubmodelDescriptor>> {
        self.inner.get_all_submodels(shell_id, request).await
    }

    async fn get_submodel(&self, shell_id: &str, submodel_id: &str) -> Result<SubmodelDescriptor> {
        self.inner.get_submodel(shell_id, submodel_id).await
    }

    async fn insert_submodel(&self, shell_id: &str, submodel: SubmodelDescriptor) -> Result<()> {
        self.inner
            .insert_submodel(shell_id, submodel.clone())
            .await?;
        self.emit(RegistryEvent::submodel_registered(shell_id, submodel))
            .await;
        Ok(())
    }

    async fn replace_submodel(
        &self,
        shell_id: &str,
        submodel_id: &str,
        submodel: SubmodelDescriptor,
    ) -> Result<()> {
        let renamed = submodel.id != submodel_id;
        self.inner
            .replace_submodel(shell_id, submodel_id, submodel.clone())
            .await?;
        if renamed {
            self.emit(RegistryEvent::submodel_unregistered(shell_id, submodel_id))
                .await;
        }
        self.emit(RegistryEvent::submodel_registered(shell_id, submodel))
            .await;
        Ok(())
    }

    async fn remove_submodel(&self, shell_id: &str, submodel_id: &str) -> Result<()> {
        self.inner.remove_submodel(shell_id, submodel_id).await?;
        self.emit(RegistryEvent::submodel_unregistered(shell_id, submodel_id))
            .await;
        Ok(())
    }
}
