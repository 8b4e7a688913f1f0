//! Pipeline composition
//!
//! The only place that stacks storage decorators. Order, outermost first:
//! cursor encoding, event sending, hierarchical delegation, base storage.
//! Delegation is optional; the other layers are always present.

use crate::decorators::{CursorEncodingStorage, EventSendingStorage, HierarchicalStorage};
use dtr_domain::ports::{
    SharedDelegationStrategy, SharedEventSink, SharedShellPeerClient, SharedShellStorage,
    SharedSubmodelPeerClient, SharedSubmodelStorage,
};
use std::sync::Arc;
use tracing::debug;

/// Everything needed to ask peer registries for unknown ids
#[derive(Clone)]
pub struct PeerDelegation {
    /// Which peer to ask
    pub strategy: SharedDelegationStrategy,
    /// Client for shell descriptor lookups
    pub shell_client: SharedShellPeerClient,
    /// Client for submodel descriptor lookups
    pub submodel_client: SharedSubmodelPeerClient,
}

/// Builds decorated storages in the fixed layer order
#[derive(Clone)]
pub struct RegistryPipeline {
    sink: SharedEventSink,
    delegation: Option<PeerDelegation>,
}

impl RegistryPipeline {
    /// Pipeline emitting events to `sink`, without delegation
    pub fn new(sink: SharedEventSink) -> Self {
        Self {
            sink,
            delegation: None,
        }
    }

    /// Enable delegation of point lookups to peer registries
    #[must_use]
    pub fn with_delegation(mut self, delegation: PeerDelegation) -> Self {
        self.delegation = Some(delegation);
        self
    }

    /// Whether point lookups may be delegated
    pub fn delegates(&self) -> bool {
        self.delegation.is_some()
    }

    /// Decorate a shell base storage
    pub fn build_shell_storage(&self, base: SharedShellStorage) -> SharedShellStorage {
        let delegated: SharedShellStorage = match &self.delegation {
            Some(d) => Arc::new(HierarchicalStorage::new(
                base,
                Arc::clone(&d.strategy),
                Arc::clone(&d.shell_client),
            )),
            None => base,
        };
        let evented: SharedShellStorage =
            Arc::new(EventSendingStorage::new(delegated, Arc::clone(&self.sink)));
        debug!(delegation = self.delegates(), "Shell storage pipeline built");
        Arc::new(CursorEncodingStorage::new(evented))
    }

    /// Decorate a submodel base storage
    pub fn build_submodel_storage(&self, base: SharedSubmodelStorage) -> SharedSubmodelStorage {
        let delegated: SharedSubmodelStorage = match &self.delegation {
            Some(d) => Arc::new(HierarchicalStorage::new(
                base,
                Arc::clone(&d.strategy),
                Arc::clone(&d.submodel_client),
            )),
            None => base,
        };
        let evented: SharedSubmodelStorage =
            Arc::new(EventSendingStorage::new(delegated, Arc::clone(&self.sink)));
        debug!(delegation = self.delegates(), "Submodel storage pipeline built");
        Arc::new(CursorEncodingStorage::new(evented))
    }
}
