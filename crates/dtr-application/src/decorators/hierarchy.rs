//! Hierarchical delegation storage
//!
//! Point lookups that miss locally are retried against the peer registry the
//! [`DelegationStrategy`](dtr_domain::ports::DelegationStrategy) names.
//! Listings and all mutations stay local.
//!
//! ## Peer error mapping
//!
//! | Peer outcome | Local outcome |
//! |--------------|---------------|
//! | descriptor | descriptor |
//! | `PeerError::NotFound`, status 404 | `Error::NotFound` for the delegated id |
//! | `PeerError::NotFound` on a nested lookup | `Error::SubmodelNotFound` for shell and submodel |
//! | anything else | `Error::DelegationFailure` carrying the peer error |
//!
//! No retries and no caching: every delegated lookup is exactly one peer call.

use async_trait::async_trait;
use dtr_domain::error::{Error, Result};
use dtr_domain::ports::{
    PeerError, PeerRegistryClient, RegistryStorage, SharedDelegationStrategy,
    ShellPeerRegistryClient, ShellRegistryStorage, ShellSubmodelStorage,
};
use dtr_domain::value_objects::{
    Descriptor, DescriptorFilter, PaginationRequest, PaginationResult, SubmodelDescriptor,
};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::debug;

/// Storage that asks a peer registry for descriptors it does not hold
pub struct HierarchicalStorage<S: ?Sized, C: ?Sized> {
    inner: Arc<S>,
    strategy: SharedDelegationStrategy,
    client: Arc<C>,
}

impl<S: ?Sized, C: ?Sized> HierarchicalStorage<S, C> {
    /// Wrap `inner`, delegating misses through `strategy` and `client`
    pub fn new(inner: Arc<S>, strategy: SharedDelegationStrategy, client: Arc<C>) -> Self {
        Self {
            inner,
            strategy,
            client,
        }
    }

    /// Peer responsible for `id`, if any
    fn peer_for(&self, id: &str) -> Option<String> {
        let peer = self.strategy.resolve(id);
        match &peer {
            Some(url) => debug!(id, peer = %url, "delegating lookup to peer registry"),
            None => debug!(id, "no peer registry responsible"),
        }
        peer
    }
}

/// Translate a peer failure for the delegated id into a local error
fn map_peer_error(id: &str, error: PeerError) -> Error {
    if error.is_not_found() {
        debug!(id, "peer registry reported not found");
        return Error::not_found(id);
    }
    debug!(id, error = %error, "peer registry lookup failed");
    Error::delegation_failure(id, error)
}

/// Translate a peer failure for a nested submodel lookup into a local error
fn map_nested_peer_error(shell_id: &str, submodel_id: &str, error: PeerError) -> Error {
    if error.is_not_found() {
        debug!(shell_id, submodel_id, "peer registry reported nested submodel not found");
        return Error::submodel_not_found(shell_id, submodel_id);
    }
    debug!(shell_id, submodel_id, error = %error, "peer registry nested lookup failed");
    Error::delegation_failure(shell_id, error)
}

/// Split a local result into "delegate on this miss" and everything else
fn local_miss<T>(result: Result<T>) -> std::result::Result<Error, Result<T>> {
    match result {
        Err(e) if e.is_not_found() => Ok(e),
        other => Err(other),
    }
}

#[async_trait]
impl<D, S, C> RegistryStorage<D> for HierarchicalStorage<S, C>
where
    D: Descriptor,
    S: RegistryStorage<D> + ?Sized,
    C: PeerRegistryClient<D> + ?Sized,
{
    async fn get_all(
        &self,
        request: PaginationRequest,
        filter: &DescriptorFilter<D>,
    ) -> Result<PaginationResult<D>> {
        self.inner.get_all(request, filter).await
    }

    async fn get(&self, id: &str) -> Result<D> {
        let miss = match local_miss(self.inner.get(id).await) {
            Ok(miss) => miss,
            Err(local) => return local,
        };
        let Some(peer) = self.peer_for(id) else {
            return Err(miss);
        };
        self.client
            .get_descriptor_by_id(&peer, id)
            .await
            .map_err(|e| map_peer_error(id, e))
    }

    async fn insert(&self, descriptor: D) -> Result<()> {
        self.inner.insert(descriptor).await
    }

    async fn replace(&self, id: &str, descriptor: D) -> Result<()> {
        self.inner.replace(id, descriptor).await
    }

    async fn remove(&self, id: &str) -> Result<()> {
        self.inner.remove(id).await
    }

    async fn clear(&self) -> Result<BTreeSet<String>> {
        self.inner.clear().await
    }
}

#[async_trait]
impl<S, C> ShellSubmodelStorage for HierarchicalStorage<S, C>
where
    S: ShellRegistryStorage + ?Sized,
    C: ShellPeerRegistryClient + ?Sized,
{
    async fn get_all_submodels(
        &self,
        shell_id: &str,
        request: PaginationRequest,
    ) -> Result<PaginationResult<SubmodelDescriptor>> {
        let miss = match local_miss(self.inner.get_all_submodels(shell_id, request.clone()).await)
        {
            Ok(miss) => miss,
            Err(local) => return local,
        };
        let Some(peer) = self.peer_for(shell_id) else {
            return Err(miss);
        };
        self.client
            .get_all_submodel_descriptors(&peer, shell_id, &request)
            .await
            .map_err(|e| map_peer_error(shell_id, e))
    }

    async fn get_submodel(&self, shell_id: &str, submodel_id: &str) -> Result<SubmodelDescriptor> {
        // A missing nested submodel in a local shell is final; only a missing shell delegates.
        let miss = match local_miss(self.inner.get_submodel(shell_id, submodel_id).await) {
            Ok(miss) => miss,
            Err(local) => return local,
        };
        let Some(peer) = self.peer_for(shell_id) else {
            return Err(miss);
        };
        self.client
            .get_submodel_descriptor_by_id(&peer, shell_id, submodel_id)
            .await
            .map_err(|e| map_nested_peer_error(shell_id, submodel_id, e))
    }

    async fn insert_submodel(&self, shell_id: &str, submodel: SubmodelDescriptor) -> Result<()> {
        self.inner.insert_submodel(shell_id, submodel).await
    }

    async fn replace_submodel(
        &self,
        shell_id: &str,
        submodel_id: &str,
        submodel: SubmodelDescriptor,
    ) -> Result<()> {
        self.inner
            .replace_submodel(shell_id, submodel_id, submodel)
            .await
    }

    async fn remove_submodel(&self, shell_id: &str, submodel_id: &str) -> Result<()> {
        self.inner.remove_submodel(shell_id, submodel_id).await
    }
}
