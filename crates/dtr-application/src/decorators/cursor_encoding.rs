//! Cursor-encoding storage
//!
//! Outermost layer of the pipeline. Incoming wire cursors are decoded into
//! identifiers before anything below sees them, and outgoing cursors are
//! encoded on the way out. Nothing else in the pipeline touches the wire
//! format, so a cursor is encoded exactly once per page.

use async_trait::async_trait;
use dtr_domain::error::{Error, Result};
use dtr_domain::ports::{RegistryStorage, ShellRegistryStorage, ShellSubmodelStorage};
use dtr_domain::value_objects::{
    CursorCodec, Descriptor, DescriptorFilter, PaginationRequest, PaginationResult,
    SubmodelDescriptor,
};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Storage that speaks the cursor wire format
pub struct CursorEncodingStorage<S: ?Sized> {
    inner: Arc<S>,
}

impl<S: ?Sized> CursorEncodingStorage<S> {
    /// Wrap `inner`
    pub fn new(inner: Arc<S>) -> Self {
        Self { inner }
    }
}

fn decode_request(request: PaginationRequest) -> Result<PaginationRequest> {
    let cursor = request
        .cursor
        .as_deref()
        .map(CursorCodec::decode)
        .transpose()?;
    Ok(PaginationRequest::new(request.limit, cursor))
}

/// Encode the page cursor; stale cursors are reported in the form the caller sent
fn encode_page<T>(result: Result<PaginationResult<T>>) -> Result<PaginationResult<T>> {
    match result {
        Ok(page) => Ok(page.map_cursor(|cursor| CursorCodec::encode(&cursor))),
        Err(Error::CursorNotFound { cursor }) => {
            Err(Error::cursor_not_found(CursorCodec::encode(&cursor)))
        }
        Err(e) => Err(e),
    }
}

#[async_trait]
impl<D, S> RegistryStorage<D> for CursorEncodingStorage<S>
where
    D: Descriptor,
    S: RegistryStorage<D> + ?Sized,
{
    async fn get_all(
        &self,
        request: PaginationRequest,
        filter: &DescriptorFilter<D>,
    ) -> Result<PaginationResult<D>> {
        let request = decode_request(request)?;
        encode_page(self.inner.get_all(request, filter).await)
    }

    async fn get(&self, id: &str) -> Result<D> {
        self.inner.get(id).await
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
impl<S> ShellSubmodelStorage for CursorEncodingStorage<S>
where
    S: ShellRegistryStorage + ?Sized,
{
    async fn get_all_submodels(
        &self,
        shell_id: &str,
        request: PaginationRequest,
    ) -> Result<PaginationResult<SubmodelDescriptor>> {
        let request = decode_request(request)?;
        encode_page(self.inner.get_all_submodels(shell_id, request).await)
    }

    async fn get_submodel(&self, shell_id: &str, submodel_id: &str) -> Result<SubmodelDescriptor> {
        self.inner.get_submodel(shell_id, submodel_id).await
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
