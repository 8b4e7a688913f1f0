//! Peer Registry Client Port
//!
//! A peer registry is another registry in the tree that may know descriptors
//! this one does not. Clients report failures as [`PeerError`]; turning those
//! into local errors is the delegation layer's job.

use crate::error::BoxedCause;
use crate::value_objects::descriptor::{Descriptor, ShellDescriptor, SubmodelDescriptor};
use crate::value_objects::pagination::{PaginationRequest, PaginationResult};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type of peer calls
pub type PeerResult<T> = std::result::Result<T, PeerError>;

/// Failure talking to a peer registry
#[derive(Error, Debug)]
pub enum PeerError {
    /// The peer does not know the requested resource
    #[error("Peer registry has no entry at {url}")]
    NotFound {
        /// Requested URL
        url: String,
    },

    /// The peer answered with an unexpected status
    #[error("Peer registry answered {code}: {body}")]
    Status {
        /// HTTP status code
        code: u16,
        /// Response body, possibly truncated
        body: String,
    },

    /// The peer could not be reached
    #[error("Peer registry unreachable: {source}")]
    Transport {
        #[source]
        source: BoxedCause,
    },

    /// The peer answered with something that is not a descriptor
    #[error("Peer registry response could not be decoded: {message}")]
    Decode {
        /// Decoder message
        message: String,
    },
}

impl PeerError {
    /// Wrap a transport failure
    pub fn transport<E: std::error::Error + Send + Sync + 'static>(source: E) -> Self {
        Self::Transport {
            source: Box::new(source),
        }
    }

    /// Create a decode error
    pub fn decode<S: Into<String>>(message: S) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// True when the peer cleanly reported absence
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Status { code: 404, .. })
    }
}

/// Point lookups against a peer registry
#[async_trait]
pub trait PeerRegistryClient<D: Descriptor>: Send + Sync {
    /// Fetch a descriptor from the peer at `base_url`
    async fn get_descriptor_by_id(&self, base_url: &str, id: &str) -> PeerResult<D>;
}

/// Peer lookups of nested submodel descriptors
///
/// Cursors in and out are decoded identifiers; the client converts to and
/// from the peer's wire format.
#[async_trait]
pub trait ShellPeerRegistryClient: PeerRegistryClient<ShellDescriptor> {
    /// One page of the nested submodel descriptors of a shell known to the peer
    async fn get_all_submodel_descriptors(
        &self,
        base_url: &str,
        shell_id: &str,
        request: &PaginationRequest,
    ) -> PeerResult<PaginationResult<SubmodelDescriptor>>;

    /// Nested submodel descriptor known to the peer
    async fn get_submodel_descriptor_by_id(
        &self,
        base_url: &str,
        shell_id: &str,
        submodel_id: &str,
    ) -> PeerResult<SubmodelDescriptor>;
}

/// Shared shell peer client
pub type SharedShellPeerClient = Arc<dyn ShellPeerRegistryClient>;

/// Shared submodel peer client
pub type SharedSubmodelPeerClient = Arc<dyn PeerRegistryClient<SubmodelDescriptor>>;
