//! Domain Port Interfaces
//!
//! Boundary contracts of the storage pipeline. The application layer composes
//! decorators over these traits; providers implement them.
//!
//! | Port | Purpose |
//! |------|---------|
//! | [`RegistryStorage`] | authoritative descriptor store, one per registry |
//! | [`ShellSubmodelStorage`] | nested submodel descriptors reached through a shell |
//! | [`DelegationStrategy`] | which peer registry may know an unknown id |
//! | [`PeerRegistryClient`] | point lookups against a peer registry |
//! | [`RegistryEventSink`] | consumer of committed change events |

/// Delegation strategy port
pub mod delegation;
/// Event sink port
pub mod event_sink;
/// Peer registry client port
pub mod peer;
/// Descriptor storage ports
pub mod storage;

pub use delegation::{DelegationStrategy, SharedDelegationStrategy};
pub use event_sink::{RegistryEventSink, RegistryEventStream, SharedEventSink};
pub use peer::{
    PeerError, PeerRegistryClient, PeerResult, SharedShellPeerClient, SharedSubmodelPeerClient,
    ShellPeerRegistryClient,
};
pub use storage::{
    RegistryStorage, SharedShellStorage, SharedSubmodelStorage, ShellRegistryStorage,
    ShellSubmodelStorage,
};
