//! # Descriptor Registry - Provider Implementations
//!
//! User-selectable implementations of the ports defined in `dtr-domain`.
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Storage | `RegistryStorage`, `ShellSubmodelStorage` | in-memory |
//! | Delegation | `DelegationStrategy` | static peer, URL prefix |
//! | Peer client | `PeerRegistryClient`, `ShellPeerRegistryClient` | HTTP (reqwest) |
//! | Events | `RegistryEventSink` | null, log, broadcast |
//!
//! Storages and sinks register themselves in the linkme slices of
//! `dtr-application` and are selected by name from configuration.

pub use dtr_domain::error::{Error, Result};

/// Provider-specific constants
pub mod constants;

/// Delegation strategy implementations
pub mod delegation;

/// Event sink implementations
pub mod events;

/// Peer registry clients
pub mod peer;

/// Base storage implementations
pub mod storage;

pub use delegation::{PrefixDelegationStrategy, StaticDelegationStrategy};
pub use events::{BroadcastEventSink, LoggingEventSink, NullEventSink};
pub use peer::{HttpClientConfig, HttpPeerRegistryClient};
pub use storage::{InMemoryRegistryStorage, InMemoryShellStorage, InMemorySubmodelStorage};
