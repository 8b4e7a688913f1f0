//! Delegation Strategy Port

use std::sync::Arc;

/// Decides which peer registry to ask for an id the local storage lacks
pub trait DelegationStrategy: Send + Sync {
    /// Base URL of the responsible peer, `None` when nobody is responsible
    fn resolve(&self, id: &str) -> Option<String>;
}

/// Shared delegation strategy
pub type SharedDelegationStrategy = Arc<dyn DelegationStrategy>;
