//! Static delegation strategy

use dtr_domain::ports::DelegationStrategy;

/// Sends every unknown id to the same peer registry
#[derive(Debug, Clone)]
pub struct StaticDelegationStrategy {
    peer_url: String,
}

impl StaticDelegationStrategy {
    /// Delegate to `peer_url`; a trailing slash is dropped
    pub fn new(peer_url: impl Into<String>) -> Self {
        let peer_url = peer_url.into();
        Self {
            peer_url: peer_url.trim_end_matches('/').to_string(),
        }
    }
}

impl DelegationStrategy for StaticDelegationStrategy {
    fn resolve(&self, _id: &str) -> Option<String> {
        Some(self.peer_url.clone())
    }
}
