//! Hierarchy (peer delegation) configuration types

use crate::constants::DEFAULT_PEER_TIMEOUT_MS;
use dtr_providers::constants::DELEGATION_DEFAULT_PREFIX;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How the peer registry for an unknown id is chosen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DelegationStrategyKind {
    /// Derive the peer from the id's host by prefixing it
    #[default]
    Prefix,
    /// Always ask `peer_url`
    Static,
}

/// Delegation of point lookups to peer registries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HierarchyConfig {
    /// Enable delegation
    pub enabled: bool,
    /// Peer selection strategy
    pub strategy: DelegationStrategyKind,
    /// Host prefix for the prefix strategy
    pub prefix: String,
    /// Peer registry for the static strategy
    pub peer_url: Option<String>,
    /// Timeout of a single peer request
    pub timeout_ms: u64,
    /// User agent sent to peers
    pub user_agent: Option<String>,
}

impl Default for HierarchyConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            strategy: DelegationStrategyKind::Prefix,
            prefix: DELEGATION_DEFAULT_PREFIX.to_string(),
            peer_url: None,
            timeout_ms: DEFAULT_PEER_TIMEOUT_MS,
            user_agent: None,
        }
    }
}

impl HierarchyConfig {
    /// Peer request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
