//! URL prefix delegation strategy
//!
//! Identifiers that are absolute HTTP(S) URLs name the organisation that
//! issued them. The peer registry of that organisation is assumed to live at
//! the issuing host with a fixed prefix, e.g. id
//! `https://example.com/ids/aas/1` with prefix `registry.` resolves to
//! `https://registry.example.com`. Other identifiers are not delegated.

use crate::constants::DELEGATION_DEFAULT_PREFIX;
use dtr_domain::ports::DelegationStrategy;
use reqwest::Url;

/// Derives the peer registry from the host of URL identifiers
#[derive(Debug, Clone)]
pub struct PrefixDelegationStrategy {
    prefix: String,
}

impl PrefixDelegationStrategy {
    /// Create with a host prefix such as `registry.`
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Default for PrefixDelegationStrategy {
    fn default() -> Self {
        Self::new(DELEGATION_DEFAULT_PREFIX)
    }
}

impl DelegationStrategy for PrefixDelegationStrategy {
    fn resolve(&self, id: &str) -> Option<String> {
        let url = Url::parse(id).ok()?;
        if !matches!(url.scheme(), "http" | "https") {
            return None;
        }
        let host = url.host_str()?;
        let peer = match url.port() {
            Some(port) => format!("{}://{}{}:{}", url.scheme(), self.prefix, host, port),
            None => format!("{}://{}{}", url.scheme(), self.prefix, host),
        };
        Some(peer)
    }
}
