//! Provider constants

/// Default broadcast channel capacity
pub const BROADCAST_DEFAULT_CAPACITY: usize = 1024;

/// Default peer request timeout in milliseconds
pub const PEER_DEFAULT_TIMEOUT_MS: u64 = 5_000;

/// Maximum number of response body bytes kept in peer errors
pub const PEER_ERROR_BODY_LIMIT: usize = 512;

/// Default prefix prepended to the host by the prefix delegation strategy
pub const DELEGATION_DEFAULT_PREFIX: &str = "registry.";
