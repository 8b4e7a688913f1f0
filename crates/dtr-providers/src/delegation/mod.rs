//! Delegation strategies
//!
//! | Strategy | Peer for an id |
//! |----------|----------------|
//! | [`StaticDelegationStrategy`] | always the one configured peer |
//! | [`PrefixDelegationStrategy`] | `{scheme}://{prefix}{host}[:port]` derived from URL ids |

pub mod fixed;
pub mod prefix;

pub use fixed::StaticDelegationStrategy;
pub use prefix::PrefixDelegationStrategy;
