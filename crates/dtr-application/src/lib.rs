//! Application Layer - Descriptor Registry
//!
//! Composes the descriptor storage pipeline out of the domain ports.
//!
//! ## Pipeline
//!
//! ```text
//! caller
//!   -> CursorEncodingStorage     wire cursor <-> id, exactly once
//!   -> EventSendingStorage       events after committed mutations
//!   -> HierarchicalStorage       point lookups fall back to a peer registry
//!   -> base storage              authoritative, owns descriptor lifetime
//! ```
//!
//! [`pipeline::RegistryPipeline`] is the only place that stacks the layers,
//! so the order cannot drift.
//!
//! ## Dependencies
//!
//! This crate depends only on `dtr-domain` plus async runtime support.
//! Concrete storages, sinks and peer clients live in `dtr-providers` and are
//! discovered through [`ports::registry`].

pub mod decorators;
pub mod dispatch;
pub mod pipeline;
pub mod ports;

pub use decorators::{CursorEncodingStorage, EventSendingStorage, HierarchicalStorage};
pub use dispatch::QueuedEventSink;
pub use pipeline::{PeerDelegation, RegistryPipeline};
