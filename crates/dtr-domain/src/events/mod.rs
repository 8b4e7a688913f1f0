//! Registry Events
//!
//! Notifications about committed descriptor changes. Events are produced by
//! the event-sending storage layer after the base storage accepted a change
//! and are handed to a [`RegistryEventSink`](crate::ports::RegistryEventSink).
//! They are never persisted.
//!
//! | Type | Meaning |
//! |------|---------|
//! | `REGISTERED` | descriptor inserted or replaced |
//! | `UNREGISTERED` | descriptor removed, or old id of a rename |
//! | `SUBMODEL_REGISTERED` | nested submodel descriptor added or replaced through a shell |
//! | `SUBMODEL_UNREGISTERED` | nested submodel descriptor removed through a shell |

/// Registry event definitions
pub mod registry_event;

pub use registry_event::{EventDescriptor, RegistryEvent, RegistryEventType};
