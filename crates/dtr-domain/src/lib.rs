//! Domain Layer - Descriptor Registry
//!
//! Core types of the descriptor registry storage pipeline: the descriptors a
//! registry stores, cursor pagination, change events, the error taxonomy and
//! the port traits the pipeline is composed of.
//!
//! ## Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`value_objects`] | descriptors, pagination, cursor codec, filters |
//! | [`events`] | [`RegistryEvent`] |
//! | [`ports`] | storage, delegation, peer client and event sink contracts |
//! | [`error`] | [`Error`] and [`Result`] |
//!
//! This crate has no runtime dependencies beyond serialization and async
//! trait support.

pub mod constants;
pub mod error;
pub mod events;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use events::{EventDescriptor, RegistryEvent, RegistryEventType};
pub use value_objects::*;
