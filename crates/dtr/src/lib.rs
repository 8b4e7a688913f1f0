//! # Descriptor Registry
//!
//! Storage pipeline for shell and submodel descriptors: cursor pagination,
//! delegation of unknown ids to peer registries and change events.
//!
//! ## Example
//!
//! ```ignore
//! use dtr::infrastructure::{AppConfig, init_registries};
//! use dtr::domain::{DescriptorFilter, PaginationRequest, ShellDescriptor};
//!
//! let context = init_registries(AppConfig::default()).await?;
//! let shells = context.shell_storage();
//! shells.insert(ShellDescriptor::new("https://example.com/aas/1")).await?;
//! let page = shells
//!     .get_all(PaginationRequest::first(10), &DescriptorFilter::allow_all())
//!     .await?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - descriptors, pagination, events, errors and port traits
//! - `application` - storage decorators and pipeline composition
//! - `providers` - in-memory storage, sinks, delegation strategies, HTTP peer client
//! - `infrastructure` - configuration, logging and the composition root

/// Domain layer - descriptors, pagination, events and ports
pub mod domain {
    pub use dtr_domain::*;
}

/// Application layer - decorators, dispatch and pipeline
pub mod application {
    pub use dtr_application::*;
}

/// Provider implementations
pub mod providers {
    pub use dtr_providers::*;
}

/// Infrastructure layer - config, logging and bootstrap
pub mod infrastructure {
    pub use dtr_infrastructure::*;
}

pub mod cli;

pub use domain::*;
pub use infrastructure::{RegistryContext, init_registries};
