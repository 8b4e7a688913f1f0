//! Composition root
//!
//! Turns an [`AppConfig`](crate::config::AppConfig) into ready to use
//! registry storages.

pub mod bootstrap;

pub use bootstrap::{ProviderCatalog, RegistryContext, init_registries};
