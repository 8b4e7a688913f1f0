//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns of the descriptor registry.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration: defaults, TOML file, `DTR_` environment |
//! | [`constants`] | Configuration defaults |
//! | [`di`] | Composition root building both registry pipelines |
//! | [`error_ext`] | Context helpers mapping foreign errors into the domain error |
//! | [`logging`] | Structured logging with tracing |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

pub use config::{AppConfig, ConfigBuilder, ConfigLoader};
pub use di::{RegistryContext, init_registries};
pub use error_ext::ErrorContext;
