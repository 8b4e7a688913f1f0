//! Configuration types module

pub mod app;
pub mod events;
pub mod hierarchy;
pub mod logging;
pub mod storage;

pub use app::AppConfig;
pub use events::EventsConfig;
pub use hierarchy::{DelegationStrategyKind, HierarchyConfig};
pub use logging::LoggingConfig;
pub use storage::StorageConfig;
