//! Configuration
//!
//! Sources, later ones overriding earlier ones:
//!
//! 1. [`AppConfig::default`]
//! 2. TOML file (`dtr.toml`, explicit path or discovered)
//! 3. `DTR_`-prefixed environment variables, `__` between nested keys
//!    (`DTR_HIERARCHY__PEER_URL=http://peer:8080`)

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::*;
