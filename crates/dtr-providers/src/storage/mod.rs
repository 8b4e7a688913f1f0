//! Base storage implementations
//!
//! | Provider | Description |
//! |----------|-------------|
//! | `memory` | ordered in-memory map, data lost on restart |

pub mod memory;

pub use memory::{InMemoryRegistryStorage, InMemoryShellStorage, InMemorySubmodelStorage};
