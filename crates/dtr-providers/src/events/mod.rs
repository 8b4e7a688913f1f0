//! Event sink implementations
//!
//! | Provider | Description |
//! |----------|-------------|
//! | `null` | discards events |
//! | `log` | one structured log line per event |
//! | `broadcast` | tokio broadcast fan-out to subscribers |

pub mod broadcast;
pub mod logging;
pub mod null;

pub use broadcast::BroadcastEventSink;
pub use logging::LoggingEventSink;
pub use null::NullEventSink;
