//! Event emission configuration types

use crate::constants::{
    DEFAULT_BROADCAST_CAPACITY, DEFAULT_ENQUEUE_TIMEOUT_MS, DEFAULT_EVENT_SINK,
    DEFAULT_QUEUE_CAPACITY, DISABLED_EVENT_SINK,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Event emission
///
/// With `async_dispatch` the sink is fed through a bounded queue; a full
/// queue drops events after `enqueue_timeout_ms`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventsConfig {
    /// Emit events at all
    pub enabled: bool,
    /// Registered sink provider name
    pub sink: String,
    /// Deliver through a queue and worker task
    pub async_dispatch: bool,
    /// Queue capacity for async dispatch
    pub queue_capacity: usize,
    /// Maximum wait for a queue slot
    pub enqueue_timeout_ms: u64,
    /// Channel capacity of the broadcast sink
    pub broadcast_capacity: usize,
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            sink: DEFAULT_EVENT_SINK.to_string(),
            async_dispatch: true,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            enqueue_timeout_ms: DEFAULT_ENQUEUE_TIMEOUT_MS,
            broadcast_capacity: DEFAULT_BROADCAST_CAPACITY,
        }
    }
}

impl EventsConfig {
    /// Sink that will actually be resolved
    pub fn effective_sink(&self) -> &str {
        if self.enabled {
            &self.sink
        } else {
            DISABLED_EVENT_SINK
        }
    }

    /// Enqueue timeout for async dispatch
    pub fn enqueue_timeout(&self) -> Duration {
        Duration::from_millis(self.enqueue_timeout_ms)
    }
}
