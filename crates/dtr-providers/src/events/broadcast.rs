//! Broadcast Event Sink
//!
//! In-process fan-out of registry events over a tokio broadcast channel,
//! e.g. for search indexers living in the same process.
//!
//! When a subscriber falls behind by more than the channel capacity, it
//! skips the oldest events and a warning is logged. Events sent while nobody
//! is subscribed are gone.

use crate::constants::BROADCAST_DEFAULT_CAPACITY;
use async_trait::async_trait;
use dtr_application::ports::registry::{
    EVENT_SINK_PROVIDERS, EventSinkProviderConfig, EventSinkProviderEntry,
};
use dtr_domain::events::RegistryEvent;
use dtr_domain::ports::{RegistryEventSink, RegistryEventStream};
use futures::stream;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, warn};

/// Event sink broadcasting to any number of subscribers
#[derive(Clone)]
pub struct BroadcastEventSink {
    sender: Arc<broadcast::Sender<RegistryEvent>>,
    capacity: usize,
}

impl BroadcastEventSink {
    /// Create with the default capacity (1024)
    pub fn new() -> Self {
        Self::with_capacity(BROADCAST_DEFAULT_CAPACITY)
    }

    /// Create with a custom channel capacity
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender: Arc::new(sender),
            capacity,
        }
    }

    /// Current number of subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Subscribe to events sent from now on
    pub fn subscribe_events(&self) -> RegistryEventStream {
        let receiver = self.sender.subscribe();

        let stream = stream::unfold(receiver, |mut rx| async move {
            loop {
                match rx.recv().await {
                    Ok(event) => return Some((event, rx)),
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        warn!("Registry event stream lagged by {} events", n);
                    }
                    Err(broadcast::error::RecvError::Closed) => return None,
                }
            }
        });

        Box::pin(stream)
    }
}

impl Default for BroadcastEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BroadcastEventSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BroadcastEventSink")
            .field("capacity", &self.capacity)
            .field("subscribers", &self.sender.receiver_count())
            .finish()
    }
}

#[async_trait]
impl RegistryEventSink for BroadcastEventSink {
    async fn consume_event(&self, event: RegistryEvent) {
        match self.sender.send(event) {
            Ok(count) => debug!("Broadcast registry event to {} subscribers", count),
            Err(_) => debug!("Broadcast registry event but no subscribers"),
        }
    }

    fn subscribe(&self) -> Option<RegistryEventStream> {
        Some(self.subscribe_events())
    }
}

#[linkme::distributed_slice(EVENT_SINK_PROVIDERS)]
static BROADCAST_EVENT_SINK: EventSinkProviderEntry = EventSinkProviderEntry {
    name: "broadcast",
    description: "Fans registry events out to in-process subscribers",
    factory: |config: &EventSinkProviderConfig| {
        let sink = match config.capacity {
            Some(capacity) => BroadcastEventSink::with_capacity(capacity),
            None => BroadcastEventSink::new(),
        };
        Ok(Arc::new(sink))
    },
};
