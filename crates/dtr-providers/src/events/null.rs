//! Null Event Sink
//!
//! Used when eventing is disabled, so the event layer of the pipeline is
//! always present.

use async_trait::async_trait;
use dtr_application::ports::registry::{
    EVENT_SINK_PROVIDERS, EventSinkProviderConfig, EventSinkProviderEntry,
};
use dtr_domain::events::RegistryEvent;
use dtr_domain::ports::RegistryEventSink;
use std::sync::Arc;

/// Event sink that discards all events
#[derive(Debug, Default, Clone, Copy)]
pub struct NullEventSink;

impl NullEventSink {
    /// Create a new null event sink
    pub fn new() -> Self {
        Self
    }

    /// Create as Arc for sharing
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

#[async_trait]
impl RegistryEventSink for NullEventSink {
    async fn consume_event(&self, _event: RegistryEvent) {}
}

#[linkme::distributed_slice(EVENT_SINK_PROVIDERS)]
static NULL_EVENT_SINK: EventSinkProviderEntry = EventSinkProviderEntry {
    name: "null",
    description: "Discards all registry events",
    factory: |_config: &EventSinkProviderConfig| Ok(NullEventSink::new_shared()),
};
