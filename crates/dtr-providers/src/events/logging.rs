//! Logging Event Sink

use async_trait::async_trait;
use dtr_application::ports::registry::{
    EVENT_SINK_PROVIDERS, EventSinkProviderConfig, EventSinkProviderEntry,
};
use dtr_domain::events::RegistryEvent;
use dtr_domain::ports::RegistryEventSink;
use std::sync::Arc;
use tracing::{info, warn};

/// Writes every event as a structured `info` log line
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingEventSink;

impl LoggingEventSink {
    /// Create a new logging event sink
    pub fn new() -> Self {
        Self
    }

    /// Create as Arc for sharing
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

#[async_trait]
impl RegistryEventSink for LoggingEventSink {
    async fn consume_event(&self, event: RegistryEvent) {
        match event.to_json() {
            Ok(payload) => info!(
                target: "dtr::events",
                kind = %event.kind,
                id = %event.id,
                event_type = %event.event_type,
                submodel_id = event.submodel_id.as_deref(),
                payload = %payload,
                "registry event"
            ),
            Err(e) => warn!(
                target: "dtr::events",
                id = %event.id,
                "Failed to serialize registry event: {}",
                e
            ),
        }
    }
}

#[linkme::distributed_slice(EVENT_SINK_PROVIDERS)]
static LOGGING_EVENT_SINK: EventSinkProviderEntry = EventSinkProviderEntry {
    name: "log",
    description: "Writes registry events to the log",
    factory: |_config: &EventSinkProviderConfig| Ok(LoggingEventSink::new_shared()),
};
