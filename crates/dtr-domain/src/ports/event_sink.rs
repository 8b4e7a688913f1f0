//! Event Sink Port

use crate::events::RegistryEvent;
use async_trait::async_trait;
use futures::Stream;
use std::pin::Pin;
use std::sync::Arc;

/// Stream of events for subscribers of fan-out sinks
pub type RegistryEventStream = Pin<Box<dyn Stream<Item = RegistryEvent> + Send + Sync + 'static>>;

/// Consumer of registry change events
///
/// Sinks cannot fail the mutation that produced the event; delivery problems
/// are the sink's own business.
#[async_trait]
pub trait RegistryEventSink: Send + Sync {
    /// Handle one event
    async fn consume_event(&self, event: RegistryEvent);

    /// Subscribe to the events this sink sees, if it fans out
    fn subscribe(&self) -> Option<RegistryEventStream> {
        None
    }
}

/// Shared event sink
pub type SharedEventSink = Arc<dyn RegistryEventSink>;
