//! Tests for queued event dispatch

use crate::support::{GatedSink, RecordingSink};
use dtr_application::QueuedEventSink;
use dtr_domain::ports::RegistryEventSink;
use dtr_domain::{DescriptorKind, RegistryEvent};
use dtr_providers::BroadcastEventSink;
use std::sync::Arc;
use std::time::Duration;

fn event(id: usize) -> RegistryEvent {
    RegistryEvent::unregistered(DescriptorKind::Shell, id.to_string())
}

#[tokio::test]
async fn test_events_are_delivered_in_order() {
    let target = Arc::new(RecordingSink::default());
    let queued = QueuedEventSink::spawn(target.clone(), 8, Duration::from_secs(1));

    for id in 0..100 {
        queued.consume_event(event(id)).await;
    }
    queued.shutdown().await;

    let ids: Vec<String> = target.events().into_iter().map(|e| e.id).collect();
    let expected: Vec<String> = (0..100).map(|id| id.to_string()).collect();
    assert_eq!(ids, expected);
    assert_eq!(queued.dropped_events(), 0);
}

#[tokio::test]
async fn test_full_queue_drops_after_timeout() {
    let target = Arc::new(GatedSink::closed());
    let queued = QueuedEventSink::spawn(target.clone(), 1, Duration::from_millis(50));

    // 0 is taken by the blocked worker, 1 waits in the queue, 2 times out
    queued.consume_event(event(0)).await;
    queued.consume_event(event(1)).await;
    queued.consume_event(event(2)).await;
    assert_eq!(queued.dropped_events(), 1);

    target.gate.add_permits(10);
    queued.shutdown().await;
    let ids: Vec<String> = target.inner.events().into_iter().map(|e| e.id).collect();
    assert_eq!(ids, vec!["0".to_string(), "1".to_string()]);
}

#[tokio::test]
async fn test_events_after_shutdown_are_dropped() {
    let target = Arc::new(RecordingSink::default());
    let queued = QueuedEventSink::with_defaults(target.clone());
    queued.shutdown().await;

    queued.consume_event(event(1)).await;
    assert_eq!(queued.dropped_events(), 1);
    assert!(target.events().is_empty());
}

#[tokio::test]
async fn test_subscription_passes_through_to_target() {
    let queued = QueuedEventSink::with_defaults(Arc::new(BroadcastEventSink::new()));
    assert!(queued.subscribe().is_some());

    let plain = QueuedEventSink::with_defaults(Arc::new(RecordingSink::default()));
    assert!(plain.subscribe().is_none());
}
