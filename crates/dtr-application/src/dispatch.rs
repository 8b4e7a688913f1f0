//! Queued event dispatch
//!
//! [`QueuedEventSink`] decouples mutations from slow sinks. Events go into a
//! bounded queue drained by a single worker task, so a storage's events reach
//! the target sink in emission order.
//!
//! Enqueueing waits at most `enqueue_timeout`. When the queue stays full for
//! that long, or the worker is gone, the event is dropped and logged; the
//! mutating caller never waits longer than that bound.

use async_trait::async_trait;
use dtr_domain::events::RegistryEvent;
use dtr_domain::ports::{RegistryEventSink, RegistryEventStream, SharedEventSink};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::sync::mpsc::{self, error::SendTimeoutError};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Default queue capacity
pub const DEFAULT_QUEUE_CAPACITY: usize = 1024;

/// Default enqueue timeout
pub const DEFAULT_ENQUEUE_TIMEOUT: Duration = Duration::from_millis(500);

/// Asynchronous, order preserving wrapper around another sink
pub struct QueuedEventSink {
    sender: Mutex<Option<mpsc::Sender<RegistryEvent>>>,
    worker: Mutex<Option<JoinHandle<()>>>,
    target: SharedEventSink,
    enqueue_timeout: Duration,
    dropped: Arc<AtomicU64>,
}

impl QueuedEventSink {
    /// Start a worker delivering to `target`
    ///
    /// Must be called inside a tokio runtime.
    pub fn spawn(target: SharedEventSink, capacity: usize, enqueue_timeout: Duration) -> Self {
        let (sender, mut receiver) = mpsc::channel::<RegistryEvent>(capacity.max(1));
        let worker_target = Arc::clone(&target);
        let worker = tokio::spawn(async move {
            while let Some(event) = receiver.recv().await {
                worker_target.consume_event(event).await;
            }
            debug!("Event dispatch worker stopped");
        });

        Self {
            sender: Mutex::new(Some(sender)),
            worker: Mutex::new(Some(worker)),
            target,
            enqueue_timeout,
            dropped: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Start a worker with default capacity and timeout
    pub fn with_defaults(target: SharedEventSink) -> Self {
        Self::spawn(target, DEFAULT_QUEUE_CAPACITY, DEFAULT_ENQUEUE_TIMEOUT)
    }

    /// Number of events dropped so far
    pub fn dropped_events(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Stop accepting events and wait until the queue is drained
    pub async fn shutdown(&self) {
        drop(self.sender.lock().await.take());
        if let Some(worker) = self.worker.lock().await.take() {
            if let Err(e) = worker.await {
                warn!("Event dispatch worker ended abnormally: {}", e);
            }
        }
    }

    fn record_drop(&self, event: &RegistryEvent, reason: &str) {
        self.dropped.fetch_add(1, Ordering::Relaxed);
        warn!(
            kind = %event.kind,
            id = %event.id,
            event_type = %event.event_type,
            "Dropping registry event: {}",
            reason
        );
    }
}

impl std::fmt::Debug for QueuedEventSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueuedEventSink")
            .field("enqueue_timeout", &self.enqueue_timeout)
            .field("dropped", &self.dropped_events())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl RegistryEventSink for QueuedEventSink {
    async fn consume_event(&self, event: RegistryEvent) {
        let sender = self.sender.lock().await.clone();
        let Some(sender) = sender else {
            self.record_drop(&event, "dispatcher is shut down");
            return;
        };
        match sender.send_timeout(event, self.enqueue_timeout).await {
            Ok(()) => {}
            Err(SendTimeoutError::Timeout(event)) => {
                self.record_drop(&event, "event queue is full");
            }
            Err(SendTimeoutError::Closed(event)) => {
                self.record_drop(&event, "dispatch worker is gone");
            }
        }
    }

    fn subscribe(&self) -> Option<RegistryEventStream> {
        self.target.subscribe()
    }
}
