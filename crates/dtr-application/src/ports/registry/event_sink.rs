//! Event Sink Provider Registry

use dtr_domain::ports::SharedEventSink;

/// Configuration for event sink creation
#[derive(Debug, Clone, Default)]
pub struct EventSinkProviderConfig {
    /// Provider name (e.g., "null", "log", "broadcast")
    pub provider: String,
    /// Channel capacity for fan-out sinks
    pub capacity: Option<usize>,
}

impl EventSinkProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the channel capacity
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }
}

/// Registry entry for event sinks
pub struct EventSinkProviderEntry {
    /// Unique provider name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create a sink instance
    pub factory: fn(&EventSinkProviderConfig) -> Result<SharedEventSink, String>,
}

#[linkme::distributed_slice]
pub static EVENT_SINK_PROVIDERS: [EventSinkProviderEntry] = [..];

/// Resolve an event sink by provider name
pub fn resolve_event_sink(config: &EventSinkProviderConfig) -> Result<SharedEventSink, String> {
    let provider_name = &config.provider;
    if let Some(entry) = EVENT_SINK_PROVIDERS.iter().find(|e| e.name == provider_name) {
        return (entry.factory)(config);
    }

    let available: Vec<&str> = EVENT_SINK_PROVIDERS.iter().map(|e| e.name).collect();
    Err(format!(
        "Unknown event sink provider '{provider_name}'. Available providers: {available:?}"
    ))
}

/// List all registered event sinks as (name, description)
pub fn list_event_sinks() -> Vec<(&'static str, &'static str)> {
    EVENT_SINK_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
