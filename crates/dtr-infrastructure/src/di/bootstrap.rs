//! Registry Bootstrap
//!
//! ```text
//! AppConfig -> linkme registry -> base storages, sink
//!           -> delegation strategy + HTTP peer client
//!           -> QueuedEventSink (optional)
//!           -> RegistryPipeline -> decorated storages
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let context = init_registries(AppConfig::default()).await?;
//! let shells = context.shell_storage();
//! shells.insert(ShellDescriptor::new("https://example.com/aas/1")).await?;
//! context.shutdown().await;
//! ```

use crate::config::{AppConfig, DelegationStrategyKind, HierarchyConfig};
use crate::error_ext::registry_error;
use dtr_application::ports::registry::{
    EventSinkProviderConfig, list_event_sinks, list_shell_storages, list_submodel_storages,
    resolve_event_sink, resolve_shell_storage, resolve_submodel_storage,
};
use dtr_application::{PeerDelegation, QueuedEventSink, RegistryPipeline};
use dtr_domain::error::{Error, Result};
use dtr_domain::ports::{
    RegistryEventStream, SharedDelegationStrategy, SharedEventSink, SharedShellStorage,
    SharedSubmodelStorage,
};
use dtr_providers::{
    HttpClientConfig, HttpPeerRegistryClient, PrefixDelegationStrategy, StaticDelegationStrategy,
};
use std::sync::Arc;
use tracing::info;

/// Registered providers as (name, description) pairs
#[derive(Debug, Clone, Default)]
pub struct ProviderCatalog {
    pub shell_storages: Vec<(&'static str, &'static str)>,
    pub submodel_storages: Vec<(&'static str, &'static str)>,
    pub event_sinks: Vec<(&'static str, &'static str)>,
}

impl ProviderCatalog {
    /// Snapshot of everything linked into the binary
    pub fn collect() -> Self {
        Self {
            shell_storages: list_shell_storages(),
            submodel_storages: list_submodel_storages(),
            event_sinks: list_event_sinks(),
        }
    }
}

/// Both registry pipelines plus the resources they share
pub struct RegistryContext {
    /// Effective configuration
    pub config: Arc<AppConfig>,
    shells: SharedShellStorage,
    submodels: SharedSubmodelStorage,
    sink: SharedEventSink,
    dispatcher: Option<Arc<QueuedEventSink>>,
}

impl RegistryContext {
    /// Decorated shell descriptor storage
    pub fn shell_storage(&self) -> SharedShellStorage {
        Arc::clone(&self.shells)
    }

    /// Decorated submodel descriptor storage
    pub fn submodel_storage(&self) -> SharedSubmodelStorage {
        Arc::clone(&self.submodels)
    }

    /// Sink both pipelines emit to
    pub fn event_sink(&self) -> SharedEventSink {
        Arc::clone(&self.sink)
    }

    /// Live event stream, when the configured sink supports subscribers
    pub fn subscribe(&self) -> Option<RegistryEventStream> {
        self.sink.subscribe()
    }

    /// Events dropped by the dispatch queue so far
    pub fn dropped_events(&self) -> u64 {
        self.dispatcher
            .as_ref()
            .map_or(0, |dispatcher| dispatcher.dropped_events())
    }

    /// Flush queued events and stop the dispatch worker
    pub async fn shutdown(&self) {
        if let Some(dispatcher) = &self.dispatcher {
            dispatcher.shutdown().await;
        }
    }
}

impl std::fmt::Debug for RegistryContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryContext")
            .field("config", &self.config)
            .field("async_dispatch", &self.dispatcher.is_some())
            .finish_non_exhaustive()
    }
}

/// Build both registry pipelines from configuration
///
/// Must run inside a tokio runtime when async dispatch is enabled.
pub async fn init_registries(config: AppConfig) -> Result<RegistryContext> {
    let storage_config = config.storage.provider_config();
    let shell_base = resolve_shell_storage(&storage_config).map_err(registry_error)?;
    let submodel_base = resolve_submodel_storage(&storage_config).map_err(registry_error)?;

    let sink_config = EventSinkProviderConfig::new(config.events.effective_sink())
        .with_capacity(config.events.broadcast_capacity);
    let target = resolve_event_sink(&sink_config).map_err(registry_error)?;

    let dispatcher = (config.events.enabled && config.events.async_dispatch).then(|| {
        Arc::new(QueuedEventSink::spawn(
            Arc::clone(&target),
            config.events.queue_capacity,
            config.events.enqueue_timeout(),
        ))
    });
    let sink: SharedEventSink = match &dispatcher {
        Some(queued) => queued.clone(),
        None => target,
    };

    let mut pipeline = RegistryPipeline::new(Arc::clone(&sink));
    if config.hierarchy.enabled {
        pipeline = pipeline.with_delegation(build_delegation(&config.hierarchy)?);
    }

    let shells = pipeline.build_shell_storage(shell_base);
    let submodels = pipeline.build_submodel_storage(submodel_base);

    info!(
        storage = %config.storage.backend,
        sink = %config.events.effective_sink(),
        async_dispatch = dispatcher.is_some(),
        delegation = pipeline.delegates(),
        "Registry pipelines initialized"
    );

    Ok(RegistryContext {
        config: Arc::new(config),
        shells,
        submodels,
        sink,
        dispatcher,
    })
}

fn build_delegation(config: &HierarchyConfig) -> Result<PeerDelegation> {
    let strategy: SharedDelegationStrategy = match config.strategy {
        DelegationStrategyKind::Prefix => Arc::new(PrefixDelegationStrategy::new(&config.prefix)),
        DelegationStrategyKind::Static => {
            let peer_url = config.peer_url.as_deref().ok_or_else(|| {
                Error::configuration("Peer URL is required for the static delegation strategy")
            })?;
            Arc::new(StaticDelegationStrategy::new(peer_url))
        }
    };

    let mut http_config = HttpClientConfig::with_timeout(config.timeout());
    if let Some(user_agent) = &config.user_agent {
        http_config = http_config.with_user_agent(user_agent);
    }
    let client = Arc::new(HttpPeerRegistryClient::new(http_config)?);

    Ok(PeerDelegation {
        strategy,
        shell_client: client.clone(),
        submodel_client: client,
    })
}
