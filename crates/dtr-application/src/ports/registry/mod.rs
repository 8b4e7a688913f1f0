//! Provider Registry System
//!
//! Auto-registration of storage backends and event sinks. Uses the `linkme`
//! crate so providers in `dtr-providers` register at link time and are
//! selected by name from configuration.
//!
//! ```text
//! 1. Provider defines:  #[linkme::distributed_slice(SHELL_STORAGE_PROVIDERS)]
//!                       static ENTRY: ShellStorageProviderEntry = ...
//! 2. Registry declares: #[linkme::distributed_slice]
//!                       pub static SHELL_STORAGE_PROVIDERS: [Entry] = [..]
//! 3. Config selects:    "storage.backend = memory" -> in-memory storage
//! ```
//!
//! ### Registering a provider (in dtr-providers)
//!
//! ```ignore
//! use dtr_application::ports::registry::{EventSinkProviderEntry, EVENT_SINK_PROVIDERS};
//!
//! #[linkme::distributed_slice(EVENT_SINK_PROVIDERS)]
//! static NULL_SINK: EventSinkProviderEntry = EventSinkProviderEntry {
//!     name: "null",
//!     description: "Discards all events",
//!     factory: |_| Ok(Arc::new(NullEventSink::new())),
//! };
//! ```

pub mod event_sink;
pub mod storage;

pub use event_sink::{
    EVENT_SINK_PROVIDERS, EventSinkProviderConfig, EventSinkProviderEntry, list_event_sinks,
    resolve_event_sink,
};
pub use storage::{
    SHELL_STORAGE_PROVIDERS, SUBMODEL_STORAGE_PROVIDERS, ShellStorageProviderEntry,
    StorageProviderConfig, SubmodelStorageProviderEntry, list_shell_storages,
    list_submodel_storages, resolve_shell_storage, resolve_submodel_storage,
};
